/*
 * qrcx
 * Copyright (c) 2026 The qrcx authors.
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of  MERCHANTABILITY or FITNESS FOR
 * A PARTICULAR PURPOSE. See the GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License along with
 * this program.  If not, see <http://www.gnu.org/licenses/>.
 */

//! Access to compiled Qt resources in RCC files and application binaries.
//!
//! Standalone `.rcc` files open through [`readers::Reader::from_archive`];
//! resources embedded in a host binary open through
//! [`readers::Reader::from_regions`] with externally supplied offsets.
//! Format versions 1 to 3 are supported, along with the language/country
//! codes of Qt 5.13; entry data can be compressed with zlib or zstd.

pub mod cli;
pub(crate) mod constants;
pub mod error;
pub mod io;
pub mod readers;
pub mod types;
mod utils;
