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

//! Contains readers for the resource format

mod default;
mod entry;
mod header;
mod walk;

pub use default::Reader;
pub use entry::ReaderEntry;
pub use header::FileHeader;
pub use walk::{WalkAction, WalkOptions};
