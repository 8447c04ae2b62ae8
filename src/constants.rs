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

/// Represents the highest supported RCC format version
pub static SUPPORTED_FORMAT_VERSION: i32 = 3;

/// Represents the magic bytes found at the beginning of Qt's `.rcc` files
pub static RCC_FILE_HEADER_MAGIC: &[u8; 4] = b"qres";

/// Maximum combined directory/nested-archive descent of a walk. Well-formed
/// archives never get anywhere near this; the bound exists so a forged tree
/// cannot stall the walker.
pub static MAX_WALK_DEPTH: usize = 256;
