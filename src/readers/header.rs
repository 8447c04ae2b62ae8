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

use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::constants::{RCC_FILE_HEADER_MAGIC, SUPPORTED_FORMAT_VERSION};
use crate::error;
use crate::error::Error;

/// The header of a standalone resource file. The offsets are relative to the
/// start of the file (i.e. the start of the header).
#[derive(Debug, PartialEq, Eq)]
pub struct FileHeader {
  pub format_version: i32,
  pub tree_offset: i32,
  pub data_offset: i32,
  pub names_offset: i32,
  /// Only present on format version 3 and later.
  pub overall_flags: Option<i32>,
}

impl FileHeader {
  /// Parses the header of a standalone archive. If an error occurs, any
  /// number of bytes may have been read from the stream.
  pub fn parse<R: Read>(r: &mut R) -> error::Result<FileHeader> {
    let magic = {
      let mut buf = [0u8; 4];
      r.read_exact(&mut buf)
        .map_err(|err| Error::short_read("header", 4, err))?;

      buf
    };

    if &magic != RCC_FILE_HEADER_MAGIC {
      return Err(Error::BadMagic {
        received: magic,
        expected: *RCC_FILE_HEADER_MAGIC,
      });
    }

    let format_version = r
      .read_i32::<BigEndian>()
      .map_err(|err| Error::short_read("header", 4, err))?;

    if !(1..=SUPPORTED_FORMAT_VERSION).contains(&format_version) {
      return Err(Error::UnsupportedVersion {
        received: format_version,
        expected: SUPPORTED_FORMAT_VERSION,
      });
    }

    let tree_offset = r
      .read_i32::<BigEndian>()
      .map_err(|err| Error::short_read("header", 4, err))?;
    let data_offset = r
      .read_i32::<BigEndian>()
      .map_err(|err| Error::short_read("header", 4, err))?;
    let names_offset = r
      .read_i32::<BigEndian>()
      .map_err(|err| Error::short_read("header", 4, err))?;

    let overall_flags = if format_version >= 3 {
      Some(
        r.read_i32::<BigEndian>()
          .map_err(|err| Error::short_read("header", 4, err))?,
      )
    } else {
      None
    };

    Ok(FileHeader {
      format_version,
      tree_offset,
      data_offset,
      names_offset,
      overall_flags,
    })
  }
}
