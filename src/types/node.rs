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

use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};
use chrono::{DateTime, Local};

use crate::constants::SUPPORTED_FORMAT_VERSION;
use crate::error;
use crate::error::Error;
use crate::types::NodeFlags;

/// Returns the on-disk width of one tree record for the given format version.
/// Format 2 appended the 64-bit modification timestamp.
pub fn record_width(format: u32) -> usize {
  if format >= 2 {
    22
  } else {
    14
  }
}

/// The directory- or file-specific tail of a tree record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeInfo {
  Directory {
    child_count: u32,
    /// Child index within the tree, not a byte offset; the child records
    /// start at `child_offset * record_width`.
    child_offset: u32,
  },
  File {
    country: u16,
    language: u16,
    /// Index into the data region.
    data_offset: u32,
  },
}

/// Represents one fixed-size record of the tree region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
  /// Byte offset of the name record within the names region.
  pub name_offset: u32,
  pub flags: NodeFlags,
  pub info: NodeInfo,
  /// Milliseconds since the Unix epoch; always 0 on format 1.
  pub modified_millis: u64,
  pub(crate) format: u32,
}

impl Node {
  /// Reads one tree record from the stream. Exactly `record_width(format)`
  /// bytes are consumed on success; on failure any number of bytes may have
  /// been read.
  pub fn parse<R: Read>(r: &mut R, format: u32) -> error::Result<Node> {
    if !(1..=SUPPORTED_FORMAT_VERSION as u32).contains(&format) {
      return Err(Error::UnsupportedVersion {
        received: format as i32,
        expected: SUPPORTED_FORMAT_VERSION,
      });
    }

    let width = record_width(format);
    let mut buf = [0u8; 22];
    r.read_exact(&mut buf[..width])
      .map_err(|err| Error::short_read("tree", width, err))?;

    // decoding from the fixed buffer cannot run short anymore
    let mut c = Cursor::new(&buf[..width]);
    let name_offset = c.read_u32::<BigEndian>()?;
    let flags = NodeFlags::from_bits(c.read_u16::<BigEndian>()?);
    flags.validate()?;

    let info = if flags.is_dir() {
      NodeInfo::Directory {
        child_count: c.read_u32::<BigEndian>()?,
        child_offset: c.read_u32::<BigEndian>()?,
      }
    } else {
      NodeInfo::File {
        country: c.read_u16::<BigEndian>()?,
        language: c.read_u16::<BigEndian>()?,
        data_offset: c.read_u32::<BigEndian>()?,
      }
    };

    let modified_millis = if format >= 2 {
      c.read_u64::<BigEndian>()?
    } else {
      0
    };

    debug_assert_eq!(c.position() as usize, width);

    Ok(Node {
      name_offset,
      flags,
      info,
      modified_millis,
      format,
    })
  }

  pub fn is_dir(&self) -> bool {
    self.flags.is_dir()
  }

  /// The stored modification time. `None` on format 1, which has no
  /// timestamp field, and when the stored value is zero.
  pub fn modified_time(&self) -> Option<DateTime<Local>> {
    if self.format < 2 || self.modified_millis == 0 {
      return None;
    }

    DateTime::from_timestamp_millis(self.modified_millis as i64)
      .map(|utc| utc.with_timezone(&Local))
  }
}
