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

use std::fmt;

use crate::error::{Error, Result};

/// Represents Qt's internal node flags. Multiple flags can be ORd together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NodeFlags(u16);

impl NodeFlags {
  /// No flags set.
  pub const NONE: NodeFlags = NodeFlags(0x00);
  /// Entry data is compressed using the [zlib](https://zlib.net/) library,
  /// preceded by qCompress's 4-byte original-size hint.
  pub const COMPRESSED: NodeFlags = NodeFlags(0x01);
  /// The node is a directory.
  pub const DIRECTORY: NodeFlags = NodeFlags(0x02);
  /// Entry data is compressed using the [zstd](http://facebook.github.io/zstd/)
  /// library as a raw frame.
  pub const COMPRESSED_ZSTD: NodeFlags = NodeFlags(0x04);

  const KNOWN: u16 = 0x07;

  pub fn from_bits(bits: u16) -> NodeFlags {
    NodeFlags(bits)
  }

  pub fn bits(self) -> u16 {
    self.0
  }

  /// Returns true if all of the provided flag bits are set.
  pub fn has(self, v: NodeFlags) -> bool {
    self.0 & v.0 == v.0
  }

  pub fn is_dir(self) -> bool {
    self.has(Self::DIRECTORY)
  }

  /// Checks whether the combination of flags is valid. It does not check the
  /// format version.
  pub fn validate(self) -> Result<()> {
    if self.remainder() != 0 {
      return Err(Error::InvalidFlags {
        bits: self.bits(),
        reason: "unknown bits are set",
      });
    }

    if self.has(Self::COMPRESSED) && self.has(Self::COMPRESSED_ZSTD) {
      return Err(Error::InvalidFlags {
        bits: self.bits(),
        reason: "cannot be Compressed and CompressedZstd at the same time",
      });
    }

    Ok(())
  }

  fn remainder(self) -> u16 {
    self.0 & !Self::KNOWN
  }
}

impl fmt::Display for NodeFlags {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut x: Vec<String> = Vec::new();
    if self.0 == 0 {
      x.push("None".to_string());
    }
    if self.has(Self::COMPRESSED) {
      x.push("Compressed".to_string());
    }
    if self.has(Self::DIRECTORY) {
      x.push("Directory".to_string());
    }
    if self.has(Self::COMPRESSED_ZSTD) {
      x.push("CompressedZstd".to_string());
    }
    if self.remainder() != 0 {
      x.push(format!("0b{:b}", self.remainder()));
    }
    write!(f, "{}", x.join("|"))
  }
}
