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

use chrono::{DateTime, Local};

use crate::error;
use crate::error::Error;
use crate::readers::Reader;
use crate::types::{record_width, Country, Language, Node, NodeFlags, NodeInfo};

/// An entry read by a [`Reader`]: the resolved name, a snapshot of the
/// parsed node, and the reader that owns the regions. Entries hold no data
/// of their own; streams returned by [`open`](ReaderEntry::open) are
/// independently owned.
#[derive(Debug)]
pub struct ReaderEntry<'a> {
  pub(crate) name: String,
  pub(crate) node: Node,
  pub(crate) reader: &'a Reader<'a>,
}

impl<'a> ReaderEntry<'a> {
  /// The name of the entry. Empty for the resource root.
  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn node(&self) -> &Node {
    &self.node
  }

  pub fn is_dir(&self) -> bool {
    self.node.is_dir()
  }

  pub fn flags(&self) -> NodeFlags {
    self.node.flags
  }

  /// The country/language constraints of the file. A directory can contain
  /// multiple files with the same name, but different constraints;
  /// directories themselves always report the sentinels.
  pub fn constraints(&self) -> error::Result<(Country, Language)> {
    let NodeInfo::File {
      country, language, ..
    } = self.node.info
    else {
      return Ok((Country::AnyCountry, Language::AnyLanguage));
    };

    let country = Country::from_repr(country).ok_or(Error::InvalidLocale {
      kind: "country",
      value: country,
    })?;
    let language = Language::from_repr(language).ok_or(Error::InvalidLocale {
      kind: "language",
      value: language,
    })?;

    Ok((country, language))
  }

  /// The modification time of the entry. On format versions < 2, `None` is
  /// always returned.
  pub fn modified_time(&self) -> Option<DateTime<Local>> {
    self.node.modified_time()
  }

  /// Reads and returns the child entries. If the entry is not a directory,
  /// an error is returned.
  pub fn children(&self) -> error::Result<Vec<ReaderEntry<'a>>> {
    let nodes = self.reader.child_nodes(&self.node)?;

    nodes
      .into_iter()
      .map(|node| self.reader.entry(node))
      .collect()
  }

  /// Opens a stream over the decoded contents of the entry. If the entry is
  /// a directory, an error is returned.
  pub fn open(&self) -> error::Result<Box<dyn Read + 'a>> {
    let (stream, _, _) = self.reader.open_data(&self.node)?;

    Ok(stream)
  }

  /// The absolute offset of the entry's contents within the backing source.
  /// For a directory this points at its first child's tree record; for a
  /// file it points at the first payload byte (past the length header and,
  /// on zlib-compressed entries, past the qCompress size hint).
  pub fn on_disk_offset(&self) -> u64 {
    match self.node.info {
      NodeInfo::Directory { child_offset, .. } => {
        self.reader.tree_offset + child_offset as u64 * record_width(self.reader.format) as u64
      }
      NodeInfo::File { data_offset, .. } => {
        let mut offset = self.reader.data_offset + data_offset as u64 + 4;
        if self.flags().has(NodeFlags::COMPRESSED) {
          offset += 4; // qCompress original-size hint
        }
        offset
      }
    }
  }

  /// The raw (i.e. as-is, possibly compressed) size of the entry's on-disk
  /// span. For a directory this covers all child records, so offset + size
  /// is one past the last child. For a file the payload length header must
  /// be read, so this can fail; to get the uncompressed size, [`open`] the
  /// entry and count the bytes.
  ///
  /// [`open`]: ReaderEntry::open
  pub fn on_disk_size(&self) -> error::Result<u64> {
    match self.node.info {
      NodeInfo::Directory { child_count, .. } => {
        Ok(child_count as u64 * record_width(self.reader.format) as u64)
      }
      NodeInfo::File { .. } => self.reader.data_length(&self.node),
    }
  }
}
