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

use std::cmp::Ordering;
use std::io::Read;
use std::path::Component::Normal;
use std::path::Path;

use anyhow::anyhow;
use byteorder::{BigEndian, ByteOrder};
use educe::Educe;
use flate2::read::ZlibDecoder;
use path_absolutize::Absolutize;

use crate::constants::SUPPORTED_FORMAT_VERSION;
use crate::error;
use crate::error::Error;
use crate::io::{read_exact_at, ReadAt, Section};
use crate::readers::{FileHeader, ReaderEntry};
use crate::types::{record_width, Node, NodeFlags, NodeInfo};
use crate::utils::{qt_hash, str_to_unix_path, to_pretty_hex};

/// A reader for compiled Qt resources: a byte source bound to the tree, data
/// and names regions. It is safe to share across threads as long as the
/// source tolerates concurrent positional reads.
#[derive(Educe)]
#[educe(Debug)]
pub struct Reader<'a> {
  #[educe(Debug(method = "to_pretty_hex"))]
  pub(crate) tree_offset: u64,
  #[educe(Debug(method = "to_pretty_hex"))]
  pub(crate) data_offset: u64,
  #[educe(Debug(method = "to_pretty_hex"))]
  pub(crate) names_offset: u64,
  pub(crate) format: u32,
  pub(crate) lenient_names: bool,

  #[educe(Debug(ignore))]
  pub(crate) source: &'a dyn ReadAt,
  pub(crate) root: Node,
}

impl<'a> Reader<'a> {
  /// Binds a byte source to the provided region offsets. The root node is
  /// parsed eagerly as a sanity check on the offsets.
  pub fn from_regions(
    source: &'a dyn ReadAt,
    format_version: i32,
    tree_offset: u64,
    data_offset: u64,
    names_offset: u64,
  ) -> error::Result<Reader<'a>> {
    if !(1..=SUPPORTED_FORMAT_VERSION).contains(&format_version) {
      return Err(Error::UnsupportedVersion {
        received: format_version,
        expected: SUPPORTED_FORMAT_VERSION,
      });
    }

    let format = format_version as u32;
    let root = {
      let mut section = Section::new(source, tree_offset, record_width(format) as u64);
      Node::parse(&mut section, format)?
    };

    Ok(Reader {
      tree_offset,
      data_offset,
      names_offset,
      format,
      lenient_names: false,
      source,
      root,
    })
  }

  /// Parses the header of a standalone archive and binds the regions it
  /// names.
  pub fn from_archive(source: &'a dyn ReadAt) -> error::Result<Reader<'a>> {
    let header = FileHeader::parse(&mut Section::new(source, 0, u64::MAX))?;

    Self::from_regions(
      source,
      header.format_version,
      header.tree_offset as u64,
      header.data_offset as u64,
      header.names_offset as u64,
    )
  }

  /// Replaces ill-formed UTF-16 in names with U+FFFD instead of failing.
  /// Strict rejection is the default since a broken name usually means the
  /// caller-supplied offsets are wrong.
  pub fn lenient_names(mut self, lenient: bool) -> Reader<'a> {
    self.lenient_names = lenient;
    self
  }

  pub fn format_version(&self) -> u32 {
    self.format
  }

  /// The entries of the resource root.
  pub fn root_children(&self) -> error::Result<Vec<ReaderEntry<'_>>> {
    self.root_entry().children()
  }

  pub(crate) fn root_entry(&self) -> ReaderEntry<'_> {
    ReaderEntry {
      name: String::new(),
      node: self.root,
      reader: self,
    }
  }

  /// Resolves a resource path to its entry. The resource compiler sorts
  /// sibling entries by name hash, which allows a binary search per path
  /// segment instead of a scan.
  pub fn find<T: AsRef<str>>(&self, path: T) -> error::Result<Option<ReaderEntry<'_>>> {
    let path = str_to_unix_path(path.as_ref());
    let path = path.absolutize_from("/").unwrap(); // This function never returns an error

    if path.eq(Path::new("/")) {
      return Ok(Some(self.root_entry()));
    }

    let mut node = self.root;
    let mut segments = path
      .components()
      .filter_map(|component| {
        if let Normal(segment) = component {
          Some(segment.to_string_lossy().to_string())
        } else {
          None
        }
      })
      .peekable();

    while let Some(segment) = segments.next() {
      let NodeInfo::Directory {
        child_count,
        child_offset,
      } = node.info
      else {
        // a file cannot have children, so the remaining segments are dead
        return Ok(None);
      };

      let Some(found) = self.binary_search(&segment, child_count, child_offset)? else {
        return Ok(None);
      };

      if segments.peek().is_none() {
        return self.entry(found).map(Some);
      }
      node = found;
    }

    Ok(None)
  }

  pub(crate) fn entry(&self, node: Node) -> error::Result<ReaderEntry<'_>> {
    let (name, _) = self.read_name(node.name_offset)?;

    Ok(ReaderEntry {
      name,
      node,
      reader: self,
    })
  }

  /// Parses the tree record at the provided child index.
  pub(crate) fn node_at(&self, index: u32) -> error::Result<Node> {
    let width = record_width(self.format) as u64;
    let mut section = Section::new(self.source, self.tree_offset + index as u64 * width, width);

    Node::parse(&mut section, self.format)
  }

  /// Parses the child records of a directory node, in on-disk order.
  pub(crate) fn child_nodes(&self, node: &Node) -> error::Result<Vec<Node>> {
    let NodeInfo::Directory {
      child_count,
      child_offset,
    } = node.info
    else {
      return Err(Error::NotADirectory);
    };

    let width = record_width(self.format) as u64;
    let mut section = Section::new(
      self.source,
      self.tree_offset + child_offset as u64 * width,
      child_count as u64 * width,
    );

    let mut children = Vec::with_capacity(child_count as usize);
    for _ in 0..child_count {
      children.push(Node::parse(&mut section, self.format)?);
    }

    Ok(children)
  }

  /// Resolves a names-region offset to the stored string and its
  /// precomputed 32-bit hash. The hash is reported as stored, not verified.
  pub fn read_name(&self, name_offset: u32) -> error::Result<(String, u32)> {
    let base = self.names_offset + name_offset as u64;

    let mut head = [0u8; 6];
    read_exact_at(self.source, base, &mut head)
      .map_err(|err| Error::short_read("names", 6, err))?;
    let length = BigEndian::read_u16(&head[..2]) as usize;
    let hash = BigEndian::read_u32(&head[2..6]);

    let mut raw = vec![0u8; length * 2];
    read_exact_at(self.source, base + 6, &mut raw)
      .map_err(|err| Error::short_read("names", length * 2, err))?;

    let units: Vec<u16> = raw
      .chunks_exact(2)
      .map(|unit| u16::from_be_bytes([unit[0], unit[1]]))
      .collect();

    let name = if self.lenient_names {
      String::from_utf16_lossy(&units)
    } else {
      String::from_utf16(&units).map_err(|_| Error::InvalidName {
        offset: name_offset,
      })?
    };

    Ok((name, hash))
  }

  /// Opens a decoding stream over a file node's data and reports the
  /// absolute offset and length of the raw (possibly compressed) payload, so
  /// external tools can locate the bytes without decoding them.
  pub fn open_data(&self, node: &Node) -> error::Result<(Box<dyn Read + 'a>, u64, u64)> {
    let NodeInfo::File { data_offset, .. } = node.info else {
      return Err(Error::NotAFile);
    };
    node.flags.validate()?;

    let base = self.data_offset + data_offset as u64;
    let length = self.read_data_length(base)?;

    let mut payload = Section::new(self.source, base + 4, length);
    if node.flags.has(NodeFlags::COMPRESSED) {
      // qCompress prefixes the zlib stream with the original size; it is a
      // hint only and is not trusted
      let mut hint = [0u8; 4];
      payload
        .read_exact(&mut hint)
        .map_err(|err| Error::short_read("data", 4, err))?;

      Ok((Box::new(ZlibDecoder::new(payload)), base + 4 + 4, length))
    } else if node.flags.has(NodeFlags::COMPRESSED_ZSTD) {
      let decoder = zstd::stream::read::Decoder::new(payload)
        .map_err(|err| Error::Decompression(anyhow!(err)))?;

      Ok((Box::new(decoder), base + 4, length))
    } else {
      Ok((Box::new(payload), base + 4, length))
    }
  }

  /// Reads the raw payload length of a file node without opening it.
  pub(crate) fn data_length(&self, node: &Node) -> error::Result<u64> {
    let NodeInfo::File { data_offset, .. } = node.info else {
      return Err(Error::NotAFile);
    };

    self.read_data_length(self.data_offset + data_offset as u64)
  }

  fn read_data_length(&self, base: u64) -> error::Result<u64> {
    let mut head = [0u8; 4];
    read_exact_at(self.source, base, &mut head)
      .map_err(|err| Error::short_read("data", 4, err))?;

    Ok(BigEndian::read_u32(&head) as u64)
  }

  fn binary_search(
    &self,
    key: &str,
    child_count: u32,
    child_offset: u32,
  ) -> error::Result<Option<Node>> {
    let mut left = 0;
    let mut right = child_count;

    while left < right {
      let mid = (left + right) / 2;
      let node = self.node_at(child_offset + mid)?;
      let (_, hash) = self.read_name(node.name_offset)?;

      match hash.cmp(&qt_hash!(&key)) {
        Ordering::Equal => return Ok(Some(node)),
        Ordering::Less => left = mid + 1,
        Ordering::Greater => right = mid,
      }
    }

    Ok(None)
  }
}
