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

//! End-to-end tests over archives assembled in memory.

use std::io::Read;

use qrcx::error::Error;
use qrcx::readers::{FileHeader, Reader, WalkAction, WalkOptions};
use qrcx::types::{record_width, Country, Language, NodeFlags, NodeInfo};

mod fixture {
  use std::io::Write;

  /// The resource compiler's name hash; siblings are stored sorted by it.
  pub fn qt_hash(key: &str) -> u32 {
    let mut result = 0u32;
    for ch in key.encode_utf16() {
      result = (result << 4) + ch as u32;
      result ^= (result & 0xf0000000) >> 23;
      result &= 0x0fffffff;
    }
    result
  }

  pub enum Item {
    File {
      name: &'static str,
      flags: u16,
      country: u16,
      language: u16,
      modified: u64,
      payload: Vec<u8>,
    },
    Dir {
      name: &'static str,
      children: Vec<Item>,
    },
  }

  pub fn file(name: &'static str, contents: &[u8]) -> Item {
    Item::File {
      name,
      flags: 0,
      country: 0,
      language: 0,
      modified: 0,
      payload: contents.to_vec(),
    }
  }

  pub fn file_with(
    name: &'static str,
    flags: u16,
    country: u16,
    language: u16,
    modified: u64,
    payload: Vec<u8>,
  ) -> Item {
    Item::File {
      name,
      flags,
      country,
      language,
      modified,
      payload,
    }
  }

  pub fn dir(name: &'static str, children: Vec<Item>) -> Item {
    Item::Dir { name, children }
  }

  /// A qCompress payload: 4-byte big-endian original size, then the zlib
  /// stream.
  pub fn zlib_payload(contents: &[u8]) -> Vec<u8> {
    let mut payload = (contents.len() as u32).to_be_bytes().to_vec();
    let mut encoder =
      flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(contents).unwrap();
    payload.extend_from_slice(&encoder.finish().unwrap());
    payload
  }

  pub fn zstd_payload(contents: &[u8]) -> Vec<u8> {
    zstd::encode_all(contents, 3).unwrap()
  }

  struct FlatNode {
    name: &'static str,
    flags: u16,
    country: u16,
    language: u16,
    modified: u64,
    payload: Option<Vec<u8>>,
    child_count: u32,
    child_offset: u32,
  }

  /// Assembles a standalone archive: header, then the data, names and tree
  /// regions. Siblings are laid out contiguously and sorted by name hash,
  /// the way the resource compiler emits them.
  pub fn build(format: i32, root_children: Vec<Item>) -> Vec<u8> {
    let mut nodes = vec![FlatNode {
      name: "",
      flags: 0x02,
      country: 0,
      language: 0,
      modified: 0,
      payload: None,
      child_count: 0,
      child_offset: 0,
    }];

    let mut queue = vec![(0usize, root_children)];
    while let Some((index, mut children)) = queue.pop() {
      children.sort_by_key(|child| {
        qt_hash(match child {
          Item::File { name, .. } => name,
          Item::Dir { name, .. } => name,
        })
      });

      let first = nodes.len();
      nodes[index].child_count = children.len() as u32;
      nodes[index].child_offset = first as u32;

      let mut pending = Vec::new();
      for child in children {
        match child {
          Item::File {
            name,
            flags,
            country,
            language,
            modified,
            payload,
          } => nodes.push(FlatNode {
            name,
            flags,
            country,
            language,
            modified,
            payload: Some(payload),
            child_count: 0,
            child_offset: 0,
          }),
          Item::Dir { name, children } => {
            pending.push((nodes.len(), children));
            nodes.push(FlatNode {
              name,
              flags: 0x02,
              country: 0,
              language: 0,
              modified: 0,
              payload: None,
              child_count: 0,
              child_offset: 0,
            });
          }
        }
      }
      queue.extend(pending);
    }

    let mut names = Vec::new();
    let mut data = Vec::new();
    let mut name_offsets = Vec::with_capacity(nodes.len());
    let mut data_offsets = Vec::with_capacity(nodes.len());
    for node in &nodes {
      name_offsets.push(names.len() as u32);
      let units: Vec<u16> = node.name.encode_utf16().collect();
      names.extend_from_slice(&(units.len() as u16).to_be_bytes());
      names.extend_from_slice(&qt_hash(node.name).to_be_bytes());
      for unit in units {
        names.extend_from_slice(&unit.to_be_bytes());
      }

      data_offsets.push(data.len() as u32);
      if let Some(payload) = &node.payload {
        data.extend_from_slice(&(payload.len() as u32).to_be_bytes());
        data.extend_from_slice(payload);
      }
    }

    let mut tree = Vec::new();
    for (index, node) in nodes.iter().enumerate() {
      tree.extend_from_slice(&name_offsets[index].to_be_bytes());
      tree.extend_from_slice(&node.flags.to_be_bytes());
      if node.flags & 0x02 != 0 {
        tree.extend_from_slice(&node.child_count.to_be_bytes());
        tree.extend_from_slice(&node.child_offset.to_be_bytes());
      } else {
        tree.extend_from_slice(&node.country.to_be_bytes());
        tree.extend_from_slice(&node.language.to_be_bytes());
        tree.extend_from_slice(&data_offsets[index].to_be_bytes());
      }
      if format >= 2 {
        tree.extend_from_slice(&node.modified.to_be_bytes());
      }
    }

    let header_len = if format >= 3 { 24 } else { 20 };
    let data_offset = header_len as u32;
    let names_offset = data_offset + data.len() as u32;
    let tree_offset = names_offset + names.len() as u32;

    let mut archive = Vec::new();
    archive.extend_from_slice(b"qres");
    archive.extend_from_slice(&format.to_be_bytes());
    archive.extend_from_slice(&(tree_offset as i32).to_be_bytes());
    archive.extend_from_slice(&(data_offset as i32).to_be_bytes());
    archive.extend_from_slice(&(names_offset as i32).to_be_bytes());
    if format >= 3 {
      archive.extend_from_slice(&0i32.to_be_bytes());
    }
    archive.extend_from_slice(&data);
    archive.extend_from_slice(&names);
    archive.extend_from_slice(&tree);

    archive
  }
}

use fixture::{build, dir, file, file_with, qt_hash, zlib_payload, zstd_payload};

/// Collects `(path, is_dir, error message)` triples from a full walk.
fn collect(reader: &Reader<'_>, options: WalkOptions) -> Vec<(String, bool, Option<String>)> {
  let mut seen = Vec::new();
  reader
    .walk(options, &mut |path, entry, err| {
      seen.push((
        path.to_string(),
        entry.is_dir(),
        err.map(|err| err.to_string()),
      ));
      Ok(WalkAction::Continue)
    })
    .expect("walk should succeed");
  seen
}

#[test]
fn minimal_v1_archive() {
  let archive = build(1, vec![file("hello.txt", b"hi")]);
  let reader = Reader::from_archive(&archive).expect("parse archive");
  assert_eq!(reader.format_version(), 1);

  let seen = collect(&reader, WalkOptions::default());
  assert_eq!(seen.len(), 1);
  assert_eq!(seen[0], ("hello.txt".to_string(), false, None));

  let entry = reader
    .find("/hello.txt")
    .expect("find")
    .expect("entry exists");
  assert!(!entry.is_dir());
  assert!(entry.modified_time().is_none());

  let mut contents = Vec::new();
  entry.open().unwrap().read_to_end(&mut contents).unwrap();
  assert_eq!(contents, b"hi");
}

#[test]
fn zlib_compressed_v2_archive() {
  let contents = vec![0u8; 100_000];
  let modified = 1_600_000_000_000u64;
  let archive = build(
    2,
    vec![dir(
      "a",
      vec![file_with("b.bin", 0x01, 0, 0, modified, zlib_payload(&contents))],
    )],
  );
  let reader = Reader::from_archive(&archive).expect("parse archive");

  let seen = collect(&reader, WalkOptions::default());
  let paths: Vec<&str> = seen.iter().map(|(path, ..)| path.as_str()).collect();
  assert_eq!(paths, ["a", "a/b.bin"]);

  let entry = reader.find("/a/b.bin").unwrap().expect("entry exists");
  assert!(entry.flags().has(NodeFlags::COMPRESSED));
  assert!(entry.on_disk_size().unwrap() < 100_000);
  assert_eq!(
    entry.modified_time().expect("stored time").timestamp_millis(),
    modified as i64
  );

  let mut decoded = Vec::new();
  entry.open().unwrap().read_to_end(&mut decoded).unwrap();
  assert_eq!(decoded, contents);
}

#[test]
fn zstd_compressed_v3_archive() {
  let contents: Vec<u8> = b"zstd roundtrip fixture ".repeat(64);
  let archive = build(
    3,
    vec![file_with("data.bin", 0x04, 0, 0, 0, zstd_payload(&contents))],
  );
  let reader = Reader::from_archive(&archive).expect("parse archive");

  let entry = reader.find("/data.bin").unwrap().expect("entry exists");
  assert!(entry.flags().has(NodeFlags::COMPRESSED_ZSTD));

  let mut decoded = Vec::new();
  entry.open().unwrap().read_to_end(&mut decoded).unwrap();
  assert_eq!(decoded, contents);
}

#[test]
fn on_disk_span_accounts_for_compression_headers() {
  let contents: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
  let archive = build(
    3,
    vec![
      file("plain.bin", &contents),
      file_with("packed.z", 0x01, 0, 0, 0, zlib_payload(&contents)),
      file_with("packed.zst", 0x04, 0, 0, 0, zstd_payload(&contents)),
    ],
  );
  let reader = Reader::from_archive(&archive).expect("parse archive");

  for (path, flags) in [
    ("/plain.bin", NodeFlags::NONE),
    ("/packed.z", NodeFlags::COMPRESSED),
    ("/packed.zst", NodeFlags::COMPRESSED_ZSTD),
  ] {
    let entry = reader.find(path).unwrap().expect("entry exists");
    assert!(entry.flags().has(flags));

    let offset = entry.on_disk_offset() as usize;
    let size = entry.on_disk_size().unwrap() as usize;
    let raw = &archive[offset..(offset + size).min(archive.len())];

    let mut via_open = Vec::new();
    entry.open().unwrap().read_to_end(&mut via_open).unwrap();
    assert_eq!(via_open, contents);

    // decoding the raw on-disk span per the entry's flags yields the same
    // bytes as open()
    let mut via_span = Vec::new();
    if entry.flags().has(NodeFlags::COMPRESSED) {
      flate2::read::ZlibDecoder::new(raw)
        .read_to_end(&mut via_span)
        .unwrap();
    } else if entry.flags().has(NodeFlags::COMPRESSED_ZSTD) {
      via_span = zstd::decode_all(raw).unwrap();
    } else {
      via_span = raw.to_vec();
    }
    assert_eq!(via_span, via_open, "span mismatch for {}", path);
  }
}

#[test]
fn directory_span_ends_at_last_child() {
  let archive = build(
    2,
    vec![dir(
      "assets",
      vec![file("one.txt", b"1"), file("two.txt", b"2")],
    )],
  );
  let reader = Reader::from_archive(&archive).expect("parse archive");
  let header = FileHeader::parse(&mut &archive[..]).unwrap();

  let entry = reader.find("/assets").unwrap().expect("entry exists");
  assert!(entry.is_dir());

  let NodeInfo::Directory {
    child_count,
    child_offset,
  } = entry.node().info
  else {
    panic!("expected a directory node");
  };

  let width = record_width(reader.format_version()) as u64;
  let end = header.tree_offset as u64 + (child_offset as u64 + child_count as u64) * width;
  assert_eq!(entry.on_disk_offset() + entry.on_disk_size().unwrap(), end);
}

#[test]
fn locale_siblings_are_distinct_entries() {
  let archive = build(
    2,
    vec![dir(
      "i18n",
      vec![
        file_with("ui.qm", 0x00, 0, Language::French.code(), 0, b"fr".to_vec()),
        file_with("ui.qm", 0x00, 0, 0, 0, b"any".to_vec()),
      ],
    )],
  );
  let reader = Reader::from_archive(&archive).expect("parse archive");

  let mut constraints = Vec::new();
  reader
    .walk(WalkOptions::default(), &mut |path, entry, err| {
      assert!(err.is_none());
      if !entry.is_dir() {
        assert_eq!(path, "i18n/ui.qm");
        constraints.push(entry.constraints().unwrap());
      }
      Ok(WalkAction::Continue)
    })
    .unwrap();

  constraints.sort_by_key(|(_, language)| language.code());
  assert_eq!(
    constraints,
    [
      (Country::AnyCountry, Language::AnyLanguage),
      (Country::AnyCountry, Language::French),
    ]
  );
}

#[test]
fn nested_archive_descends_when_asked() {
  let inner = build(1, vec![file("x.txt", b"nested!")]);
  let outer = build(2, vec![file("inner.rcc", &inner)]);
  let reader = Reader::from_archive(&outer).expect("parse archive");

  // recursion off: the nested archive is an opaque file
  let seen = collect(&reader, WalkOptions::default());
  assert_eq!(seen.len(), 1);
  assert_eq!(seen[0].0, "inner.rcc");

  // recursion on: the nested file is announced, then its tree appears under
  // the same prefix
  let seen = collect(
    &reader,
    WalkOptions {
      recurse_nested: true,
      ..WalkOptions::default()
    },
  );
  let paths: Vec<&str> = seen.iter().map(|(path, ..)| path.as_str()).collect();
  assert_eq!(paths, ["inner.rcc", "inner.rcc/x.txt"]);

  // silent descent hides the archive file itself
  let seen = collect(
    &reader,
    WalkOptions {
      recurse_nested: true,
      announce_nested: false,
    },
  );
  let paths: Vec<&str> = seen.iter().map(|(path, ..)| path.as_str()).collect();
  assert_eq!(paths, ["inner.rcc/x.txt"]);

  let contents = {
    let mut contents = Vec::new();
    let mut found = false;
    reader
      .walk(
        WalkOptions {
          recurse_nested: true,
          ..WalkOptions::default()
        },
        &mut |path, entry, _| {
          if path == "inner.rcc/x.txt" {
            found = true;
            entry.open().unwrap().read_to_end(&mut contents).unwrap();
          }
          Ok(WalkAction::Continue)
        },
      )
      .unwrap();
    assert!(found);
    contents
  };
  assert_eq!(contents, b"nested!");
}

#[test]
fn skip_subtree_prunes_descent() {
  let archive = build(
    1,
    vec![
      dir("skipped", vec![file("under.txt", b"no"), dir("deeper", vec![])]),
      file("kept.txt", b"yes"),
    ],
  );
  let reader = Reader::from_archive(&archive).expect("parse archive");

  let mut seen = Vec::new();
  reader
    .walk(WalkOptions::default(), &mut |path, _, _| {
      seen.push(path.to_string());
      if path == "skipped" {
        return Ok(WalkAction::SkipSubtree);
      }
      Ok(WalkAction::Continue)
    })
    .unwrap();

  assert!(seen.contains(&"skipped".to_string()));
  assert!(seen.contains(&"kept.txt".to_string()));
  assert!(!seen.iter().any(|path| path.starts_with("skipped/")));
}

#[test]
fn skip_subtree_on_nested_archive_stops_descent() {
  let inner = build(1, vec![file("x.txt", b"nested!")]);
  let outer = build(1, vec![file("inner.rcc", &inner)]);
  let reader = Reader::from_archive(&outer).expect("parse archive");

  let mut seen = Vec::new();
  reader
    .walk(
      WalkOptions {
        recurse_nested: true,
        ..WalkOptions::default()
      },
      &mut |path, _, _| {
        seen.push(path.to_string());
        Ok(WalkAction::SkipSubtree)
      },
    )
    .unwrap();

  assert_eq!(seen, ["inner.rcc"]);
}

#[test]
fn callback_errors_abort_the_walk() {
  let archive = build(1, vec![file("hello.txt", b"hi")]);
  let reader = Reader::from_archive(&archive).expect("parse archive");

  let err = reader
    .walk(WalkOptions::default(), &mut |_, _, _| {
      anyhow::bail!("not today")
    })
    .unwrap_err();

  assert!(matches!(
    err,
    Error::CallbackAborted { ref path, .. } if path == "hello.txt"
  ));
}

#[test]
fn bad_magic_is_rejected() {
  let mut archive = build(1, vec![file("hello.txt", b"hi")]);
  archive[..4].copy_from_slice(b"xxxx");

  assert!(matches!(
    Reader::from_archive(&archive),
    Err(Error::BadMagic {
      received: [b'x', b'x', b'x', b'x'],
      ..
    })
  ));
}

#[test]
fn self_referencing_tree_terminates() {
  // a hand-forged v1 archive whose root claims itself as its only child
  let mut names = Vec::new();
  let units: Vec<u16> = "loop".encode_utf16().collect();
  names.extend_from_slice(&(units.len() as u16).to_be_bytes());
  names.extend_from_slice(&qt_hash("loop").to_be_bytes());
  for unit in units {
    names.extend_from_slice(&unit.to_be_bytes());
  }

  let mut tree = Vec::new();
  tree.extend_from_slice(&0u32.to_be_bytes()); // name offset
  tree.extend_from_slice(&0x0002u16.to_be_bytes()); // directory
  tree.extend_from_slice(&1u32.to_be_bytes()); // one child ...
  tree.extend_from_slice(&0u32.to_be_bytes()); // ... which is record 0 again

  let mut archive = Vec::new();
  archive.extend_from_slice(b"qres");
  archive.extend_from_slice(&1i32.to_be_bytes());
  let data_offset = 20u32;
  let names_offset = data_offset;
  let tree_offset = names_offset + names.len() as u32;
  archive.extend_from_slice(&(tree_offset as i32).to_be_bytes());
  archive.extend_from_slice(&(data_offset as i32).to_be_bytes());
  archive.extend_from_slice(&(names_offset as i32).to_be_bytes());
  archive.extend_from_slice(&names);
  archive.extend_from_slice(&tree);

  let reader = Reader::from_archive(&archive).expect("parse archive");

  let mut guards = 0;
  reader
    .walk(WalkOptions::default(), &mut |_, _, err| {
      if let Some(Error::TraversalCycle { .. } | Error::RecursionLimit { .. }) = err {
        guards += 1;
      }
      Ok(WalkAction::Continue)
    })
    .expect("the guard must not abort the walk");

  assert!(guards > 0, "the descent guard should have fired");
}

#[test]
fn listing_errors_carry_the_failing_path() {
  // root with a directory whose children lie beyond the tree region
  let archive = build(1, vec![dir("good", vec![file("ok.txt", b"fine")])]);
  let mut broken = archive.clone();

  // corrupt the child offset of the "good" directory: the root's child
  // record is the second node in the tree region
  let header = FileHeader::parse(&mut &archive[..]).unwrap();
  let dir_record = header.tree_offset as usize + 14;
  // child_offset field sits 10 bytes into a v1 directory record
  broken[dir_record + 10..dir_record + 14].copy_from_slice(&0xffffu32.to_be_bytes());

  let reader = Reader::from_archive(&broken).expect("parse archive");

  let mut failures = Vec::new();
  reader
    .walk(WalkOptions::default(), &mut |path, _, err| {
      if err.is_some() {
        failures.push(path.to_string());
      }
      Ok(WalkAction::Continue)
    })
    .expect("per-entry errors are the callback's call");

  assert_eq!(failures, ["good"]);
}
