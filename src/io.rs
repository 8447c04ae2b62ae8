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

//! Byte sources addressed by absolute offset

use std::fs::File;
use std::io;
use std::io::{ErrorKind, Read};

/// A random-access byte source addressed by absolute offset.
///
/// Reads do not share a cursor, so one source can safely back any number of
/// concurrent readers as long as the implementation tolerates overlapping
/// positional reads (slices and files do).
pub trait ReadAt {
  /// Reads up to `buf.len()` bytes starting at `offset` and returns how many
  /// were read. Zero means the end of the source.
  fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize>;
}

impl ReadAt for [u8] {
  fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
    let start = usize::try_from(offset).unwrap_or(usize::MAX).min(self.len());
    let n = buf.len().min(self.len() - start);
    buf[..n].copy_from_slice(&self[start..start + n]);
    Ok(n)
  }
}

impl ReadAt for Vec<u8> {
  fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
    self.as_slice().read_at(offset, buf)
  }
}

impl ReadAt for File {
  #[cfg(unix)]
  fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
    std::os::unix::fs::FileExt::read_at(self, buf, offset)
  }

  #[cfg(windows)]
  fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
    std::os::windows::fs::FileExt::seek_read(self, buf, offset)
  }
}

impl<T: ReadAt + ?Sized> ReadAt for &T {
  fn read_at(&self, offset: u64, buf: &mut [u8]) -> io::Result<usize> {
    (**self).read_at(offset, buf)
  }
}

/// Fills `buf` from `offset`, looping over partial reads. Running out of
/// source is an [`ErrorKind::UnexpectedEof`].
pub fn read_exact_at<R: ReadAt + ?Sized>(
  source: &R,
  mut offset: u64,
  mut buf: &mut [u8],
) -> io::Result<()> {
  while !buf.is_empty() {
    match source.read_at(offset, buf) {
      Ok(0) => return Err(io::Error::from(ErrorKind::UnexpectedEof)),
      Ok(n) => {
        let tmp = buf;
        buf = &mut tmp[n..];
        offset += n as u64;
      }
      Err(err) if err.kind() == ErrorKind::Interrupted => {}
      Err(err) => return Err(err),
    }
  }

  Ok(())
}

/// A bounded [`Read`] window over a byte source, starting at an absolute
/// offset. The crate-local counterpart of a section reader: every region
/// access and every data payload goes through one of these.
pub struct Section<'a> {
  source: &'a dyn ReadAt,
  offset: u64,
  remaining: u64,
}

impl<'a> Section<'a> {
  pub fn new(source: &'a dyn ReadAt, offset: u64, len: u64) -> Section<'a> {
    Section {
      source,
      offset,
      remaining: len,
    }
  }
}

impl Read for Section<'_> {
  fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
    if self.remaining == 0 || buf.is_empty() {
      return Ok(0);
    }

    let want = buf
      .len()
      .min(usize::try_from(self.remaining).unwrap_or(usize::MAX));
    let n = self.source.read_at(self.offset, &mut buf[..want])?;
    self.offset += n as u64;
    self.remaining -= n as u64;

    Ok(n)
  }
}
