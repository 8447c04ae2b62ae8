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

//! Contains crate's error types

use std::error::Error as StdError;
use std::fmt::{Debug, Formatter, Write};
use std::io;
use std::io::ErrorKind;

use anyhow::{anyhow, Chain};

use crate::utils::__private::Indented;

/// Specialized [`Result`] type for crate's errors
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors while reading Qt's compiled resources.
#[derive(thiserror::Error)]
pub enum Error {
  /// The archive header does not start with the `qres` magic bytes.
  #[error("The header magic bytes are not valid, expected: {expected:?}, received: {received:?}")]
  BadMagic {
    received: [u8; 4],
    expected: [u8; 4],
  },

  /// The format version is outside the supported range.
  #[error(
    "The specified format version is not supported, expected: 1 to {expected}, received: {received}."
  )]
  UnsupportedVersion { received: i32, expected: i32 },

  /// A node carries unknown flag bits, or both compression bits at once.
  #[error("The node flags {bits:#06b} are not valid: {reason}")]
  InvalidFlags { bits: u16, reason: &'static str },

  /// A region ended before a full record could be read.
  #[error("Short read in the {region} region, wanted {wanted} bytes")]
  ShortRead { region: &'static str, wanted: usize },

  /// A name record holds UTF-16 that does not decode to valid text.
  #[error("The name at {offset:#x} is not valid text (maybe your offsets are incorrect?)")]
  InvalidName { offset: u32 },

  /// A file node carries a country or language code outside the Qt table.
  #[error("An unknown {kind} code was detected with value {value}")]
  InvalidLocale { kind: &'static str, value: u16 },

  /// A compression codec reported an error while decoding entry data.
  #[error("Failed to decompress entry data")]
  Decompression(#[source] anyhow::Error),

  /// The entry is a file, but a directory operation was requested.
  #[error("Is a file, not a directory")]
  NotADirectory,

  /// The entry is a directory, but a file operation was requested.
  #[error("Is a directory, not a file")]
  NotAFile,

  /// The walk callback returned an error other than the skip sentinel.
  #[error("Walk of {path:?} aborted by the callback")]
  CallbackAborted {
    path: String,
    #[source]
    source: anyhow::Error,
  },

  /// The walker's bounded-descent guard fired.
  #[error("Walk of {path:?} exceeded the descent limit of {limit}")]
  RecursionLimit { path: String, limit: usize },

  /// A directory's child records overlap an ancestor's, which would make the
  /// tree walk itself forever.
  #[error("The tree at {path:?} revisits its own records")]
  TraversalCycle { path: String },

  /// I/O error.
  ///
  /// Catch-all for I/O related errors.
  #[error("Unexpected I/O error occurred")]
  Io(#[source] anyhow::Error),
}

impl Error {
  /// Maps a premature end-of-region to [`Error::ShortRead`] with the region
  /// name attached; other I/O failures pass through as [`Error::Io`].
  pub(crate) fn short_read(region: &'static str, wanted: usize, err: io::Error) -> Error {
    if err.kind() == ErrorKind::UnexpectedEof {
      Error::ShortRead { region, wanted }
    } else {
      Error::Io(anyhow!(err))
    }
  }
}

/// Implementation based on `anyhow` crate src:
/// https://github.com/dtolnay/anyhow/blob/master/src/fmt.rs
impl Debug for Error {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self)?;

    if let Some(cause) = self.source() {
      write!(f, "\n\nCaused by:")?;

      let multiple = cause.source().is_some();
      for (n, error) in Chain::new(cause).enumerate() {
        writeln!(f)?;
        let mut indented = Indented {
          inner: f,
          number: if multiple { Some(n) } else { None },
          started: false,
        };
        write!(indented, "{}", error)?;
      }
    }

    Ok(())
  }
}

impl From<io::Error> for Error {
  fn from(value: io::Error) -> Self {
    Self::Io(anyhow!(value))
  }
}
