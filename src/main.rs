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

//! Command-line extractor for compiled Qt resources.

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use chrono::{DateTime, Datelike, Local, Timelike};
use clap::Parser;
use glob::Pattern;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qrcx::cli::Cli;
use qrcx::error::Error;
use qrcx::readers::{Reader, ReaderEntry, WalkAction, WalkOptions};
use qrcx::types::{Country, Language};

fn main() -> ExitCode {
  let cli = Cli::parse();

  let filter = if cli.verbose { "info" } else { "warn" };
  tracing_subscriber::registry()
    .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
    .with(
      tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time(),
    )
    .init();

  if !cli.offsets.is_empty() && cli.offsets.len() != 4 {
    eprintln!(
      "Error: expected either an rcc file, or an executable followed by the format version and \
       the tree, data and names offsets."
    );
    return ExitCode::from(2);
  }
  if cli.offsets.iter().any(|offset| *offset < 0) {
    eprintln!("Error: offsets cannot be negative.");
    return ExitCode::from(2);
  }

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("Error: {:#}.", err);
      ExitCode::from(1)
    }
  }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
  let exclude = cli
    .exclude
    .iter()
    .map(|pattern| {
      Pattern::new(pattern).with_context(|| format!("bad exclude pattern {:?}", pattern))
    })
    .collect::<anyhow::Result<Vec<_>>>()?;

  let file = File::open(&cli.file).with_context(|| format!("open {:?}", cli.file))?;

  let reader = if cli.offsets.is_empty() {
    Reader::from_archive(&file).with_context(|| format!("parse rcc file {:?}", cli.file))?
  } else {
    Reader::from_regions(
      &file,
      cli.offsets[0] as i32,
      cli.offsets[1] as u64,
      cli.offsets[2] as u64,
      cli.offsets[3] as u64,
    )
    .with_context(|| format!("parse resources embedded in {:?}", cli.file))?
  };

  extract(cli, &reader, &exclude)
}

/// Walks the archive into a zip written next to the output path, and renames
/// it over the output only after a clean finish, so a failed run never leaves
/// a half-written archive behind.
fn extract(cli: &Cli, reader: &Reader<'_>, exclude: &[Pattern]) -> anyhow::Result<()> {
  let dir = cli
    .output
    .parent()
    .filter(|parent| !parent.as_os_str().is_empty())
    .unwrap_or(Path::new("."));
  let mut tmp = tempfile::Builder::new()
    .prefix(".qrcx-")
    .suffix(".zip.tmp")
    .tempfile_in(dir)
    .context("create output temp file")?;

  {
    let mut zip = zip::ZipWriter::new(tmp.as_file_mut());
    let options = WalkOptions {
      recurse_nested: cli.recursive,
      ..WalkOptions::default()
    };

    reader
      .walk(options, &mut |path, entry, err| {
        write_entry(cli, exclude, &mut zip, path, entry, err)
      })
      .context("generate zip")?;

    zip.finish().context("generate zip")?;
  }

  tmp.as_file_mut().flush().context("flush zip")?;
  tmp
    .persist(&cli.output)
    .with_context(|| format!("rename temp file to output file {:?}", cli.output))?;

  Ok(())
}

fn write_entry<W: Write + Seek>(
  cli: &Cli,
  exclude: &[Pattern],
  zip: &mut zip::ZipWriter<W>,
  path: &str,
  entry: &ReaderEntry<'_>,
  err: Option<&Error>,
) -> anyhow::Result<WalkAction> {
  for pattern in exclude {
    if pattern.matches(path) {
      info!("SKIP    {:?} (matches {:?})", path, pattern.as_str());
      return Ok(WalkAction::SkipSubtree);
    }
  }

  if let Some(err) = err {
    if cli.force {
      warn!("ignoring error: walk {:?}: {:#}", path, err);
      return Ok(WalkAction::Continue);
    }
    anyhow::bail!("walk {:?}: {}", path, err);
  }

  let offset = entry.on_disk_offset();
  let sized = entry
    .on_disk_size()
    .and_then(|size| entry.constraints().map(|constraints| (size, constraints)));
  let (size, (country, language)) = match sized {
    Ok(sized) => sized,
    Err(err) => {
      if cli.force {
        warn!("ignoring error: walk {:?}: {:#}", path, err);
        return Ok(WalkAction::Continue);
      }
      return Err(err.into());
    }
  };

  if entry.is_dir() {
    info!("DIR     {:?} ({:#x} + {})", path, offset, size);
    return Ok(WalkAction::Continue);
  }

  let target = qualified_name(path, country, language);
  if target != path {
    info!("FILE    {:?} => {:?} ({:#x} + {})", path, target, offset, size);
  } else {
    info!("FILE    {:?} ({:#x} + {})", path, offset, size);
  }

  let mut contents = entry
    .open()
    .with_context(|| format!("open resource {:?}", path))?;

  let mut options = zip::write::FileOptions::default();
  if let Some(modified) = entry.modified_time() {
    if let Some(modified) = zip_datetime(&modified) {
      options = options.last_modified_time(modified);
    }
  }

  zip
    .start_file(target.as_str(), options)
    .with_context(|| format!("create zip header for {:?}", target))?;
  std::io::copy(&mut contents, zip).with_context(|| format!("write contents of {:?}", target))?;

  Ok(WalkAction::Continue)
}

/// Splices the non-default locale qualifiers into the file name before the
/// final extension: `ui.qm` pinned to French becomes `ui[language!French].qm`.
fn qualified_name(path: &str, country: Country, language: Language) -> String {
  let mut qualifiers = String::new();
  if country != Country::AnyCountry {
    qualifiers.push_str(&format!("[country!{}]", country));
  }
  if language != Language::AnyLanguage && language != Language::C {
    qualifiers.push_str(&format!("[language!{}]", language));
  }
  if qualifiers.is_empty() {
    return path.to_string();
  }

  let (parent, base) = match path.rsplit_once('/') {
    Some((parent, base)) => (Some(parent), base),
    None => (None, path),
  };
  let (stem, extension) = match base.rfind('.') {
    Some(dot) => (&base[..dot], &base[dot..]),
    None => (base, ""),
  };

  let base = format!("{}{}{}", stem, qualifiers, extension);
  match parent {
    Some(parent) => format!("{}/{}", parent, base),
    None => base,
  }
}

/// The zip timestamp format only covers 1980-2107; anything outside that
/// range keeps the default timestamp.
fn zip_datetime(modified: &DateTime<Local>) -> Option<zip::DateTime> {
  zip::DateTime::from_date_and_time(
    u16::try_from(modified.year()).ok()?,
    modified.month() as u8,
    modified.day() as u8,
    modified.hour() as u8,
    modified.minute() as u8,
    modified.second() as u8,
  )
  .ok()
}
