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

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "qrcx")]
#[command(version)]
#[command(about = "Extract compiled Qt resources into a zip file", long_about = None)]
#[command(after_help = "Executable offsets:\n  \
To find executable offsets and the format version, look for calls to qRegisterResourceData.\n  \
These are usually within entry points or qInitResource* functions. qRegisterResourceData\n  \
takes four arguments: format, tree, names, data.\n\n\
Qt support:\n  \
Format versions 1-3 are supported, along with locale/country codes from Qt 5.13. Resources\n  \
can be compressed with zlib or zstd.\n\n\
Output:\n  \
The extracted resources are written to a zip file. The directory structure is preserved and\n  \
separated with forward slashes on all platforms. If a file has language/country constraints,\n  \
they are added to the filename before the extension in the format '[language!LanguageName]'\n  \
and '[country!CountryName]'. If the resource format is >= 2, the modification time is also\n  \
written for each file.")]
pub struct Cli {
  /// RCC file, or executable when offsets are given
  #[arg(value_name = "FILE")]
  pub file: PathBuf,

  /// format_version tree_offset data_offset names_offset (all four, for
  /// resources embedded in an executable)
  #[arg(value_name = "OFFSETS")]
  pub offsets: Vec<i64>,

  /// Output filename
  #[arg(short, long, default_value = "resources.zip")]
  pub output: PathBuf,

  /// Ignore errors during extraction if possible
  #[arg(short, long)]
  pub force: bool,

  /// Expand nested RCC files
  #[arg(short, long)]
  pub recursive: bool,

  /// Exclude files matching this glob (can be specified multiple times)
  #[arg(short, long, value_name = "GLOB")]
  pub exclude: Vec<String>,

  /// Show information about the files being extracted
  #[arg(short, long)]
  pub verbose: bool,
}
