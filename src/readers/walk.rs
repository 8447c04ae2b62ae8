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

use std::collections::HashSet;
use std::io::Read;

use crate::constants::MAX_WALK_DEPTH;
use crate::error;
use crate::error::Error;
use crate::readers::{Reader, ReaderEntry};
use crate::types::NodeInfo;

/// Ruling returned by a walk callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkAction {
  /// Keep walking.
  Continue,
  /// Do not descend below the entry just visited. Returned for a plain file
  /// it is a no-op, not an error.
  SkipSubtree,
}

/// Traversal tuning for [`Reader::walk`].
#[derive(Debug, Clone, Copy)]
pub struct WalkOptions {
  /// Parse files ending in `.rcc` as archives of their own and walk their
  /// contents under the file's path.
  pub recurse_nested: bool,
  /// Report a nested archive as a file before descending into it. With this
  /// off, a nested archive that opens cleanly is only visible through its
  /// contents (it still gets a callback when opening or parsing fails, so
  /// the error has a path).
  pub announce_nested: bool,
}

impl Default for WalkOptions {
  fn default() -> WalkOptions {
    WalkOptions {
      recurse_nested: false,
      announce_nested: true,
    }
  }
}

/// The callback contract: path, entry and error arrive together because an
/// entry can be partially valid (its node parsed, its children not).
/// Returning any error other than the skip sentinel aborts the walk.
type WalkResult = anyhow::Result<WalkAction>;

struct WalkContext {
  options: WalkOptions,
  depth: usize,
  /// Monotonic id per (nested) archive, so visited ranges of different
  /// archives never collide.
  generation: u32,
  next_generation: u32,
  visited: HashSet<(u32, u32, u32)>,
}

impl<'a> Reader<'a> {
  /// Calls the callback for each entry of the tree, depth first, directories
  /// before their contents. The root directory itself is never reported:
  /// errors at the root are returned directly, while errors below it are
  /// offered to the callback together with the path they occurred at.
  ///
  /// With [`WalkOptions::recurse_nested`], entries named `*.rcc` are
  /// buffered, parsed as archives and walked under the same path prefix.
  pub fn walk<F>(&self, options: WalkOptions, callback: &mut F) -> error::Result<()>
  where
    F: FnMut(&str, &ReaderEntry<'_>, Option<&Error>) -> WalkResult,
  {
    let mut ctx = WalkContext {
      options,
      depth: 0,
      generation: 0,
      next_generation: 0,
      visited: HashSet::new(),
    };

    walk_entry(&mut ctx, "", &self.root_entry(), callback)
  }
}

fn walk_entry<F>(
  ctx: &mut WalkContext,
  path: &str,
  entry: &ReaderEntry<'_>,
  callback: &mut F,
) -> error::Result<()>
where
  F: FnMut(&str, &ReaderEntry<'_>, Option<&Error>) -> WalkResult,
{
  if !entry.is_dir() {
    if ctx.options.recurse_nested && path.ends_with(".rcc") {
      return walk_nested(ctx, path, entry, callback);
    }

    // SkipSubtree on a file is a no-op
    deliver(path, entry, None, callback)?;
    return Ok(());
  }

  if let Some(guard) = descent_guard(ctx, path, entry) {
    if path.is_empty() {
      return Err(guard);
    }
    deliver(path, entry, Some(&guard), callback)?;
    return Ok(());
  }

  let children = match entry.children() {
    Ok(children) => children,
    Err(err) => {
      if path.is_empty() {
        return Err(err);
      }
      deliver(path, entry, Some(&err), callback)?;
      return Ok(());
    }
  };

  if !path.is_empty() {
    if deliver(path, entry, None, callback)? == WalkAction::SkipSubtree {
      return Ok(());
    }
  }

  // the record range is only on the visited set while we are below it, so a
  // producer sharing one subtree between siblings is not mistaken for a loop
  let range = descent_range(ctx, entry);
  ctx.depth += 1;
  let mut result = Ok(());
  for child in &children {
    let child_path = join_path(path, child.name());
    result = walk_entry(ctx, &child_path, child, callback);
    if result.is_err() {
      break;
    }
  }
  ctx.depth -= 1;
  if let Some(range) = range {
    ctx.visited.remove(&range);
  }

  result
}

fn descent_range(ctx: &mut WalkContext, entry: &ReaderEntry<'_>) -> Option<(u32, u32, u32)> {
  let NodeInfo::Directory {
    child_count,
    child_offset,
  } = entry.node().info
  else {
    return None;
  };

  if child_count == 0 {
    return None;
  }

  let range = (ctx.generation, child_offset, child_count);
  ctx.visited.insert(range);
  Some(range)
}

fn walk_nested<F>(
  ctx: &mut WalkContext,
  path: &str,
  entry: &ReaderEntry<'_>,
  callback: &mut F,
) -> error::Result<()>
where
  F: FnMut(&str, &ReaderEntry<'_>, Option<&Error>) -> WalkResult,
{
  if ctx.depth >= MAX_WALK_DEPTH {
    let guard = Error::RecursionLimit {
      path: path.to_string(),
      limit: MAX_WALK_DEPTH,
    };
    deliver(path, entry, Some(&guard), callback)?;
    return Ok(());
  }

  // the whole nested archive is buffered before parsing; at most one nested
  // stream is open at a time
  let mut buf = Vec::new();
  let opened = entry
    .open()
    .and_then(|mut stream| stream.read_to_end(&mut buf).map_err(Error::from));
  if let Err(err) = opened {
    deliver(path, entry, Some(&err), callback)?;
    return Ok(());
  }

  let nested = match Reader::from_archive(&buf) {
    Ok(nested) => nested,
    Err(err) => {
      deliver(path, entry, Some(&err), callback)?;
      return Ok(());
    }
  };

  let children = match nested.root_children() {
    Ok(children) => children,
    Err(err) => {
      deliver(path, entry, Some(&err), callback)?;
      return Ok(());
    }
  };

  if ctx.options.announce_nested {
    if deliver(path, entry, None, callback)? == WalkAction::SkipSubtree {
      return Ok(());
    }
  }

  let parent_generation = ctx.generation;
  ctx.next_generation += 1;
  ctx.generation = ctx.next_generation;
  ctx.depth += 1;

  for child in &children {
    let child_path = join_path(path, child.name());
    walk_entry(ctx, &child_path, child, callback)?;
  }

  ctx.depth -= 1;
  ctx.generation = parent_generation;

  Ok(())
}

/// Fires the trip wires for hostile trees: the bounded descent depth and the
/// revisited-record check. Well-formed archives never trigger either.
fn descent_guard(ctx: &WalkContext, path: &str, entry: &ReaderEntry<'_>) -> Option<Error> {
  if ctx.depth >= MAX_WALK_DEPTH {
    return Some(Error::RecursionLimit {
      path: path.to_string(),
      limit: MAX_WALK_DEPTH,
    });
  }

  if let NodeInfo::Directory {
    child_count,
    child_offset,
  } = entry.node().info
  {
    if ctx
      .visited
      .contains(&(ctx.generation, child_offset, child_count))
    {
      return Some(Error::TraversalCycle {
        path: path.to_string(),
      });
    }
  }

  None
}

fn deliver<F>(
  path: &str,
  entry: &ReaderEntry<'_>,
  err: Option<&Error>,
  callback: &mut F,
) -> error::Result<WalkAction>
where
  F: FnMut(&str, &ReaderEntry<'_>, Option<&Error>) -> WalkResult,
{
  callback(path, entry, err).map_err(|source| Error::CallbackAborted {
    path: path.to_string(),
    source,
  })
}

fn join_path(parent: &str, name: &str) -> String {
  if parent.is_empty() {
    name.to_string()
  } else {
    format!("{}/{}", parent, name)
  }
}
