//! Splits the argument string of a `search` command into field segments.
//!
//! A prefix only counts when it starts the input or follows whitespace, so
//! `e/a/b@x.com` is one email segment and not an email plus an address.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
  error::{Error, Result},
  field::FieldKind,
};

/// Keyword tokens per field, in the order they were typed.
pub type FieldTokens = BTreeMap<FieldKind, Vec<String>>;

/// Tokenize `args` into whitespace-separated keywords per field.
///
/// Fails with [`Error::InvalidCommandFormat`] when no prefix is present, when
/// text precedes the first prefix, or when a prefix has no keyword after it.
/// If a prefix appears more than once, the last occurrence wins.
pub fn tokenize(args: &str) -> Result<FieldTokens> {
  let markers = find_markers(args);
  let Some(&(first, _)) = markers.first() else {
    return Err(Error::invalid_format());
  };
  if !args[..first].trim().is_empty() {
    return Err(Error::invalid_format());
  }

  let mut fields = FieldTokens::new();
  for (i, &(start, kind)) in markers.iter().enumerate() {
    let end = markers.get(i + 1).map_or(args.len(), |&(next, _)| next);
    let tokens: Vec<String> = args[start + kind.prefix().len()..end]
      .split_whitespace()
      .map(str::to_owned)
      .collect();
    if tokens.is_empty() {
      return Err(Error::invalid_format());
    }
    if let Some(previous) = fields.insert(kind, tokens) {
      debug!(field = %kind, ?previous, "repeated prefix, keeping the last one");
    }
  }
  Ok(fields)
}

/// Byte offsets of every recognised prefix, in input order.
fn find_markers(args: &str) -> Vec<(usize, FieldKind)> {
  let mut markers = Vec::new();
  let mut at_boundary = true;
  for (i, c) in args.char_indices() {
    if at_boundary && let Some(kind) = FieldKind::at_start_of(&args[i..]) {
      markers.push((i, kind));
    }
    at_boundary = c.is_whitespace();
  }
  markers
}
