//! The searchable fields and their command-line prefixes.

use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

/// A field of [`Person`](roster_core::person::Person) that `search` can
/// filter on.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  EnumIter,
  Display,
  AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum FieldKind {
  Name,
  Phone,
  Email,
  Address,
  Role,
}

impl FieldKind {
  /// The marker that introduces this field, e.g. `n/`.
  pub fn prefix(self) -> &'static str {
    match self {
      Self::Name => "n/",
      Self::Phone => "p/",
      Self::Email => "e/",
      Self::Address => "a/",
      Self::Role => "r/",
    }
  }

  /// The field whose prefix starts `s`, if any.
  pub fn at_start_of(s: &str) -> Option<Self> {
    Self::iter().find(|kind| s.starts_with(kind.prefix()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn prefixes_are_distinct() {
    let prefixes: std::collections::BTreeSet<_> =
      FieldKind::iter().map(FieldKind::prefix).collect();
    assert_eq!(prefixes.len(), 5);
  }

  #[test]
  fn recognises_prefix_at_start() {
    assert_eq!(FieldKind::at_start_of("r/vendor"), Some(FieldKind::Role));
    assert_eq!(FieldKind::at_start_of("a/"), Some(FieldKind::Address));
    assert_eq!(FieldKind::at_start_of("x/abc"), None);
    assert_eq!(FieldKind::at_start_of("n"), None);
  }

  #[test]
  fn displays_lowercase_name() {
    assert_eq!(FieldKind::Email.to_string(), "email");
    assert_eq!(FieldKind::Role.as_ref(), "role");
  }
}
