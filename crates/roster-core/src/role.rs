//! Roles and the vocabulary that validates them.
//!
//! A [`Role`] can only be obtained from [`RoleVocabulary::validate`], so every
//! role held by a [`Person`](crate::person::Person) names an entry that was in
//! the vocabulary when it was validated.

use std::{collections::BTreeSet, fmt};

use serde::Serialize;
use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::{Error, Result};

// ─── Role ────────────────────────────────────────────────────────────────────

/// A validated role name, e.g. `attendee`.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
  pub fn name(&self) -> &str { &self.0 }
}

impl fmt::Display for Role {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Vocabulary ──────────────────────────────────────────────────────────────

/// Roles available when no vocabulary is configured.
#[derive(Debug, Clone, Copy, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
enum DefaultRole {
  Attendee,
  Speaker,
  Sponsor,
  Vendor,
  Volunteer,
}

/// The closed set of role names the system accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleVocabulary {
  names: BTreeSet<String>,
}

impl Default for RoleVocabulary {
  fn default() -> Self {
    Self {
      names: DefaultRole::iter().map(|r| r.as_ref().to_owned()).collect(),
    }
  }
}

impl RoleVocabulary {
  /// Build a vocabulary from explicit names.
  ///
  /// Names are stored as given; blank or repeated names are rejected.
  pub fn from_names<I, S>(names: I) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let mut set = BTreeSet::new();
    for name in names {
      let name = name.into();
      if name.trim().is_empty() || name.chars().any(char::is_whitespace) {
        return Err(Error::InvalidVocabulary(format!(
          "role names must be single non-empty words, got {name:?}"
        )));
      }
      if !set.insert(name.clone()) {
        return Err(Error::InvalidVocabulary(format!(
          "role {name:?} listed more than once"
        )));
      }
    }
    if set.is_empty() {
      return Err(Error::InvalidVocabulary("no roles given".into()));
    }
    Ok(Self { names: set })
  }

  /// Resolve `name` to its canonical [`Role`]. The lookup is case-sensitive.
  pub fn validate(&self, name: &str) -> Result<Role> {
    self
      .names
      .get(name)
      .map(|n| Role(n.clone()))
      .ok_or_else(|| Error::InvalidRole(name.to_owned()))
  }

  /// Validate every name, failing on the first unknown one.
  pub fn validate_all<'a, I>(&self, names: I) -> Result<BTreeSet<Role>>
  where
    I: IntoIterator<Item = &'a str>,
  {
    names.into_iter().map(|n| self.validate(n)).collect()
  }

  pub fn contains(&self, name: &str) -> bool { self.names.contains(name) }

  /// Role names in lexicographic order.
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.names.iter().map(String::as_str)
  }
}
