//! Single-field predicates over [`Person`].
//!
//! Within one field the keywords are OR-ed: a person matches if any keyword
//! matches. Keyword order and repetition never change the outcome, so two
//! predicates on the same field compare equal when their keyword sets do.

use std::collections::BTreeSet;

use roster_core::{
  person::Person,
  role::{Role, RoleVocabulary},
};

use crate::{error::Result, field::FieldKind};

#[derive(Debug, Clone)]
pub enum FieldPredicate {
  /// Some word of the name equals a keyword, ignoring case.
  Name(Vec<String>),
  /// The phone number contains a keyword.
  Phone(Vec<String>),
  /// The email contains a keyword, ignoring case.
  Email(Vec<String>),
  /// The address contains a keyword, ignoring case.
  Address(Vec<String>),
  /// The person holds one of the roles.
  Role(Vec<Role>),
}

impl FieldPredicate {
  pub fn name<I, S>(keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::Name(keywords.into_iter().map(Into::into).collect())
  }

  pub fn phone<I, S>(keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::Phone(keywords.into_iter().map(Into::into).collect())
  }

  pub fn email<I, S>(keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::Email(keywords.into_iter().map(Into::into).collect())
  }

  pub fn address<I, S>(keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::Address(keywords.into_iter().map(Into::into).collect())
  }

  pub fn role(roles: impl IntoIterator<Item = Role>) -> Self {
    Self::Role(roles.into_iter().collect())
  }

  /// Build the predicate for `kind` from its keyword tokens.
  ///
  /// Role tokens are validated against `vocabulary`; a single unknown role
  /// fails the whole build.
  pub fn from_tokens(
    kind: FieldKind,
    tokens: Vec<String>,
    vocabulary: &RoleVocabulary,
  ) -> Result<Self> {
    Ok(match kind {
      FieldKind::Name => Self::Name(tokens),
      FieldKind::Phone => Self::Phone(tokens),
      FieldKind::Email => Self::Email(tokens),
      FieldKind::Address => Self::Address(tokens),
      FieldKind::Role => Self::Role(
        tokens
          .iter()
          .map(|t| vocabulary.validate(t))
          .collect::<Result<_, _>>()?,
      ),
    })
  }

  pub fn kind(&self) -> FieldKind {
    match self {
      Self::Name(_) => FieldKind::Name,
      Self::Phone(_) => FieldKind::Phone,
      Self::Email(_) => FieldKind::Email,
      Self::Address(_) => FieldKind::Address,
      Self::Role(_) => FieldKind::Role,
    }
  }

  /// The keywords as typed; roles are given by name.
  pub fn keywords(&self) -> Vec<&str> {
    match self {
      Self::Name(k) | Self::Phone(k) | Self::Email(k) | Self::Address(k) => {
        k.iter().map(String::as_str).collect()
      }
      Self::Role(roles) => roles.iter().map(Role::name).collect(),
    }
  }

  pub fn test(&self, person: &Person) -> bool {
    match self {
      Self::Name(keywords) => {
        let words: Vec<String> = person
          .name
          .split_whitespace()
          .map(str::to_lowercase)
          .collect();
        keywords
          .iter()
          .any(|k| words.contains(&k.to_lowercase()))
      }
      Self::Phone(keywords) => {
        keywords.iter().any(|k| person.phone.contains(k.as_str()))
      }
      Self::Email(keywords) => contains_ignoring_case(&person.email, keywords),
      Self::Address(keywords) => {
        contains_ignoring_case(&person.address, keywords)
      }
      Self::Role(roles) => roles.iter().any(|r| person.has_role(r)),
    }
  }
}

fn contains_ignoring_case(haystack: &str, keywords: &[String]) -> bool {
  let haystack = haystack.to_lowercase();
  keywords
    .iter()
    .any(|k| haystack.contains(k.to_lowercase().as_str()))
}

impl PartialEq for FieldPredicate {
  fn eq(&self, other: &Self) -> bool {
    self.kind() == other.kind()
      && self.keywords().into_iter().collect::<BTreeSet<_>>()
        == other.keywords().into_iter().collect::<BTreeSet<_>>()
  }
}

impl Eq for FieldPredicate {}
