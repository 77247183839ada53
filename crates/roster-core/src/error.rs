//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("unknown role: {0:?}")]
  InvalidRole(String),

  #[error("this person already exists in the address book: {0}")]
  DuplicatePerson(String),

  #[error("invalid role vocabulary: {0}")]
  InvalidVocabulary(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
