//! Error types for the search command parser.

use thiserror::Error;

use crate::command::SearchCommand;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// The input had no usable field prefix; carries the command usage text.
  #[error("Invalid command format! \n{0}")]
  InvalidCommandFormat(&'static str),

  #[error(transparent)]
  Core(#[from] roster_core::Error),
}

impl Error {
  pub(crate) fn invalid_format() -> Self {
    Self::InvalidCommandFormat(SearchCommand::USAGE)
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
