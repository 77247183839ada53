//! Parser for the arguments of the `search` command.
//!
//! Pipeline:
//!   raw &str
//!     └─ tokenize()                  → keywords per field
//!          └─ FieldPredicate::from_tokens() → one predicate per field
//!               └─ SearchCriteria::new()     → AND across fields
//!                    └─ SearchCommand

use roster_core::role::RoleVocabulary;
use tracing::debug;

use crate::{
  command::SearchCommand,
  criteria::SearchCriteria,
  error::Result,
  predicate::FieldPredicate,
  tokenize::tokenize,
};

/// Parses `search` arguments, validating roles against a vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct SearchCommandParser<'v> {
  vocabulary: &'v RoleVocabulary,
}

impl<'v> SearchCommandParser<'v> {
  pub fn new(vocabulary: &'v RoleVocabulary) -> Self { Self { vocabulary } }

  /// Parse `args`, the text after the command word.
  ///
  /// Either every field parses and a command is returned, or nothing is.
  pub fn parse(&self, args: &str) -> Result<SearchCommand> {
    let predicates = tokenize(args)?
      .into_iter()
      .map(|(kind, tokens)| {
        FieldPredicate::from_tokens(kind, tokens, self.vocabulary)
      })
      .collect::<Result<Vec<_>>>()?;
    let criteria = SearchCriteria::new(predicates)?;
    debug!(fields = criteria.len(), "parsed search command");
    Ok(SearchCommand::new(criteria))
  }
}
