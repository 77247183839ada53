//! The `search` command.

use roster_core::model::Model;
use tracing::debug;

use crate::{criteria::SearchCriteria, predicate::FieldPredicate};

/// Feedback returned to the user after a command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
  pub feedback: String,
}

/// Filters the displayed persons down to those matching its criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCommand {
  criteria: SearchCriteria,
}

impl SearchCommand {
  pub const WORD: &'static str = "search";

  pub const USAGE: &'static str = "search: Shows every person matching all \
    of the given fields. Within a field, any keyword may match.\n\
    Parameters: [n/NAME...] [p/PHONE...] [e/EMAIL...] [a/ADDRESS...] \
    [r/ROLE...]\n\
    Example: search n/alice bob r/vendor";

  pub fn new(criteria: SearchCriteria) -> Self { Self { criteria } }

  pub fn criteria(&self) -> &SearchCriteria { &self.criteria }

  /// Publish every person in `model` that matches, in collection order.
  pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> CommandResult {
    let matches: Vec<_> = model
      .persons()
      .iter()
      .filter(|p| self.criteria.matches(p))
      .cloned()
      .collect();
    let count = matches.len();
    debug!(
      fields = ?self.criteria.fields().collect::<Vec<_>>(),
      count,
      "search executed"
    );
    model.set_filtered_persons(matches);
    CommandResult {
      feedback: format!("{count} persons listed!"),
    }
  }
}

impl From<FieldPredicate> for SearchCommand {
  fn from(predicate: FieldPredicate) -> Self {
    Self::new(SearchCriteria::from(predicate))
  }
}

#[cfg(test)]
mod tests {
  use roster_core::{model::AddressBook, person::Person};

  use super::*;

  fn book() -> AddressBook {
    AddressBook::from_persons([
      Person::new("Carl Kurz", "95352563", "heinz@example.com", "wall street"),
      Person::new("Amy Bee", "11111111", "amy@example.com", "Jurong"),
      Person::new("Bob Amy", "22222222", "bob@example.com", "Clementi"),
    ])
    .unwrap()
  }

  #[test]
  fn execute_filters_in_collection_order() {
    let mut model = book();
    let result =
      SearchCommand::from(FieldPredicate::name(["amy"])).execute(&mut model);
    assert_eq!(result.feedback, "2 persons listed!");
    let names: Vec<_> = model
      .filtered_persons()
      .iter()
      .map(|p| p.name.as_str())
      .collect();
    assert_eq!(names, ["Amy Bee", "Bob Amy"]);
  }

  #[test]
  fn execute_with_no_match_empties_view() {
    let mut model = book();
    let result =
      SearchCommand::from(FieldPredicate::phone(["000"])).execute(&mut model);
    assert_eq!(result.feedback, "0 persons listed!");
    assert!(model.filtered_persons().is_empty());
    assert_eq!(model.persons().len(), 3);
  }

  #[test]
  fn execute_does_not_modify_records() {
    let mut model = book();
    let before = model.persons().to_vec();
    SearchCommand::from(FieldPredicate::address(["street"])).execute(&mut model);
    assert_eq!(model.persons(), before.as_slice());
  }
}
