//! The `Model` trait and the in-memory [`AddressBook`].
//!
//! Commands depend on the trait: they read the full collection and publish a
//! filtered view back through it. Loading and persistence are the caller's
//! concern.

use tracing::debug;

use crate::{Error, Result, person::Person};

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Read access to the person collection plus a sink for the result view.
pub trait Model {
  /// Every stored person, in collection order.
  fn persons(&self) -> &[Person];

  /// The currently displayed persons.
  fn filtered_persons(&self) -> &[Person];

  /// Replace the displayed persons. Stored records are not touched.
  fn set_filtered_persons(&mut self, persons: Vec<Person>);
}

// ─── AddressBook ─────────────────────────────────────────────────────────────

/// An in-memory collection of unique persons, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
  persons:  Vec<Person>,
  filtered: Vec<Person>,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  /// Build an address book from `persons`, rejecting duplicates.
  pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> Result<Self> {
    let mut book = Self::new();
    for person in persons {
      book.add_person(person)?;
    }
    Ok(book)
  }

  /// `true` if a person with the same identity is already stored.
  pub fn has_person(&self, person: &Person) -> bool {
    self.persons.iter().any(|p| p.is_same_person(person))
  }

  /// Append `person` and show the full collection again.
  pub fn add_person(&mut self, person: Person) -> Result<()> {
    if self.has_person(&person) {
      return Err(Error::DuplicatePerson(person.name));
    }
    debug!(name = %person.name, "adding person");
    self.persons.push(person);
    self.show_all();
    Ok(())
  }

  /// Reset the displayed view to every stored person.
  pub fn show_all(&mut self) { self.filtered = self.persons.clone(); }

  pub fn len(&self) -> usize { self.persons.len() }

  pub fn is_empty(&self) -> bool { self.persons.is_empty() }
}

impl Model for AddressBook {
  fn persons(&self) -> &[Person] { &self.persons }

  fn filtered_persons(&self) -> &[Person] { &self.filtered }

  fn set_filtered_persons(&mut self, persons: Vec<Person>) {
    self.filtered = persons;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn person(name: &str) -> Person {
    Person::new(name, "12345678", "someone@example.com", "1 Main Road")
  }

  #[test]
  fn add_person_keeps_insertion_order() {
    let book =
      AddressBook::from_persons([person("Carl"), person("Alice"), person("Bob")])
        .unwrap();
    let names: Vec<_> = book.persons().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Carl", "Alice", "Bob"]);
    assert_eq!(book.filtered_persons(), book.persons());
  }

  #[test]
  fn add_person_rejects_same_identity() {
    let mut book = AddressBook::new();
    book.add_person(person("Amy")).unwrap();
    let err = book.add_person(person(" amy")).unwrap_err();
    assert_eq!(err, Error::DuplicatePerson(" amy".into()));
    assert_eq!(book.len(), 1);
  }

  #[test]
  fn filtered_view_is_independent_of_collection() {
    let mut book =
      AddressBook::from_persons([person("Alice"), person("Bob")]).unwrap();
    book.set_filtered_persons(vec![person("Bob")]);
    assert_eq!(book.filtered_persons().len(), 1);
    assert_eq!(book.persons().len(), 2);

    book.show_all();
    assert_eq!(book.filtered_persons().len(), 2);
  }
}
