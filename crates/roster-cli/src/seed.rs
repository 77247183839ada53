//! Loading persons from a JSON seed file.
//!
//! The file is an array of objects:
//!
//! ```json
//! [{ "name": "Amy Bee", "phone": "1234567", "email": "amy@example.com",
//!    "address": "123 Road", "roles": ["attendee"], "telegram": "amybee" }]
//! ```

use std::path::Path;

use anyhow::Context as _;
use roster_core::{model::AddressBook, person::Person, role::RoleVocabulary};
use serde::Deserialize;
use tracing::warn;

/// One person as written in the seed file; roles are plain names.
#[derive(Debug, Deserialize)]
struct PersonRecord {
  name:     String,
  phone:    String,
  email:    String,
  address:  String,
  #[serde(default)]
  roles:    Vec<String>,
  #[serde(default)]
  telegram: Option<String>,
}

impl PersonRecord {
  fn into_person(
    self,
    vocabulary: &RoleVocabulary,
  ) -> roster_core::Result<Person> {
    let roles = vocabulary.validate_all(self.roles.iter().map(String::as_str))?;
    let mut person = Person::new(self.name, self.phone, self.email, self.address)
      .with_roles(roles);
    person.telegram = self.telegram;
    Ok(person)
  }
}

/// Read `path` into an [`AddressBook`].
pub fn load(path: &Path, vocabulary: &RoleVocabulary) -> anyhow::Result<AddressBook> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading roster file {}", path.display()))?;
  from_json(&raw, vocabulary)
    .with_context(|| format!("parsing roster file {}", path.display()))
}

/// Build an address book from JSON text.
///
/// Records with unknown roles or a duplicate name are skipped with a warning;
/// malformed JSON fails outright.
pub fn from_json(
  raw: &str,
  vocabulary: &RoleVocabulary,
) -> anyhow::Result<AddressBook> {
  let records: Vec<PersonRecord> = serde_json::from_str(raw)?;
  let mut book = AddressBook::new();
  for record in records {
    let name = record.name.clone();
    let added = record
      .into_person(vocabulary)
      .and_then(|person| book.add_person(person));
    if let Err(e) = added {
      warn!(%name, error = %e, "skipping roster entry");
    }
  }
  Ok(book)
}
