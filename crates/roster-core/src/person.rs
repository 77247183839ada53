//! Person — the record the address book stores and searches.

use std::{cmp::Ordering, collections::BTreeSet, fmt};

use serde::Serialize;

use crate::role::Role;

/// An immutable contact record.
///
/// Equality compares every field. [`Person::is_same_person`] is the weaker
/// identity check used to reject duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
  pub name:     String,
  pub phone:    String,
  pub email:    String,
  pub address:  String,
  pub roles:    BTreeSet<Role>,
  /// Telegram handle without the leading `@`.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub telegram: Option<String>,
}

impl Person {
  /// Convenience constructor with no roles and no telegram username.
  pub fn new(
    name: impl Into<String>,
    phone: impl Into<String>,
    email: impl Into<String>,
    address: impl Into<String>,
  ) -> Self {
    Self {
      name:     name.into(),
      phone:    phone.into(),
      email:    email.into(),
      address:  address.into(),
      roles:    BTreeSet::new(),
      telegram: None,
    }
  }

  pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
    self.roles = roles.into_iter().collect();
    self
  }

  pub fn with_telegram(mut self, username: impl Into<String>) -> Self {
    self.telegram = Some(username.into());
    self
  }

  /// Two records describe the same person when their names match after
  /// trimming, ignoring case. No other field is consulted.
  pub fn is_same_person(&self, other: &Person) -> bool {
    normalized_name(&self.name) == normalized_name(&other.name)
  }

  pub fn has_role(&self, role: &Role) -> bool { self.roles.contains(role) }
}

fn normalized_name(name: &str) -> String { name.trim().to_lowercase() }

// Names decide the order; the other fields only break ties so that `Ord`
// agrees with `Eq`.
impl Ord for Person {
  fn cmp(&self, other: &Self) -> Ordering {
    self
      .name
      .cmp(&other.name)
      .then_with(|| self.phone.cmp(&other.phone))
      .then_with(|| self.email.cmp(&other.email))
      .then_with(|| self.address.cmp(&other.address))
      .then_with(|| self.roles.cmp(&other.roles))
      .then_with(|| self.telegram.cmp(&other.telegram))
  }
}

impl PartialOrd for Person {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl fmt::Display for Person {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let roles = self
      .roles
      .iter()
      .map(Role::name)
      .collect::<Vec<_>>()
      .join(", ");
    write!(
      f,
      "Person{{name={}, phone={}, email={}, address={}, roles=[{}]",
      self.name, self.phone, self.email, self.address, roles
    )?;
    if let Some(tg) = &self.telegram {
      write!(f, ", telegram={tg}")?;
    }
    f.write_str("}")
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::role::RoleVocabulary;

  fn alice() -> Person {
    Person::new(
      "Alice Pauline",
      "94351253",
      "alice@example.com",
      "123, Jurong West Ave 6, #08-111",
    )
    .with_roles([RoleVocabulary::default().validate("attendee").unwrap()])
  }

  fn bob() -> Person {
    Person::new(
      "Bob Choo",
      "22222222",
      "bob@example.com",
      "Block 123, Bobby Street 3",
    )
  }

  #[test]
  fn same_person_ignores_case_and_surrounding_whitespace() {
    let amy = Person::new("Amy", "1", "a@x.com", "here");
    let lower = Person::new("amy ", "1", "a@x.com", "here");
    assert!(amy.is_same_person(&lower));
  }

  #[test]
  fn same_name_alone_makes_same_person() {
    let edited = Person {
      phone: "99999999".into(),
      email: "other@example.com".into(),
      address: "elsewhere".into(),
      ..alice()
    };
    assert!(alice().is_same_person(&edited));
    assert!(!alice().is_same_person(&bob()));
  }

  #[test]
  fn equality_requires_every_field() {
    let vocab = RoleVocabulary::default();
    assert_eq!(alice(), alice().clone());
    assert_ne!(alice(), bob());
    assert_ne!(alice(), Person { phone: "1".into(), ..alice() });
    assert_ne!(alice(), Person { email: "x@y.z".into(), ..alice() });
    assert_ne!(alice(), Person { address: "nowhere".into(), ..alice() });
    assert_ne!(
      alice(),
      alice().with_roles([vocab.validate("vendor").unwrap()])
    );
    assert_ne!(alice(), alice().with_telegram("al1ice"));
  }

  #[test]
  fn ordering_follows_name() {
    assert!(alice() < bob());
    assert!(bob() > alice());
    let upper = Person::new("Zed", "", "", "");
    let lower = Person::new("adam", "", "", "");
    // Case-sensitive: uppercase sorts first.
    assert_eq!(upper.cmp(&lower), "Zed".cmp("adam"));
  }

  #[test]
  fn has_role_checks_membership() {
    let vocab = RoleVocabulary::default();
    let person = bob().with_roles([
      vocab.validate("attendee").unwrap(),
      vocab.validate("speaker").unwrap(),
    ]);
    assert!(person.has_role(&vocab.validate("attendee").unwrap()));
    assert!(person.has_role(&vocab.validate("speaker").unwrap()));
    assert!(!person.has_role(&vocab.validate("vendor").unwrap()));
  }

  #[test]
  fn display_lists_fields() {
    assert_eq!(
      alice().to_string(),
      "Person{name=Alice Pauline, phone=94351253, email=alice@example.com, \
       address=123, Jurong West Ave 6, #08-111, roles=[attendee]}"
    );
    assert!(bob().with_telegram("bobc").to_string().ends_with(", telegram=bobc}"));
  }
}
