//! Composes field predicates into one search condition.

use std::collections::BTreeMap;

use roster_core::person::Person;

use crate::{
  error::{Error, Result},
  field::FieldKind,
  predicate::FieldPredicate,
};

/// At most one [`FieldPredicate`] per field; a person must satisfy all of
/// them. Fields without a predicate do not constrain the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
  predicates: BTreeMap<FieldKind, FieldPredicate>,
}

impl SearchCriteria {
  /// Key `predicates` by field. A later predicate for the same field replaces
  /// an earlier one. An empty set is rejected rather than matching everyone.
  pub fn new(predicates: impl IntoIterator<Item = FieldPredicate>) -> Result<Self> {
    let predicates: BTreeMap<_, _> =
      predicates.into_iter().map(|p| (p.kind(), p)).collect();
    if predicates.is_empty() {
      return Err(Error::invalid_format());
    }
    Ok(Self { predicates })
  }

  pub fn matches(&self, person: &Person) -> bool {
    self.predicates.values().all(|p| p.test(person))
  }

  /// Fields that carry a predicate, in [`FieldKind`] order.
  pub fn fields(&self) -> impl Iterator<Item = FieldKind> + '_ {
    self.predicates.keys().copied()
  }

  pub fn get(&self, kind: FieldKind) -> Option<&FieldPredicate> {
    self.predicates.get(&kind)
  }

  pub fn len(&self) -> usize { self.predicates.len() }

  pub fn is_empty(&self) -> bool { self.predicates.is_empty() }
}

impl From<FieldPredicate> for SearchCriteria {
  fn from(predicate: FieldPredicate) -> Self {
    Self {
      predicates: BTreeMap::from([(predicate.kind(), predicate)]),
    }
  }
}

#[cfg(test)]
mod tests {
  use roster_core::role::RoleVocabulary;

  use super::*;

  fn amy() -> Person {
    Person::new("Amy Bee", "1234567", "test@gmail.com", "123 Road")
      .with_roles([RoleVocabulary::default().validate("attendee").unwrap()])
  }

  #[test]
  fn empty_set_is_rejected() {
    assert_eq!(
      SearchCriteria::new(Vec::<FieldPredicate>::new()),
      Err(Error::invalid_format())
    );
  }

  #[test]
  fn all_fields_must_match() {
    let criteria = SearchCriteria::new([
      FieldPredicate::name(["Amy"]),
      FieldPredicate::phone(["1234567"]),
    ])
    .unwrap();
    assert!(criteria.matches(&amy()));
    assert!(!criteria.matches(&Person { phone: "7654321".into(), ..amy() }));
    assert!(!criteria.matches(&Person { name: "Bob Bee".into(), ..amy() }));
  }

  #[test]
  fn absent_fields_do_not_constrain() {
    let criteria = SearchCriteria::from(FieldPredicate::address(["road"]));
    assert!(criteria.matches(&Person { name: "Anyone".into(), ..amy() }));
    assert_eq!(criteria.fields().collect::<Vec<_>>(), [FieldKind::Address]);
  }

  #[test]
  fn later_predicate_replaces_earlier_for_same_field() {
    let criteria = SearchCriteria::new([
      FieldPredicate::name(["Bob"]),
      FieldPredicate::name(["Amy"]),
    ])
    .unwrap();
    assert_eq!(criteria.len(), 1);
    assert_eq!(
      criteria.get(FieldKind::Name),
      Some(&FieldPredicate::name(["Amy"]))
    );
  }

  #[test]
  fn equality_ignores_construction_order() {
    let a = SearchCriteria::new([
      FieldPredicate::email(["x"]),
      FieldPredicate::name(["Amy"]),
    ])
    .unwrap();
    let b = SearchCriteria::new([
      FieldPredicate::name(["Amy"]),
      FieldPredicate::email(["x"]),
    ])
    .unwrap();
    assert_eq!(a, b);
  }
}
