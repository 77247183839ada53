//! The `search` command of the Roster contact manager.
//!
//! Turns text such as `n/Amy Bob r/speaker` into a [`SearchCommand`] whose
//! criteria AND the fields together and OR the keywords within each field.
//! Pure synchronous; the person collection is reached through
//! [`roster_core::model::Model`].
//!
//! # Quick start
//!
//! ```no_run
//! use roster_core::{model::AddressBook, role::RoleVocabulary};
//! use roster_search::SearchCommandParser;
//!
//! let vocabulary = RoleVocabulary::default();
//! let mut book = AddressBook::new();
//! let command = SearchCommandParser::new(&vocabulary)
//!   .parse(" n/Amy r/speaker")
//!   .unwrap();
//! println!("{}", command.execute(&mut book).feedback);
//! ```

mod command;
mod criteria;
pub mod error;
mod field;
mod parse;
mod predicate;
pub mod tokenize;

pub use command::{CommandResult, SearchCommand};
pub use criteria::SearchCriteria;
pub use error::{Error, Result};
pub use field::FieldKind;
pub use parse::SearchCommandParser;
pub use predicate::FieldPredicate;
