//! Service surface of the PN-to-CN pipeline: the `check` and `create`
//! operations plus the collaborator boundaries (document store, identifier
//! generator, rule lookup) they depend on.

mod error;
mod generator;
mod rules;
mod service;
mod store;
pub mod testing;

pub use error::{ServiceError, StoreError};
pub use generator::{IdGenerator, UuidGenerator};
pub use rules::{CountryRules, RuleLookup, StaticRuleLookup};
pub use service::{CheckOutcome, NoticeService, OperationContext};
pub use store::{InMemoryStore, NoticeStore, Stage};
