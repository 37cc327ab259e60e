//! Ordered business-rule validation for PN-to-CN change requests.
//!
//! The pipeline is a left fold over a variant-specific rule table: the first
//! violated rule wins, later rules are not evaluated, and no aggregation
//! happens. Rules are pure predicates over the request, the stored snapshot
//! and invocation context; collaborator answers (auction requirement,
//! minimum-difference limits) are resolved up front and passed in as data.

pub mod checks;
mod context;
mod pipeline;
pub mod variant;

pub use context::{AuctionPolicy, PipelineContext, ValidationInput};
pub use pipeline::validate;
pub use variant::{RuleFn, Variant, VariantConfig};
