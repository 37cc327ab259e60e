//! Individual rule predicates, one concern per module.
//!
//! Every function here has the [`crate::variant::RuleFn`] shape and is pure:
//! it inspects the validation input and either passes or names the violated
//! rule. Ordering lives in the variant tables, not here.

pub mod access;
pub mod auctions;
pub mod budget;
pub mod criteria;
pub mod documents;
pub mod items;
pub mod lots;
pub mod procuring;
