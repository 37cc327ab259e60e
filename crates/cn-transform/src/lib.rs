//! Identifier substitution and the PN-to-CN document rewrite.
//!
//! Two pieces: [`IdCorrespondence`] maps each distinct temporary id in a
//! change request to a freshly minted permanent id, and [`transform`]
//! rewrites the request into the notice tender shape using that map while
//! preserving every cross-reference between lots, items, documents,
//! criteria and auctions.

mod correspondence;
mod engine;

pub use correspondence::{IdCorrespondence, IdMint};
pub use engine::transform;
