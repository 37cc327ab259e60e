//! Identifier newtypes for the entities the pipeline cross-references.
//!
//! Temporary (request-local) and permanent identifiers share the same
//! newtype; permanence is a property of where the value came from, not of
//! its shape. All ids are opaque non-empty strings on the wire.

use std::fmt;

use crate::error::ModelError;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ModelError::BlankId(value));
                }
                Ok(Self(trimmed.to_string()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Contracting-process id shared by every stage of a procurement.
    Cpid
);
string_id!(
    /// Open-contracting id of a single stage document.
    Ocid
);
string_id!(LotId);
string_id!(ItemId);
string_id!(AuctionId);
string_id!(DocumentId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_id_is_rejected() {
        assert!(LotId::new("  ").is_err());
        assert!(Cpid::new("").is_err());
    }

    #[test]
    fn ids_trim_whitespace() {
        let id = ItemId::new(" item-1 ").expect("valid id");
        assert_eq!(id.as_str(), "item-1");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = AuctionId::new("auction-1").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"auction-1\"");
    }
}
