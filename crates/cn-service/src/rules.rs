//! Process-configuration lookup.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use cn_model::ProcurementMethod;
use cn_validate::Variant;

/// Answers configuration questions the pipeline cannot decide from the
/// documents alone.
pub trait RuleLookup {
    /// Whether an electronic auction is mandatory for this country, method
    /// and operation flavor.
    fn is_auction_required(
        &self,
        country: &str,
        method: ProcurementMethod,
        variant: Variant,
    ) -> bool;

    /// Upper bound for an auction's eligible minimum difference, as a
    /// fraction of the related lot's value.
    fn auction_minimum_ratio(&self, country: &str, method: ProcurementMethod) -> Decimal;
}

/// Data-driven lookup: country-level overrides on top of defaults. Loadable
/// from JSON, which is how the CLI configures it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticRuleLookup {
    #[serde(default)]
    pub auction_required_by_default: bool,
    pub default_minimum_ratio: Decimal,
    #[serde(default)]
    pub countries: BTreeMap<String, CountryRules>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRules {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_ratio: Option<Decimal>,
}

impl StaticRuleLookup {
    /// Auctions never required, minimum difference capped at 10% of the lot
    /// value.
    pub fn permissive() -> Self {
        Self {
            auction_required_by_default: false,
            default_minimum_ratio: Decimal::new(1, 1),
            countries: BTreeMap::new(),
        }
    }
}

impl RuleLookup for StaticRuleLookup {
    fn is_auction_required(
        &self,
        country: &str,
        _method: ProcurementMethod,
        variant: Variant,
    ) -> bool {
        // Auctions only exist in the competitive flow.
        if !matches!(variant, Variant::OpenCn) {
            return false;
        }
        self.countries
            .get(country)
            .and_then(|rules| rules.auction_required)
            .unwrap_or(self.auction_required_by_default)
    }

    fn auction_minimum_ratio(&self, country: &str, _method: ProcurementMethod) -> Decimal {
        self.countries
            .get(country)
            .and_then(|rules| rules.minimum_ratio)
            .unwrap_or(self.default_minimum_ratio)
    }
}
