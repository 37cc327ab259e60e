//! Inputs shared by every rule in the pipeline.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use cn_model::request::RequestTender;
use cn_model::snapshot::TenderSnapshot;
use cn_model::{Cpid, ProcurementMethod};

use crate::variant::Variant;

/// Invocation-scoped facts about the caller and the process.
#[derive(Debug, Clone)]
pub struct PipelineContext {
    pub cpid: Cpid,
    pub owner: String,
    pub token: String,
    pub country: String,
    pub procurement_method: ProcurementMethod,
    /// When the operation started; business-function periods are checked
    /// against this instant.
    pub start_date: DateTime<Utc>,
}

/// Auction configuration resolved from the rule lookup before the pipeline
/// runs, so the rules themselves stay collaborator-free.
#[derive(Debug, Clone, Copy)]
pub struct AuctionPolicy {
    pub required: bool,
    /// Upper bound on an auction's eligible minimum difference, expressed as
    /// a fraction of the related lot's value.
    pub minimum_ratio: Decimal,
}

/// Everything a rule may look at. Rules never mutate any of it.
#[derive(Debug, Clone, Copy)]
pub struct ValidationInput<'a> {
    pub request: &'a RequestTender,
    pub snapshot: &'a TenderSnapshot,
    pub ctx: &'a PipelineContext,
    pub auctions: &'a AuctionPolicy,
    pub variant: Variant,
}
