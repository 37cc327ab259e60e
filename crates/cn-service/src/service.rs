//! The core interface exposed to the dispatch layer.

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use cn_model::notice::ContractNotice;
use cn_model::request::ChangeRequest;
use cn_model::snapshot::TenderSnapshot;
use cn_model::{Cpid, ProcurementMethod};
use cn_transform::{transform, IdCorrespondence};
use cn_validate::{validate, AuctionPolicy, PipelineContext, ValidationInput, Variant};

use crate::error::ServiceError;
use crate::generator::IdGenerator;
use crate::rules::RuleLookup;
use crate::store::{NoticeStore, Stage};

/// Everything the dispatch layer knows about the invocation.
#[derive(Debug, Clone)]
pub struct OperationContext {
    pub cpid: Cpid,
    /// Stage of the stored prior document.
    pub prev_stage: Stage,
    /// Stage of the document being created.
    pub stage: Stage,
    pub owner: String,
    pub token: String,
    pub country: String,
    pub procurement_method: ProcurementMethod,
    pub start_date: DateTime<Utc>,
}

/// Result of the read-only `check` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutcome {
    pub auction_required: bool,
    pub variant: Variant,
}

pub struct NoticeService<S, G, R> {
    store: S,
    generator: G,
    rules: R,
}

impl<S, G, R> NoticeService<S, G, R>
where
    S: NoticeStore,
    G: IdGenerator,
    R: RuleLookup,
{
    pub fn new(store: S, generator: G, rules: R) -> Self {
        Self {
            store,
            generator,
            rules,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Validate the request against the stored prior document without
    /// producing anything. Idempotent; never mints identifiers.
    ///
    /// # Errors
    ///
    /// `NotFound` when no prior document exists, the first rule violation
    /// otherwise.
    #[instrument(skip_all, fields(cpid = %ctx.cpid))]
    pub fn check(
        &self,
        ctx: &OperationContext,
        request: &ChangeRequest,
    ) -> Result<CheckOutcome, ServiceError> {
        let snapshot = self.fetch_snapshot(ctx)?;
        let (variant, policy) = self.resolve(ctx);
        let pipeline_ctx = pipeline_context(ctx);
        let input = ValidationInput {
            request: &request.tender,
            snapshot: &snapshot,
            ctx: &pipeline_ctx,
            auctions: &policy,
            variant,
        };
        validate(&input)?;
        info!(variant = variant.as_str(), auction_required = policy.required, "check passed");
        Ok(CheckOutcome {
            auction_required: policy.required,
            variant,
        })
    }

    /// Validate, mint permanent identifiers and produce the contract notice.
    ///
    /// No identifiers are consumed when validation fails; either the full
    /// notice is produced or an error is returned with nothing minted.
    #[instrument(skip_all, fields(cpid = %ctx.cpid))]
    pub fn create(
        &mut self,
        ctx: &OperationContext,
        request: &ChangeRequest,
    ) -> Result<ContractNotice, ServiceError> {
        let snapshot = self.fetch_snapshot(ctx)?;
        let (variant, policy) = self.resolve(ctx);
        let pipeline_ctx = pipeline_context(ctx);
        let input = ValidationInput {
            request: &request.tender,
            snapshot: &snapshot,
            ctx: &pipeline_ctx,
            auctions: &policy,
            variant,
        };
        validate(&input)?;

        let correspondence = IdCorrespondence::build(&request.tender, &mut self.generator);
        let tender_id = self.generator.next_tender_id();
        let ocid = self.generator.next_ocid(&ctx.cpid, ctx.stage);
        let tender = transform(&request.tender, &snapshot, &correspondence, tender_id);
        info!(
            ocid = %ocid,
            lots = correspondence.lot_count(),
            items = correspondence.item_count(),
            "contract notice produced"
        );
        Ok(ContractNotice { ocid, tender })
    }

    fn fetch_snapshot(&self, ctx: &OperationContext) -> Result<TenderSnapshot, ServiceError> {
        self.store
            .get(&ctx.cpid, ctx.prev_stage)?
            .ok_or(ServiceError::NotFound)
    }

    fn resolve(&self, ctx: &OperationContext) -> (Variant, AuctionPolicy) {
        let variant = Variant::resolve(ctx.procurement_method);
        let policy = AuctionPolicy {
            required: self
                .rules
                .is_auction_required(&ctx.country, ctx.procurement_method, variant),
            minimum_ratio: self
                .rules
                .auction_minimum_ratio(&ctx.country, ctx.procurement_method),
        };
        (variant, policy)
    }
}

fn pipeline_context(ctx: &OperationContext) -> PipelineContext {
    PipelineContext {
        cpid: ctx.cpid.clone(),
        owner: ctx.owner.clone(),
        token: ctx.token.clone(),
        country: ctx.country.clone(),
        procurement_method: ctx.procurement_method,
        start_date: ctx.start_date,
    }
}
