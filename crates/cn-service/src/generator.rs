//! Permanent identifier generation.

use uuid::Uuid;

use cn_model::{AuctionId, Cpid, ItemId, LotId, Ocid};
use cn_transform::IdMint;

use crate::store::Stage;

/// Mints every identifier kind the pipeline needs. Extends [`IdMint`] with
/// the stage-level identifiers only the service assembles.
pub trait IdGenerator: IdMint {
    fn next_tender_id(&mut self) -> String;
    fn next_ocid(&mut self, cpid: &Cpid, stage: Stage) -> Ocid;
}

/// Production generator: random v4 UUIDs, globally unique across calls and
/// invocations.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }

    fn fresh() -> String {
        Uuid::new_v4().to_string()
    }
}

impl IdMint for UuidGenerator {
    fn next_lot_id(&mut self) -> LotId {
        // A UUID string is never blank, so the constructor cannot fail.
        LotId::new(Self::fresh()).unwrap_or_else(|_| unreachable!())
    }

    fn next_item_id(&mut self) -> ItemId {
        ItemId::new(Self::fresh()).unwrap_or_else(|_| unreachable!())
    }

    fn next_auction_id(&mut self) -> AuctionId {
        AuctionId::new(Self::fresh()).unwrap_or_else(|_| unreachable!())
    }
}

impl IdGenerator for UuidGenerator {
    fn next_tender_id(&mut self) -> String {
        Self::fresh()
    }

    fn next_ocid(&mut self, cpid: &Cpid, stage: Stage) -> Ocid {
        Ocid::new(format!("{cpid}-{}-{}", stage.as_str(), Uuid::new_v4().simple()))
            .unwrap_or_else(|_| unreachable!())
    }
}
