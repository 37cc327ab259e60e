//! Temporary-to-permanent identifier correspondence.

use std::collections::BTreeMap;

use cn_model::request::RequestTender;
use cn_model::{AuctionId, ItemId, LotId};

/// Mints fresh permanent identifiers. Every call must return a value never
/// returned before, within or across invocations.
pub trait IdMint {
    fn next_lot_id(&mut self) -> LotId;
    fn next_item_id(&mut self) -> ItemId;
    fn next_auction_id(&mut self) -> AuctionId;
}

/// Per-kind mapping from temporary request ids to freshly minted permanent
/// ids.
///
/// Bijective on the distinct temporary ids declared in the request: the
/// number of mint calls per kind equals the number of distinct declared ids
/// of that kind, independent of how many places reference each id.
#[derive(Debug, Default, Clone)]
pub struct IdCorrespondence {
    lots: BTreeMap<String, LotId>,
    items: BTreeMap<String, ItemId>,
    auctions: BTreeMap<String, AuctionId>,
}

impl IdCorrespondence {
    /// Walk the request's collections in declaration order and mint one
    /// permanent id per distinct temporary id, in first-appearance order.
    pub fn build(request: &RequestTender, mint: &mut dyn IdMint) -> Self {
        let mut correspondence = Self::default();
        for lot in &request.lots {
            correspondence
                .lots
                .entry(lot.id.as_str().to_string())
                .or_insert_with(|| mint.next_lot_id());
        }
        for item in &request.items {
            correspondence
                .items
                .entry(item.id.as_str().to_string())
                .or_insert_with(|| mint.next_item_id());
        }
        for detail in request.auction_details() {
            correspondence
                .auctions
                .entry(detail.id.as_str().to_string())
                .or_insert_with(|| mint.next_auction_id());
        }
        correspondence
    }

    pub fn lot(&self, temporary: &LotId) -> Option<&LotId> {
        self.lots.get(temporary.as_str())
    }

    pub fn item(&self, temporary: &ItemId) -> Option<&ItemId> {
        self.items.get(temporary.as_str())
    }

    pub fn auction(&self, temporary: &AuctionId) -> Option<&AuctionId> {
        self.auctions.get(temporary.as_str())
    }

    /// Lookup in the lot id space by raw string, for criterion references.
    pub fn lot_by_str(&self, temporary: &str) -> Option<&LotId> {
        self.lots.get(temporary)
    }

    /// Lookup in the item id space by raw string, for criterion references.
    pub fn item_by_str(&self, temporary: &str) -> Option<&ItemId> {
        self.items.get(temporary)
    }

    pub fn lot_count(&self) -> usize {
        self.lots.len()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn auction_count(&self) -> usize {
        self.auctions.len()
    }
}
