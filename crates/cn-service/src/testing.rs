//! Deterministic generators for fixtures and tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use cn_model::{AuctionId, Cpid, ItemId, LotId, Ocid};
use cn_transform::IdMint;

use crate::generator::IdGenerator;
use crate::store::Stage;

/// Yields ids from fixed per-kind sequences; wraps never happen in practice
/// because fixtures stay small.
#[derive(Debug, Default)]
pub struct SequenceGenerator {
    lots: usize,
    items: usize,
    auctions: usize,
    tenders: usize,
}

impl SequenceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total mint calls across every id kind, for idempotence assertions.
    pub fn mint_calls(&self) -> usize {
        self.lots + self.items + self.auctions + self.tenders
    }
}

impl IdMint for SequenceGenerator {
    fn next_lot_id(&mut self) -> LotId {
        self.lots += 1;
        LotId::new(format!("{}", 100 + self.lots)).unwrap_or_else(|_| unreachable!())
    }

    fn next_item_id(&mut self) -> ItemId {
        self.items += 1;
        ItemId::new(format!("{}", 110 + self.items)).unwrap_or_else(|_| unreachable!())
    }

    fn next_auction_id(&mut self) -> AuctionId {
        self.auctions += 1;
        AuctionId::new(format!("{}", 120 + self.auctions)).unwrap_or_else(|_| unreachable!())
    }
}

impl IdGenerator for SequenceGenerator {
    fn next_tender_id(&mut self) -> String {
        self.tenders += 1;
        format!("tender-{}", self.tenders)
    }

    fn next_ocid(&mut self, cpid: &Cpid, stage: Stage) -> Ocid {
        Ocid::new(format!("{cpid}-{}-1", stage.as_str())).unwrap_or_else(|_| unreachable!())
    }
}

/// Counts every mint call; used to prove `check` touches the generator not
/// at all.
#[derive(Debug, Default)]
pub struct CountingGenerator {
    calls: AtomicUsize,
    inner: SequenceGenerator,
}

impl CountingGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl IdMint for CountingGenerator {
    fn next_lot_id(&mut self) -> LotId {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.next_lot_id()
    }

    fn next_item_id(&mut self) -> ItemId {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.next_item_id()
    }

    fn next_auction_id(&mut self) -> AuctionId {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.next_auction_id()
    }
}

impl IdGenerator for CountingGenerator {
    fn next_tender_id(&mut self) -> String {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.next_tender_id()
    }

    fn next_ocid(&mut self, cpid: &Cpid, stage: Stage) -> Ocid {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.next_ocid(cpid, stage)
    }
}
