//! Fixtures shared by the transformation tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use cn_model::request::RequestTender;
use cn_model::snapshot::{Budget, BudgetBreakdown, SnapshotTender, TenderSnapshot};
use cn_model::tender::{Classification, Document, Item, Lot};
use cn_model::{
    AuctionDetail, AuctionId, AuctionModality, Criterion, CriterionRelatesTo, Currency,
    DocumentId, DocumentType, ElectronicAuctions, ItemId, LotId, LotStatus, LotStatusDetails,
    Money, Period, TenderStatus, TenderStatusDetails,
};
use cn_transform::IdMint;

/// Mints "101", "102", ... for lots, "111", ... for items, "121", ... for
/// auctions, and counts every call.
#[derive(Debug, Default)]
pub struct SequentialMint {
    pub lot_calls: usize,
    pub item_calls: usize,
    pub auction_calls: usize,
}

impl IdMint for SequentialMint {
    fn next_lot_id(&mut self) -> LotId {
        self.lot_calls += 1;
        mint(100 + self.lot_calls, LotId::new)
    }

    fn next_item_id(&mut self) -> ItemId {
        self.item_calls += 1;
        mint(110 + self.item_calls, ItemId::new)
    }

    fn next_auction_id(&mut self) -> AuctionId {
        self.auction_calls += 1;
        mint(120 + self.auction_calls, AuctionId::new)
    }
}

fn mint<T, E>(serial: usize, construct: impl Fn(String) -> Result<T, E>) -> T
where
    E: std::fmt::Debug,
{
    construct(serial.to_string()).expect("minted id is non-blank")
}

pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().expect("date")
}

pub fn eur(amount: i64) -> Money {
    Money::new(Decimal::from(amount), Currency::new("EUR").expect("currency"))
}

pub fn lot(id: &str, amount: i64) -> Lot {
    Lot {
        id: LotId::new(id).expect("lot id"),
        title: format!("Lot {id}"),
        description: None,
        value: eur(amount),
        contract_period: Period::new(date(2026, 3, 1), date(2026, 6, 1)),
        place_of_performance: None,
        // Deliberately wrong; the rewrite must force active/empty.
        status: Some(LotStatus::Planning),
        status_details: Some(LotStatusDetails::Awarded),
    }
}

pub fn item(id: &str, related_lot: &str) -> Item {
    Item {
        id: ItemId::new(id).expect("item id"),
        description: None,
        classification: None,
        additional_classifications: Vec::new(),
        quantity: Decimal::from(10),
        unit: None,
        related_lot: LotId::new(related_lot).expect("lot id"),
    }
}

pub fn document(id: &str, related_lots: &[&str]) -> Document {
    Document {
        id: DocumentId::new(id).expect("document id"),
        document_type: DocumentType::BiddingDocuments,
        title: None,
        description: None,
        related_lots: related_lots
            .iter()
            .map(|raw| LotId::new(*raw).expect("lot id"))
            .collect(),
    }
}

pub fn auction(id: &str, related_lot: &str) -> AuctionDetail {
    AuctionDetail {
        id: AuctionId::new(id).expect("auction id"),
        related_lot: LotId::new(related_lot).expect("lot id"),
        auction_period: None,
        electronic_auction_modalities: vec![AuctionModality {
            eligible_minimum_difference: eur(50),
        }],
    }
}

pub fn criterion(id: &str, relates_to: CriterionRelatesTo, related_item: &str) -> Criterion {
    Criterion {
        id: id.to_string(),
        title: format!("Criterion {id}"),
        description: None,
        relates_to: Some(relates_to),
        related_item: Some(related_item.to_string()),
        requirement_groups: Vec::new(),
    }
}

pub fn classification(id: &str) -> Classification {
    Classification {
        scheme: "CPV".to_string(),
        id: id.to_string(),
        description: None,
    }
}

pub fn snapshot() -> TenderSnapshot {
    TenderSnapshot {
        owner: "owner-1".to_string(),
        token: "token-1".to_string(),
        budget: Budget {
            amount: eur(1000),
            breakdowns: vec![BudgetBreakdown {
                id: "bb-1".to_string(),
                period: Period::new(date(2026, 1, 1), date(2026, 1, 31)),
                amount: eur(1000),
            }],
        },
        tender: SnapshotTender {
            id: "prior-tender-1".to_string(),
            status: TenderStatus::Planning,
            status_details: TenderStatusDetails::Planning,
            title: "Prior notice".to_string(),
            description: Some("Prior description".to_string()),
            classification: Some(classification("45200000-9")),
            procuring_entity: None,
            tender_period: None,
            lots: Vec::new(),
            items: Vec::new(),
            documents: Vec::new(),
            criteria: Vec::new(),
            conversions: Vec::new(),
            electronic_auctions: None,
        },
    }
}

/// Two lots, two items, one document, criteria into both id spaces, two
/// auctions. Everything cross-referenced through temporary ids.
pub fn request() -> RequestTender {
    RequestTender {
        title: Some("Contract notice".to_string()),
        description: None,
        tender_period: Period::new(date(2026, 2, 1), date(2026, 2, 20)),
        procurement_method_modalities: vec!["electronicAuction".to_string()],
        procuring_entity: None,
        lots: vec![lot("tmp-lot-1", 600), lot("tmp-lot-2", 400)],
        items: vec![item("tmp-item-1", "tmp-lot-1"), item("tmp-item-2", "tmp-lot-2")],
        documents: vec![document("doc-1", &["tmp-lot-1", "tmp-lot-2"])],
        criteria: vec![
            criterion("cr-1", CriterionRelatesTo::Lot, "tmp-lot-1"),
            criterion("cr-2", CriterionRelatesTo::Item, "tmp-item-2"),
            criterion("cr-3", CriterionRelatesTo::Tenderer, "anything"),
        ],
        conversions: Vec::new(),
        electronic_auctions: Some(ElectronicAuctions {
            details: vec![
                auction("tmp-auction-1", "tmp-lot-1"),
                auction("tmp-auction-2", "tmp-lot-2"),
            ],
        }),
    }
}
