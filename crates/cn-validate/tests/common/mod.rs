//! Fixture builders shared by the validation tests.
#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use cn_model::request::RequestTender;
use cn_model::snapshot::{Budget, BudgetBreakdown, SnapshotTender, TenderSnapshot};
use cn_model::tender::{Document, Item, Lot};
use cn_model::{
    AuctionDetail, AuctionModality, BusinessFunction, BusinessFunctionType, Cpid, Criterion,
    CriterionRelatesTo, Currency, DocumentId, DocumentType, ElectronicAuctions, ItemId, LotId,
    Money, Period, Person, PersonIdentifier, ProcurementMethod, ProcuringEntity,
    StartOnlyPeriod, TenderStatus, TenderStatusDetails,
};
use cn_validate::{AuctionPolicy, PipelineContext};

pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single().expect("date")
}

pub fn eur(amount: i64) -> Money {
    Money::new(Decimal::from(amount), Currency::new("EUR").expect("currency"))
}

pub fn lot_id(raw: &str) -> LotId {
    LotId::new(raw).expect("lot id")
}

pub fn item_id(raw: &str) -> ItemId {
    ItemId::new(raw).expect("item id")
}

pub fn lot(id: &str, amount: i64) -> Lot {
    Lot {
        id: lot_id(id),
        title: format!("Lot {id}"),
        description: None,
        value: eur(amount),
        // Strictly after the fixture breakdown period (ends 2026-01-31).
        contract_period: Period::new(date(2026, 3, 1), date(2026, 6, 1)),
        place_of_performance: None,
        status: None,
        status_details: None,
    }
}

pub fn item(id: &str, related_lot: &str) -> Item {
    Item {
        id: item_id(id),
        description: None,
        classification: None,
        additional_classifications: Vec::new(),
        quantity: Decimal::from(10),
        unit: None,
        related_lot: lot_id(related_lot),
    }
}

pub fn document(id: &str, related_lots: &[&str]) -> Document {
    Document {
        id: DocumentId::new(id).expect("document id"),
        document_type: DocumentType::BiddingDocuments,
        title: None,
        description: None,
        related_lots: related_lots.iter().map(|raw| lot_id(raw)).collect(),
    }
}

pub fn auction(id: &str, related_lot: &str, minimum: i64) -> AuctionDetail {
    AuctionDetail {
        id: cn_model::AuctionId::new(id).expect("auction id"),
        related_lot: lot_id(related_lot),
        auction_period: None,
        electronic_auction_modalities: vec![AuctionModality {
            eligible_minimum_difference: eur(minimum),
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

pub fn person(id: &str, function_id: &str) -> Person {
    Person {
        identifier: PersonIdentifier {
            scheme: "MD-IDNO".to_string(),
            id: id.to_string(),
            uri: None,
        },
        name: format!("Person {id}"),
        title: "officer".to_string(),
        business_functions: vec![business_function(function_id)],
    }
}

pub fn business_function(id: &str) -> BusinessFunction {
    BusinessFunction {
        id: id.to_string(),
        function_type: BusinessFunctionType::ProcurementOfficer,
        job_title: "Procurement officer".to_string(),
        period: StartOnlyPeriod {
            start_date: date(2026, 1, 15),
        },
        documents: vec![Document {
            id: DocumentId::new(format!("{id}-doc")).expect("document id"),
            document_type: DocumentType::RegulatoryDocument,
            title: None,
            description: None,
            related_lots: Vec::new(),
        }],
    }
}

pub fn procuring_entity(id: &str, persons: Vec<Person>) -> ProcuringEntity {
    ProcuringEntity {
        id: id.to_string(),
        name: "City hall".to_string(),
        identifier: None,
        address: None,
        persons,
    }
}

/// Items-absent prior notice: budget 1000 EUR, one breakdown through
/// January 2026, one prior document.
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
            description: None,
            classification: None,
            procuring_entity: Some(procuring_entity("pe-1", Vec::new())),
            tender_period: None,
            lots: Vec::new(),
            items: Vec::new(),
            documents: vec![document("doc-1", &[])],
            criteria: Vec::new(),
            conversions: Vec::new(),
            electronic_auctions: None,
        },
    }
}

/// A request that passes every OpenCn rule against [`snapshot`] with a
/// not-required auction policy.
pub fn valid_request() -> RequestTender {
    RequestTender {
        title: Some("Contract notice".to_string()),
        description: None,
        tender_period: Period::new(date(2026, 2, 1), date(2026, 2, 20)),
        procurement_method_modalities: Vec::new(),
        procuring_entity: None,
        lots: vec![lot("tmp-lot-1", 600), lot("tmp-lot-2", 400)],
        items: vec![item("tmp-item-1", "tmp-lot-1"), item("tmp-item-2", "tmp-lot-2")],
        documents: vec![document("doc-1", &["tmp-lot-1"])],
        criteria: Vec::new(),
        conversions: Vec::new(),
        electronic_auctions: None,
    }
}

pub fn context() -> PipelineContext {
    PipelineContext {
        cpid: Cpid::new("ocds-t1s2t3-MD-1").expect("cpid"),
        owner: "owner-1".to_string(),
        token: "token-1".to_string(),
        country: "MD".to_string(),
        procurement_method: ProcurementMethod::Open,
        start_date: date(2026, 1, 1),
    }
}

pub fn no_auction_policy() -> AuctionPolicy {
    AuctionPolicy {
        required: false,
        minimum_ratio: Decimal::new(1, 1),
    }
}

pub fn required_auction_policy() -> AuctionPolicy {
    AuctionPolicy {
        required: true,
        minimum_ratio: Decimal::new(1, 1),
    }
}

/// Auction block that covers both fixture lots within the 10% limit.
pub fn valid_auctions() -> ElectronicAuctions {
    ElectronicAuctions {
        details: vec![
            auction("tmp-auction-1", "tmp-lot-1", 50),
            auction("tmp-auction-2", "tmp-lot-2", 30),
        ],
    }
}
