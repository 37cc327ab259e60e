//! The request-to-notice rewrite.
//!
//! Runs only after validation has passed, so every cross-reference resolves.
//! The engine stays total anyway: a reference without a correspondence entry
//! is carried through unchanged rather than panicking.

use tracing::{debug, instrument};

use cn_model::notice::{NoticeLot, NoticeTender};
use cn_model::request::RequestTender;
use cn_model::snapshot::TenderSnapshot;
use cn_model::tender::{Document, Item};
use cn_model::{
    AuctionDetail, Criterion, CriterionRelatesTo, ElectronicAuctions, LotStatus,
    LotStatusDetails, TenderStatus, TenderStatusDetails,
};

use crate::correspondence::IdCorrespondence;

/// Rewrite the request into the contract-notice tender shape.
///
/// Substitutes permanent ids everywhere a temporary id appeared, forces
/// every lot to `active`/`empty`, and copies substructures the request
/// omitted from the snapshot. A structural copy of the request otherwise:
/// no further business defaults are applied.
#[instrument(skip_all, fields(lots = request.lots.len(), items = request.items.len()))]
pub fn transform(
    request: &RequestTender,
    snapshot: &TenderSnapshot,
    ids: &IdCorrespondence,
    tender_id: String,
) -> NoticeTender {
    let lots = request.lots.iter().map(|lot| rewrite_lot(lot, ids)).collect();
    let items = request
        .items
        .iter()
        .map(|item| rewrite_item(item, snapshot, ids))
        .collect();
    let documents = request
        .documents
        .iter()
        .map(|document| rewrite_document(document, ids))
        .collect();
    let criteria = request
        .criteria
        .iter()
        .map(|criterion| rewrite_criterion(criterion, ids))
        .collect();
    let electronic_auctions = request
        .electronic_auctions
        .as_ref()
        .map(|auctions| ElectronicAuctions {
            details: auctions
                .details
                .iter()
                .map(|detail| rewrite_auction(detail, ids))
                .collect(),
        });

    let procuring_entity = request
        .procuring_entity
        .clone()
        .or_else(|| snapshot.tender.procuring_entity.clone());

    debug!(tender_id = %tender_id, "request rewritten");
    NoticeTender {
        id: tender_id,
        status: TenderStatus::Active,
        status_details: TenderStatusDetails::Empty,
        title: request
            .title
            .clone()
            .or_else(|| Some(snapshot.tender.title.clone())),
        description: request
            .description
            .clone()
            .or_else(|| snapshot.tender.description.clone()),
        classification: snapshot.tender.classification.clone(),
        tender_period: request.tender_period,
        procurement_method_modalities: request.procurement_method_modalities.clone(),
        procuring_entity,
        lots,
        items,
        documents,
        criteria,
        // Conversions reference requirement ids only; structural copy.
        conversions: request.conversions.clone(),
        electronic_auctions,
    }
}

fn rewrite_lot(lot: &cn_model::tender::Lot, ids: &IdCorrespondence) -> NoticeLot {
    NoticeLot {
        id: ids.lot(&lot.id).cloned().unwrap_or_else(|| lot.id.clone()),
        title: lot.title.clone(),
        description: lot.description.clone(),
        value: lot.value.clone(),
        contract_period: lot.contract_period,
        place_of_performance: lot.place_of_performance.clone(),
        status: LotStatus::Active,
        status_details: LotStatusDetails::Empty,
    }
}

fn rewrite_item(item: &Item, snapshot: &TenderSnapshot, ids: &IdCorrespondence) -> Item {
    let classification = item.classification.clone().or_else(|| {
        // When the prior document already carries items, a request item may
        // omit its classification and inherit the prior item's one (matched
        // by id, which the items-present flow reuses).
        snapshot
            .tender
            .items
            .iter()
            .find(|prior| prior.id == item.id)
            .and_then(|prior| prior.classification.clone())
    });
    Item {
        id: ids.item(&item.id).cloned().unwrap_or_else(|| item.id.clone()),
        description: item.description.clone(),
        classification,
        additional_classifications: item.additional_classifications.clone(),
        quantity: item.quantity,
        unit: item.unit.clone(),
        related_lot: ids
            .lot(&item.related_lot)
            .cloned()
            .unwrap_or_else(|| item.related_lot.clone()),
    }
}

fn rewrite_document(document: &Document, ids: &IdCorrespondence) -> Document {
    Document {
        related_lots: document
            .related_lots
            .iter()
            .map(|lot_id| ids.lot(lot_id).cloned().unwrap_or_else(|| lot_id.clone()))
            .collect(),
        ..document.clone()
    }
}

/// `relatedItem` lives in the lot or item id space depending on the
/// `relatesTo` discriminator; `tenderer`/`tender` criteria carry no
/// reference to rewrite.
fn rewrite_criterion(criterion: &Criterion, ids: &IdCorrespondence) -> Criterion {
    let related_item = match (criterion.relates_to, &criterion.related_item) {
        (Some(CriterionRelatesTo::Lot), Some(reference)) => Some(
            ids.lot_by_str(reference)
                .map(|id| id.as_str().to_string())
                .unwrap_or_else(|| reference.clone()),
        ),
        (Some(CriterionRelatesTo::Item), Some(reference)) => Some(
            ids.item_by_str(reference)
                .map(|id| id.as_str().to_string())
                .unwrap_or_else(|| reference.clone()),
        ),
        (_, reference) => reference.clone(),
    };
    Criterion {
        related_item,
        ..criterion.clone()
    }
}

fn rewrite_auction(detail: &AuctionDetail, ids: &IdCorrespondence) -> AuctionDetail {
    AuctionDetail {
        id: ids
            .auction(&detail.id)
            .cloned()
            .unwrap_or_else(|| detail.id.clone()),
        related_lot: ids
            .lot(&detail.related_lot)
            .cloned()
            .unwrap_or_else(|| detail.related_lot.clone()),
        auction_period: detail.auction_period,
        electronic_auction_modalities: detail.electronic_auction_modalities.clone(),
    }
}
