//! End-to-end rewrite behavior: identifier substitution, forced statuses,
//! snapshot carry-over.

mod common;

use std::collections::BTreeSet;

use cn_model::{LotStatus, LotStatusDetails, TenderStatus, TenderStatusDetails};
use cn_transform::{transform, IdCorrespondence};

use common::{classification, item, request, snapshot, SequentialMint};

#[test]
fn lots_and_items_receive_sequential_permanent_ids() {
    let request = request();
    let mut mint = SequentialMint::default();
    let ids = IdCorrespondence::build(&request, &mut mint);

    let notice = transform(&request, &snapshot(), &ids, "tender-1".to_string());

    let lot_ids: Vec<_> = notice.lots.iter().map(|lot| lot.id.as_str()).collect();
    assert_eq!(lot_ids, ["101", "102"]);
    let item_ids: Vec<_> = notice.items.iter().map(|item| item.id.as_str()).collect();
    assert_eq!(item_ids, ["111", "112"]);
    assert_eq!(notice.items[0].related_lot.as_str(), "101");
    assert_eq!(notice.items[1].related_lot.as_str(), "102");
}

#[test]
fn auction_ids_and_related_lots_are_rewritten() {
    let request = request();
    let mut mint = SequentialMint::default();
    let ids = IdCorrespondence::build(&request, &mut mint);

    let notice = transform(&request, &snapshot(), &ids, "tender-1".to_string());

    let auctions = notice.electronic_auctions.expect("auction block survives");
    assert_eq!(auctions.details[0].id.as_str(), "121");
    assert_eq!(auctions.details[0].related_lot.as_str(), "101");
    assert_eq!(auctions.details[1].id.as_str(), "122");
    assert_eq!(auctions.details[1].related_lot.as_str(), "102");
}

#[test]
fn criterion_references_are_rewritten_per_id_space() {
    let request = request();
    let mut mint = SequentialMint::default();
    let ids = IdCorrespondence::build(&request, &mut mint);

    let notice = transform(&request, &snapshot(), &ids, "tender-1".to_string());

    assert_eq!(notice.criteria[0].related_item.as_deref(), Some("101"));
    assert_eq!(notice.criteria[1].related_item.as_deref(), Some("112"));
    // Tenderer criteria carry no lot/item reference; left as supplied.
    assert_eq!(notice.criteria[2].related_item.as_deref(), Some("anything"));
}

#[test]
fn document_related_lots_are_rewritten() {
    let request = request();
    let mut mint = SequentialMint::default();
    let ids = IdCorrespondence::build(&request, &mut mint);

    let notice = transform(&request, &snapshot(), &ids, "tender-1".to_string());

    let related: Vec<_> = notice.documents[0]
        .related_lots
        .iter()
        .map(|id| id.as_str())
        .collect();
    assert_eq!(related, ["101", "102"]);
}

#[test]
fn lot_statuses_are_forced_regardless_of_the_request() {
    // The fixture lots claim planning/awarded; the notice must not.
    let request = request();
    let mut mint = SequentialMint::default();
    let ids = IdCorrespondence::build(&request, &mut mint);

    let notice = transform(&request, &snapshot(), &ids, "tender-1".to_string());

    assert_eq!(notice.status, TenderStatus::Active);
    assert_eq!(notice.status_details, TenderStatusDetails::Empty);
    for lot in &notice.lots {
        assert_eq!(lot.status, LotStatus::Active);
        assert_eq!(lot.status_details, LotStatusDetails::Empty);
    }
}

#[test]
fn duplicate_references_mint_only_once() {
    let mut request = request();
    // Three items all pointing at the first lot.
    request.items = vec![
        item("tmp-item-1", "tmp-lot-1"),
        item("tmp-item-2", "tmp-lot-1"),
        item("tmp-item-3", "tmp-lot-1"),
    ];
    let mut mint = SequentialMint::default();
    let ids = IdCorrespondence::build(&request, &mut mint);

    assert_eq!(mint.lot_calls, 2);
    assert_eq!(mint.item_calls, 3);
    assert_eq!(mint.auction_calls, 2);
    assert_eq!(ids.lot_count(), 2);
    assert_eq!(ids.item_count(), 3);
    assert_eq!(ids.auction_count(), 2);
}

#[test]
fn every_output_reference_resolves_to_an_output_lot() {
    let request = request();
    let mut mint = SequentialMint::default();
    let ids = IdCorrespondence::build(&request, &mut mint);

    let notice = transform(&request, &snapshot(), &ids, "tender-1".to_string());

    let lot_ids: BTreeSet<_> = notice.lots.iter().map(|lot| lot.id.clone()).collect();
    for item in &notice.items {
        assert!(lot_ids.contains(&item.related_lot));
    }
    for document in &notice.documents {
        for related_lot in &document.related_lots {
            assert!(lot_ids.contains(related_lot));
        }
    }
    let auctions = notice.electronic_auctions.expect("auction block");
    for detail in &auctions.details {
        assert!(lot_ids.contains(&detail.related_lot));
    }
}

#[test]
fn omitted_fields_are_carried_over_from_the_snapshot() {
    let mut request = request();
    request.title = None;
    request.description = None;
    let mut mint = SequentialMint::default();
    let ids = IdCorrespondence::build(&request, &mut mint);

    let notice = transform(&request, &snapshot(), &ids, "tender-1".to_string());

    assert_eq!(notice.id, "tender-1");
    assert_eq!(notice.title.as_deref(), Some("Prior notice"));
    assert_eq!(notice.description.as_deref(), Some("Prior description"));
    assert_eq!(
        notice.classification.as_ref().map(|c| c.id.as_str()),
        Some("45200000-9")
    );
}

#[test]
fn items_inherit_classification_from_matching_snapshot_items() {
    let mut snapshot = snapshot();
    let mut prior = item("tmp-item-1", "prior-lot-1");
    prior.classification = Some(classification("30100000-0"));
    snapshot.tender.items = vec![prior];

    let request = request();
    let mut mint = SequentialMint::default();
    let ids = IdCorrespondence::build(&request, &mut mint);

    let notice = transform(&request, &snapshot, &ids, "tender-1".to_string());

    assert_eq!(
        notice.items[0].classification.as_ref().map(|c| c.id.as_str()),
        Some("30100000-0")
    );
    assert_eq!(notice.items[1].classification, None);
}
