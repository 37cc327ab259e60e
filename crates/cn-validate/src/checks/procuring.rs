//! Procuring-entity sub-rules.
//!
//! Only evaluated when the request supplies a procuring entity; a request
//! that omits it gets the snapshot's copy during transformation instead.

use std::collections::BTreeSet;

use cn_model::{DocumentType, Person, ProcuringEntity, RuleViolation};

use crate::context::ValidationInput;

pub fn entity_rules(input: &ValidationInput<'_>) -> Result<(), RuleViolation> {
    let Some(entity) = &input.request.procuring_entity else {
        return Ok(());
    };

    let snapshot_entity = input.snapshot.tender.procuring_entity.as_ref();
    if snapshot_entity.is_none_or(|prior| prior.id != entity.id) {
        return Err(RuleViolation::InvalidProcuringEntity);
    }

    persons_present_and_unique(entity)?;
    for person in &entity.persons {
        business_functions(input, person)?;
    }
    Ok(())
}

fn persons_present_and_unique(entity: &ProcuringEntity) -> Result<(), RuleViolation> {
    if entity.persons.is_empty() {
        return Err(RuleViolation::InvalidProcuringEntity);
    }
    let mut seen = BTreeSet::new();
    for person in &entity.persons {
        if !seen.insert(person.identity_key()) {
            return Err(RuleViolation::InvalidProcuringEntity);
        }
    }
    Ok(())
}

fn business_functions(
    input: &ValidationInput<'_>,
    person: &Person,
) -> Result<(), RuleViolation> {
    if person.business_functions.is_empty() {
        return Err(RuleViolation::InvalidProcuringEntity);
    }
    let mut function_ids = BTreeSet::new();
    for function in &person.business_functions {
        if !function_ids.insert(&function.id) {
            return Err(RuleViolation::InvalidProcuringEntity);
        }
        if function.period.start_date < input.ctx.start_date {
            return Err(RuleViolation::InvalidProcuringEntity);
        }
        function_documents(function)?;
    }
    Ok(())
}

fn function_documents(
    function: &cn_model::BusinessFunction,
) -> Result<(), RuleViolation> {
    if function.documents.is_empty() {
        return Err(RuleViolation::EmptyDocs);
    }
    let mut document_ids = BTreeSet::new();
    for document in &function.documents {
        if !document_ids.insert(&document.id) {
            return Err(RuleViolation::InvalidDocsId);
        }
        if document.document_type != DocumentType::RegulatoryDocument {
            return Err(RuleViolation::InvalidProcuringEntity);
        }
    }
    Ok(())
}
