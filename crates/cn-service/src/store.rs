//! Prior-document storage boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cn_model::snapshot::TenderSnapshot;
use cn_model::Cpid;

use crate::error::StoreError;

/// Stage marker of a stored document within a contracting process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    Pn,
    Cn,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Pn => "PN",
            Stage::Cn => "CN",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fetches the stored snapshot for a process/stage pair. `Ok(None)` means no
/// document exists, which the service maps to `DATA_NOT_FOUND`.
pub trait NoticeStore {
    fn get(&self, cpid: &Cpid, stage: Stage) -> Result<Option<TenderSnapshot>, StoreError>;
}

/// Map-backed store for tests and the CLI's local mode.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: BTreeMap<(String, Stage), TenderSnapshot>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, cpid: &Cpid, stage: Stage, snapshot: TenderSnapshot) {
        self.documents
            .insert((cpid.as_str().to_string(), stage), snapshot);
    }
}

impl NoticeStore for InMemoryStore {
    fn get(&self, cpid: &Cpid, stage: Stage) -> Result<Option<TenderSnapshot>, StoreError> {
        Ok(self
            .documents
            .get(&(cpid.as_str().to_string(), stage))
            .cloned())
    }
}
