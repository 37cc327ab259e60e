//! File-backed prior-document store: one JSON snapshot per
//! `<cpid>-<stage>.json` in the store directory.

use std::path::PathBuf;

use cn_model::snapshot::TenderSnapshot;
use cn_model::Cpid;
use cn_service::{NoticeStore, Stage, StoreError};

#[derive(Debug)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl NoticeStore for DirStore {
    fn get(&self, cpid: &Cpid, stage: Stage) -> Result<Option<TenderSnapshot>, StoreError> {
        let path = self.dir.join(format!("{cpid}-{}.json", stage.as_str()));
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path)?;
        let snapshot = serde_json::from_str(&raw)
            .map_err(|error| StoreError::Corrupt(format!("{}: {error}", path.display())))?;
        Ok(Some(snapshot))
    }
}
