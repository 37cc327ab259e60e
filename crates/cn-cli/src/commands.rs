//! Command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use cn_model::request::ChangeRequest;
use cn_model::{Cpid, ProcurementMethod};
use cn_service::{
    CheckOutcome, NoticeService, OperationContext, Stage, StaticRuleLookup, UuidGenerator,
};

use crate::cli::{CreateArgs, OperationArgs};
use crate::store::DirStore;
use crate::summary::print_check_outcome;

/// Wire shape of the `--context` file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContextFile {
    cpid: Cpid,
    prev_stage: Stage,
    stage: Stage,
    owner: String,
    token: String,
    country: String,
    procurement_method: ProcurementMethod,
    #[serde(default)]
    start_date: Option<DateTime<Utc>>,
}

impl ContextFile {
    fn into_context(self) -> OperationContext {
        OperationContext {
            cpid: self.cpid,
            prev_stage: self.prev_stage,
            stage: self.stage,
            owner: self.owner,
            token: self.token,
            country: self.country,
            procurement_method: self.procurement_method,
            start_date: self.start_date.unwrap_or_else(Utc::now),
        }
    }
}

pub fn run_check(args: &OperationArgs) -> Result<CheckOutcome> {
    let (service, ctx, request) = build_service(args)?;
    let outcome = service
        .check(&ctx, &request)
        .map_err(|error| anyhow::anyhow!("{} ({})", error, error.code()))?;
    print_check_outcome(&outcome);
    Ok(outcome)
}

pub fn run_create(args: &CreateArgs) -> Result<()> {
    let (mut service, ctx, request) = build_service(&args.operation)?;
    let notice = service
        .create(&ctx, &request)
        .map_err(|error| anyhow::anyhow!("{} ({})", error, error.code()))?;
    let rendered = serde_json::to_string_pretty(&notice).context("serialize notice")?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "notice written");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

type CliService = NoticeService<DirStore, UuidGenerator, StaticRuleLookup>;

fn build_service(args: &OperationArgs) -> Result<(CliService, OperationContext, ChangeRequest)> {
    let context: ContextFile = read_json(&args.context)?;
    let request: ChangeRequest = read_json(&args.request)?;
    let rules = match &args.rules {
        Some(path) => read_json(path)?,
        None => StaticRuleLookup::permissive(),
    };
    let service = NoticeService::new(
        DirStore::new(args.store.clone()),
        UuidGenerator::new(),
        rules,
    );
    Ok((service, context.into_context(), request))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))
}
