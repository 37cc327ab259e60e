//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cn",
    version,
    about = "PN-to-CN tender document pipeline",
    long_about = "Validate a contract-notice change request against a stored \
                  prior/planning notice and produce the derived contract \
                  notice with permanent identifiers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate a change request without producing anything.
    Check(OperationArgs),

    /// Validate and produce the contract notice.
    Create(CreateArgs),
}

#[derive(Parser)]
pub struct OperationArgs {
    /// Directory holding one JSON snapshot per `<cpid>-<stage>.json`.
    #[arg(long = "store", value_name = "DIR")]
    pub store: PathBuf,

    /// Operation context JSON (cpid, stages, owner, token, country, method).
    #[arg(long = "context", value_name = "FILE")]
    pub context: PathBuf,

    /// Change request JSON.
    #[arg(long = "request", value_name = "FILE")]
    pub request: PathBuf,

    /// Rule-lookup configuration JSON; permissive defaults when omitted.
    #[arg(long = "rules", value_name = "FILE")]
    pub rules: Option<PathBuf>,
}

#[derive(Parser)]
pub struct CreateArgs {
    #[command(flatten)]
    pub operation: OperationArgs,

    /// Write the produced notice here instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
