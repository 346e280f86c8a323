use crate::infra::parse_date;
use crate::render::{render_report, render_validation};
use crate::server;
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use clinical_compliance::compliance::{validate_for_signing, ComplianceReport, SnapshotImporter};
use clinical_compliance::config::AppConfig;
use clinical_compliance::error::AppError;
use clinical_compliance::telemetry::{self, LogOutput};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "Clinical Compliance",
    about = "Evaluate session documentation compliance from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate a JSON snapshot and print the prioritized violations and score
    Evaluate(EvaluateArgs),
    /// Run the pre-signing validator against a single JSON session record
    Validate(ValidateArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Snapshot file with sessions, progress, goals and caseloads
    #[arg(long)]
    pub(crate) snapshot: PathBuf,
    /// Evaluation date (YYYY-MM-DD). Defaults to COMPLIANCE_AS_OF, then today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) as_of: Option<NaiveDate>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Session record file to validate
    #[arg(long)]
    pub(crate) session: PathBuf,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Evaluate(args) => run_evaluate(args),
        Command::Validate(args) => run_validate(args),
    }
}

/// Batch commands keep stdout for their report, so logs go to stderr.
fn batch_config() -> Result<AppConfig, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry, LogOutput::Stderr)?;
    Ok(config)
}

fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let config = batch_config()?;
    let EvaluateArgs {
        snapshot,
        as_of,
        json,
    } = args;

    let as_of = config.compliance.resolve_as_of(as_of, Local::now().date_naive());
    let snapshot = SnapshotImporter::snapshot_from_path(&snapshot)?;
    let report = ComplianceReport::for_snapshot(&snapshot, as_of);
    info!(
        %as_of,
        sessions = snapshot.sessions.len(),
        violations = report.violations.len(),
        score = report.score.score,
        "snapshot evaluated"
    );

    if json {
        let rendered = serde_json::to_string_pretty(&report.to_view())
            .map_err(|err| AppError::Io(err.into()))?;
        println!("{rendered}");
    } else {
        print!("{}", render_report(&report));
    }

    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    batch_config()?;
    let session = SnapshotImporter::session_from_path(&args.session)?;
    let validation = validate_for_signing(&session);
    print!("{}", render_validation(&session, &validation));

    if !validation.valid {
        warn!(
            session_id = %session.id,
            errors = validation.errors.len(),
            "session not ready to sign"
        );
        std::process::exit(2);
    }
    Ok(())
}
