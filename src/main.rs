//! Command-line entry point for the Overtime Engine.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use overtime_engine::api::{AppState, create_router};
use overtime_engine::calculation::{OvertimeAggregator, OvertimePolicy};
use overtime_engine::clock::{Clock, FixedClock, SystemClock};
use overtime_engine::config::ConfigLoader;
use overtime_engine::error::EngineResult;
use overtime_engine::models::OvertimeSummary;
use overtime_engine::presentation::{SignStyle, WriterPresenter};
use overtime_engine::service::OvertimeService;
use overtime_engine::source::{
    AttendanceSource, HttpAttendanceSource, StaticSource, load_records_file,
};

/// Period id used for records read from a file.
const OFFLINE_PERIOD: u64 = 0;

#[derive(Parser)]
#[command(name = "overtime", version, about = "Running overtime balance from attendance records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the overtime balance for a reporting period.
    Report(ReportArgs),
    /// Serve the HTTP API.
    Serve(ServeArgs),
}

#[derive(Args)]
struct ReportArgs {
    /// Configuration file.
    #[arg(long, env = "OVERTIME_CONFIG", default_value = "./config/overtime.yaml")]
    config: PathBuf,
    /// Reporting period; the most recent period when omitted.
    #[arg(long)]
    period: Option<u64>,
    /// Read records from a JSON file instead of the attendance service.
    #[arg(long)]
    records: Option<PathBuf>,
    /// Evaluate as of this RFC 3339 instant instead of the current time.
    #[arg(long, value_parser = parse_instant)]
    now: Option<DateTime<Utc>>,
    /// Prefix positive balances with `+`.
    #[arg(long)]
    signed: bool,
    /// Print the full summary as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ServeArgs {
    /// Configuration file; only the policy section is used.
    #[arg(long, env = "OVERTIME_CONFIG")]
    config: Option<PathBuf>,
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: String,
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 instant: {}", e))
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Report(args) => report(args).await,
        Command::Serve(args) => serve(args).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "overtime failed");
            ExitCode::FAILURE
        }
    }
}

async fn report(args: ReportArgs) -> EngineResult<()> {
    let clock: Box<dyn Clock> = match args.now {
        Some(instant) => Box::new(FixedClock::new(instant)),
        None => Box::new(SystemClock),
    };
    let style = if args.signed {
        SignStyle::Always
    } else {
        SignStyle::NegativeOnly
    };

    let summary = match &args.records {
        Some(path) => {
            // Offline: the config file is optional and only supplies the policy
            let policy = if args.config.exists() {
                *ConfigLoader::load(&args.config)?.policy()
            } else {
                OvertimePolicy::default()
            };
            let source = StaticSource::new().with_period(OFFLINE_PERIOD, load_records_file(path)?);
            run_report(source, clock, policy, Some(OFFLINE_PERIOD), style, args.json).await?
        }
        None => {
            let loader = ConfigLoader::load(&args.config)?;
            let source = HttpAttendanceSource::new(loader.source());
            run_report(source, clock, *loader.policy(), args.period, style, args.json).await?
        }
    };

    if summary.is_none() {
        info!("No overtime figure to show");
    }
    Ok(())
}

async fn run_report<S: AttendanceSource>(
    source: S,
    clock: Box<dyn Clock>,
    policy: OvertimePolicy,
    period: Option<u64>,
    style: SignStyle,
    json: bool,
) -> EngineResult<Option<OvertimeSummary>> {
    let service = OvertimeService::new(source, clock, OvertimeAggregator::new(policy));

    if json {
        let summary = service.overtime(period).await?;
        if let Some(summary) = &summary {
            let rendered = serde_json::to_string_pretty(summary)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            println!("{}", rendered);
        }
        return Ok(summary);
    }

    let mut presenter = WriterPresenter::new(io::stdout().lock());
    service.report(period, &mut presenter, style).await
}

async fn serve(args: ServeArgs) -> EngineResult<()> {
    let policy = match &args.config {
        Some(path) => *ConfigLoader::load(path)?.policy(),
        None => OvertimePolicy::default(),
    };

    let app = create_router(AppState::new(policy));
    let listener = tokio::net::TcpListener::bind(&args.addr).await?;
    info!("Listening on http://{}", args.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
