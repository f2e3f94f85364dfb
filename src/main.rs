use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use care_nav::config::AppConfig;
use care_nav::error::AppError;
use care_nav::telemetry;
use care_nav::workflows::screening::{
    screening_router, BatchScreener, IntakeGuard, ProfileId, ProfileRecord, ProfileRepository,
    ReferralAlert, ReferralError, ReferralPublisher, RepositoryError, ScreenedProfile,
    ScreeningService,
};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Caregiver Scheme Navigator",
    about = "Run the caregiver support scheme screening service from the command line",
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
    /// Screening utilities for intake partners
    Screening {
        #[command(subcommand)]
        command: ScreeningCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum ScreeningCommand {
    /// Screen a CSV export of caregiver profiles against every scheme
    Batch(BatchArgs),
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// Path to the profile CSV export
    #[arg(long)]
    input: PathBuf,
    /// Assessment date for age resolution (defaults to today)
    #[arg(long, value_parser = parse_date)]
    assessed_on: Option<NaiveDate>,
    /// Include the per-criterion reason listing in the output
    #[arg(long)]
    list_reasons: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Screening {
            command: ScreeningCommand::Batch(args),
        } => run_batch_screening(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let repository = Arc::new(InMemoryProfileRepository::default());
    let referrals = Arc::new(LoggingReferralPublisher);
    let service = Arc::new(ScreeningService::with_guard(
        IntakeGuard::from_config(&config.screening),
        repository,
        referrals,
    ));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(screening_router(service))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "caregiver scheme screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_batch_screening(args: BatchArgs) -> Result<(), AppError> {
    let BatchArgs {
        input,
        assessed_on,
        list_reasons,
    } = args;

    let config = AppConfig::load()?;
    let assessed_on = assessed_on.unwrap_or_else(|| Local::now().date_naive());

    let screener = BatchScreener::with_guard(IntakeGuard::from_config(&config.screening));
    let screened = screener.from_path(input, assessed_on)?;

    render_batch_report(&screened, assessed_on, list_reasons);
    Ok(())
}

fn render_batch_report(screened: &[ScreenedProfile], assessed_on: NaiveDate, list_reasons: bool) {
    println!("Scheme screening report (assessed {assessed_on})");
    println!("Profiles screened: {}", screened.len());

    for entry in screened {
        println!("\n{}", entry.reference);
        for determination in &entry.determinations {
            println!("- {}", determination.summary());

            if list_reasons {
                for reason in &determination.eligible_reasons {
                    println!("    met: {reason}");
                }
                for reason in &determination.ineligible_reasons {
                    println!("    unmet: {reason}");
                }
                for reason in &determination.verification_required {
                    println!("    verify: {reason}");
                }
                for note in &determination.notes {
                    println!("    note: {note}");
                }
            }
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Default, Clone)]
struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<ProfileId, ProfileRecord>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn insert(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.profile_id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: ProfileRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.profile_id) {
            guard.insert(record.profile_id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ProfileId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Referral hook for single-node deployments: follow-ups land in the logs
/// until an external queue is wired in.
struct LoggingReferralPublisher;

impl ReferralPublisher for LoggingReferralPublisher {
    fn publish(&self, referral: ReferralAlert) -> Result<(), ReferralError> {
        info!(
            template = %referral.template,
            profile_id = %referral.profile_id.0,
            details = ?referral.details,
            "screening referral raised"
        );
        Ok(())
    }
}
