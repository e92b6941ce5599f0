use axum::{Router, routing::get};
use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{WrapErr, ensure};
use shockdist_core::io::{load_csv, write_csv};
use shockdist_core::model::{Dataset, MarkerCatalog};
use shockdist_core::synthetic::{SyntheticConfig, generate};
use shockdist_core::{Baseline, BandwidthRule, EstimatorConfig};
use std::path::{Path, PathBuf};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod error;
mod handlers;
mod logging;
mod models;
mod routes;
mod state;
mod validation;

use state::AppState;

/// Largest evaluation grid the server will precompute
const MAX_GRID_POINTS: usize = 100_000;

/// Largest synthetic dataset the generator will write
const MAX_SYNTHETIC_RECORDS: usize = 10_000_000;

#[derive(Parser, Debug)]
#[command(name = "shockdist")]
#[command(about = "Income distribution shock explorer")]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Precompute the baseline and serve the HTTP API
    Serve(ServeArgs),
    /// Write a synthetic survey dataset as CSV
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// CSV file with income, weights and sector columns
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Seed for the synthetic dataset used when no CSV is given
    #[arg(long, default_value_t = 42)]
    synthetic_seed: u64,

    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    #[arg(short, long, default_value_t = 8050)]
    port: u16,

    /// Number of evaluation points on the density grid
    #[arg(long, default_value_t = shockdist_core::config::DEFAULT_GRID_POINTS)]
    grid_points: usize,

    /// Bandwidth rule (scott or silverman)
    #[arg(long, default_value = "scott")]
    bandwidth: BandwidthRule,

    /// JSON file overriding the reference marker catalog
    #[arg(long)]
    markers: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(short, long)]
    output: PathBuf,

    #[arg(long, default_value_t = 10_000)]
    records: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 800.0)]
    mean: f64,

    #[arg(long, default_value_t = 200.0)]
    std_dev: f64,

    #[arg(long, default_value_t = 3)]
    sectors: u32,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init_logging(&cli.log_level)?;

    match cli.command {
        Command::Serve(args) => serve(args).await,
        Command::Generate(args) => generate_dataset(args),
    }
}

async fn serve(args: ServeArgs) -> color_eyre::Result<()> {
    check_grid_points(args.grid_points)?;

    let catalog = match &args.markers {
        Some(path) => load_catalog(path)?,
        None => MarkerCatalog::default(),
    };

    let config = EstimatorConfig::default()
        .with_grid_points(args.grid_points)
        .with_bandwidth(args.bandwidth);
    let data = args.data.clone();
    let seed = args.synthetic_seed;

    let baseline = tokio::task::spawn_blocking(move || build_baseline(data.as_deref(), seed, &config))
        .await??;

    tracing::info!(
        records = baseline.dataset().len(),
        sectors = baseline.dataset().sectors().len(),
        bandwidth = baseline.bandwidth(),
        rule = baseline.rule().name(),
        "baseline ready"
    );

    let app = Router::new()
        .route("/", get(|| async { "Shockdist API Server" }))
        .merge(routes::distribution_routes())
        .with_state(AppState::new(baseline, catalog))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server shutting down");
    Ok(())
}

fn check_grid_points(points: usize) -> color_eyre::Result<()> {
    ensure!(points >= 2, "--grid-points must be at least 2, got {points}");
    ensure!(
        points <= MAX_GRID_POINTS,
        "--grid-points cannot exceed {MAX_GRID_POINTS}, got {points}"
    );
    Ok(())
}

fn check_records(records: usize) -> color_eyre::Result<()> {
    ensure!(records >= 2, "--records must be at least 2, got {records}");
    ensure!(
        records <= MAX_SYNTHETIC_RECORDS,
        "--records cannot exceed {MAX_SYNTHETIC_RECORDS}, got {records}"
    );
    Ok(())
}

fn build_baseline(
    data: Option<&Path>,
    seed: u64,
    config: &EstimatorConfig,
) -> color_eyre::Result<Baseline> {
    let dataset: Dataset = match data {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dataset");
            load_csv(path).wrap_err_with(|| format!("failed to load {}", path.display()))?
        }
        None => {
            tracing::info!(seed, "no dataset given, generating synthetic records");
            generate(&SyntheticConfig::default(), seed)?
        }
    };

    Baseline::new(dataset, config).wrap_err("failed to estimate the baseline density")
}

fn load_catalog(path: &Path) -> color_eyre::Result<MarkerCatalog> {
    let text = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).wrap_err("invalid marker catalog")
}

fn generate_dataset(args: GenerateArgs) -> color_eyre::Result<()> {
    check_records(args.records)?;

    let config = SyntheticConfig {
        records: args.records,
        income_mean: args.mean,
        income_std_dev: args.std_dev,
        sectors: args.sectors,
        ..Default::default()
    };
    let dataset = generate(&config, args.seed)?;
    write_csv(&dataset, &args.output)
        .wrap_err_with(|| format!("failed to write {}", args.output.display()))?;

    tracing::info!(
        records = dataset.len(),
        output = %args.output.display(),
        "synthetic dataset written"
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        // Without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
}
