//! Ecoleta - Entry Point

use clap::Parser;
use ecoleta::api::{HttpGeoApi, HttpPointsApi};
use ecoleta::config::KeyBindings;
use ecoleta::dispatch::FetchDispatcher;
use ecoleta::links::SystemOpener;
use ecoleta::logging::Diagnostics;
use ecoleta::model::{AppError, PointId};
use ecoleta::view::{AppServices, ColorConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// Ecoleta - find recycling collection points near you
#[derive(Parser, Debug)]
#[command(name = "ecoleta")]
#[command(version)]
#[command(about = "TUI for finding recycling collection points by state and city")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides config file and ECOLETA_BACKEND_URL)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Open the detail screen of this collection point (must be positive)
    #[arg(long)]
    pub point: Option<PointId>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = ecoleta::config::load_config_with_precedence(args.config.clone())?;
        let merged = ecoleta::config::merge_config(config_file);
        let with_env = ecoleta::config::apply_env_overrides(merged);
        ecoleta::config::apply_cli_overrides(with_env, args.backend_url.clone())
    };

    ecoleta::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let geo = HttpGeoApi::new(&config.geo_api_url, config.request_timeout)?;
    let points = HttpPointsApi::new(&config.backend_url, config.request_timeout)?;
    let (dispatcher, outcomes) = FetchDispatcher::new(Arc::new(geo), Arc::new(points));

    let services = AppServices {
        dispatcher,
        outcomes,
        opener: Box::new(SystemOpener::new()),
        diagnostics: Diagnostics::new(config.suppressed_warnings.iter().cloned()),
        key_bindings: KeyBindings::default(),
        colors: ColorConfig::from_env_and_args(args.no_color),
        start_point: args.point,
    };

    ecoleta::view::run(services)?;

    Ok(())
}
