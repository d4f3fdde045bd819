//! Hoard tracker client binary.
//!
//! Terminal front-end for tracking groups of identical creatures and
//! resolving area-of-effect damage against them. All rules live in
//! `hoard-core`; this binary only collects input, marshals it into the
//! core's typed API, and renders the results.
mod app;
mod config;
mod input;
mod logging;
mod message;
mod state;
mod terminal;
mod ui;

use anyhow::Result;
use app::App;
use config::CliConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // Logging goes to a session file; the terminal belongs to the UI.
    logging::setup_logging(&config.session_id)?;

    tracing::info!("Starting hoard tracker client");

    let (mut terminal, _guard) = terminal::init()?;
    App::new(&config).run(&mut terminal)
}
