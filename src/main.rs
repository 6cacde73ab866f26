// Main entry point - assemble the dashboard and emit it on stdout
mod domain;
mod application;
mod infrastructure;

use crate::application::dashboard_service::build_dashboard;
use crate::infrastructure::json_output::write_dashboard;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; the generated document owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let dashboard = build_dashboard();
    tracing::debug!(
        "assembled {} panels for '{}'",
        dashboard.panels.len(),
        dashboard.title
    );

    let stdout = std::io::stdout();
    write_dashboard(&dashboard, stdout.lock())?;

    Ok(())
}
