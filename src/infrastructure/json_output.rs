// JSON rendering for the assembled dashboard document
use crate::domain::dashboard::Dashboard;
use std::io::Write;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to serialize dashboard: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write dashboard: {0}")]
    Write(#[from] std::io::Error),
}

/// Render the dashboard as pretty-printed JSON followed by a newline.
pub fn render_dashboard(dashboard: &Dashboard) -> Result<String, OutputError> {
    let mut rendered = serde_json::to_string_pretty(dashboard)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Write the rendered document to a sink.
pub fn write_dashboard<W: Write>(dashboard: &Dashboard, mut out: W) -> Result<(), OutputError> {
    out.write_all(render_dashboard(dashboard)?.as_bytes())?;
    Ok(())
}
