//! folio terminal front end.
//!
//! Line-oriented renderer over stdin/stdout for a single portfolio session.
//! Type a command and press Enter. Arrow keys followed by Enter recall
//! history; Enter on its own submits the recalled line. Ctrl-D quits.
//!
//! The config file comes from the first argument, then `FOLIO_CONFIG`,
//! falling back to built-in defaults.

mod input;
mod render;

use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Result;

use folio_terminal::TerminalSession;
use folio_types::config::FolioConfig;

use render::Renderer;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match config_path() {
        Some(path) => FolioConfig::load(&path)?,
        None => FolioConfig::default(),
    };
    log::info!(
        "Starting folio for {} ({} projects, history {})",
        config.portfolio.name,
        config.portfolio.projects.len(),
        config.terminal.history_capacity,
    );

    let mut session = TerminalSession::new(&config.terminal);
    let mut renderer = Renderer::new(&config);
    let mut stdout = io::stdout().lock();
    renderer.present(&session, &mut stdout)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let buffered = session.input().chars().count();
        for event in input::events_for_line(&line, buffered) {
            if let Some(settled) = session.handle_event(&event) {
                log::debug!("settled: {settled:?}");
            }
        }
        renderer.present(&session, &mut stdout)?;
        trace_snapshot(&session)?;
    }

    log::info!("Session ended");
    Ok(())
}

/// Resolve the config path from CLI arg or environment.
fn config_path() -> Option<PathBuf> {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FOLIO_CONFIG").ok())
        .map(PathBuf::from)
}

/// Dump the renderable session state as JSON at trace level.
fn trace_snapshot(session: &TerminalSession) -> folio_types::error::Result<()> {
    if log::log_enabled!(log::Level::Trace) {
        let json = serde_json::to_string(&session.snapshot())?;
        log::trace!("snapshot: {json}");
    }
    Ok(())
}
