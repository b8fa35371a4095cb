//! vterm desktop entry point.
//!
//! Opens an SDL2 window running a single terminal: type a command line,
//! press Enter to run it. Close the window to quit.
//!
//! Usage: `vterm [CONFIG.toml]`

use std::path::Path;

use anyhow::{Context, Result};

use vterm_backend_sdl::SdlBackend;
use vterm_core::app::AppContext;
use vterm_core::backend::RenderBackend;
use vterm_core::config::VtermConfig;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref())?;
    log::info!(
        "Starting vterm ({}x{} @ {} fps)",
        config.screen_width,
        config.screen_height,
        config.frame_rate,
    );

    let mut ctx = AppContext::new(config).context("invalid configuration")?;

    let mut backend = SdlBackend::new(
        &ctx.config.window_title,
        ctx.config.screen_width,
        ctx.config.screen_height,
    )?;
    backend.init(ctx.config.screen_width, ctx.config.screen_height)?;

    ctx.run(&mut backend)?;

    backend.shutdown()?;
    log::info!("vterm shut down cleanly");
    Ok(())
}

/// Read the config file named on the command line, or use the defaults.
fn load_config(path: Option<&str>) -> Result<VtermConfig> {
    match path {
        Some(path) => VtermConfig::load(Path::new(path))
            .with_context(|| format!("failed to load config from {path}")),
        None => {
            log::info!("No config file given, using defaults");
            Ok(VtermConfig::default())
        },
    }
}
