mod app_state;
mod cli;
mod scene;

use std::path::Path;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use quadbatch_common::ConfigError;
use quadbatch_config::QuadbatchConfig;
use quadbatch_renderer::DrawMode;

fn main() {
    let args = cli::parse();

    // Config comes first so its logging section can pick the default filter;
    // failures are reported once the subscriber is up.
    let (config, config_warning) = match load_config(&args) {
        Ok(c) => (c, None),
        Err(e) => (QuadbatchConfig::default(), Some(e)),
    };

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "quadbatch=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::info!("quadbatch v{} starting", env!("CARGO_PKG_VERSION"));
    if let Some(e) = config_warning {
        tracing::warn!("config load failed, using defaults: {e}");
    }

    let draw_mode = if args.per_quad {
        DrawMode::PerQuad
    } else {
        DrawMode::Batched
    };
    if draw_mode == DrawMode::PerQuad {
        tracing::info!("per-quad mode: issuing one draw call per quad");
    }

    let event_loop = EventLoop::new().expect("failed to create event loop");
    let mut app = app_state::QuadbatchApp::new(config, draw_mode);

    tracing::info!("entering event loop; Space grows the grid, R resets, Escape quits");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("event loop error: {e}");
    }
    tracing::info!("shutdown complete");
}

fn load_config(args: &cli::Args) -> Result<QuadbatchConfig, ConfigError> {
    match &args.config {
        Some(path) => quadbatch_config::toml_loader::load_from_path(Path::new(path)),
        None => quadbatch_config::load_config(),
    }
}
