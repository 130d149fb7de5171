mod app_state;
mod cli;

use std::path::PathBuf;

use galaxy_config::GalaxyConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use cli::{Args, Overrides};

/// Where the config came from and whether loading it went wrong.
struct LoadedConfig {
    config: GalaxyConfig,
    path: Option<PathBuf>,
    error: Option<galaxy_common::ConfigError>,
}

/// Load the config before logging is up; problems are reported afterwards.
fn load_config(args: &Args) -> LoadedConfig {
    let path = match &args.config {
        Some(path) => Some(path.clone()),
        None => galaxy_config::toml_loader::default_config_path().ok(),
    };

    let (config, error) = match galaxy_config::load_config(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (GalaxyConfig::default(), Some(e)),
    };

    LoadedConfig {
        config,
        path,
        error,
    }
}

fn init_logging(directive: &str) {
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| "galaxy=info".parse::<Directive>());
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let args = cli::parse();
    let mut overrides = Overrides::from_args(&args);

    let LoadedConfig {
        config: file_config,
        path,
        error,
    } = load_config(&args);
    let mut config = file_config.clone();
    overrides.apply(&mut config);

    let log_directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    init_logging(&log_directive);

    tracing::info!("Galaxy v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(e) = error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    if let Some(ref path) = path {
        tracing::info!("Config path: {}", path.display());
    }

    if let Err(e) = galaxy_config::validation::validate(&config) {
        tracing::warn!("Command-line overrides rejected, using config values: {e}");
        config = file_config;
        overrides = Overrides::default();
    }

    if args.print_config {
        println!("{}", galaxy_config::config_to_json(&config));
        return;
    }

    tracing::info!(
        points = config.galaxy.count,
        branches = config.galaxy.branches,
        seed = ?config.generator.seed,
        "Config loaded"
    );

    let watch_path = if args.no_watch { None } else { path.clone() };

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::GalaxyApp::new(config, path, overrides);
    if let Some(watch_path) = watch_path {
        app.start_config_watch(watch_path);
    }

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
