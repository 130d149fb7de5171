//! Core reload manager implementation.

use crate::schema::GalaxyConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use galaxy_common::ConfigError;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Manages live config reloading.
///
/// Watches the config file for changes and publishes new configs
/// via a [`tokio::sync::watch`] channel. Invalid edits are logged and
/// skipped; the last good config stays published.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config from `config_path` and start watching it.
    ///
    /// Must be called from within a tokio runtime. Returns the initial
    /// config and a receiver that observes every successful reload.
    pub async fn start(config_path: PathBuf) -> (GalaxyConfig, watch::Receiver<GalaxyConfig>) {
        let initial_config = match Self::read_validated(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!("failed to load config: {e}, using defaults");
                GalaxyConfig::default()
            }
        };

        let rx = Self::watch_from(config_path, initial_config.clone());
        (initial_config, rx)
    }

    /// Start watching `config_path`, publishing `initial` as the current value.
    ///
    /// Use this when the initial config was already loaded (and possibly
    /// overridden from the command line) elsewhere.
    pub fn watch_from(config_path: PathBuf, initial: GalaxyConfig) -> watch::Receiver<GalaxyConfig> {
        let (config_tx, config_rx) = watch::channel(initial);

        tokio::spawn(async move {
            let manager = ReloadManager { config_path };
            manager.run_watch_loop(config_tx).await;
        });

        config_rx
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<GalaxyConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);

        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => {
                    info!("reloading config from {}", self.config_path.display());
                    match self.reload_config() {
                        Ok(config) => {
                            if config_tx.send(config).is_err() {
                                info!("all config receivers dropped, stopping reload manager");
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("config reload failed: {e}");
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    fn reload_config(&self) -> Result<GalaxyConfig, ConfigError> {
        Self::read_validated(&self.config_path)
    }

    fn read_validated(path: &Path) -> Result<GalaxyConfig, ConfigError> {
        let config = toml_loader::load_from_path(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
