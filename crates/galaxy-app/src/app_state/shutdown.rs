//! Graceful shutdown: release the galaxy, stop the watcher, drop the window.

use std::time::Duration;

use super::core::GalaxyApp;

impl GalaxyApp {
    /// Tear down subsystems. Safe to call more than once.
    ///
    /// The session goes first so the live point cloud is released while the
    /// GPU device it lives on still exists.
    pub(super) fn shutdown(&mut self) {
        if self.session.is_none()
            && self.tokio_runtime.is_none()
            && self.config_rx.is_none()
            && self.window.is_none()
        {
            return;
        }
        tracing::info!("Initiating graceful shutdown");

        self.session = None;

        self.config_rx = None;
        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.window = None;
        tracing::info!("Graceful shutdown complete");
    }
}
