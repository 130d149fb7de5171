//! Per-frame scheduling and live config reload.

use galaxy_config::GalaxyConfig;
use galaxy_renderer::OrbitCamera;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::GalaxyApp;

impl GalaxyApp {
    /// Pick up config edits, then schedule the next frame.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_config_reload();
        self.request_redraw();
        event_loop.set_control_flow(ControlFlow::Poll);
    }

    /// Apply the latest reloaded config, if the watcher published one.
    pub(super) fn poll_config_reload(&mut self) {
        let Some(rx) = self.config_rx.as_mut() else {
            return;
        };

        match rx.has_changed() {
            Ok(true) => {}
            Ok(false) => return,
            Err(_) => {
                tracing::warn!("Config watcher stopped, live reload disabled");
                self.config_rx = None;
                return;
            }
        }

        let mut config = rx.borrow_and_update().clone();
        self.overrides.apply(&mut config);
        self.apply_reloaded_config(config);
    }

    /// Swap in a reloaded config, touching only the parts that changed.
    ///
    /// Changed galaxy parameters regenerate exactly once; a file saved
    /// with the current parameters regenerates nothing.
    pub(super) fn apply_reloaded_config(&mut self, config: GalaxyConfig) {
        let previous = std::mem::replace(&mut self.config, config);

        if previous.camera != self.config.camera {
            tracing::info!("Camera settings changed, resetting view");
            self.camera = OrbitCamera::from_config(&self.config.camera, self.camera.aspect());
        }

        if previous.renderer != self.config.renderer {
            if let Some(session) = self.session.as_mut() {
                session.backend_mut().apply_config(&self.config.renderer);
            }
        }

        if previous.logging != self.config.logging {
            tracing::info!("logging.level changes take effect on restart");
        }

        let params = self.config.galaxy.clone();
        self.panel.sync(&params);
        self.apply_params(params);
        self.update_window_title();
    }
}
