//! Window title HUD: frame rate, point count, and the selected panel field.

use std::time::Instant;

use super::core::GalaxyApp;

/// Compose the title shown while the viewer runs.
pub(super) fn format_title(base: &str, fps: f64, points: u64, panel: &str) -> String {
    format!("{base} | {fps:.0} fps | {points} points | {panel}")
}

impl GalaxyApp {
    pub(super) fn update_window_title(&mut self) {
        self.last_title_update = Instant::now();
        let Some(ref window) = self.window else {
            return;
        };

        let points = self
            .session
            .as_ref()
            .map(|session| session.backend().attached_points())
            .unwrap_or(0);

        window.set_title(&format_title(
            &self.config.window.title,
            self.frame_timer.fps(),
            points,
            &self.panel.describe(),
        ));
    }
}
