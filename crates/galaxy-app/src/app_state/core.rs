//! GalaxyApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use galaxy_config::GalaxyConfig;
use galaxy_core::{AnimationClock, ParamPanel, RandomSource, SceneSession};
use galaxy_renderer::{FrameTimer, OrbitCamera, RenderState};
use tokio::sync::watch;
use winit::window::Window;

use crate::cli::Overrides;

/// Top-level application state.
pub struct GalaxyApp {
    pub(super) config: GalaxyConfig,
    pub(super) config_path: Option<PathBuf>,
    pub(super) overrides: Overrides,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) session: Option<SceneSession<RenderState>>,
    pub(super) camera: OrbitCamera,

    // Debug panel
    pub(super) panel: ParamPanel,
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Orbit drag
    pub(super) dragging: bool,
    pub(super) cursor: Option<(f64, f64)>,

    // Animation and HUD
    pub(super) clock: AnimationClock,
    pub(super) frame_timer: FrameTimer,
    pub(super) last_title_update: Instant,

    // Live reload
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) config_rx: Option<watch::Receiver<GalaxyConfig>>,

    pub(super) should_exit: bool,
}

impl GalaxyApp {
    pub fn new(config: GalaxyConfig, config_path: Option<PathBuf>, overrides: Overrides) -> Self {
        let aspect = config.window.width as f32 / config.window.height.max(1) as f32;
        let camera = OrbitCamera::from_config(&config.camera, aspect);
        let panel = ParamPanel::new(config.galaxy.clone());

        Self {
            config,
            config_path,
            overrides,
            window: None,
            session: None,
            camera,
            panel,
            modifiers: winit::keyboard::ModifiersState::empty(),
            dragging: false,
            cursor: None,
            clock: AnimationClock::start(),
            frame_timer: FrameTimer::new(),
            last_title_update: Instant::now(),
            tokio_runtime: None,
            config_rx: None,
            should_exit: false,
        }
    }

    /// The random source for the next regeneration: a fresh seeded
    /// sequence when `generator.seed` is set, otherwise entropy.
    pub(super) fn random_source(&self) -> RandomSource {
        match self.config.generator.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        }
    }

    /// Regenerate the galaxy from the session's current parameters.
    pub(super) fn regenerate(&mut self) {
        let source = self.config.generator.seed.map(RandomSource::seeded);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(source) = source {
            session.replace_source(source);
        }
        if let Err(e) = session.regenerate() {
            tracing::warn!("Regeneration failed, keeping previous galaxy: {e}");
        }
    }

    /// Adopt committed parameters and regenerate if they differ.
    pub(super) fn apply_params(&mut self, params: galaxy_core::ParameterSet) {
        let source = self.config.generator.seed.map(RandomSource::seeded);
        self.config.galaxy = params.clone();
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(source) = source {
            session.replace_source(source);
        }
        match session.apply_params(params) {
            Ok(true) => tracing::debug!("galaxy regenerated from new parameters"),
            Ok(false) => {}
            Err(e) => tracing::warn!("Regeneration failed, keeping previous galaxy: {e}"),
        }
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
