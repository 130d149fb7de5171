//! Window creation, renderer initialization, and the first galaxy.

use std::path::PathBuf;
use std::sync::Arc;

use galaxy_config::ReloadManager;
use galaxy_core::SceneSession;
use galaxy_renderer::RenderState;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use super::core::GalaxyApp;

impl GalaxyApp {
    /// Create the window, initialize the GPU renderer, and generate the
    /// first galaxy. Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let render_state = match pollster::block_on(RenderState::new(
            window.clone(),
            &self.config.renderer,
        )) {
            Ok(rs) => rs,
            Err(e) => {
                tracing::error!("Failed to initialize renderer: {e}");
                return false;
            }
        };

        self.camera.set_aspect(render_state.gpu.size.aspect());

        let source = self.random_source();
        let mut session = SceneSession::new(render_state, source, self.config.galaxy.clone());
        if let Err(e) = session.regenerate() {
            tracing::error!("Initial galaxy generation failed: {e}");
        }
        self.session = Some(session);

        self.window = Some(window);
        self.clock = galaxy_core::AnimationClock::start();
        tracing::info!("Window created and renderer initialized");
        true
    }

    /// Watch `path` and pick up edits on the next frame.
    pub fn start_config_watch(&mut self, path: PathBuf) {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .thread_name("galaxy-config")
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::warn!("Failed to start config watcher runtime: {e}");
                return;
            }
        };

        let rx = {
            let _guard = runtime.enter();
            ReloadManager::watch_from(path.clone(), self.config.clone())
        };

        tracing::info!("Watching {} for changes", path.display());
        self.config_rx = Some(rx);
        self.tokio_runtime = Some(runtime);
    }
}
