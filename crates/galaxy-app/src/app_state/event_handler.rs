//! `ApplicationHandler` implementation for the winit event loop.

use std::time::Duration;

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::GalaxyApp;

/// How often the FPS readout in the title refreshes.
const TITLE_INTERVAL: Duration = Duration::from_millis(500);

impl ApplicationHandler for GalaxyApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
            return;
        }

        self.update_window_title();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(session) = self.session.as_mut() {
                        session.backend_mut().resize(size.width, size.height);
                    }
                    self.camera.set_aspect(size.width as f32 / size.height as f32);
                }
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(session) = self.session.as_mut() {
                    session.backend_mut().set_scale_factor(scale_factor);
                }
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_input(state, button);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                self.dragging = false;
            }

            WindowEvent::MouseWheel { delta, .. } => {
                self.handle_mouse_wheel(delta);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

impl GalaxyApp {
    /// Advance the sway, settle the camera, and draw one frame.
    fn render_frame(&mut self) {
        let elapsed = self.clock.elapsed_seconds();
        self.camera.update();

        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.tick(elapsed);
        if let Err(e) = session.backend_mut().render(&self.camera) {
            tracing::error!("Render error: {e}");
        }

        self.frame_timer.begin_frame();
        if self.last_title_update.elapsed() >= TITLE_INTERVAL {
            self.update_window_title();
        }
    }
}
