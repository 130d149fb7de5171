//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the frame
//! loop. Coordinates config, the scene session, the debug panel, and the
//! orbit camera.

mod core;
mod event_handler;
mod init;
mod input;
mod polling;
mod shutdown;
mod title;

pub use core::GalaxyApp;
