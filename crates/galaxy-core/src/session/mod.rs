//! Scene session: owns the single live point cloud.
//!
//! The session starts EMPTY. Each [`SceneSession::regenerate`] releases
//! the current cloud (if any) before generating and attaching a new one,
//! so at most one cloud's GPU resources exist at any time.

mod motion;
mod scene;

#[cfg(test)]
mod tests;

pub use motion::*;
pub use scene::*;
