mod backend;
mod helpers;
mod state;

pub use helpers::{clear_color_for, effective_pixel_ratio};
pub use state::RenderState;
