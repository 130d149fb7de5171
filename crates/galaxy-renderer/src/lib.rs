pub mod camera;
pub mod gpu;
pub mod matrix;
pub mod perf;
pub mod points;
pub mod render_state;

pub use camera::OrbitCamera;
pub use gpu::{GpuContext, RendererError};
pub use perf::FrameTimer;
pub use points::{PointsHandle, PointsPipeline};
pub use render_state::RenderState;
