//! Galaxy point-cloud generation and the scene session that owns it.
//!
//! [`generate`] is a pure function of a [`ParameterSet`] and a source of
//! uniform random numbers. [`SceneSession`] keeps at most one generated
//! cloud alive on a [`RenderBackend`], replaces it on [`SceneSession::regenerate`],
//! and sways it on [`SceneSession::tick`].

pub mod backend;
pub mod clock;
pub mod generator;
pub mod panel;
pub mod random;
pub mod session;

pub use backend::RenderBackend;
pub use clock::AnimationClock;
pub use generator::{branch_angle, generate, PointCloud};
pub use panel::{FieldKind, ParamField, ParamPanel};
pub use random::{RandomSource, UniformSource};
pub use session::{rotation_at, SceneSession, SessionState, SWAY_PERIOD};

pub use galaxy_common::{Color, GalaxyError, ParameterSet, RandomnessMode};
