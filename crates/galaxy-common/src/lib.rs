pub mod errors;
pub mod types;

pub use errors::{ConfigError, GalaxyError};
pub use types::{Color, ParameterSet, RandomnessMode};

pub type Result<T> = std::result::Result<T, GalaxyError>;
