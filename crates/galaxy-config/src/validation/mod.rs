//! Full configuration validation.
//!
//! Checks numeric ranges for every section and collects all failures
//! into a single `ConfigError`.

mod galaxy;
mod helpers;
mod view;


use crate::schema::GalaxyConfig;
use galaxy_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GalaxyConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    galaxy::validate_galaxy(&mut errors, config);
    view::validate_window(&mut errors, config);
    view::validate_camera(&mut errors, config);
    view::validate_renderer(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
