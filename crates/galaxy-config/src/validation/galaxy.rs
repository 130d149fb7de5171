//! Galaxy parameter validation.

use crate::schema::GalaxyConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Upper bound on points generated from a config file.
pub(crate) const MAX_POINT_COUNT: u32 = 5_000_000;

/// Validate the `[galaxy]` section.
pub(crate) fn validate_galaxy(errors: &mut Vec<String>, config: &GalaxyConfig) {
    let g = &config.galaxy;

    validate_range(errors, "galaxy.count", g.count, 0, MAX_POINT_COUNT);
    validate_range(errors, "galaxy.branches", g.branches, 1, 20);
    validate_range_f64(errors, "galaxy.size", g.size as f64, 0.001, 1.0);
    validate_range_f64(errors, "galaxy.radius", g.radius as f64, 0.01, 20.0);
    validate_range_f64(errors, "galaxy.spin", g.spin as f64, -5.0, 5.0);
    validate_range_f64(errors, "galaxy.randomness", g.randomness as f64, 0.0, 2.0);
    validate_range_f64(
        errors,
        "galaxy.randomness_power",
        g.randomness_power as f64,
        1.0,
        10.0,
    );
}
