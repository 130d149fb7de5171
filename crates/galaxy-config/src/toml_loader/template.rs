//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Galaxy Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Saving this file while the viewer runs regenerates the galaxy.

[galaxy]
# count = 100000             # number of points
# size = 0.01                # point size, 0.001-1
# radius = 5.0               # 0.01-20
# branches = 5               # spiral arms, 1-20
# spin = 1.0                 # radians of twist per unit radius, -5 to 5
# randomness = 0.2           # 0-2, only used when randomness_mode = "scaled"
# randomness_power = 3.0     # 1-10, higher packs points closer to the arms
# inner_color = "#ff6030"
# outer_color = "#1b3984"
# randomness_mode = "unscaled"  # unscaled, scaled

[generator]
# seed = 42                  # fixed seed for reproducible galaxies

[window]
# title = "Galaxy"
# width = 1280
# height = 800

[camera]
# fov_degrees = 75.0
# near = 0.1
# far = 100.0
# position = [3.0, 3.0, 3.0]
# target = [0.0, 0.0, 0.0]
# damping = true
# damping_factor = 0.05
# rotate_speed = 0.005
# zoom_speed = 0.1

[renderer]
# clear_color = "#000000"
# max_pixel_ratio = 2.0
# vsync = true

[logging]
# level = "info"             # trace, debug, info, warn, error
"##
    .to_string()
}
