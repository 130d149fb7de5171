mod color;
mod params;

pub use color::*;
pub use params::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff6030").unwrap();
        assert_eq!(c, Color::from_rgba(255, 96, 48, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("1b3984").unwrap();
        assert_eq!(c, Color::from_rgb(0x1b, 0x39, 0x84));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("#ffé0").is_none());
    }

    #[test]
    fn color_to_hex_opaque() {
        let c = Color::from_rgb(255, 0, 128);
        assert_eq!(c.to_hex(), "#ff0080");
        assert_eq!(c.to_string(), "#ff0080");
    }

    #[test]
    fn color_to_rgb_f32_bounds() {
        assert_eq!(Color::from_rgb(0, 0, 0).to_rgb_f32(), [0.0, 0.0, 0.0]);
        assert_eq!(Color::from_rgb(255, 255, 255).to_rgb_f32(), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn color_from_rgb_f32_clamps() {
        let c = Color::from_rgb_f32([1.5, -0.2, 0.5]);
        assert_eq!(c, Color::from_rgb(255, 0, 128));
    }

    #[test]
    fn lerp_endpoints_match_inputs() {
        let inner = Color::from_rgb(255, 0, 0);
        let outer = Color::from_rgb(0, 0, 255);
        assert_eq!(inner.lerp_rgb(&outer, 0.0), [1.0, 0.0, 0.0]);
        assert_eq!(inner.lerp_rgb(&outer, 1.0), [0.0, 0.0, 1.0]);
        assert_eq!(inner.lerp_rgb(&outer, 0.5), [0.5, 0.0, 0.5]);
    }

    #[test]
    fn color_serializes_as_hex_string() {
        let c = Color::from_rgb(0x1b, 0x39, 0x84);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#1b3984\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn color_rejects_bad_string() {
        let result: Result<Color, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    #[test]
    fn default_parameters_match_the_classic_galaxy() {
        let p = ParameterSet::default();
        assert_eq!(p.count, 100_000);
        assert_eq!(p.branches, 5);
        assert!((p.radius - 5.0).abs() < f32::EPSILON);
        assert!((p.randomness_power - 3.0).abs() < f32::EPSILON);
        assert_eq!(p.inner_color.to_hex(), "#ff6030");
        assert_eq!(p.outer_color.to_hex(), "#1b3984");
        assert_eq!(p.randomness_mode, RandomnessMode::Unscaled);
    }

    #[test]
    fn partial_parameters_fill_defaults() {
        let p: ParameterSet = toml::from_str(
            r##"
count = 500
outer_color = "#00ff00"
randomness_mode = "scaled"
"##,
        )
        .unwrap();
        assert_eq!(p.count, 500);
        assert_eq!(p.outer_color, Color::from_rgb(0, 255, 0));
        assert_eq!(p.randomness_mode, RandomnessMode::Scaled);
        assert_eq!(p.branches, 5);
    }

    #[test]
    fn default_parameters_validate() {
        assert!(ParameterSet::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_branches() {
        let p = ParameterSet {
            branches: 0,
            ..Default::default()
        };
        let err = p.validate().unwrap_err();
        assert!(matches!(err, crate::GalaxyError::InvalidParameter(_)));
        assert!(err.to_string().contains("branches"));
    }

    #[test]
    fn validate_rejects_negative_radius() {
        let p = ParameterSet {
            radius: -1.0,
            ..Default::default()
        };
        assert!(p.validate().unwrap_err().to_string().contains("radius"));
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let p = ParameterSet {
            randomness_power: f32::INFINITY,
            ..Default::default()
        };
        assert!(p
            .validate()
            .unwrap_err()
            .to_string()
            .contains("randomness_power"));
    }

    #[test]
    fn validate_rejects_randomness_power_below_one() {
        for power in [-1.0, 0.0, 0.5] {
            let p = ParameterSet {
                randomness_power: power,
                ..Default::default()
            };
            let err = p.validate().unwrap_err();
            assert!(matches!(err, crate::GalaxyError::InvalidParameter(_)));
            assert!(err.to_string().contains("randomness_power"));
        }
        let p = ParameterSet {
            randomness_power: 1.0,
            ..Default::default()
        };
        assert!(p.validate().is_ok());
    }

    #[test]
    fn validate_accepts_degenerate_but_legal_values() {
        let p = ParameterSet {
            count: 0,
            radius: 0.0,
            branches: 1,
            spin: -3.0,
            ..Default::default()
        };
        assert!(p.validate().is_ok());
    }
}
