use galaxy_common::{Color, ParameterSet};

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// A slider with inclusive bounds and a step grid anchored at `min`.
    Number { min: f64, max: f64, step: f64 },
    /// A color picker.
    Color,
}

/// Degrees of hue rotation per nudge on a color field.
pub const HUE_STEP_DEGREES: f32 = 10.0;

/// The editable parameters, in panel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    Count,
    Size,
    Radius,
    Branches,
    Spin,
    Randomness,
    RandomnessPower,
    InnerColor,
    OuterColor,
}

impl ParamField {
    pub const ALL: [ParamField; 9] = [
        ParamField::Count,
        ParamField::Size,
        ParamField::Radius,
        ParamField::Branches,
        ParamField::Spin,
        ParamField::Randomness,
        ParamField::RandomnessPower,
        ParamField::InnerColor,
        ParamField::OuterColor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParamField::Count => "Point Count",
            ParamField::Size => "Point Size",
            ParamField::Radius => "Radius",
            ParamField::Branches => "Branches",
            ParamField::Spin => "Spin",
            ParamField::Randomness => "Randomness",
            ParamField::RandomnessPower => "Randomness Power",
            ParamField::InnerColor => "Inner Color",
            ParamField::OuterColor => "Outer Color",
        }
    }

    pub fn kind(self) -> FieldKind {
        let number = |min, max, step| FieldKind::Number { min, max, step };
        match self {
            ParamField::Count => number(100.0, 10_000.0, 100.0),
            ParamField::Size => number(0.001, 1.0, 0.001),
            ParamField::Radius => number(0.01, 20.0, 0.001),
            ParamField::Branches => number(2.0, 20.0, 1.0),
            ParamField::Spin => number(-5.0, 5.0, 0.001),
            ParamField::Randomness => number(0.0, 2.0, 0.001),
            ParamField::RandomnessPower => number(1.0, 10.0, 0.001),
            ParamField::InnerColor | ParamField::OuterColor => FieldKind::Color,
        }
    }

    /// Current numeric value, or `None` for color fields.
    pub fn number(self, params: &ParameterSet) -> Option<f64> {
        let value = match self {
            ParamField::Count => params.count as f64,
            ParamField::Size => params.size as f64,
            ParamField::Radius => params.radius as f64,
            ParamField::Branches => params.branches as f64,
            ParamField::Spin => params.spin as f64,
            ParamField::Randomness => params.randomness as f64,
            ParamField::RandomnessPower => params.randomness_power as f64,
            ParamField::InnerColor | ParamField::OuterColor => return None,
        };
        Some(value)
    }

    /// Write a numeric value. Ignored for color fields.
    pub fn set_number(self, params: &mut ParameterSet, value: f64) {
        match self {
            ParamField::Count => params.count = value.round() as u32,
            ParamField::Size => params.size = value as f32,
            ParamField::Radius => params.radius = value as f32,
            ParamField::Branches => params.branches = value.round() as u32,
            ParamField::Spin => params.spin = value as f32,
            ParamField::Randomness => params.randomness = value as f32,
            ParamField::RandomnessPower => params.randomness_power = value as f32,
            ParamField::InnerColor | ParamField::OuterColor => {}
        }
    }

    pub fn color_mut(self, params: &mut ParameterSet) -> Option<&mut Color> {
        match self {
            ParamField::InnerColor => Some(&mut params.inner_color),
            ParamField::OuterColor => Some(&mut params.outer_color),
            _ => None,
        }
    }

    /// Human-readable value, e.g. `"5"`, `"0.010"`, or `"#ff6030"`.
    pub fn format_value(self, params: &ParameterSet) -> String {
        match self {
            ParamField::Count => params.count.to_string(),
            ParamField::Branches => params.branches.to_string(),
            ParamField::InnerColor => params.inner_color.to_hex(),
            ParamField::OuterColor => params.outer_color.to_hex(),
            other => format!("{:.3}", other.number(params).unwrap_or_default()),
        }
    }
}

/// Move `current` by `steps` grid steps, snap to the grid, and clamp.
pub fn step_value(current: f64, steps: i32, min: f64, max: f64, step: f64) -> f64 {
    let target = current + steps as f64 * step;
    let snapped = min + ((target - min) / step).round() * step;
    snapped.clamp(min, max)
}
