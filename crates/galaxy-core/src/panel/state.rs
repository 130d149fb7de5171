use galaxy_common::ParameterSet;

use super::field::{step_value, FieldKind, ParamField, HUE_STEP_DEGREES};
use super::hue::rotate_hue;

/// Editing state of the debug panel.
#[derive(Debug, Clone)]
pub struct ParamPanel {
    committed: ParameterSet,
    draft: ParameterSet,
    selected: usize,
}

impl ParamPanel {
    pub fn new(params: ParameterSet) -> Self {
        Self {
            committed: params.clone(),
            draft: params,
            selected: 0,
        }
    }

    pub fn selected(&self) -> ParamField {
        ParamField::ALL[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % ParamField::ALL.len();
    }

    pub fn select_prev(&mut self) {
        let len = ParamField::ALL.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn draft(&self) -> &ParameterSet {
        &self.draft
    }

    /// Whether the draft differs from the last committed set.
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Move the selected field by `steps` in the draft only.
    ///
    /// Numbers snap to the field's step grid and clamp to its range; colors
    /// rotate hue. Returns whether the draft changed.
    pub fn nudge(&mut self, steps: i32) -> bool {
        let field = self.selected();
        let before = self.draft.clone();

        match field.kind() {
            FieldKind::Number { min, max, step } => {
                if let Some(current) = field.number(&self.draft) {
                    let next = step_value(current, steps, min, max, step);
                    field.set_number(&mut self.draft, next);
                }
            }
            FieldKind::Color => {
                if let Some(color) = field.color_mut(&mut self.draft) {
                    *color = rotate_hue(*color, steps as f32 * HUE_STEP_DEGREES);
                }
            }
        }

        self.draft != before
    }

    /// Finish an interaction: returns the new set when the draft differs
    /// from what was last committed.
    pub fn commit(&mut self) -> Option<ParameterSet> {
        if !self.is_dirty() {
            return None;
        }
        self.committed = self.draft.clone();
        Some(self.committed.clone())
    }

    /// Drop uncommitted edits.
    pub fn revert(&mut self) {
        self.draft = self.committed.clone();
    }

    /// Adopt parameters that changed outside the panel (e.g. a config reload).
    pub fn sync(&mut self, params: &ParameterSet) {
        self.committed = params.clone();
        self.draft = params.clone();
    }

    /// One-line summary of the selected field, e.g. `"Branches: 5 [2..20]"`.
    pub fn describe(&self) -> String {
        let field = self.selected();
        let value = field.format_value(&self.draft);
        let marker = if self.is_dirty() { " *" } else { "" };
        match field.kind() {
            FieldKind::Number { min, max, .. } => {
                format!("{}: {value} [{min}..{max}]{marker}", field.label())
            }
            FieldKind::Color => format!("{}: {value}{marker}", field.label()),
        }
    }
}
