//! Keyboard and pointer input: debug-panel keys and orbit controls.

use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta};
use winit::keyboard::{Key, NamedKey};

use super::core::GalaxyApp;

/// Wheel pixels that count as one line of zoom.
const PIXELS_PER_LINE: f64 = 40.0;

/// What a key does to the panel or the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum PanelCommand {
    SelectNext,
    SelectPrev,
    Nudge(i32),
    Commit,
    Regenerate,
    Save,
    Quit,
}

/// Map a key transition to a command.
///
/// Arrows nudge on every press (including auto-repeat) and commit when
/// released, so holding an arrow scrubs the draft and regenerates once.
pub(super) fn map_key(
    key: &Key,
    state: ElementState,
    repeat: bool,
    shift: bool,
) -> Option<PanelCommand> {
    let pressed = state == ElementState::Pressed;
    match key {
        Key::Named(NamedKey::ArrowUp | NamedKey::ArrowRight) if pressed => {
            Some(PanelCommand::Nudge(1))
        }
        Key::Named(NamedKey::ArrowDown | NamedKey::ArrowLeft) if pressed => {
            Some(PanelCommand::Nudge(-1))
        }
        Key::Named(
            NamedKey::ArrowUp | NamedKey::ArrowRight | NamedKey::ArrowDown | NamedKey::ArrowLeft,
        ) => Some(PanelCommand::Commit),
        _ if !pressed || repeat => None,
        Key::Named(NamedKey::Tab) if shift => Some(PanelCommand::SelectPrev),
        Key::Named(NamedKey::Tab) => Some(PanelCommand::SelectNext),
        Key::Named(NamedKey::Escape) => Some(PanelCommand::Quit),
        Key::Character(c) if c.eq_ignore_ascii_case("r") => Some(PanelCommand::Regenerate),
        Key::Character(c) if c.eq_ignore_ascii_case("s") => Some(PanelCommand::Save),
        _ => None,
    }
}

impl GalaxyApp {
    pub(super) fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key,
            state,
            repeat,
            ..
        } = event;

        let Some(command) = map_key(&logical_key, state, repeat, self.modifiers.shift_key()) else {
            return;
        };

        match command {
            PanelCommand::SelectNext => self.panel.select_next(),
            PanelCommand::SelectPrev => self.panel.select_prev(),
            PanelCommand::Nudge(steps) => {
                self.panel.nudge(steps);
            }
            PanelCommand::Commit => {
                if let Some(params) = self.panel.commit() {
                    tracing::debug!(field = self.panel.selected().label(), "Parameter committed");
                    self.apply_params(params);
                }
            }
            PanelCommand::Regenerate => self.regenerate(),
            PanelCommand::Save => self.save_params(),
            PanelCommand::Quit => {
                tracing::info!("Escape pressed, exiting");
                self.should_exit = true;
            }
        }
        self.update_window_title();
    }

    /// Write the current config (with the live parameters) to the config file.
    fn save_params(&mut self) {
        let Some(ref path) = self.config_path else {
            tracing::warn!("No config path, parameters not saved");
            return;
        };
        match galaxy_config::save_config_to_path(&self.config, path) {
            Ok(()) => tracing::info!("Saved parameters to {}", path.display()),
            Err(e) => tracing::error!("Failed to save parameters: {e}"),
        }
    }

    pub(super) fn handle_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button == MouseButton::Left {
            self.dragging = state == ElementState::Pressed;
        }
    }

    pub(super) fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((last_x, last_y)) = self.cursor {
            if self.dragging {
                self.camera.drag((x - last_x) as f32, (y - last_y) as f32);
            }
        }
        self.cursor = Some((x, y));
    }

    pub(super) fn handle_mouse_wheel(&mut self, delta: MouseScrollDelta) {
        let lines = match delta {
            MouseScrollDelta::LineDelta(_, y) => y,
            MouseScrollDelta::PixelDelta(pos) => (pos.y / PIXELS_PER_LINE) as f32,
        };
        self.camera.zoom(lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: Key) -> Option<PanelCommand> {
        map_key(&key, ElementState::Pressed, false, false)
    }

    #[test]
    fn arrows_nudge_on_press_and_commit_on_release() {
        assert_eq!(
            press(Key::Named(NamedKey::ArrowUp)),
            Some(PanelCommand::Nudge(1))
        );
        assert_eq!(
            press(Key::Named(NamedKey::ArrowLeft)),
            Some(PanelCommand::Nudge(-1))
        );
        assert_eq!(
            map_key(
                &Key::Named(NamedKey::ArrowUp),
                ElementState::Released,
                false,
                false
            ),
            Some(PanelCommand::Commit)
        );
    }

    #[test]
    fn held_arrow_keeps_nudging() {
        assert_eq!(
            map_key(
                &Key::Named(NamedKey::ArrowRight),
                ElementState::Pressed,
                true,
                false
            ),
            Some(PanelCommand::Nudge(1))
        );
    }

    #[test]
    fn tab_selects_with_shift_reversing() {
        assert_eq!(
            press(Key::Named(NamedKey::Tab)),
            Some(PanelCommand::SelectNext)
        );
        assert_eq!(
            map_key(
                &Key::Named(NamedKey::Tab),
                ElementState::Pressed,
                false,
                true
            ),
            Some(PanelCommand::SelectPrev)
        );
    }

    #[test]
    fn letters_are_case_insensitive_and_ignore_repeat() {
        assert_eq!(
            press(Key::Character("r".into())),
            Some(PanelCommand::Regenerate)
        );
        assert_eq!(
            press(Key::Character("S".into())),
            Some(PanelCommand::Save)
        );
        assert_eq!(
            map_key(
                &Key::Character("r".into()),
                ElementState::Pressed,
                true,
                false
            ),
            None
        );
    }

    #[test]
    fn releases_of_other_keys_do_nothing() {
        assert_eq!(
            map_key(
                &Key::Named(NamedKey::Escape),
                ElementState::Released,
                false,
                false
            ),
            None
        );
        assert_eq!(press(Key::Character("x".into())), None);
        assert_eq!(press(Key::Named(NamedKey::Escape)), Some(PanelCommand::Quit));
    }
}
