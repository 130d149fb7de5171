//! Debug-panel model: per-field ranges, draft edits, and commit.
//!
//! Edits change a draft copy of the parameters. Only [`ParamPanel::commit`]
//! hands a new set to the caller, which is the cue to regenerate. Hosts call
//! it when an interaction finishes (key release, drag end), never on every
//! intermediate step.

mod field;
mod hue;
mod state;


pub use field::*;
pub use hue::rotate_hue;
pub use state::*;
