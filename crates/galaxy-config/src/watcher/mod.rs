//! File watcher for live config reload.
//!
//! Uses the `notify` crate to watch the config file for changes,
//! with a 500ms debounce so an editor's save counts as one commit.

mod config_watcher;


pub use config_watcher::{ConfigWatcher, DEBOUNCE};
