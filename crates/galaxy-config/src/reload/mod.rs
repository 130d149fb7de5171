//! Live config reload manager.
//!
//! Combines the file watcher with config loading so that saving the
//! config file publishes a fresh, validated config.

mod manager;


pub use manager::ReloadManager;
