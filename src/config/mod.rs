//! Configuration module for Laer.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{ApiSettings, DefaultsSettings, GeneralSettings, Settings};
