//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            Output::header("Configuration");
            Output::kv("api.base_url", &settings.api.base_url);
            Output::kv(
                "api.timeout_seconds",
                &settings.api.timeout_seconds.to_string(),
            );
            Output::kv("general.download_dir", &settings.general.download_dir);
            Output::kv("general.log_level", &settings.general.log_level);
            Output::kv("defaults.video_title", &settings.defaults.video_title);
            println!();
            Output::info(&format!(
                "Config file: {}",
                Settings::default_config_path().display()
            ));
        }
        ConfigAction::Path => {
            println!("{}", Settings::default_config_path().display());
        }
    }

    Ok(())
}
