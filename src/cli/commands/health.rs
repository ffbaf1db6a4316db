//! Health command implementation.

use crate::api::ApiClient;
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Run the health command: check that the processing service is up.
pub async fn run_health(settings: Settings) -> Result<()> {
    let client = ApiClient::new(&settings)?;

    let spinner = Output::spinner("Checking the processing service...");
    let result = client.health().await;
    spinner.finish_and_clear();

    match result {
        Ok(health) => {
            Output::success(&format!("{} is {}", health.service, health.status));
            Output::kv("base URL", client.base_url().as_str());
            Ok(())
        }
        Err(e) => {
            Output::error_banner(&e);
            Err(e.into())
        }
    }
}
