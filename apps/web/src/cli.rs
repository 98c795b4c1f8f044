//! Command-line interface: run the web server or check the Gemini key.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::llm_client::{AnalysisModel, GeminiClient};

#[derive(Parser)]
#[command(name = "cv-analyzer")]
#[command(about = "Upload a CV, paste a job description, get an AI suitability assessment")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Verify GEMINI_API_KEY by sending a one-word prompt to the configured model
    CheckKey,
}

/// Pings the model with the configured key. On failure, lists the models the
/// key can use for `generateContent` to help pick a working GEMINI_MODEL.
pub async fn check_key(config: &Config) -> Result<()> {
    info!("Loaded API key: {}", config.masked_api_key());
    info!("Pinging model '{}'...", config.gemini_model);

    let client = GeminiClient::from_config(config)?;
    match client.generate("Ping").await {
        Ok(reply) => {
            info!("Success. {} replied: {}", client.model(), reply.trim());
            Ok(())
        }
        Err(e) => {
            error!("Connection failed: {e}");
            warn!("Listing models available to this key...");
            match client.list_models().await {
                Ok(models) => {
                    for model in models.iter().filter(|m| m.supports_generate_content()) {
                        info!(
                            "  available: {} ({})",
                            model.name,
                            model.display_name.as_deref().unwrap_or("-")
                        );
                    }
                }
                Err(list_err) => error!("Could not list models: {list_err}"),
            }
            bail!("GEMINI_API_KEY check failed for model '{}'", config.gemini_model)
        }
    }
}
