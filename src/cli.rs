use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::client_settings::LensClientSettings;
use crate::core::orchestrators::text_extraction_orchestrator::OutputDestination;
use crate::global_constants;

#[derive(Parser, Debug)]
#[command(name = global_constants::APPLICATION_NAME, version, about = "Extract text from an image using Google Lens")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,

    /// Image to read text from; the text is printed to stdout
    pub image_path: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, global = true, default_value_t = global_constants::DEFAULT_REQUEST_TIMEOUT_SECONDS)]
    pub timeout_secs: u64,

    /// Fetch session cookies from Lens before uploading
    #[arg(long, global = true)]
    pub handshake: bool,

    /// Ignore HTTP(S)_PROXY and other system proxy settings
    #[arg(long, global = true)]
    pub no_proxy: bool,

    /// Log at debug level when RUST_LOG is not set
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Copy the recognized text to the clipboard instead of printing it
    Clipboard { image_path: Option<PathBuf> },
}

impl Cli {
    pub fn resolve_target(&self) -> anyhow::Result<(OutputDestination, &Path)> {
        let (destination, image_path) = match &self.command {
            Some(CliCommand::Clipboard { image_path }) => {
                (OutputDestination::Clipboard, image_path.as_deref())
            }
            None => (OutputDestination::Stdout, self.image_path.as_deref()),
        };

        let image_path = image_path
            .ok_or_else(|| anyhow::anyhow!(global_constants::ERROR_MISSING_IMAGE_ARGUMENT))?;

        Ok((destination, image_path))
    }

    pub fn client_settings(&self) -> LensClientSettings {
        LensClientSettings::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_handshake(self.handshake)
            .with_system_proxy(!self.no_proxy)
    }

    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
