mod adapters;
mod cli;
mod client_settings;
mod core;
mod global_constants;
mod utils;

#[cfg(test)]
mod lens_fixtures;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use crate::adapters::{ArboardClipboardService, GoogleLensClient, GoogleLensOcrService};
use crate::cli::Cli;
use crate::core::models::{ImagePayload, LensOcrError};
use crate::core::orchestrators::text_extraction_orchestrator::TextExtractionOrchestrator;
use crate::global_constants::LOG_TAG_APP;

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let (destination, image_path) = cli.resolve_target()?;

    let image_bytes = tokio::fs::read(image_path).await.with_context(|| {
        format!(
            "{}: {}",
            global_constants::ERROR_CONTEXT_READ_IMAGE,
            image_path.display()
        )
    })?;
    let image = ImagePayload::build_from_file_contents(image_path, image_bytes)?;

    let client = GoogleLensClient::build(cli.client_settings())?;
    let orchestrator = TextExtractionOrchestrator::build(
        Arc::new(GoogleLensOcrService::new(client)),
        Arc::new(ArboardClipboardService),
    );

    let mut stdout = std::io::stdout().lock();
    orchestrator
        .extract_and_deliver(&image, destination, &mut stdout)
        .await?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.default_log_filter()),
    )
    .init();

    log::info!(
        "{} Starting {}",
        LOG_TAG_APP,
        global_constants::APPLICATION_NAME
    );

    if let Err(error) = run(&cli).await {
        if let Some(body) = error
            .downcast_ref::<LensOcrError>()
            .and_then(LensOcrError::response_body)
        {
            eprintln!("Google Lens response body:\n{}", body);
        }
        return Err(error);
    }

    Ok(())
}
