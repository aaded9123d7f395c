use anyhow::{Context, Result};

use crate::core::interfaces::adapters::ClipboardService;
use crate::global_constants::LOG_TAG_CLIPBOARD;

pub struct ArboardClipboardService;

impl ClipboardService for ArboardClipboardService {
    fn copy_text(&self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new().context("Could not open clipboard")?;

        clipboard
            .set_text(text)
            .context("Could not set clipboard contents")?;

        log::info!(
            "{} Copied {} characters to clipboard",
            LOG_TAG_CLIPBOARD,
            text.len()
        );
        Ok(())
    }
}
