use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};
use tracing::warn;

/// Page texts in page order, joined with `\n`.
///
/// `pdf-extract` can panic on malformed content streams; the panic is caught
/// here and reported as an ordinary error.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let pages = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    }))
    .map_err(|payload| {
        let reason = panic_message(&*payload);
        warn!("PDF extraction panicked: {reason}");
        anyhow!("PDF extraction aborted: {reason}")
    })?
    .map_err(|e| anyhow!("Failed to extract PDF text: {e}"))?;

    Ok(pages
        .iter()
        .map(|page| page.trim_end_matches(['\n', '\r']))
        .collect::<Vec<_>>()
        .join("\n"))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
