//! Generation boundary consumed by UI collaborators.

use crate::compose::report_pdf_bytes;
use crate::layout::LayoutParams;
use crate::types::{ComposeError, Result};
use report_core::{ReportSettings, ReportStore};

/// MIME type of the serialized report document.
pub const REPORT_MIME_TYPE: &str = "application/pdf";

/// A finished binary plus the bookkeeping the collaborator needs to offer it
/// for download and to detect staleness.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub bytes: Vec<u8>,
    pub suggested_filename: String,
    /// Store revision captured at generation time.
    pub revision: u64,
}

impl GeneratedReport {
    /// True once any store mutation has landed after this binary was
    /// produced; the collaborator should regenerate before offering it.
    pub fn is_stale(&self, store: &ReportStore) -> bool {
        store.revision() != self.revision
    }
}

/// Compose the full document for the store's current record order.
///
/// Rejected with [`ComposeError::EmptyReport`] before any page is emitted
/// when the store holds no records.
pub fn generate(store: &ReportStore, settings: &ReportSettings) -> Result<GeneratedReport> {
    generate_with(store, settings, &LayoutParams::default())
}

/// [`generate`] with explicit layout geometry.
pub fn generate_with(
    store: &ReportStore,
    settings: &ReportSettings,
    params: &LayoutParams,
) -> Result<GeneratedReport> {
    if store.is_empty() {
        return Err(ComposeError::EmptyReport);
    }
    let bytes = report_pdf_bytes(store.records(), settings, params)?;
    Ok(GeneratedReport {
        bytes,
        suggested_filename: settings.suggested_filename(),
        revision: store.revision(),
    })
}
