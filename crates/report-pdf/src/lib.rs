mod compose;
mod constants;
pub mod layout;
mod session;
mod types;

pub use compose::{compose_document, generate_pdf, report_pdf_bytes};
pub use constants::*;
pub use session::{GeneratedReport, REPORT_MIME_TYPE, generate, generate_with};
pub use types::{ComposeError, Result};
