mod category;
pub mod probe;
mod settings;
mod store;
mod types;

pub use category::{
    CUSTOM_CATEGORY_OPTION, FALLBACK_CATEGORY, STANDARD_CATEGORIES, resolve_category,
};
pub use settings::{ReportSettings, SubtitleFormat};
pub use store::ReportStore;
pub use types::{ImageData, Record, RecordId, ReportError, Result};
