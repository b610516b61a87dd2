use std::fmt;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unreadable image: {0}")]
    UnreadableImage(String),
    #[error("Position {position} out of range ({len} records)")]
    IndexOutOfRange { position: usize, len: usize },
    #[error("Unknown record id {0}")]
    UnknownId(RecordId),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;

/// Stable identity of a record, assigned at creation and never reused or
/// recomputed on reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw image bytes plus lazily probed pixel dimensions.
///
/// Bytes are shared behind an `Arc` so cloning a record into a composer
/// snapshot does not copy image content. Dimensions are probed at most once
/// and cached; `None` marks bytes that could not be decoded.
#[derive(Debug, Clone)]
pub struct ImageData {
    bytes: Arc<Vec<u8>>,
    dimensions: OnceLock<Option<(u32, u32)>>,
}

impl ImageData {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: Arc::new(bytes),
            dimensions: OnceLock::new(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Pixel dimensions, probed on first use. `None` if the bytes are not a
    /// decodable raster image.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        *self
            .dimensions
            .get_or_init(|| crate::probe::measure_bytes(&self.bytes).ok())
    }

    /// Width over height. Unreadable bytes and degenerate heights fall back
    /// to 1.0, the square ratio.
    pub fn aspect_ratio(&self) -> f32 {
        match self.dimensions() {
            Some((w, h)) if h > 0 => w as f32 / h as f32,
            _ => 1.0,
        }
    }
}

impl PartialEq for ImageData {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl From<Vec<u8>> for ImageData {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

/// One category/description/image triple, rendered as one content page.
///
/// Records are created by [`crate::ReportStore`] on append and mutated only
/// through it; `description` may be empty, which renders as an empty text
/// frame rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub category: String,
    pub description: String,
    pub image: ImageData,
}
