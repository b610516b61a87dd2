//! Image metrics probe.
//!
//! Reads just enough of a png/jpeg stream to learn its pixel dimensions,
//! restoring the stream position afterwards so the same reader can be used
//! again to embed the picture.

use crate::types::{ReportError, Result};
use image::ImageReader;
use std::io::{BufReader, Cursor, Read, Seek, SeekFrom};

/// Probe the pixel dimensions of a seekable image stream.
///
/// The reader's position is restored to where it was on entry, whether the
/// probe succeeds or fails. Fails with [`ReportError::UnreadableImage`] when
/// the bytes are not a decodable raster format; callers treat that as
/// non-fatal and fall back to a square aspect ratio.
pub fn measure<R: Read + Seek>(reader: &mut R) -> Result<(u32, u32)> {
    let start = reader.stream_position()?;
    let result = read_dimensions(reader);
    reader.seek(SeekFrom::Start(start))?;
    result
}

/// Probe the pixel dimensions of an in-memory image buffer.
pub fn measure_bytes(bytes: &[u8]) -> Result<(u32, u32)> {
    let mut cursor = Cursor::new(bytes);
    measure(&mut cursor)
}

fn read_dimensions<R: Read + Seek>(reader: &mut R) -> Result<(u32, u32)> {
    ImageReader::new(BufReader::new(reader))
        .with_guessed_format()?
        .into_dimensions()
        .map_err(|e| ReportError::UnreadableImage(e.to_string()))
}
