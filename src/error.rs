use std::{fmt, io};

use image::ImageError;

/// Error type for ROM conversion
#[derive(Debug)]
pub enum ConvertError {
    /// Input image does not carry palette indices
    NotPaletted,
    /// Palette, character or sprite count is not the exact count the hardware expects
    SizeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// I/O error
    Io(io::Error),
    /// PNG decoding error
    Decode(png::DecodingError),
    /// Image processing error
    Image(ImageError),
    /// JSON serialisation error
    Json(serde_json::Error),
}

impl From<io::Error> for ConvertError {
    fn from(err: io::Error) -> Self {
        ConvertError::Io(err)
    }
}
impl From<png::DecodingError> for ConvertError {
    fn from(err: png::DecodingError) -> Self {
        ConvertError::Decode(err)
    }
}
impl From<ImageError> for ConvertError {
    fn from(err: ImageError) -> Self {
        ConvertError::Image(err)
    }
}
impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Json(err)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::NotPaletted => write!(f, "Image is not paletted"),
            ConvertError::SizeMismatch {
                what,
                expected,
                actual,
            } => write!(f, "Bad size: expected {} {}, got {}", expected, what, actual),
            ConvertError::Io(err) => write!(f, "I/O error: {}", err),
            ConvertError::Decode(err) => write!(f, "PNG decode error: {}", err),
            ConvertError::Image(err) => write!(f, "Image error: {}", err),
            ConvertError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for ConvertError {}
