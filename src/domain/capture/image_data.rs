//! Encoded still image value object

use std::fmt;

use crate::domain::error::ImageDataError;

/// Supported image MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMimeType {
    Png,
    Jpeg,
    Webp,
}

impl ImageMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    /// Get the file extension
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Webp => "webp",
        }
    }

    /// Parse a data-URI subtype ("png", "jpeg", "jpg", "webp")
    pub fn from_subtype(subtype: &str) -> Result<Self, ImageDataError> {
        match subtype {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            other => Err(ImageDataError::UnsupportedMimeType(other.to_string())),
        }
    }
}

impl fmt::Display for ImageMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for ImageMimeType {
    fn default() -> Self {
        Self::Jpeg
    }
}

/// Value object representing an encoded still image ready for
/// digitization. Contains compressed image bytes and their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    data: Vec<u8>,
    mime_type: ImageMimeType,
}

impl ImageData {
    /// Create ImageData from raw encoded bytes
    pub fn new(data: Vec<u8>, mime_type: ImageMimeType) -> Self {
        Self { data, mime_type }
    }

    /// Create ImageData from a byte slice
    pub fn from_bytes(data: &[u8], mime_type: ImageMimeType) -> Self {
        Self {
            data: data.to_vec(),
            mime_type,
        }
    }

    /// Parse a base64 payload, accepting the data-URI form.
    ///
    /// Any `data:image/{png,jpeg,jpg,webp};base64,` prefix is stripped
    /// before decoding; a bare base64 string is treated as JPEG.
    pub fn from_data_uri(input: &str) -> Result<Self, ImageDataError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ImageDataError::Empty);
        }

        let (mime_type, payload) = match input
            .strip_prefix("data:image/")
            .and_then(|rest| rest.split_once(";base64,"))
        {
            Some((subtype, payload)) => (ImageMimeType::from_subtype(subtype)?, payload),
            None => (ImageMimeType::Jpeg, input),
        };

        use base64::Engine;
        let data = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| ImageDataError::InvalidEncoding(e.to_string()))?;

        if data.is_empty() {
            return Err(ImageDataError::Empty);
        }

        Ok(Self { data, mime_type })
    }

    /// Get the raw encoded image bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume and return the raw bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Get the MIME type
    pub fn mime_type(&self) -> ImageMimeType {
        self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Encode the image bytes as base64
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(&self.data)
    }
}
