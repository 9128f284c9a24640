//! Lossy WebP encoding.
//!
//! This module wraps libwebp through the `webp` crate's advanced
//! configuration so both the quality factor and the compression effort
//! (`method`) can be chosen per call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest width or height libwebp accepts.
pub const WEBP_MAX_DIMENSION: u32 = 16383;

/// Highest compression effort libwebp offers.
pub const MAX_METHOD: u8 = 6;

/// Errors that can occur during WebP encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero or above the WebP limit
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be between 1 and 16383")]
    InvalidDimensions { width: u32, height: u32 },

    /// libwebp rejected the picture or ran out of memory
    #[error("WebP encoding failed: {0}")]
    EncodingFailed(String),
}

/// Settings for a single lossy WebP encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebpOptions {
    /// Quality factor (0-100). Values above 100 are clamped.
    pub quality: u8,
    /// Compression effort (0-6). Higher is slower and smaller. Values above 6 are clamped.
    pub method: u8,
}

impl WebpOptions {
    /// Options at the given quality with maximum compression effort.
    pub fn new(quality: u8) -> Self {
        Self {
            quality,
            method: MAX_METHOD,
        }
    }

    /// Replace the compression effort.
    pub fn with_method(mut self, method: u8) -> Self {
        self.method = method;
        self
    }
}

impl Default for WebpOptions {
    fn default() -> Self {
        Self::new(90)
    }
}

/// Encode RGB pixel data to lossy WebP bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `options` - Quality and compression effort
///
/// # Returns
///
/// A complete RIFF/WebP file on success.
pub fn encode_webp(
    pixels: &[u8],
    width: u32,
    height: u32,
    options: &WebpOptions,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 || width > WEBP_MAX_DIMENSION || height > WEBP_MAX_DIMENSION {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut config = ::webp::WebPConfig::new()
        .map_err(|()| EncodeError::EncodingFailed("libwebp config version mismatch".to_string()))?;
    config.lossless = 0;
    config.quality = f32::from(options.quality.min(100));
    config.method = i32::from(options.method.min(MAX_METHOD));

    let encoder = ::webp::Encoder::from_rgb(pixels, width, height);
    let memory = encoder
        .encode_advanced(&config)
        .map_err(|e| EncodeError::EncodingFailed(format!("{e:?}")))?;

    Ok(memory.to_vec())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
