//! Size probes backed by the WebP encoder.

use std::fs;
use std::path::Path;

use super::{BudgetConfig, BudgetError};
use crate::decode::DecodedImage;
use crate::encode::encode_webp;
use crate::search::SizeProbe;

/// Encodes to `destination` and reports the size on disk.
///
/// Every attempt overwrites the destination; after a search the file holds
/// the last attempt's output.
pub struct FileProbe<'a> {
    image: &'a DecodedImage,
    destination: &'a Path,
    config: &'a BudgetConfig,
}

impl<'a> FileProbe<'a> {
    /// Probe writing every attempt to `destination`.
    pub fn new(image: &'a DecodedImage, destination: &'a Path, config: &'a BudgetConfig) -> Self {
        Self {
            image,
            destination,
            config,
        }
    }
}

impl SizeProbe for FileProbe<'_> {
    type Error = BudgetError;

    fn measure(&mut self, quality: u8) -> Result<u64, BudgetError> {
        let bytes = encode_webp(
            &self.image.pixels,
            self.image.width,
            self.image.height,
            &self.config.webp_options(quality),
        )?;

        fs::write(self.destination, &bytes).map_err(|e| BudgetError::io(self.destination, e))?;
        let metadata =
            fs::metadata(self.destination).map_err(|e| BudgetError::io(self.destination, e))?;
        Ok(metadata.len())
    }
}

/// Encodes in memory, keeping the bytes of the latest attempt.
pub struct MemoryProbe<'a> {
    image: &'a DecodedImage,
    config: &'a BudgetConfig,
    last: Option<Vec<u8>>,
}

impl<'a> MemoryProbe<'a> {
    /// Probe with no attempt recorded yet.
    pub fn new(image: &'a DecodedImage, config: &'a BudgetConfig) -> Self {
        Self {
            image,
            config,
            last: None,
        }
    }

    /// Bytes of the most recent attempt, if any.
    pub fn into_last(self) -> Option<Vec<u8>> {
        self.last
    }
}

impl SizeProbe for MemoryProbe<'_> {
    type Error = BudgetError;

    fn measure(&mut self, quality: u8) -> Result<u64, BudgetError> {
        let bytes = encode_webp(
            &self.image.pixels,
            self.image.width,
            self.image.height,
            &self.config.webp_options(quality),
        )?;
        let size = bytes.len() as u64;
        self.last = Some(bytes);
        Ok(size)
    }
}
