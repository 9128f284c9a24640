//! Source image decoding with optional EXIF orientation handling.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, DecodedImage, Orientation};

/// Read and decode an image file into RGB pixels.
///
/// The format is detected from the file content, not its extension. A file
/// that cannot be read (including one that does not exist) is reported as
/// `DecodeError::IoError`.
///
/// # Arguments
///
/// * `path` - Path to the source image
/// * `apply_orientation` - Rotate/flip according to the EXIF orientation tag
pub fn decode_file(path: &Path, apply_orientation: bool) -> Result<DecodedImage, DecodeError> {
    let bytes = fs::read(path).map_err(|e| DecodeError::IoError(format!("{}: {e}", path.display())))?;
    decode_bytes(&bytes, apply_orientation)
}

/// Decode an in-memory image into RGB pixels.
///
/// Any alpha channel is dropped without compositing, and palette, grayscale
/// or 16-bit sources are converted to 8-bit RGB.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format cannot be recognized.
/// Returns `DecodeError::CorruptedFile` if the decoder rejects the data.
pub fn decode_bytes(bytes: &[u8], apply_orientation: bool) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = if apply_orientation {
        apply_exif_orientation(img, get_orientation(bytes))
    } else {
        img
    };

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}

/// Extract the EXIF orientation from an image container.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_exif_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
