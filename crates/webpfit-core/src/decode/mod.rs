//! Source decoding for the budget search.
//!
//! The source is decoded once, fully into memory, and normalized to 8-bit
//! RGB. Every encoding attempt reuses the same buffer.
//!
//! # Examples
//!
//! ```ignore
//! use webpfit_core::decode::decode_file;
//!
//! let image = decode_file(Path::new("banner.png"), false).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod source;
mod types;

pub use source::{decode_bytes, decode_file, get_orientation};
pub use types::{DecodeError, DecodedImage, Orientation};
