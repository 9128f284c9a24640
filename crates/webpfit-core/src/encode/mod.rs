//! WebP encoding for budget attempts.
//!
//! This module provides functionality for:
//! - Encoding RGB buffers to lossy WebP with a chosen quality and effort
//!
//! All operations are synchronous and single-threaded. The same input and
//! options always produce the same bytes.
//!
//! # Examples
//!
//! ```ignore
//! use webpfit_core::encode::{encode_webp, WebpOptions};
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let webp_bytes = encode_webp(&pixels, 100, 100, &WebpOptions::new(80)).unwrap();
//! println!("Encoded {} bytes", webp_bytes.len());
//! ```

mod webp;

pub use self::webp::{encode_webp, EncodeError, WebpOptions, MAX_METHOD, WEBP_MAX_DIMENSION};
