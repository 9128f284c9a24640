//! webpfit Core - WebP encoding under a size budget
//!
//! This crate converts a single image to lossy WebP, lowering the encoder
//! quality step by step until the output fits a target size in kilobytes or
//! the quality floor is reached.
//!
//! # Module Structure
//!
//! - `decode` - Read the source and normalize it to 8-bit RGB
//! - `encode` - Lossy WebP encoding at a given quality and effort
//! - `search` - Quality schedule and the search driver over a size probe
//! - `budget` - The file-to-file procedure, its configuration and errors

pub mod budget;
pub mod decode;
pub mod encode;
pub mod search;

pub use budget::{
    encode_bytes_to_budget, encode_to_budget, encode_to_budget_with, BudgetConfig, BudgetError,
    ErrorKind,
};
pub use decode::{DecodeError, DecodedImage};
pub use encode::{encode_webp, EncodeError, WebpOptions};
pub use search::{search_budget, Attempt, QualitySchedule, SearchOutcome, SizeProbe};
