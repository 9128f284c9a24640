//! Encode an image file to WebP under a size budget.
//!
//! [`encode_to_budget`] decodes the source once, then encodes it to the
//! destination at descending quality levels until the file on disk is at or
//! under the budget. The destination is overwritten by every attempt, so
//! whatever the search ends on (success or exhaustion) is what remains.
//!
//! # Examples
//!
//! ```ignore
//! use webpfit_core::encode_to_budget;
//!
//! let outcome = encode_to_budget("banner4.png", "output.webp", 30.0)?;
//! println!("{outcome}");
//! ```

mod config;
mod error;
mod probe;

use std::path::Path;

use tracing::info;

pub use config::BudgetConfig;
pub use error::{BudgetError, ErrorKind};
pub use probe::{FileProbe, MemoryProbe};

use crate::decode::{decode_file, DecodedImage};
use crate::search::{search_budget, SearchOutcome};

/// Encode `source` to `destination` as WebP, lowering quality until the
/// file is at most `target_size_kb` kilobytes.
///
/// Uses the default schedule (90 down to 10 in steps of 5) at maximum
/// compression effort.
pub fn encode_to_budget(
    source: impl AsRef<Path>,
    destination: impl AsRef<Path>,
    target_size_kb: f64,
) -> Result<SearchOutcome, BudgetError> {
    encode_to_budget_with(
        source.as_ref(),
        destination.as_ref(),
        &BudgetConfig::with_target(target_size_kb),
    )
}

/// [`encode_to_budget`] with every search parameter supplied by `config`.
///
/// # Errors
///
/// * `ErrorKind::Config` if `config` fails validation; nothing is read or written.
/// * `ErrorKind::Decode` if `source` is missing, unreadable or not an image;
///   no attempt is made.
/// * `ErrorKind::Io` if an attempt cannot be encoded or written. The search
///   stops at the first failure.
pub fn encode_to_budget_with(
    source: &Path,
    destination: &Path,
    config: &BudgetConfig,
) -> Result<SearchOutcome, BudgetError> {
    config.validate()?;

    let image = decode_file(source, config.apply_orientation)?;
    info!(
        source = %source.display(),
        destination = %destination.display(),
        width = image.width,
        height = image.height,
        target_size_kb = config.target_size_kb,
        "decoded source"
    );

    let mut probe = FileProbe::new(&image, destination, config);
    search_budget(config.schedule(), config.target_size_kb, &mut probe)
}

/// Run the budget search on an already decoded image without touching the
/// file system.
///
/// Returns the outcome together with the bytes of the final attempt, which
/// are exactly what [`encode_to_budget_with`] would leave on disk. The bytes
/// are `None` only when the schedule is empty.
pub fn encode_bytes_to_budget(
    image: &DecodedImage,
    config: &BudgetConfig,
) -> Result<(SearchOutcome, Option<Vec<u8>>), BudgetError> {
    config.validate()?;

    let mut probe = MemoryProbe::new(image, config);
    let outcome = search_budget(config.schedule(), config.target_size_kb, &mut probe)?;
    Ok((outcome, probe.into_last()))
}
