//! The budget search loop.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{QualitySchedule, SizeProbe};

/// One encode at one quality level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    /// Encoder quality used (0-100).
    pub quality: u8,
    /// Size of the encoded output in bytes.
    pub size_bytes: u64,
}

impl Attempt {
    /// Size in kilobytes (1 KB = 1024 bytes).
    pub fn size_kb(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }

    /// Whether this attempt is at or under the budget.
    pub fn fits(&self, target_size_kb: f64) -> bool {
        self.size_kb() <= target_size_kb
    }
}

/// How a budget search ended.
///
/// Running out of quality levels is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// `attempt` is the first (highest-quality) level that fit the budget.
    Achieved {
        attempt: Attempt,
        attempts: Vec<Attempt>,
    },
    /// No level fit. `last` is the lowest quality tried, `None` if the
    /// schedule was empty.
    Exhausted {
        last: Option<Attempt>,
        attempts: Vec<Attempt>,
    },
}

impl SearchOutcome {
    /// Whether an attempt fit the budget.
    pub fn is_achieved(&self) -> bool {
        matches!(self, SearchOutcome::Achieved { .. })
    }

    /// The attempt whose output is the final artifact.
    pub fn final_attempt(&self) -> Option<&Attempt> {
        match self {
            SearchOutcome::Achieved { attempt, .. } => Some(attempt),
            SearchOutcome::Exhausted { last, .. } => last.as_ref(),
        }
    }

    /// Every attempt in the order it was made.
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            SearchOutcome::Achieved { attempts, .. } | SearchOutcome::Exhausted { attempts, .. } => {
                attempts
            }
        }
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchOutcome::Achieved { attempt, .. } => write!(
                f,
                "Done! Size: {:.2} KB | Quality used: {}",
                attempt.size_kb(),
                attempt.quality
            ),
            SearchOutcome::Exhausted { .. } => {
                f.write_str("Couldn't reach target size, lowest quality used.")
            }
        }
    }
}

/// Walk `schedule` from the highest quality down until an attempt fits
/// `target_size_kb`.
///
/// Each level is measured exactly once, in schedule order. The first probe
/// error aborts the search and is returned as-is.
pub fn search_budget<P>(
    schedule: QualitySchedule,
    target_size_kb: f64,
    probe: &mut P,
) -> Result<SearchOutcome, P::Error>
where
    P: SizeProbe,
{
    let mut attempts = Vec::new();

    for quality in schedule {
        let attempt = Attempt {
            quality,
            size_bytes: probe.measure(quality)?,
        };
        debug!(
            quality,
            size_bytes = attempt.size_bytes,
            size_kb = attempt.size_kb(),
            target_size_kb,
            "encoded attempt"
        );
        attempts.push(attempt);

        if attempt.fits(target_size_kb) {
            info!(quality, size_kb = attempt.size_kb(), tries = attempts.len(), "target size reached");
            return Ok(SearchOutcome::Achieved { attempt, attempts });
        }
    }

    warn!(
        target_size_kb,
        tries = attempts.len(),
        lowest_quality = attempts.last().map(|a| a.quality),
        "target size not reached"
    );
    Ok(SearchOutcome::Exhausted {
        last: attempts.last().copied(),
        attempts,
    })
}
