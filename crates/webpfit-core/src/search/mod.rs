//! Quality search over an injectable size probe.
//!
//! The search policy (which quality to try next, when to stop) lives here and
//! knows nothing about files or codecs. Encoding is hidden behind
//! [`SizeProbe`], so the driver can be exercised with plain closures.
//!
//! # Examples
//!
//! ```ignore
//! use webpfit_core::search::{search_budget, QualitySchedule};
//!
//! let mut probe = |quality: u8| Ok::<u64, std::convert::Infallible>(u64::from(quality) * 1024);
//! let outcome = search_budget(QualitySchedule::default(), 30.0, &mut probe).unwrap();
//! println!("{outcome}");
//! ```

mod driver;
mod probe;
mod schedule;

pub use driver::{search_budget, Attempt, SearchOutcome};
pub use probe::{Memoized, SizeProbe};
pub use schedule::QualitySchedule;
