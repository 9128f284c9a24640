//! Search configuration.

use serde::{Deserialize, Serialize};

use super::BudgetError;
use crate::encode::{WebpOptions, MAX_METHOD};
use crate::search::QualitySchedule;

/// Parameters of one budget search.
///
/// Missing fields deserialize to their defaults, so a document containing
/// only `target_size_kb` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Largest acceptable output size in kilobytes (1 KB = 1024 bytes).
    pub target_size_kb: f64,
    /// First quality tried (0-100).
    pub start_quality: u8,
    /// Quality decrement between attempts. Must be non-zero.
    pub step: u8,
    /// Exclusive lower bound; qualities at or below it are never tried.
    pub floor_quality: u8,
    /// WebP compression effort (0-6).
    pub method: u8,
    /// Apply the source's EXIF orientation before encoding.
    pub apply_orientation: bool,
}

impl BudgetConfig {
    pub const DEFAULT_TARGET_SIZE_KB: f64 = 30.0;

    /// Default configuration with a different budget.
    pub fn with_target(target_size_kb: f64) -> Self {
        Self {
            target_size_kb,
            ..Self::default()
        }
    }

    /// Reject settings that would make the search meaningless.
    ///
    /// The budget itself is not checked: a non-positive budget simply
    /// exhausts the schedule.
    pub fn validate(&self) -> Result<(), BudgetError> {
        if self.step == 0 {
            return Err(BudgetError::Config("step must be greater than zero".to_string()));
        }
        if self.start_quality > 100 {
            return Err(BudgetError::Config(format!(
                "start_quality must be at most 100, got {}",
                self.start_quality
            )));
        }
        if self.method > MAX_METHOD {
            return Err(BudgetError::Config(format!(
                "method must be at most {MAX_METHOD}, got {}",
                self.method
            )));
        }
        Ok(())
    }

    /// Quality levels this configuration tries, highest first.
    pub fn schedule(&self) -> QualitySchedule {
        QualitySchedule::new(self.start_quality, self.step, self.floor_quality)
    }

    /// Encoder settings for one attempt.
    pub fn webp_options(&self, quality: u8) -> WebpOptions {
        WebpOptions::new(quality).with_method(self.method)
    }
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            target_size_kb: Self::DEFAULT_TARGET_SIZE_KB,
            start_quality: QualitySchedule::DEFAULT_START,
            step: QualitySchedule::DEFAULT_STEP,
            floor_quality: QualitySchedule::DEFAULT_FLOOR,
            method: MAX_METHOD,
            apply_orientation: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BudgetConfig::default();
        assert_eq!(config.target_size_kb, 30.0);
        assert_eq!(config.start_quality, 90);
        assert_eq!(config.step, 5);
        assert_eq!(config.floor_quality, 5);
        assert_eq!(config.method, 6);
        assert!(!config.apply_orientation);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_target() {
        let config = BudgetConfig::with_target(12.5);
        assert_eq!(config.target_size_kb, 12.5);
        assert_eq!(config.schedule(), QualitySchedule::default());
    }

    #[test]
    fn test_validate_rejects_zero_step() {
        let mut config = BudgetConfig::default();
        config.step = 0;
        assert!(matches!(config.validate(), Err(BudgetError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut config = BudgetConfig::default();
        config.start_quality = 101;
        assert!(config.validate().is_err());

        let mut config = BudgetConfig::default();
        config.method = 7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_budget_is_not_validated() {
        assert!(BudgetConfig::with_target(0.0).validate().is_ok());
        assert!(BudgetConfig::with_target(-5.0).validate().is_ok());
    }

    #[test]
    fn test_webp_options_carry_method() {
        let mut config = BudgetConfig::default();
        config.method = 3;
        let options = config.webp_options(55);
        assert_eq!(options.quality, 55);
        assert_eq!(options.method, 3);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: BudgetConfig = serde_json::from_str(r#"{"target_size_kb": 100.0, "step": 10}"#).unwrap();
        assert_eq!(config.target_size_kb, 100.0);
        assert_eq!(config.step, 10);
        assert_eq!(config.start_quality, 90);
        assert_eq!(config.method, 6);
    }
}
