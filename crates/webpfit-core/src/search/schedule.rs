//! Descending quality schedule.

/// Quality levels tried by the budget search, highest first.
///
/// Yields `start`, `start - step`, `start - 2 * step`, ... for as long as the
/// value stays strictly above `floor`. A decrement that would go below zero
/// ends the schedule. With a zero step only `start` is yielded.
///
/// The default schedule is 90, 85, ..., 10 (17 levels); 5 itself is never
/// tried because the floor is exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualitySchedule {
    next: Option<u8>,
    step: u8,
    floor: u8,
}

impl QualitySchedule {
    /// Default starting quality.
    pub const DEFAULT_START: u8 = 90;
    /// Default decrement between attempts.
    pub const DEFAULT_STEP: u8 = 5;
    /// Default exclusive lower bound.
    pub const DEFAULT_FLOOR: u8 = 5;

    /// Create a schedule from its starting quality, step and exclusive floor.
    pub fn new(start: u8, step: u8, floor: u8) -> Self {
        Self {
            next: Some(start),
            step,
            floor,
        }
    }
}

impl Default for QualitySchedule {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START, Self::DEFAULT_STEP, Self::DEFAULT_FLOOR)
    }
}

impl Iterator for QualitySchedule {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        let quality = self.next.filter(|&q| q > self.floor)?;
        self.next = match self.step {
            0 => None,
            step => quality.checked_sub(step),
        };
        Some(quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let qualities: Vec<u8> = QualitySchedule::default().collect();
        let expected: Vec<u8> = (2..=18).rev().map(|k| k * 5).collect();

        assert_eq!(qualities.len(), 17);
        assert_eq!(qualities, expected);
        assert_eq!(qualities.first(), Some(&90));
        assert_eq!(qualities.last(), Some(&10));
        assert!(!qualities.contains(&5));
    }

    #[test]
    fn test_start_at_or_below_floor_is_empty() {
        assert_eq!(QualitySchedule::new(5, 5, 5).count(), 0);
        assert_eq!(QualitySchedule::new(3, 1, 10).count(), 0);
    }

    #[test]
    fn test_step_larger_than_quality_stops() {
        let qualities: Vec<u8> = QualitySchedule::new(7, 5, 0).collect();
        assert_eq!(qualities, vec![7, 2]);
    }

    #[test]
    fn test_floor_zero_reaches_zero_exclusive() {
        let qualities: Vec<u8> = QualitySchedule::new(10, 5, 0).collect();
        assert_eq!(qualities, vec![10, 5]);
    }

    #[test]
    fn test_zero_step_yields_start_once() {
        let qualities: Vec<u8> = QualitySchedule::new(50, 0, 5).collect();
        assert_eq!(qualities, vec![50]);
    }

    #[test]
    fn test_uneven_step() {
        let qualities: Vec<u8> = QualitySchedule::new(100, 30, 5).collect();
        assert_eq!(qualities, vec![100, 70, 40, 10]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: Every yielded quality is above the floor, and the sequence strictly decreases by `step`.
        #[test]
        fn prop_schedule_is_strictly_descending(
            start in 0u8..=100,
            step in 1u8..=50,
            floor in 0u8..=100,
        ) {
            let qualities: Vec<u8> = QualitySchedule::new(start, step, floor).collect();

            prop_assert!(qualities.iter().all(|&q| q > floor));
            for pair in qualities.windows(2) {
                prop_assert_eq!(pair[0] - pair[1], step);
            }
            if start > floor {
                prop_assert_eq!(qualities.first().copied(), Some(start));
            }
        }

        /// Property: The schedule always terminates within `start / step + 1` levels.
        #[test]
        fn prop_schedule_is_bounded(start in 0u8..=255, step in 1u8..=255, floor in 0u8..=255) {
            let count = QualitySchedule::new(start, step, floor).count();
            prop_assert!(count <= usize::from(start / step) + 1);
        }
    }
}
