use chrono::NaiveDate;

use crate::prelude::*;

/// The hard selectable range of dates (inclusive on both ends).
/// The start date must be less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct Bounds {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for bounds construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl Bounds {
    /// Creates bounds with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Bounds covering every representable date.
    pub const fn unbounded() -> Self {
        Self {
            start: NaiveDate::MIN,
            end:   NaiveDate::MAX,
        }
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Checks if `date` lies within the bounds, both ends included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Moves `date` onto the nearest bound if it lies outside.
    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.start, self.end)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_rejects_reversed_dates() {
        let err = Bounds::new(date(2024, 12, 31), date(2024, 1, 1)).expect_err("reversed bounds accepted");
        assert_eq!(err, RangeError::InvalidRange {
            start: date(2024, 12, 31),
            end:   date(2024, 1, 1),
        });
        assert_eq!(
            err.to_string(),
            "Invalid date range: start (2024-12-31) is after end (2024-01-01)"
        );
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = Bounds::new(date(2024, 1, 1), date(2024, 1, 3)).expect("failed to construct bounds");

        assert!(bounds.contains(date(2024, 1, 1)));
        assert!(bounds.contains(date(2024, 1, 2)));
        assert!(bounds.contains(date(2024, 1, 3)));
        assert!(!bounds.contains(date(2023, 12, 31)));
        assert!(!bounds.contains(date(2024, 1, 4)));

        let single_day = Bounds::new(date(2024, 6, 1), date(2024, 6, 1)).expect("failed to construct bounds");
        assert!(single_day.contains(date(2024, 6, 1)));
        assert!(!single_day.contains(date(2024, 6, 2)));
    }

    #[test]
    fn test_clamp() {
        let bounds = Bounds::new(date(2024, 1, 1), date(2024, 12, 31)).expect("failed to construct bounds");

        assert_eq!(bounds.clamp(date(2023, 6, 1)), date(2024, 1, 1));
        assert_eq!(bounds.clamp(date(2025, 6, 1)), date(2024, 12, 31));
        assert_eq!(bounds.clamp(date(2024, 6, 1)), date(2024, 6, 1));
    }

    #[test]
    fn test_default_is_unbounded() {
        let bounds = Bounds::default();
        assert_eq!(bounds.start(), NaiveDate::MIN);
        assert_eq!(bounds.end(), NaiveDate::MAX);
        assert!(bounds.contains(date(1, 1, 1)));
        assert!(bounds.contains(date(9999, 12, 31)));
    }

    #[test]
    fn test_display() {
        let bounds = Bounds::new(date(2024, 1, 1), date(2024, 12, 31)).expect("failed to construct bounds");
        assert_eq!(bounds.to_string(), "2024-01-01/2024-12-31");
    }
}
