//! Skip-search for the next eligible date.
//!
//! An eligible date lies within [`Bounds`] and is not matched by a disabling
//! off-day rule. Disabled days are passed over silently; the only failure
//! signal is `None`, meaning no eligible date exists in that direction.

use chrono::NaiveDate;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
    Bounds,
    prelude::*,
    rules::{DayRule, disables_every_weekday, first_match},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[display(fmt = "previous")]
    Previous,
    #[display(fmt = "next")]
    Next,
}

impl Direction {
    /// The adjacent day in this direction, or `None` past the calendar's limits.
    fn advance(self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Previous => date.pred_opt(),
            Self::Next => date.succ_opt(),
        }
    }
}

/// Returns the first eligible date strictly after (or before) `from`.
///
/// The scan is linear and stops at the first candidate outside `bounds`.
pub fn step(from: NaiveDate, direction: Direction, bounds: &Bounds, off_days: &[DayRule]) -> Option<NaiveDate> {
    if disables_every_weekday(off_days) {
        trace!("every weekday is disabled, no {direction} date from {from}");
        return None;
    }

    let mut candidate = from;
    loop {
        candidate = direction.advance(candidate)?;
        if !bounds.contains(candidate) {
            trace!("{direction} scan from {from} left bounds at {candidate}");
            return None;
        }

        match first_match(off_days, candidate) {
            Some(rule) if rule.disabled => continue,
            _ => return Some(candidate),
        }
    }
}
