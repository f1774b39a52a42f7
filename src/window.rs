use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_SYMMETRIC_DAYS, Settings,
    calendar::{add_days, end_of_week, start_of_week},
    classify::{DayDescriptor, classify},
    navigator::{Direction, step},
};

/// How the visible span is derived from the selected date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPolicy {
    /// The calendar week containing the selected date
    #[default]
    Weekly,
    /// `n` days either side of the selected date
    Symmetric(u32),
}

impl WindowPolicy {
    pub const fn symmetric() -> Self {
        Self::Symmetric(DEFAULT_SYMMETRIC_DAYS)
    }

    /// Returns the first and last visible dates, inclusive.
    pub fn span(self, selected: NaiveDate, settings: &Settings) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Weekly => (
                start_of_week(selected, settings.week_starts_on),
                end_of_week(selected, settings.week_starts_on),
            ),
            Self::Symmetric(days) => {
                let days = i64::from(days);
                (add_days(selected, -days), add_days(selected, days))
            },
        }
    }
}

/// Everything the presentation layer needs to draw the strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewWindow {
    pub items:                Vec<DayDescriptor>,
    /// No eligible date exists before the selection
    pub is_at_start_of_range: bool,
    /// No eligible date exists after the selection
    pub is_at_end_of_range:   bool,
    /// Tooltip for the "previous" control, set when it should be disabled
    pub previous_tooltip:     Option<String>,
    /// Tooltip for the "next" control, set when it should be disabled
    pub next_tooltip:         Option<String>,
}

impl ViewWindow {
    pub fn selected(&self) -> Option<&DayDescriptor> {
        self.items.iter().find(|item| item.is_selected)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.items.first().map(|item| item.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.items.last().map(|item| item.date)
    }
}

/// Builds the classified window around `selected`.
///
/// Days outside the bounds are still emitted (marked out of range) so the
/// strip shows context past the travel limits.
pub fn build_window(selected: NaiveDate, today: NaiveDate, settings: &Settings) -> ViewWindow {
    let (start, end) = settings.window.span(selected, settings);
    let items = days_between(start, end)
        .map(|date| classify(date, selected, today, settings))
        .collect::<Vec<_>>();

    let is_at_start_of_range = step(selected, Direction::Previous, &settings.bounds, &settings.off_days).is_none();
    let is_at_end_of_range = step(selected, Direction::Next, &settings.bounds, &settings.off_days).is_none();

    debug!(
        "built window {start}..={end} around {selected} ({} items, at start: {is_at_start_of_range}, at end: {is_at_end_of_range})",
        items.len()
    );

    ViewWindow {
        items,
        is_at_start_of_range,
        is_at_end_of_range,
        previous_tooltip: is_at_start_of_range.then(|| settings.text.start_of_range.clone()),
        next_tooltip: is_at_end_of_range.then(|| settings.text.end_of_range.clone()),
    }
}

/// Ascending dates from `start` to `end` inclusive; empty when `start > end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let first = (start <= end).then_some(start);
    std::iter::successors(first, move |date| date.succ_opt().filter(|next| *next <= end))
}
