use std::fmt::Write;

use chrono::NaiveDate;
use log::warn;
use serde::Serialize;

use crate::{
    Settings,
    calendar::is_same,
    rules::{DayRule, first_match},
};

/// Classification of a single day in a view window.
///
/// Descriptors are rebuilt on every window computation and carry no
/// identity beyond their date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDescriptor {
    pub date:        NaiveDate,
    pub in_range:    bool,
    pub is_selected: bool,
    pub is_today:    bool,
    /// First matching off-day rule, if any
    pub off_day:     Option<DayRule>,
    /// First matching separator rule, if any
    pub separator:   Option<DayRule>,
    pub text:        String,
    pub tooltip:     String,
}

impl DayDescriptor {
    pub fn is_off_day(&self) -> bool {
        self.off_day.is_some()
    }

    pub fn is_separator(&self) -> bool {
        self.separator.is_some()
    }

    /// True when the matching off-day rule disables selection.
    pub fn is_disabled(&self) -> bool {
        self.off_day.as_ref().is_some_and(|rule| rule.disabled)
    }

    /// Whether a click on this day may select it.
    pub fn is_selectable(&self) -> bool {
        self.in_range && !self.is_disabled()
    }
}

/// Classifies `date` relative to the current selection and today.
pub fn classify(date: NaiveDate, selected: NaiveDate, today: NaiveDate, settings: &Settings) -> DayDescriptor {
    let in_range = settings.bounds.contains(date);
    let is_selected = is_same(date, selected);
    let off_day = first_match(&settings.off_days, date);
    let separator = first_match(&settings.separators, date);

    let text_format = if is_selected {
        &settings.formats.selected_text
    } else {
        &settings.formats.item_text
    };

    DayDescriptor {
        date,
        in_range,
        is_selected,
        is_today: is_same(date, today),
        text: format_day(date, text_format),
        tooltip: tooltip(date, in_range, off_day, settings),
        off_day: off_day.cloned(),
        separator: separator.cloned(),
    }
}

/// Out of range beats a disabling off-day, which beats the formatted date.
fn tooltip(date: NaiveDate, in_range: bool, off_day: Option<&DayRule>, settings: &Settings) -> String {
    if !in_range {
        return settings.text.out_of_range.clone();
    }

    match off_day {
        Some(rule) if rule.disabled => rule.tooltip.clone().unwrap_or_else(|| settings.text.disabled.clone()),
        _ => format_day(date, &settings.formats.item_tooltip),
    }
}

/// Formats `date` with a `strftime` pattern, falling back to ISO 8601 when
/// the pattern is malformed.
pub(crate) fn format_day(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        warn!("invalid display format {pattern:?}, using ISO 8601");
        return date.to_string();
    }
    out
}
