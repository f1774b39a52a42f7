//! Configuration of a [`crate::DatePagination`].
//!
//! [`PaginationOptions`] is the loosely-typed, deserializable form a host
//! supplies. [`Settings`] is the validated, immutable value every engine
//! function receives.

use chrono::{NaiveDate, Weekday};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    Bounds, DEFAULT_DISABLED_TEXT, DEFAULT_END_OF_RANGE_TEXT, DEFAULT_ITEM_TEXT_FORMAT, DEFAULT_ITEM_TOOLTIP_FORMAT,
    DEFAULT_OFF_DAYS, DEFAULT_OUT_OF_RANGE_TEXT, DEFAULT_SELECTED_TEXT_FORMAT, DEFAULT_SEPARATOR_DAYS,
    DEFAULT_START_OF_RANGE_TEXT, DateInput, Error, WindowPolicy,
    rules::{DayRule, disables_every_weekday},
};

/// chrono `strftime` patterns used to label page items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayFormats {
    pub item_text:     String,
    pub selected_text: String,
    pub item_tooltip:  String,
}

impl Default for DisplayFormats {
    fn default() -> Self {
        Self {
            item_text:     DEFAULT_ITEM_TEXT_FORMAT.to_owned(),
            selected_text: DEFAULT_SELECTED_TEXT_FORMAT.to_owned(),
            item_tooltip:  DEFAULT_ITEM_TOOLTIP_FORMAT.to_owned(),
        }
    }
}

/// Fixed strings shown instead of a formatted date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Texts {
    pub out_of_range:   String,
    pub disabled:       String,
    pub start_of_range: String,
    pub end_of_range:   String,
}

impl Default for Texts {
    fn default() -> Self {
        Self {
            out_of_range:   DEFAULT_OUT_OF_RANGE_TEXT.to_owned(),
            disabled:       DEFAULT_DISABLED_TEXT.to_owned(),
            start_of_range: DEFAULT_START_OF_RANGE_TEXT.to_owned(),
            end_of_range:   DEFAULT_END_OF_RANGE_TEXT.to_owned(),
        }
    }
}

/// Options accepted by [`crate::DatePagination::configure`].
///
/// Every field has a default, so `{}` is a valid configuration: unbounded,
/// selecting today, a Sunday-first weekly window, weekends marked (but
/// selectable) and Mondays marked as separators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationOptions {
    pub start_date:        Option<DateInput>,
    pub end_date:          Option<DateInput>,
    /// Initially selected date; today when absent.
    pub selected_date:     Option<DateInput>,
    pub window:            WindowPolicy,
    pub week_starts_on:    Weekday,
    pub off_days:          Vec<DayRule>,
    pub period_separators: Vec<DayRule>,
    pub highlight_today:   bool,
    pub formats:           DisplayFormats,
    pub text:              Texts,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            start_date:        None,
            end_date:          None,
            selected_date:     None,
            window:            WindowPolicy::default(),
            week_starts_on:    Weekday::Sun,
            off_days:          vec![DayRule::new(DEFAULT_OFF_DAYS)],
            period_separators: vec![DayRule::new(DEFAULT_SEPARATOR_DAYS)],
            highlight_today:   true,
            formats:           DisplayFormats::default(),
            text:              Texts::default(),
        }
    }
}

impl PaginationOptions {
    #[must_use]
    pub fn with_bounds(mut self, start: impl Into<DateInput>, end: impl Into<DateInput>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    #[must_use]
    pub fn with_selected_date(mut self, selected: impl Into<DateInput>) -> Self {
        self.selected_date = Some(selected.into());
        self
    }

    #[must_use]
    pub fn with_window(mut self, window: WindowPolicy) -> Self {
        self.window = window;
        self
    }

    #[must_use]
    pub fn with_week_starts_on(mut self, week_starts_on: Weekday) -> Self {
        self.week_starts_on = week_starts_on;
        self
    }

    #[must_use]
    pub fn with_off_days(mut self, off_days: Vec<DayRule>) -> Self {
        self.off_days = off_days;
        self
    }

    #[must_use]
    pub fn with_period_separators(mut self, separators: Vec<DayRule>) -> Self {
        self.period_separators = separators;
        self
    }

    /// Parses the dates and validates the bounds.
    ///
    /// Returns the settings together with the requested initial selection,
    /// which is not yet clamped into the bounds.
    ///
    /// # Errors
    /// `Error::InvalidDateFormat` if any date string does not match its
    /// format, `Error::InvalidRange` if the start date is after the end date.
    pub fn resolve(self, today: NaiveDate) -> Result<(Settings, NaiveDate), Error> {
        let start = parse_optional(self.start_date.as_ref())?.unwrap_or(NaiveDate::MIN);
        let end = parse_optional(self.end_date.as_ref())?.unwrap_or(NaiveDate::MAX);
        let bounds = Bounds::new(start, end)?;
        let selected = parse_optional(self.selected_date.as_ref())?.unwrap_or(today);

        for rule in self.off_days.iter().chain(&self.period_separators) {
            for day in rule.unknown_days() {
                warn!("day rule token {day:?} is not a weekday name and will never match");
            }
        }
        if disables_every_weekday(&self.off_days) {
            warn!("off-day rules disable every weekday; navigation will never move");
        }

        let settings = Settings {
            bounds,
            window: self.window,
            week_starts_on: self.week_starts_on,
            off_days: self.off_days,
            separators: self.period_separators,
            highlight_today: self.highlight_today,
            formats: self.formats,
            text: self.text,
        };
        Ok((settings, selected))
    }
}

fn parse_optional(input: Option<&DateInput>) -> Result<Option<NaiveDate>, Error> {
    Ok(input.map(DateInput::parse).transpose()?)
}

/// Validated configuration shared by the classifier, window builder and
/// navigator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bounds:          Bounds,
    pub window:          WindowPolicy,
    pub week_starts_on:  Weekday,
    pub off_days:        Vec<DayRule>,
    pub separators:      Vec<DayRule>,
    pub highlight_today: bool,
    pub formats:         DisplayFormats,
    pub text:            Texts,
}

impl Default for Settings {
    fn default() -> Self {
        let options = PaginationOptions::default();
        Self {
            bounds:          Bounds::unbounded(),
            window:          options.window,
            week_starts_on:  options.week_starts_on,
            off_days:        options.off_days,
            separators:      options.period_separators,
            highlight_today: options.highlight_today,
            formats:         options.formats,
            text:            options.text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RangeError, test_utils::date};

    #[test]
    fn test_defaults() {
        let options = PaginationOptions::default();
        assert_eq!(options.window, WindowPolicy::Weekly);
        assert_eq!(options.week_starts_on, Weekday::Sun);
        assert_eq!(options.off_days, vec![DayRule::new(["Sat", "Sun"])]);
        assert_eq!(options.period_separators, vec![DayRule::new(["Mon"])]);
        assert!(options.highlight_today);
    }

    #[test]
    fn test_resolve_defaults_to_unbounded_today() {
        let (settings, selected) = PaginationOptions::default()
            .resolve(date(2024, 3, 8))
            .expect("defaults should resolve");
        assert_eq!(settings.bounds, Bounds::unbounded());
        assert_eq!(selected, date(2024, 3, 8));
    }

    #[test]
    fn test_resolve_parses_dates() {
        let options = PaginationOptions::default()
            .with_bounds("2024-01-01", DateInput::new("31/12/2024").with_format("%d/%m/%Y"))
            .with_selected_date("2025-06-01");
        let (settings, selected) = options.resolve(date(2024, 3, 8)).expect("options should resolve");
        assert_eq!(settings.bounds.start(), date(2024, 1, 1));
        assert_eq!(settings.bounds.end(), date(2024, 12, 31));
        // Clamping is left to the selection state
        assert_eq!(selected, date(2025, 6, 1));
    }

    #[test]
    fn test_resolve_invalid_date_format() {
        let options = PaginationOptions::default().with_selected_date("2024-13-40");
        let result = options.resolve(date(2024, 3, 8));
        assert!(matches!(result, Err(Error::InvalidDateFormat(_))));

        let options = PaginationOptions::default().with_bounds("01/01/2024", "2024-12-31");
        let result = options.resolve(date(2024, 3, 8));
        assert!(matches!(result, Err(Error::InvalidDateFormat(_))));
    }

    #[test]
    fn test_resolve_invalid_range() {
        let options = PaginationOptions::default().with_bounds("2024-12-31", "2024-01-01");
        let result = options.resolve(date(2024, 3, 8));
        assert!(matches!(
            result,
            Err(Error::InvalidRange(RangeError::InvalidRange { .. }))
        ));
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "start_date": { "date": "2024-01-01" },
            "end_date": { "date": "31.12.2024", "format": "%d.%m.%Y" },
            "window": { "symmetric": 3 },
            "week_starts_on": "Mon",
            "off_days": [{ "days": ["Sat", "Sun"], "disabled": true, "tooltip": "Closed" }],
            "period_separators": [],
            "text": { "disabled": "Unavailable" }
        }"#;
        let options: PaginationOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.window, WindowPolicy::Symmetric(3));
        assert_eq!(options.week_starts_on, Weekday::Mon);
        assert!(options.period_separators.is_empty());
        assert!(options.highlight_today);
        assert_eq!(options.text.disabled, "Unavailable");
        assert_eq!(options.text.out_of_range, DEFAULT_OUT_OF_RANGE_TEXT);
        assert_eq!(options.formats, DisplayFormats::default());

        let (settings, _) = options.resolve(date(2024, 3, 8)).expect("options should resolve");
        assert_eq!(settings.bounds.end(), date(2024, 12, 31));
        assert_eq!(settings.off_days[0].tooltip.as_deref(), Some("Closed"));
    }

    #[test]
    fn test_deserialize_empty_object() {
        let options: PaginationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, PaginationOptions::default());
    }
}
