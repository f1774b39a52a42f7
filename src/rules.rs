use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    WEEK_DAYS,
    calendar::{weekday_from_name, weekday_name},
    classify::format_day,
};

/// A rule used for off-day and period-separator marking.
///
/// Without a `format`, a date matches when its weekday token (see
/// [`crate::WEEK_DAYS`]) is one of `days`. With a `format`, the date is
/// rendered through that `strftime` pattern and matched against `days`, so
/// `{"days": ["2024-12-25"], "format": "%Y-%m-%d"}` marks a single holiday.
/// Only off-day rules honour `disabled` and `tooltip`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayRule {
    pub days: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl DayRule {
    /// Creates a non-disabling rule matching the given weekday tokens.
    pub fn new<I, S>(days: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            days: days.into_iter().map(Into::into).collect(),
            format: None,
            disabled: false,
            tooltip: None,
        }
    }

    /// Matches dates rendered through `format` instead of weekday tokens.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Marks matching days as not selectable.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Sets the tooltip shown on disabled matching days.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// True when the rule matches by weekday token rather than a format.
    pub fn is_weekday_rule(&self) -> bool {
        self.format.is_none()
    }

    pub fn matches(&self, date: NaiveDate) -> bool {
        match &self.format {
            None => self.matches_name(weekday_name(date)),
            Some(format) => self.matches_name(&format_day(date, format)),
        }
    }

    fn matches_name(&self, name: &str) -> bool {
        self.days.iter().any(|day| day == name)
    }

    /// Weekday tokens that are not weekday names and therefore never match.
    /// Always empty for format rules.
    pub fn unknown_days(&self) -> impl Iterator<Item = &str> {
        self.days
            .iter()
            .map(String::as_str)
            .filter(move |day| self.is_weekday_rule() && weekday_from_name(day).is_none())
    }
}

/// Returns the first rule, in declaration order, matching `date`.
pub fn first_match(rules: &[DayRule], date: NaiveDate) -> Option<&DayRule> {
    rules.iter().find(|rule| rule.matches(date))
}

/// True when `date` matches an off-day rule that disables selection.
pub fn is_disabled(off_days: &[DayRule], date: NaiveDate) -> bool {
    first_match(off_days, date).is_some_and(|rule| rule.disabled)
}

/// True when every weekday resolves to a disabling off-day rule, so no date
/// can ever be selected by navigation.
pub fn disables_every_weekday(off_days: &[DayRule]) -> bool {
    WEEK_DAYS.iter().all(|name| always_disabled(off_days, name))
}

fn always_disabled(off_days: &[DayRule], weekday: &str) -> bool {
    for rule in off_days {
        match rule.format {
            None if rule.matches_name(weekday) => return rule.disabled,
            // A selectable format rule may match some dates on this weekday
            Some(_) if !rule.disabled => return false,
            _ => {},
        }
    }
    false
}
