use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::{Settings, calendar::weekday_from_name};

/// What a bound calendar picker needs to mirror the strip's rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerSettings {
    pub min_date:             NaiveDate,
    pub max_date:             NaiveDate,
    /// Weekdays named by any weekday off-day rule
    pub highlighted_weekdays: Vec<Weekday>,
    /// Weekdays named by a disabling weekday off-day rule
    pub disabled_weekdays:    Vec<Weekday>,
    pub highlight_today:      bool,
}

impl PickerSettings {
    pub fn from_settings(settings: &Settings) -> Self {
        let mut highlighted_weekdays = Vec::new();
        let mut disabled_weekdays = Vec::new();

        for rule in settings.off_days.iter().filter(|rule| rule.is_weekday_rule()) {
            for weekday in rule.days.iter().filter_map(|day| weekday_from_name(day)) {
                push_unique(&mut highlighted_weekdays, weekday);
                if rule.disabled {
                    push_unique(&mut disabled_weekdays, weekday);
                }
            }
        }

        Self {
            min_date: settings.bounds.start(),
            max_date: settings.bounds.end(),
            highlighted_weekdays,
            disabled_weekdays,
            highlight_today: settings.highlight_today,
        }
    }
}

fn push_unique(weekdays: &mut Vec<Weekday>, weekday: Weekday) {
    if !weekdays.contains(&weekday) {
        weekdays.push(weekday);
    }
}
