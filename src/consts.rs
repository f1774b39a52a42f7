/// Canonical weekday tokens used for rule matching, indexed from Sunday.
/// Matching is case-sensitive: `"sat"` never matches a Saturday.
pub const WEEK_DAYS: [&str; DAYS_IN_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of days in a calendar week
pub const DAYS_IN_WEEK: usize = 7;

/// Default half-width of a symmetric window, in days
pub const DEFAULT_SYMMETRIC_DAYS: u32 = 7;

/// Default input format for date strings (`YYYY-MM-DD`)
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Default text of an unselected page item, e.g. `Fri 8`
pub const DEFAULT_ITEM_TEXT_FORMAT: &str = "%a %-d";
/// Default text of the selected page item, e.g. `Friday 8 March 2024`
pub const DEFAULT_SELECTED_TEXT_FORMAT: &str = "%A %-d %B %Y";
/// Default tooltip of a page item, e.g. `Friday, 8 March 2024`
pub const DEFAULT_ITEM_TOOLTIP_FORMAT: &str = "%A, %-d %B %Y";

pub const DEFAULT_OUT_OF_RANGE_TEXT: &str = "Out of Range";
pub const DEFAULT_DISABLED_TEXT: &str = "Disabled";
pub const DEFAULT_START_OF_RANGE_TEXT: &str = "Start of range";
pub const DEFAULT_END_OF_RANGE_TEXT: &str = "End of range";

/// Weekdays marked as off-days when no rules are configured
pub const DEFAULT_OFF_DAYS: [&str; 2] = ["Sat", "Sun"];
/// Weekdays marked as period separators when no rules are configured
pub const DEFAULT_SEPARATOR_DAYS: [&str; 1] = ["Mon"];
