//! Date window, day classification and navigation engine for a paginated
//! strip of selectable days.
//!
//! [`DatePagination`] owns the selected date and answers the questions a
//! presentation layer asks: which days are visible ([`ViewWindow`]), how each
//! one should look ([`DayDescriptor`]), and where the previous/next controls
//! lead. Rendering is left entirely to the caller.

mod bounds;
pub mod calendar;
mod classify;
mod clock;
mod consts;
pub mod navigator;
mod options;
mod parse;
mod picker;
mod prelude;
mod rules;
mod selection;
mod window;

#[cfg(test)]
mod test_utils;

pub use bounds::{Bounds, RangeError};
pub use classify::{DayDescriptor, classify};
pub use clock::{Clock, FixedClock, LocalClock};
pub use consts::*;
pub use navigator::{Direction, step};
pub use options::{DisplayFormats, PaginationOptions, Settings, Texts};
pub use parse::{DateInput, ParseError, parse_date};
pub use picker::PickerSettings;
pub use rules::{DayRule, first_match};
pub use selection::{DateChanged, Selection};
pub use window::{ViewWindow, WindowPolicy, build_window, days_between};

use std::fmt;

use chrono::NaiveDate;
use log::debug;

/// Errors surfaced while configuring or when a date string is supplied.
///
/// Hitting a boundary or re-selecting the current date are not errors; those
/// outcomes are reported through `bool` returns and [`ViewWindow`] flags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidDateFormat(#[from] ParseError),
    #[error(transparent)]
    InvalidRange(#[from] RangeError),
}

/// A configured day strip: validated settings plus the current selection.
pub struct DatePagination {
    settings:        Settings,
    selection:       Selection,
    selected_format: String,
    clock:           Box<dyn Clock>,
}

impl DatePagination {
    /// Validates `options` using the local time zone for "today".
    ///
    /// # Errors
    /// See [`DatePagination::configure_with_clock`].
    pub fn configure(options: PaginationOptions) -> Result<Self, Error> {
        Self::configure_with_clock(options, LocalClock)
    }

    /// Validates `options` and clamps the initial selection into the bounds.
    ///
    /// # Errors
    /// `Error::InvalidDateFormat` if a supplied date string does not match
    /// its format, `Error::InvalidRange` if the start date is after the end
    /// date.
    pub fn configure_with_clock(options: PaginationOptions, clock: impl Clock + 'static) -> Result<Self, Error> {
        let selected_format = options
            .selected_date
            .as_ref()
            .map_or(DEFAULT_DATE_FORMAT, DateInput::format)
            .to_owned();
        let (settings, initial) = options.resolve(clock.today())?;
        let selection = Selection::new(initial, settings.bounds);

        debug!(
            "configured date pagination: bounds {}, selected {}, window {:?}",
            settings.bounds,
            selection.selected(),
            settings.window
        );

        Ok(Self {
            settings,
            selection,
            selected_format,
            clock: Box::new(clock),
        })
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn bounds(&self) -> &Bounds {
        &self.settings.bounds
    }

    pub const fn selected_date(&self) -> NaiveDate {
        self.selection.selected()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Registers a listener called once per accepted selection change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&DateChanged) + 'static,
    {
        self.selection.subscribe(listener);
    }

    /// Moves the selection to the next eligible date in `direction`.
    ///
    /// Returns whether the selection changed, i.e. whether the window must
    /// be rebuilt.
    pub fn request_navigate(&mut self, direction: Direction) -> bool {
        let from = self.selection.selected();
        match step(from, direction, &self.settings.bounds, &self.settings.off_days) {
            Some(next) => self.selection.try_set(next),
            None => {
                debug!("no {direction} date available from {from}");
                false
            },
        }
    }

    /// Selects a date written in the initial selected date's format
    /// (`%Y-%m-%d` unless configured otherwise).
    ///
    /// # Errors
    /// `Error::InvalidDateFormat` when `input` does not parse; the selection
    /// is left unchanged.
    pub fn request_select(&mut self, input: &str) -> Result<bool, Error> {
        let date = parse_date(input, &self.selected_format)?;
        Ok(self.select_date(date))
    }

    /// Selects a date written in an explicit `strftime` format.
    ///
    /// # Errors
    /// `Error::InvalidDateFormat` when `input` does not match `format`.
    pub fn request_select_with_format(&mut self, input: &str, format: &str) -> Result<bool, Error> {
        let date = parse_date(input, format)?;
        Ok(self.select_date(date))
    }

    /// Selects an already-parsed date, e.g. from a day click or the picker.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        self.selection.try_set(date)
    }

    /// Selects today, if today lies within the bounds.
    pub fn request_today(&mut self) -> bool {
        let today = self.clock.today();
        self.selection.try_set(today)
    }

    /// Computes the classified window around the current selection.
    pub fn view_window(&self) -> ViewWindow {
        build_window(self.selection.selected(), self.clock.today(), &self.settings)
    }

    pub fn picker_settings(&self) -> PickerSettings {
        PickerSettings::from_settings(&self.settings)
    }
}

impl fmt::Debug for DatePagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePagination")
            .field("settings", &self.settings)
            .field("selection", &self.selection)
            .field("selected_format", &self.selected_format)
            .finish_non_exhaustive()
    }
}
