use std::fmt;

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::Bounds;

/// Payload delivered to listeners after an accepted selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateChanged {
    pub previous: NaiveDate,
    pub selected: NaiveDate,
}

type Listener = Box<dyn FnMut(&DateChanged)>;

/// The selected date and the bounds it must stay within.
///
/// This is the only mutable state of the engine. The selection is always
/// inside `bounds`; every change goes through [`Selection::try_set`].
pub struct Selection {
    selected:  NaiveDate,
    bounds:    Bounds,
    listeners: Vec<Listener>,
}

impl Selection {
    /// Creates the selection, clamping `initial` into `bounds`.
    pub fn new(initial: NaiveDate, bounds: Bounds) -> Self {
        let selected = bounds.clamp(initial);
        if selected != initial {
            debug!("initial selection {initial} clamped to {selected}");
        }
        Self {
            selected,
            bounds,
            listeners: Vec::new(),
        }
    }

    pub const fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub const fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Registers a listener called once per accepted change.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&DateChanged) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Attempts to select `candidate`.
    ///
    /// Returns `false` without notifying anyone when `candidate` is already
    /// selected or lies outside the bounds.
    pub fn try_set(&mut self, candidate: NaiveDate) -> bool {
        if candidate == self.selected {
            return false;
        }
        if !self.bounds.contains(candidate) {
            debug!("rejected selection {candidate}: outside {}", self.bounds);
            return false;
        }

        let event = DateChanged {
            previous: self.selected,
            selected: candidate,
        };
        self.selected = candidate;
        debug!("selected date changed {} -> {}", event.previous, event.selected);

        for listener in &mut self.listeners {
            listener(&event);
        }
        true
    }
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("selected", &self.selected)
            .field("bounds", &self.bounds)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::test_utils::date;

    fn year_2024() -> Bounds {
        Bounds::new(date(2024, 1, 1), date(2024, 12, 31)).expect("failed to construct bounds")
    }

    #[test]
    fn test_initial_clamp_cases() {
        struct TestCase {
            initial:     NaiveDate,
            expected:    NaiveDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                initial:     date(2023, 6, 1),
                expected:    date(2024, 1, 1),
                description: "before start clamps to start",
            },
            TestCase {
                initial:     date(2025, 6, 1),
                expected:    date(2024, 12, 31),
                description: "after end clamps to end",
            },
            TestCase {
                initial:     date(2024, 6, 1),
                expected:    date(2024, 6, 1),
                description: "within bounds is kept",
            },
        ];

        for case in &cases {
            let selection = Selection::new(case.initial, year_2024());
            assert_eq!(selection.selected(), case.expected, "mismatch for: {}", case.description);
        }
    }

    #[test]
    fn test_try_set_is_idempotent() {
        let mut selection = Selection::new(date(2024, 3, 8), year_2024());
        assert!(selection.try_set(date(2024, 3, 9)));
        assert!(!selection.try_set(date(2024, 3, 9)));
        assert_eq!(selection.selected(), date(2024, 3, 9));
    }

    #[test]
    fn test_try_set_rejects_out_of_bounds() {
        let mut selection = Selection::new(date(2024, 3, 8), year_2024());
        assert!(!selection.try_set(date(2025, 1, 1)));
        assert!(!selection.try_set(date(2023, 12, 31)));
        assert_eq!(selection.selected(), date(2024, 3, 8));

        assert!(selection.try_set(date(2024, 12, 31)));
        assert!(selection.try_set(date(2024, 1, 1)));
    }

    #[test]
    fn test_listeners_fire_once_per_accepted_change() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut selection = Selection::new(date(2024, 3, 8), year_2024());
        let sink = Rc::clone(&events);
        selection.subscribe(move |event| sink.borrow_mut().push(*event));

        selection.try_set(date(2024, 3, 11));
        selection.try_set(date(2024, 3, 11));
        selection.try_set(date(2025, 3, 11));
        selection.try_set(date(2024, 3, 12));

        assert_eq!(
            *events.borrow(),
            [
                DateChanged {
                    previous: date(2024, 3, 8),
                    selected: date(2024, 3, 11),
                },
                DateChanged {
                    previous: date(2024, 3, 11),
                    selected: date(2024, 3, 12),
                },
            ]
        );
    }

    #[test]
    fn test_debug_hides_listeners() {
        let mut selection = Selection::new(date(2024, 3, 8), year_2024());
        selection.subscribe(|_| {});
        let debug = format!("{selection:?}");
        assert!(debug.contains("2024-03-08"));
        assert!(debug.contains("listeners: 1"));
    }
}
