//! Selection - Date Selection State Machine
//!
//! A date picker either holds a single date or a range. Range picking is a
//! two-click cycle:
//!
//! ```text
//! Empty --pick d1--> Started(d1) --pick d2--> Complete{min, max}
//!                        ^                            |
//!                        +-------- pick d3 -----------+
//! ```
//!
//! Picks on disabled days never transition.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::calendar::DateConstraints;

/// Which kind of value a picker produces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

/// Progress of a range pick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RangeSelection {
    /// No endpoint picked
    #[default]
    Empty,
    /// First endpoint picked, waiting for the second
    Started { start: NaiveDate },
    /// Both endpoints picked, `start <= end`
    Complete { start: NaiveDate, end: NaiveDate },
}

impl RangeSelection {
    /// Build a complete range from two endpoints in any order
    pub fn complete(a: NaiveDate, b: NaiveDate) -> Self {
        RangeSelection::Complete {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        match *self {
            RangeSelection::Empty => None,
            RangeSelection::Started { start } | RangeSelection::Complete { start, .. } => {
                Some(start)
            }
        }
    }

    pub fn end(&self) -> Option<NaiveDate> {
        match *self {
            RangeSelection::Complete { end, .. } => Some(end),
            _ => None,
        }
    }

    fn advance(self, date: NaiveDate) -> (Self, bool) {
        match self {
            RangeSelection::Empty | RangeSelection::Complete { .. } => {
                (RangeSelection::Started { start: date }, false)
            }
            RangeSelection::Started { start } => (RangeSelection::complete(start, date), true),
        }
    }
}

/// Current value of a date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "snake_case")]
pub enum DateSelection {
    Single(Option<NaiveDate>),
    Range(RangeSelection),
}

impl Default for DateSelection {
    fn default() -> Self {
        DateSelection::Single(None)
    }
}

/// Result of an accepted pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Selection after the pick
    pub selection: DateSelection,
    /// True when the pick finished the value (single pick, or range end)
    pub complete: bool,
}

impl DateSelection {
    /// The empty selection for `mode`
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => DateSelection::Single(None),
            SelectionMode::Range => DateSelection::Range(RangeSelection::Empty),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            DateSelection::Single(_) => SelectionMode::Single,
            DateSelection::Range(_) => SelectionMode::Range,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(
            self,
            DateSelection::Single(None) | DateSelection::Range(RangeSelection::Empty)
        )
    }

    /// The empty form of this selection's mode
    pub fn cleared(&self) -> Self {
        Self::empty(self.mode())
    }

    /// Apply a pick on `date`.
    ///
    /// Returns `None` when `date` is disabled by `constraints`; the caller
    /// must then leave its state untouched.
    pub fn pick(&self, date: NaiveDate, constraints: &DateConstraints) -> Option<Transition> {
        if constraints.is_disabled(date) {
            return None;
        }

        let transition = match *self {
            DateSelection::Single(_) => Transition {
                selection: DateSelection::Single(Some(date)),
                complete: true,
            },
            DateSelection::Range(range) => {
                let (range, complete) = range.advance(date);
                Transition {
                    selection: DateSelection::Range(range),
                    complete,
                }
            }
        };
        Some(transition)
    }

    /// True if `date` is the single value or a range endpoint
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        match *self {
            DateSelection::Single(value) => value == Some(date),
            DateSelection::Range(range) => {
                range.start() == Some(date) || range.end() == Some(date)
            }
        }
    }

    /// Range endpoints, only for a complete range
    pub fn range_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match *self {
            DateSelection::Range(RangeSelection::Complete { start, end }) => Some((start, end)),
            _ => None,
        }
    }

    /// Range endpoints including a hover preview while a range is started
    pub fn preview_bounds(&self, hover: Option<NaiveDate>) -> Option<(NaiveDate, NaiveDate)> {
        match (*self, hover) {
            (DateSelection::Range(RangeSelection::Started { start }), Some(hover)) => {
                Some((start.min(hover), start.max(hover)))
            }
            _ => self.range_bounds(),
        }
    }

    pub fn range_start(&self) -> Option<NaiveDate> {
        match self {
            DateSelection::Range(range) => range.start(),
            DateSelection::Single(_) => None,
        }
    }

    pub fn range_end(&self) -> Option<NaiveDate> {
        match self {
            DateSelection::Range(range) => range.end(),
            DateSelection::Single(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn pick(selection: DateSelection, d: NaiveDate) -> Transition {
        selection
            .pick(d, &DateConstraints::default())
            .expect("enabled day")
    }

    #[test]
    fn single_pick_completes() {
        let t = pick(DateSelection::empty(SelectionMode::Single), date(2024, 3, 5));
        assert!(t.complete);
        assert_eq!(t.selection, DateSelection::Single(Some(date(2024, 3, 5))));
    }

    #[test]
    fn range_two_click_cycle_orders_endpoints() {
        let start = DateSelection::empty(SelectionMode::Range);
        let first = pick(start, date(2024, 3, 20));
        assert!(!first.complete);
        assert_eq!(
            first.selection,
            DateSelection::Range(RangeSelection::Started { start: date(2024, 3, 20) })
        );

        let second = pick(first.selection, date(2024, 3, 4));
        assert!(second.complete);
        assert_eq!(second.selection.range_bounds(), Some((date(2024, 3, 4), date(2024, 3, 20))));
    }

    #[test]
    fn pick_after_complete_restarts() {
        let complete =
            DateSelection::Range(RangeSelection::complete(date(2024, 1, 1), date(2024, 1, 9)));
        let t = pick(complete, date(2024, 2, 2));
        assert!(!t.complete);
        assert_eq!(t.selection.range_start(), Some(date(2024, 2, 2)));
        assert_eq!(t.selection.range_end(), None);
    }

    #[test]
    fn same_day_range_is_allowed() {
        let first = pick(DateSelection::empty(SelectionMode::Range), date(2024, 5, 1));
        let second = pick(first.selection, date(2024, 5, 1));
        assert_eq!(second.selection.range_bounds(), Some((date(2024, 5, 1), date(2024, 5, 1))));
    }

    #[test]
    fn disabled_pick_is_rejected() {
        let constraints = DateConstraints::default().max(date(2024, 3, 10));
        for selection in [
            DateSelection::Single(Some(date(2024, 3, 1))),
            DateSelection::Range(RangeSelection::Started { start: date(2024, 3, 1) }),
        ] {
            assert_eq!(selection.pick(date(2024, 3, 11), &constraints), None);
        }
    }

    #[test]
    fn cleared_keeps_mode() {
        let range = DateSelection::Range(RangeSelection::Started { start: date(2024, 3, 1) });
        assert_eq!(range.cleared(), DateSelection::Range(RangeSelection::Empty));
        assert!(range.cleared().is_empty());
        assert_eq!(
            DateSelection::Single(Some(date(2024, 3, 1))).cleared(),
            DateSelection::Single(None)
        );
    }

    #[test]
    fn preview_follows_hover_only_while_started() {
        let started = DateSelection::Range(RangeSelection::Started { start: date(2024, 3, 10) });
        assert_eq!(
            started.preview_bounds(Some(date(2024, 3, 7))),
            Some((date(2024, 3, 7), date(2024, 3, 10)))
        );
        assert_eq!(started.preview_bounds(None), None);

        let complete =
            DateSelection::Range(RangeSelection::complete(date(2024, 3, 1), date(2024, 3, 2)));
        assert_eq!(
            complete.preview_bounds(Some(date(2024, 3, 30))),
            Some((date(2024, 3, 1), date(2024, 3, 2)))
        );
    }

    #[test]
    fn selection_serializes_with_mode_tag() {
        let value = DateSelection::Range(RangeSelection::Started { start: date(2024, 3, 10) });
        let json = serde_json::to_string(&value).expect("serialize");
        assert_eq!(json, r#"{"mode":"range","value":{"state":"started","start":"2024-03-10"}}"#);
        let back: DateSelection = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, value);
    }
}
