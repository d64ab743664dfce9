//! Calendar - Month Grid Model
//!
//! Builds the fixed 6x7 day grid a date picker renders and classifies every
//! cell against today, the picker's constraints and its selection.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::selection::DateSelection;
use crate::constants::{CALENDAR_GRID_CELLS, DAYS_PER_WEEK, MAX_CALENDAR_YEAR, MIN_CALENDAR_YEAR};

/// A calendar month, stored as its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Create a month; `None` for an invalid month or a year outside the
    /// supported range
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if !(MIN_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(&year) {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first })
    }

    /// The month containing `date`
    pub fn of(date: NaiveDate) -> Option<Self> {
        Self::new(date.year(), date.month())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Month number, 1..=12
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Number of days in the month (28..=31)
    pub fn days_in_month(&self) -> u32 {
        match self.first.checked_add_months(Months::new(1)) {
            Some(next) => (next - self.first).num_days() as u32,
            None => 31,
        }
    }

    /// Shift by `delta` months, `None` when leaving the supported range
    pub fn add_months(&self, delta: i32) -> Option<Self> {
        let shifted = if delta >= 0 {
            self.first.checked_add_months(Months::new(delta.unsigned_abs()))
        } else {
            self.first.checked_sub_months(Months::new(delta.unsigned_abs()))
        }?;
        Self::of(shifted)
    }

    /// Next month, saturating at the supported range
    pub fn next(&self) -> Self {
        self.add_months(1).unwrap_or(*self)
    }

    /// Previous month, saturating at the supported range
    pub fn previous(&self) -> Self {
        self.add_months(-1).unwrap_or(*self)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Number of leading cells taken by the previous month
    pub fn leading_days(&self, first_day_of_week: Weekday) -> u32 {
        let weekday_of_first = self.first.weekday().num_days_from_sunday();
        let week_start = first_day_of_week.num_days_from_sunday();
        (weekday_of_first + DAYS_PER_WEEK - week_start) % DAYS_PER_WEEK
    }
}

/// One unclassified grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
}

/// Build the 42 cells shown for `month`.
///
/// Leading and trailing cells carry real dates of the adjacent months so
/// they stay pickable.
pub fn month_grid(month: YearMonth, first_day_of_week: Weekday) -> Vec<CalendarCell> {
    let leading = u64::from(month.leading_days(first_day_of_week));
    let start = month.first_day() - Days::new(leading);

    start
        .iter_days()
        .take(CALENDAR_GRID_CELLS)
        .map(|date| CalendarCell {
            date,
            in_current_month: month.contains(date),
        })
        .collect()
}

/// The seven weekdays in display order starting at `first_day_of_week`
pub fn weekday_order(first_day_of_week: Weekday) -> [Weekday; 7] {
    let mut days = [first_day_of_week; 7];
    for i in 1..days.len() {
        days[i] = days[i - 1].succ();
    }
    days
}

/// Which days a picker refuses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateConstraints {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    #[serde(default)]
    pub disabled: BTreeSet<NaiveDate>,
}

impl DateConstraints {
    /// Set the earliest allowed date
    pub fn min(mut self, date: NaiveDate) -> Self {
        self.min = Some(date);
        self
    }

    /// Set the latest allowed date
    pub fn max(mut self, date: NaiveDate) -> Self {
        self.max = Some(date);
        self
    }

    /// Disable individual dates
    pub fn disable(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.disabled.extend(dates);
        self
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.min.is_some_and(|min| date < min)
            || self.max.is_some_and(|max| date > max)
            || self.disabled.contains(&date)
    }
}

/// A fully classified grid cell, ready to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    /// Inside the selected (or previewed) range, endpoints included
    pub is_in_range: bool,
    pub is_disabled: bool,
}

/// Everything a grid classification depends on
#[derive(Debug, Clone, Copy)]
pub struct CalendarContext<'a> {
    pub today: NaiveDate,
    pub selection: &'a DateSelection,
    pub constraints: &'a DateConstraints,
    /// Day under the pointer, used to preview a half-picked range
    pub hover: Option<NaiveDate>,
}

impl CalendarContext<'_> {
    pub fn classify(&self, cell: CalendarCell) -> CalendarDay {
        let date = cell.date;
        let range = self.selection.preview_bounds(self.hover);

        CalendarDay {
            date,
            in_current_month: cell.in_current_month,
            is_today: date == self.today,
            is_selected: self.selection.is_selected(date),
            is_range_start: self.selection.range_start() == Some(date),
            is_range_end: self.selection.range_end() == Some(date),
            is_in_range: range.is_some_and(|(start, end)| start <= date && date <= end),
            is_disabled: self.constraints.is_disabled(date),
        }
    }
}

/// Build and classify the grid for `month`
pub fn calendar_days(
    month: YearMonth,
    first_day_of_week: Weekday,
    context: &CalendarContext<'_>,
) -> Vec<CalendarDay> {
    month_grid(month, first_day_of_week)
        .into_iter()
        .map(|cell| context.classify(cell))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::{RangeSelection, SelectionMode};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn month(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).expect("valid month")
    }

    #[test]
    fn grid_always_has_42_cells() {
        let starts = [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ];
        for year in [2023, 2024, 2100] {
            for m in 1..=12 {
                for start in starts {
                    let cells = month_grid(month(year, m), start);
                    assert_eq!(cells.len(), 42);
                    assert_eq!(cells[0].date.weekday(), start);
                    let in_month = cells.iter().filter(|c| c.in_current_month).count() as u32;
                    assert_eq!(in_month, month(year, m).days_in_month());
                    assert!(cells.windows(2).all(|w| w[1].date == w[0].date + Days::new(1)));
                }
            }
        }
    }

    #[test]
    fn wednesday_start_has_three_leading_days() {
        // May 2024 starts on a Wednesday
        let may = month(2024, 5);
        assert_eq!(may.first_day().weekday(), Weekday::Wed);
        assert_eq!(may.leading_days(Weekday::Sun), 3);

        let cells = month_grid(may, Weekday::Sun);
        let leading: Vec<_> = cells.iter().take(3).map(|c| c.date).collect();
        assert_eq!(leading, vec![date(2024, 4, 28), date(2024, 4, 29), date(2024, 4, 30)]);
        assert!(cells.iter().take(3).all(|c| !c.in_current_month));
        assert_eq!(cells[3].date, date(2024, 5, 1));
        assert_eq!(cells[41].date, date(2024, 6, 8));
    }

    #[test]
    fn month_starting_on_week_start_has_no_leading_days() {
        // September 2024 starts on a Sunday
        assert_eq!(month(2024, 9).leading_days(Weekday::Sun), 0);
        assert_eq!(month(2024, 9).leading_days(Weekday::Mon), 6);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(month(2024, 2).days_in_month(), 29);
        assert_eq!(month(2023, 2).days_in_month(), 28);
        assert_eq!(month(1900, 2).days_in_month(), 28);
        assert_eq!(month(2000, 2).days_in_month(), 29);
        assert_eq!(month(9999, 12).days_in_month(), 31);
    }

    #[test]
    fn month_navigation_wraps_years() {
        assert_eq!(month(2024, 12).next(), month(2025, 1));
        assert_eq!(month(2024, 1).previous(), month(2023, 12));
        assert_eq!(month(2024, 5).add_months(-17), Some(month(2022, 12)));
        assert_eq!(month(MAX_CALENDAR_YEAR, 12).next(), month(MAX_CALENDAR_YEAR, 12));
        assert_eq!(YearMonth::new(2024, 13), None);
    }

    #[test]
    fn weekday_order_rotates() {
        assert_eq!(
            weekday_order(Weekday::Mon),
            [
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
                Weekday::Sat,
                Weekday::Sun
            ]
        );
        assert_eq!(weekday_order(Weekday::Sun)[6], Weekday::Sat);
    }

    #[test]
    fn constraints_disable_by_bounds_and_dates() {
        let constraints = DateConstraints::default()
            .min(date(2024, 5, 3))
            .max(date(2024, 5, 28))
            .disable([date(2024, 5, 15)]);

        assert!(constraints.is_disabled(date(2024, 5, 2)));
        assert!(!constraints.is_disabled(date(2024, 5, 3)));
        assert!(constraints.is_disabled(date(2024, 5, 15)));
        assert!(!constraints.is_disabled(date(2024, 5, 28)));
        assert!(constraints.is_disabled(date(2024, 5, 29)));
    }

    #[test]
    fn classification_marks_range_and_today() {
        let selection = DateSelection::Range(RangeSelection::complete(
            date(2024, 5, 10),
            date(2024, 5, 12),
        ));
        let constraints = DateConstraints::default().disable([date(2024, 5, 20)]);
        let context = CalendarContext {
            today: date(2024, 5, 11),
            selection: &selection,
            constraints: &constraints,
            hover: None,
        };
        let days = calendar_days(month(2024, 5), Weekday::Sun, &context);
        let day = |d: u32| {
            *days
                .iter()
                .find(|c| c.date == date(2024, 5, d))
                .expect("day in grid")
        };

        assert!(day(10).is_range_start && day(10).is_selected && day(10).is_in_range);
        assert!(day(11).is_today && day(11).is_in_range && !day(11).is_selected);
        assert!(day(12).is_range_end && day(12).is_in_range);
        assert!(!day(13).is_in_range);
        assert!(day(20).is_disabled);
    }

    #[test]
    fn hover_previews_started_range() {
        let selection = DateSelection::empty(SelectionMode::Range)
            .pick(date(2024, 5, 10), &DateConstraints::default())
            .expect("enabled")
            .selection;
        let constraints = DateConstraints::default();
        let context = CalendarContext {
            today: date(2024, 1, 1),
            selection: &selection,
            constraints: &constraints,
            hover: Some(date(2024, 5, 8)),
        };
        let in_range: Vec<_> = calendar_days(month(2024, 5), Weekday::Sun, &context)
            .into_iter()
            .filter(|d| d.is_in_range)
            .map(|d| d.date.day())
            .collect();
        assert_eq!(in_range, vec![8, 9, 10]);
    }
}
