//! DatePicker Component
//!
//! Owns the state of one date picker: the selection, the displayed month,
//! open/closed state and the popover placement. Day picks are driven by the
//! selection state machine in `domain::selection`.

use chrono::{Local, NaiveDate, NaiveTime, Weekday};
use tracing::debug;

use super::popover::{LayoutHost, PopoverTracker, RepositionTrigger};
use crate::domain::{
    CalendarContext, CalendarDay, DateConstraints, DateSelection, PlacementOptions,
    PopoverPlacement, SelectionMode, YearMonth, calendar_days, weekday_order,
};
use crate::i18n::{self, Locale};

type ChangeHandler = Box<dyn Fn(&DateSelection) + 'static>;
type TimeHandler = Box<dyn Fn(NaiveTime) + 'static>;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a picker closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Escape,
    OutsideClick,
    /// A pick completed the value
    Selected,
}

/// Localized labels of the popover controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerLabels {
    pub previous_month: String,
    pub next_month: String,
    pub clear: String,
    /// Finishes a pick with time
    pub confirm: String,
}

/// DatePicker component
pub struct DatePicker {
    selection: DateSelection,
    constraints: DateConstraints,
    view: YearMonth,
    first_day_of_week: Weekday,
    locale: Locale,
    open: bool,
    disabled: bool,
    with_time: bool,
    time: Option<NaiveTime>,
    hover: Option<NaiveDate>,
    popover: PopoverTracker,
    on_change: Option<ChangeHandler>,
    on_time_change: Option<TimeHandler>,
}

impl DatePicker {
    /// Create a closed, empty picker showing `view`
    pub fn new(mode: SelectionMode, view: YearMonth) -> Self {
        Self {
            selection: DateSelection::empty(mode),
            constraints: DateConstraints::default(),
            view,
            first_day_of_week: Weekday::Sun,
            locale: Locale::default(),
            open: false,
            disabled: false,
            with_time: false,
            time: None,
            hover: None,
            popover: PopoverTracker::default(),
            on_change: None,
            on_time_change: None,
        }
    }

    /// Set the initial value; the view jumps to its month
    pub fn value(mut self, selection: DateSelection) -> Self {
        self.set_selection(selection);
        self
    }

    /// Set the date constraints
    pub fn constraints(mut self, constraints: DateConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the first column of the grid
    pub fn first_day_of_week(mut self, weekday: Weekday) -> Self {
        self.first_day_of_week = weekday;
        self
    }

    /// Set the label locale
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Enable the time-of-day sub-picker (single mode)
    pub fn with_time(mut self, enabled: bool) -> Self {
        self.with_time = enabled;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the popover placement tunables
    pub fn placement_options(mut self, options: PlacementOptions) -> Self {
        self.popover = PopoverTracker::new(options);
        self
    }

    /// Set the change handler
    pub fn on_change(mut self, handler: impl Fn(&DateSelection) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Set the time change handler
    pub fn on_time_change(mut self, handler: impl Fn(NaiveTime) + 'static) -> Self {
        self.on_time_change = Some(Box::new(handler));
        self
    }

    // ==================== Getters ====================

    pub fn selection(&self) -> &DateSelection {
        &self.selection
    }

    pub fn view(&self) -> YearMonth {
        self.view
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }

    pub fn placement(&self) -> Option<PopoverPlacement> {
        self.popover.placement()
    }

    /// Classified grid of the displayed month relative to `today`
    pub fn days(&self, today: NaiveDate) -> Vec<CalendarDay> {
        let context = CalendarContext {
            today,
            selection: &self.selection,
            constraints: &self.constraints,
            hover: self.hover,
        };
        calendar_days(self.view, self.first_day_of_week, &context)
    }

    /// Classified grid relative to the local date
    pub fn days_today(&self) -> Vec<CalendarDay> {
        self.days(Local::now().date_naive())
    }

    /// Weekday header labels in grid order
    pub fn weekday_labels(&self) -> Vec<String> {
        weekday_order(self.first_day_of_week)
            .into_iter()
            .map(|day| i18n::weekday_short(self.locale, day))
            .collect()
    }

    /// Header title of the displayed month
    pub fn title(&self) -> String {
        i18n::month_title(self.locale, self.view)
    }

    /// Labels of the month arrows and the clear/confirm buttons
    pub fn action_labels(&self) -> PickerLabels {
        PickerLabels {
            previous_month: i18n::tr(self.locale, "calendar.previous_month"),
            next_month: i18n::tr(self.locale, "calendar.next_month"),
            clear: i18n::tr(self.locale, "date_picker.clear"),
            confirm: i18n::tr(self.locale, "date_picker.confirm"),
        }
    }

    /// Text for the input field; the placeholder when empty
    pub fn display_text(&self) -> String {
        let format = |date: NaiveDate| date.format(DATE_FORMAT).to_string();
        match self.selection {
            DateSelection::Single(Some(date)) => match self.time {
                Some(time) if self.with_time => {
                    format!("{} {}", format(date), time.format("%H:%M"))
                }
                _ => format(date),
            },
            DateSelection::Single(None) => i18n::tr(self.locale, "date_picker.placeholder"),
            DateSelection::Range(range) => match (range.start(), range.end()) {
                (Some(start), Some(end)) => format!("{} - {}", format(start), format(end)),
                (Some(start), None) => format(start),
                _ => i18n::tr(self.locale, "date_picker.range_placeholder"),
            },
        }
    }

    // ==================== Open / Close ====================

    /// Open the picker. Disabled pickers stay closed.
    pub fn open(&mut self) -> bool {
        if self.disabled || self.open {
            return false;
        }
        self.open = true;
        self.popover.activate();
        if let Some(date) = self.anchor_date() {
            self.show_month_of(date);
        }
        true
    }

    /// Open if needed and place the popover from fresh host measurements
    pub fn open_at(&mut self, host: &impl LayoutHost) -> Option<PopoverPlacement> {
        if !self.open && !self.open() {
            return None;
        }
        self.popover.open(host)
    }

    /// Recompute the popover placement on scroll or resize
    pub fn reposition(
        &mut self,
        host: &impl LayoutHost,
        trigger: RepositionTrigger,
    ) -> Option<PopoverPlacement> {
        if !self.open {
            return None;
        }
        self.popover.reposition(host, trigger)
    }

    pub fn close(&mut self, reason: CloseReason) {
        if !self.open {
            return;
        }
        debug!(?reason, "DatePicker closed");
        self.open = false;
        self.hover = None;
        self.popover.close();
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close(CloseReason::OutsideClick);
        } else {
            self.open();
        }
    }

    // ==================== Selection ====================

    /// Pick a day from the grid.
    ///
    /// Ignored while closed or disabled and for disabled days. Returns
    /// whether the selection changed.
    pub fn pick(&mut self, date: NaiveDate) -> bool {
        if self.disabled || !self.open {
            return false;
        }
        let Some(transition) = self.selection.pick(date, &self.constraints) else {
            debug!(%date, "Ignored pick on disabled day");
            return false;
        };

        debug!(%date, complete = transition.complete, "Date picked");
        self.selection = transition.selection;
        self.show_month_of(date);
        self.emit_change();

        let keep_open = self.with_time && self.selection.mode() == SelectionMode::Single;
        if transition.complete && !keep_open {
            self.close(CloseReason::Selected);
        }
        true
    }

    /// Track the day under the pointer for the range preview
    pub fn hover(&mut self, date: Option<NaiveDate>) {
        self.hover = date;
    }

    /// Reset to the empty value and notify
    pub fn clear(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.selection = self.selection.cleared();
        self.time = None;
        self.emit_change();
        true
    }

    /// Set the time of day; only with the time sub-picker enabled
    pub fn set_time(&mut self, time: NaiveTime) -> bool {
        if self.disabled || !self.with_time {
            return false;
        }
        self.time = Some(time);
        if let Some(handler) = &self.on_time_change {
            handler(time);
        }
        true
    }

    /// Finish a single pick with time; closes the picker
    pub fn confirm(&mut self) {
        self.close(CloseReason::Selected);
    }

    /// Replace the value from outside (controlled mode), without notifying
    pub fn set_selection(&mut self, selection: DateSelection) {
        self.selection = selection;
        if let Some(date) = self.anchor_date() {
            self.show_month_of(date);
        }
    }

    pub fn set_constraints(&mut self, constraints: DateConstraints) {
        self.constraints = constraints;
    }

    // ==================== Month Navigation ====================

    pub fn next_month(&mut self) {
        self.view = self.view.next();
    }

    pub fn previous_month(&mut self) {
        self.view = self.view.previous();
    }

    pub fn set_view(&mut self, view: YearMonth) {
        self.view = view;
    }

    /// Date the view follows: the single value or the range start
    fn anchor_date(&self) -> Option<NaiveDate> {
        match self.selection {
            DateSelection::Single(value) => value,
            DateSelection::Range(range) => range.start(),
        }
    }

    fn show_month_of(&mut self, date: NaiveDate) {
        if let Some(month) = YearMonth::of(date) {
            self.view = month;
        }
    }

    fn emit_change(&self) {
        if let Some(handler) = &self.on_change {
            handler(&self.selection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Edge, Rect, RangeSelection, Size};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn may() -> YearMonth {
        YearMonth::new(2024, 5).expect("valid month")
    }

    fn recorded(mode: SelectionMode) -> (DatePicker, Rc<RefCell<Vec<DateSelection>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        let picker =
            DatePicker::new(mode, may()).on_change(move |value| sink.borrow_mut().push(*value));
        (picker, calls)
    }

    #[test]
    fn single_pick_closes() {
        let (mut picker, calls) = recorded(SelectionMode::Single);
        picker.open();
        assert!(picker.pick(date(2024, 5, 9)));
        assert!(!picker.is_open());
        assert_eq!(*calls.borrow(), vec![DateSelection::Single(Some(date(2024, 5, 9)))]);
        assert_eq!(picker.display_text(), "2024-05-09");
    }

    #[test]
    fn single_pick_with_time_stays_open() {
        let (picker, _) = recorded(SelectionMode::Single);
        let times = Rc::new(RefCell::new(Vec::new()));
        let sink = times.clone();
        let mut picker = picker
            .with_time(true)
            .on_time_change(move |t| sink.borrow_mut().push(t));
        picker.open();
        assert!(picker.pick(date(2024, 5, 9)));
        assert!(picker.is_open());

        let time = NaiveTime::from_hms_opt(14, 30, 0).expect("valid time");
        assert!(picker.set_time(time));
        assert_eq!(*times.borrow(), vec![time]);
        assert_eq!(picker.display_text(), "2024-05-09 14:30");

        picker.confirm();
        assert!(!picker.is_open());
    }

    #[test]
    fn range_closes_on_second_pick() {
        let (mut picker, calls) = recorded(SelectionMode::Range);
        picker.open();
        assert!(picker.pick(date(2024, 5, 20)));
        assert!(picker.is_open());
        assert!(picker.pick(date(2024, 5, 3)));
        assert!(!picker.is_open());
        assert_eq!(
            calls.borrow().last(),
            Some(&DateSelection::Range(RangeSelection::complete(
                date(2024, 5, 3),
                date(2024, 5, 20)
            )))
        );
        assert_eq!(picker.display_text(), "2024-05-03 - 2024-05-20");
    }

    #[test]
    fn disabled_day_is_noop() {
        let (picker, calls) = recorded(SelectionMode::Range);
        let mut picker =
            picker.constraints(DateConstraints::default().disable([date(2024, 5, 15)]));
        picker.open();
        picker.pick(date(2024, 5, 10));
        let before = *picker.selection();
        assert!(!picker.pick(date(2024, 5, 15)));
        assert_eq!(*picker.selection(), before);
        assert_eq!(calls.borrow().len(), 1);
        assert!(picker.is_open());
    }

    #[test]
    fn closed_or_disabled_picker_ignores_picks() {
        let (mut picker, calls) = recorded(SelectionMode::Single);
        assert!(!picker.pick(date(2024, 5, 9)));

        let (picker, _) = recorded(SelectionMode::Single);
        let mut disabled = picker.disabled(true);
        assert!(!disabled.open());
        assert!(!disabled.clear());
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn clear_fires_with_empty_value() {
        let (mut picker, calls) = recorded(SelectionMode::Range);
        picker.set_selection(DateSelection::Range(RangeSelection::complete(
            date(2024, 5, 1),
            date(2024, 5, 2),
        )));
        assert!(picker.clear());
        assert_eq!(*calls.borrow(), vec![DateSelection::Range(RangeSelection::Empty)]);
        assert_eq!(picker.display_text(), "Select date range");
    }

    #[test]
    fn picking_adjacent_month_day_moves_view() {
        let (mut picker, _) = recorded(SelectionMode::Range);
        picker.open();
        // Leading cell of the May grid
        picker.pick(date(2024, 4, 29));
        assert_eq!(picker.view(), YearMonth::new(2024, 4).expect("valid month"));
    }

    #[test]
    fn open_shows_month_of_value() {
        let (mut picker, _) = recorded(SelectionMode::Single);
        picker.set_selection(DateSelection::Single(Some(date(2023, 11, 2))));
        picker.set_view(may());
        picker.open();
        assert_eq!(picker.view(), YearMonth::new(2023, 11).expect("valid month"));
    }

    #[test]
    fn headers_follow_week_start() {
        let (picker, _) = recorded(SelectionMode::Single);
        let picker = picker.first_day_of_week(Weekday::Mon);
        assert_eq!(picker.weekday_labels()[0], "Mo");
        assert_eq!(picker.title(), "May 2024");
        assert_eq!(picker.days(date(2024, 5, 1))[0].date, date(2024, 4, 29));
    }

    struct StaticHost;

    impl LayoutHost for StaticHost {
        fn anchor_rect(&self) -> Option<Rect> {
            Some(Rect::new(40.0, 700.0, 200.0, 32.0))
        }

        fn popover_rect(&self) -> Option<Rect> {
            Some(Rect::new(0.0, 0.0, 280.0, 300.0))
        }

        fn viewport_size(&self) -> Size {
            Size::new(800.0, 768.0)
        }
    }

    #[test]
    fn popover_tracks_open_state() {
        let (mut picker, _) = recorded(SelectionMode::Single);
        let placement = picker.open_at(&StaticHost).expect("placed");
        assert_eq!(placement.edge, Edge::Above);

        picker.close(CloseReason::Escape);
        assert_eq!(picker.placement(), None);
        assert_eq!(picker.reposition(&StaticHost, RepositionTrigger::Scroll), None);
    }

    #[test]
    fn picker_opened_without_host_is_placed_on_scroll() {
        let (mut picker, _) = recorded(SelectionMode::Single);
        picker.toggle();
        assert!(picker.is_open());
        assert_eq!(picker.placement(), None);

        let placed = picker
            .reposition(&StaticHost, RepositionTrigger::Scroll)
            .expect("placed");
        assert_eq!(placed.edge, Edge::Above);
        assert_eq!(picker.placement(), Some(placed));
    }

    #[test]
    fn open_at_places_an_already_open_picker() {
        let (mut picker, _) = recorded(SelectionMode::Single);
        assert!(picker.open());
        assert!(picker.open_at(&StaticHost).is_some());
        assert!(picker.is_open());

        let (picker, _) = recorded(SelectionMode::Single);
        let mut disabled = picker.disabled(true);
        assert_eq!(disabled.open_at(&StaticHost), None);
        assert!(!disabled.is_open());
    }

    #[test]
    fn reopened_range_keeps_start_and_tracks_layout() {
        let (mut picker, calls) = recorded(SelectionMode::Range);
        picker.open_at(&StaticHost).expect("placed");
        assert!(picker.pick(date(2024, 5, 10)));
        assert!(picker.reposition(&StaticHost, RepositionTrigger::Resize).is_some());

        picker.close(CloseReason::OutsideClick);
        picker.set_view(YearMonth::new(2024, 8).expect("valid month"));
        picker.toggle();
        assert!(picker.is_open());
        assert_eq!(picker.view(), may());
        assert_eq!(
            *picker.selection(),
            DateSelection::Range(RangeSelection::Started {
                start: date(2024, 5, 10)
            })
        );
        assert!(picker.reposition(&StaticHost, RepositionTrigger::Scroll).is_some());

        assert!(picker.pick(date(2024, 5, 12)));
        assert!(!picker.is_open());
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn picks_outside_min_max_are_ignored() {
        let (picker, calls) = recorded(SelectionMode::Single);
        let mut picker = picker.constraints(
            DateConstraints::default()
                .min(date(2024, 5, 5))
                .max(date(2024, 5, 25)),
        );
        picker.open();
        assert!(!picker.pick(date(2024, 5, 4)));
        assert!(!picker.pick(date(2024, 5, 26)));
        assert!(calls.borrow().is_empty());
        assert!(picker.is_open());
        assert_eq!(*picker.selection(), DateSelection::Single(None));

        assert!(picker.pick(date(2024, 5, 5)));
        assert!(!picker.is_open());
    }

    #[test]
    fn action_labels_follow_locale() {
        let (picker, _) = recorded(SelectionMode::Single);
        let en = picker.action_labels();
        assert_eq!(en.previous_month, "Previous month");
        assert_eq!(en.next_month, "Next month");
        assert_eq!(en.clear, "Clear");
        assert_eq!(en.confirm, "OK");

        let zh = picker.locale(Locale::ZhCN).action_labels();
        assert_eq!(zh.next_month, "下个月");
        assert_eq!(zh.confirm, "确定");
    }
}
