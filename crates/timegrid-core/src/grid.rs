//! Day windows, view date ranges, and navigation arithmetic.
//!
//! This is the boundary that decides which events feed the layout engine:
//! a display day is the half-open UTC window `[00:00, next 00:00)`, and an
//! event is visible on that day when its raw interval intersects the
//! window. Day/week/month views are just lists of such days.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::event::CalendarEvent;
use crate::layout::{layout_events, EventLayout};

/// The half-open UTC window covering one display day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Window for the given calendar date: `[00:00, 00:00 next day)`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            start: date.and_time(NaiveTime::MIN).and_utc(),
            end: (date + Days::new(1)).and_time(NaiveTime::MIN).and_utc(),
        }
    }

    /// Whether any part of the event falls inside this window.
    ///
    /// Same half-open convention as the overlap predicate: an event that
    /// merely touches a boundary (ends at 00:00, or starts at next-day
    /// 00:00) is not visible.
    pub fn contains(&self, event: &CalendarEvent) -> bool {
        event.start < self.end && event.end > self.start
    }
}

/// Which time-grid view is being displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Day,
    Week,
    Month,
}

/// The display dates for a view anchored at `anchor`.
///
/// - `Day` — just the anchor.
/// - `Week` — the 7 days of the Sunday-started week containing the anchor.
/// - `Month` — the week-aligned grid: from the Sunday on or before the 1st
///   through the Saturday on or after the last day of the month.
pub fn view_dates(kind: ViewKind, anchor: NaiveDate) -> Vec<NaiveDate> {
    match kind {
        ViewKind::Day => vec![anchor],
        ViewKind::Week => {
            let start = anchor.week(Weekday::Sun).first_day();
            (0..7u64).map(|i| start + Days::new(i)).collect()
        }
        ViewKind::Month => {
            let month_start = anchor.with_day0(0).unwrap_or(anchor);
            let month_end = month_start + Months::new(1) - Days::new(1);
            let first = month_start.week(Weekday::Sun).first_day();
            let last =
                month_end + Days::new(6 - u64::from(month_end.weekday().num_days_from_sunday()));

            let mut dates = Vec::new();
            let mut day = first;
            while day <= last {
                dates.push(day);
                day = day + Days::new(1);
            }
            dates
        }
    }
}

/// Move the anchor date by `steps` units of the view (negative = back).
pub fn navigate(kind: ViewKind, anchor: NaiveDate, steps: i32) -> NaiveDate {
    let forward = steps >= 0;
    let magnitude = steps.unsigned_abs();
    match kind {
        ViewKind::Day if forward => anchor + Days::new(u64::from(magnitude)),
        ViewKind::Day => anchor - Days::new(u64::from(magnitude)),
        ViewKind::Week if forward => anchor + Days::new(u64::from(magnitude) * 7),
        ViewKind::Week => anchor - Days::new(u64::from(magnitude) * 7),
        ViewKind::Month if forward => anchor + Months::new(magnitude),
        ViewKind::Month => anchor - Months::new(magnitude),
    }
}

/// The events visible inside the given day window, in input order.
pub fn events_in_window(events: &[CalendarEvent], window: DayWindow) -> Vec<CalendarEvent> {
    events
        .iter()
        .filter(|e| window.contains(e))
        .cloned()
        .collect()
}

/// Filter the events to one display day and lay them out.
///
/// # Errors
/// Returns `LayoutError::DuplicateEventId` if two visible events share an
/// id.
pub fn layout_day(events: &[CalendarEvent], date: NaiveDate) -> Result<Vec<EventLayout>> {
    let visible = events_in_window(events, DayWindow::of(date));
    layout_events(&visible)
}
