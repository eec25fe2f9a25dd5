//! Calendar Panel State
//!
//! Month navigation and single-date selection for the calendar side panel.
//! Weeks start on Sunday and include the neighbouring months' days needed to
//! fill the first and last rows.

use chrono::{Datelike, Duration, Months, NaiveDate};

/// Column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for leading/trailing days of adjacent months
    pub in_month: bool,
    pub is_today: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    today: NaiveDate,
    /// First day of the visible month
    month: NaiveDate,
    selected: Option<NaiveDate>,
}

impl CalendarState {
    /// Show today's month with today selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            month: first_of_month(today),
            selected: Some(today),
        }
    }

    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// "October 2026"
    pub fn caption(&self) -> String {
        self.month.format("%B %Y").to_string()
    }

    pub fn next_month(&mut self) {
        self.month = self
            .month
            .checked_add_months(Months::new(1))
            .unwrap_or(self.month);
    }

    pub fn prev_month(&mut self) {
        self.month = self
            .month
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.month);
    }

    /// Select `date`, or clear the selection if it is already selected
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = if self.selected == Some(date) {
            None
        } else {
            Some(date)
        };
        tracing::debug!(selected = ?self.selected, "calendar selection changed");
    }

    /// Sunday-first rows of seven days covering the visible month
    pub fn weeks(&self) -> Vec<Vec<CalendarDay>> {
        let first = self.month;
        let last = last_of_month(first);

        let start = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
        let end = last + Duration::days(6 - last.weekday().num_days_from_sunday() as i64);
        let total = (end - start).num_days() as usize + 1;

        let days: Vec<CalendarDay> = start
            .iter_days()
            .take(total)
            .map(|date| CalendarDay {
                date,
                in_month: date.month() == first.month() && date.year() == first.year(),
                is_today: date == self.today,
                is_selected: self.selected == Some(date),
            })
            .collect();

        days.chunks(7).map(|week| week.to_vec()).collect()
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

fn last_of_month(first: NaiveDate) -> NaiveDate {
    match first.checked_add_months(Months::new(1)) {
        Some(next) => next - Duration::days(1),
        None => first,
    }
}
