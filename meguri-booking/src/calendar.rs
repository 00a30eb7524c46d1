//! Calendar availability model.
//!
//! Booked and busy dates are fixtures standing in for a future availability
//! service; classification is re-derived from scratch on every render.
use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Classification of one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    /// Strictly before today; never selectable.
    Past,
    /// Today with no availability note.
    Today,
    /// Fully booked; not selectable.
    Booked,
    /// Limited availability; selectable, rendered with a warning.
    Busy,
    Available,
}

impl DayStatus {
    #[must_use]
    pub const fn is_selectable(self) -> bool {
        matches!(self, Self::Today | Self::Busy | Self::Available)
    }
}

/// Hard-coded booked/busy dates simulating a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityFixtures {
    pub booked: Vec<NaiveDate>,
    pub busy: Vec<NaiveDate>,
}

impl Default for AvailabilityFixtures {
    fn default() -> Self {
        Self {
            booked: dates(&[
                (2024, 12, 15),
                (2024, 12, 20),
                (2024, 12, 25),
                (2025, 1, 5),
                (2025, 1, 12),
            ]),
            busy: dates(&[
                (2026, 1, 3),
                (2026, 1, 8),
                (2026, 1, 15),
                (2026, 1, 18),
                (2026, 1, 22),
                (2026, 1, 28),
            ]),
        }
    }
}

fn dates(specs: &[(i32, u32, u32)]) -> Vec<NaiveDate> {
    specs
        .iter()
        .filter_map(|&(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .collect()
}

impl AvailabilityFixtures {
    /// Classify one day. Past overrides everything; booked overrides busy
    /// overrides today/available.
    #[must_use]
    pub fn classify(&self, date: NaiveDate, today: NaiveDate) -> DayStatus {
        if date < today {
            return DayStatus::Past;
        }
        if self.booked.contains(&date) {
            return DayStatus::Booked;
        }
        if self.busy.contains(&date) {
            return DayStatus::Busy;
        }
        if date == today {
            DayStatus::Today
        } else {
            DayStatus::Available
        }
    }
}

/// One rendered day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub selected: bool,
}

/// A fully derived month grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// Header text, e.g. `"January 2026"`.
    pub title: String,
    /// Empty cells before the 1st (weeks start on Sunday).
    pub leading_blanks: u8,
    pub days: Vec<DayCell>,
}

/// Month cursor plus the current date selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarState {
    cursor: NaiveDate,
    selected: Option<NaiveDate>,
    fixtures: AvailabilityFixtures,
}

impl CalendarState {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self::with_fixtures(today, AvailabilityFixtures::default())
    }

    #[must_use]
    pub fn with_fixtures(today: NaiveDate, fixtures: AvailabilityFixtures) -> Self {
        Self {
            cursor: first_of_month(today),
            selected: None,
            fixtures,
        }
    }

    #[must_use]
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    #[must_use]
    pub fn fixtures(&self) -> &AvailabilityFixtures {
        &self.fixtures
    }

    /// Move the cursor one month back. The selection marker is kept; it
    /// simply re-appears if the user navigates back to its month.
    pub fn prev_month(&mut self) {
        self.cursor = self
            .cursor
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.cursor);
    }

    pub fn next_month(&mut self) {
        self.cursor = self
            .cursor
            .checked_add_months(Months::new(1))
            .unwrap_or(self.cursor);
    }

    /// Try to select a date. Busy dates are allowed (the renderer warns);
    /// past and booked dates are refused. Returns the classification on
    /// success.
    pub fn select(&mut self, date: NaiveDate, today: NaiveDate) -> Option<DayStatus> {
        let status = self.fixtures.classify(date, today);
        if !status.is_selectable() {
            return None;
        }
        self.selected = Some(date);
        Some(status)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Reset the cursor to today's month and drop the selection.
    pub fn reset(&mut self, today: NaiveDate) {
        self.cursor = first_of_month(today);
        self.selected = None;
    }

    /// Re-derive the full grid for the cursor month. No incremental diffing;
    /// every render recomputes classifications from scratch.
    #[must_use]
    pub fn month_view(&self, today: NaiveDate) -> MonthView {
        let first = self.cursor;
        let title = first.format("%B %Y").to_string();
        let leading_blanks = u8::try_from(first.weekday().num_days_from_sunday()).unwrap_or(0);
        let day_count = days_in_month(first);
        let days = (1..=day_count)
            .filter_map(|day| first.with_day(day))
            .map(|date| DayCell {
                date,
                status: self.fixtures.classify(date, today),
                selected: self.selected == Some(date),
            })
            .collect();
        MonthView {
            title,
            leading_blanks,
            days,
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn days_in_month(first: NaiveDate) -> u32 {
    first
        .checked_add_months(Months::new(1))
        .map_or(31, |next| {
            u32::try_from(next.signed_duration_since(first).num_days()).unwrap_or(31)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn past_overrides_fixture_lists() {
        let fixtures = AvailabilityFixtures::default();
        let today = day(2026, 2, 1);
        // 2026-01-15 is in the busy fixtures but already behind us.
        assert_eq!(fixtures.classify(day(2026, 1, 15), today), DayStatus::Past);
        assert_eq!(fixtures.classify(day(2024, 12, 15), today), DayStatus::Past);
    }

    #[test]
    fn booked_takes_precedence_over_busy() {
        let mut fixtures = AvailabilityFixtures::default();
        let contested = day(2026, 1, 18);
        fixtures.booked.push(contested);
        let today = day(2026, 1, 1);
        assert_eq!(fixtures.classify(contested, today), DayStatus::Booked);
    }

    #[test]
    fn today_classifies_as_today_unless_listed() {
        let fixtures = AvailabilityFixtures::default();
        let today = day(2026, 1, 3);
        // Today is in the busy list, so busy wins.
        assert_eq!(fixtures.classify(today, today), DayStatus::Busy);
        let quiet_today = day(2026, 2, 2);
        assert_eq!(
            fixtures.classify(quiet_today, quiet_today),
            DayStatus::Today
        );
    }

    #[test]
    fn booked_and_past_dates_are_not_selectable() {
        let today = day(2026, 1, 1);
        let mut calendar = CalendarState::new(today);
        assert_eq!(calendar.select(day(2025, 12, 31), today), None);
        calendar.next_month();
        assert_eq!(calendar.select(day(2026, 1, 10), today), Some(DayStatus::Available));
        assert_eq!(calendar.selected(), Some(day(2026, 1, 10)));
    }

    #[test]
    fn busy_dates_select_with_a_warning_status() {
        let today = day(2026, 1, 1);
        let mut calendar = CalendarState::new(today);
        assert_eq!(calendar.select(day(2026, 1, 8), today), Some(DayStatus::Busy));
    }

    #[test]
    fn selection_survives_month_navigation() {
        let today = day(2026, 1, 1);
        let mut calendar = CalendarState::new(today);
        calendar.select(day(2026, 1, 10), today).unwrap();
        calendar.next_month();
        assert!(calendar.month_view(today).days.iter().all(|cell| !cell.selected));
        calendar.prev_month();
        let view = calendar.month_view(today);
        assert!(
            view.days
                .iter()
                .any(|cell| cell.selected && cell.date == day(2026, 1, 10))
        );
    }

    #[test]
    fn month_view_shape_matches_the_calendar() {
        let today = day(2026, 1, 1);
        let calendar = CalendarState::new(today);
        let view = calendar.month_view(today);
        assert_eq!(view.title, "January 2026");
        // 2026-01-01 is a Thursday.
        assert_eq!(view.leading_blanks, 4);
        assert_eq!(view.days.len(), 31);
        assert_eq!(view.days[0].status, DayStatus::Today);
        assert_eq!(view.days[2].status, DayStatus::Busy);
    }

    #[test]
    fn reset_returns_to_the_current_month() {
        let today = day(2026, 1, 1);
        let mut calendar = CalendarState::new(today);
        calendar.select(day(2026, 1, 10), today);
        calendar.next_month();
        calendar.reset(today);
        assert_eq!(calendar.selected(), None);
        assert_eq!(calendar.month_view(today).title, "January 2026");
    }
}
