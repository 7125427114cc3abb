//! Weekday-aligned month grid for the event calendar.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::entity::ScheduleEntity;
use crate::month_window::MonthWindow;

/// Column headers, Sunday first.
pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    pub day: u32,
    pub has_event: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub window: MonthWindow,
    /// Empty cells before day 1 (0 when the month starts on a Sunday)
    pub leading_blanks: u32,
    pub cells: Vec<DayCell>,
}

impl MonthGrid {
    /// Cells split into weeks, `None` for padding before day 1 and after the
    /// last day.
    pub fn weeks(&self) -> Vec<[Option<&DayCell>; 7]> {
        let padded: Vec<Option<&DayCell>> = std::iter::repeat_n(None, self.leading_blanks as usize)
            .chain(self.cells.iter().map(Some))
            .collect();

        padded
            .chunks(7)
            .map(|chunk| {
                let mut week = [None; 7];
                for (slot, cell) in week.iter_mut().zip(chunk) {
                    *slot = *cell;
                }
                week
            })
            .collect()
    }
}

/// Every day a contest is open for entries plus its results day.
pub fn schedule_dates(entities: &[ScheduleEntity]) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();

    for entity in entities {
        dates.extend(
            entity
                .start_date
                .iter_days()
                .take_while(|d| *d <= entity.end_date),
        );
        dates.insert(entity.result_date);
    }

    dates
}

pub fn month_grid(
    window: &MonthWindow,
    event_dates: &BTreeSet<NaiveDate>,
    today: Option<NaiveDate>,
) -> MonthGrid {
    let cells: Vec<DayCell> = (1..=window.total_days)
        .filter_map(|day| NaiveDate::from_ymd_opt(window.year, window.month, day))
        .map(|date| DayCell {
            date,
            day: date.day(),
            has_event: event_dates.contains(&date),
            is_today: today == Some(date),
        })
        .collect();

    let leading_blanks = cells
        .first()
        .map(|cell| cell.date.weekday().num_days_from_sunday())
        .unwrap_or(0);

    MonthGrid {
        window: *window,
        leading_blanks,
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn august_2024_starts_on_thursday() {
        let window = MonthWindow::new(2024, 8).unwrap();
        let grid = month_grid(&window, &BTreeSet::new(), None);

        assert_eq!(grid.leading_blanks, 4);
        assert_eq!(grid.cells.len(), 31);
        assert_eq!(grid.cells[0].day, 1);
        assert_eq!(grid.cells[30].day, 31);
    }

    #[test]
    fn sunday_start_has_no_blanks() {
        // 2024-09-01 is a Sunday
        let window = MonthWindow::new(2024, 9).unwrap();
        let grid = month_grid(&window, &BTreeSet::new(), None);
        assert_eq!(grid.leading_blanks, 0);
    }

    #[test]
    fn marks_events_and_today() {
        let window = MonthWindow::new(2025, 8).unwrap();
        let events: BTreeSet<_> = [date(2025, 8, 10), date(2025, 8, 15), date(2025, 9, 1)]
            .into_iter()
            .collect();

        let grid = month_grid(&window, &events, Some(date(2025, 8, 15)));

        let flagged: Vec<_> = grid.cells.iter().filter(|c| c.has_event).map(|c| c.day).collect();
        assert_eq!(flagged, vec![10, 15]);

        let today: Vec<_> = grid.cells.iter().filter(|c| c.is_today).map(|c| c.day).collect();
        assert_eq!(today, vec![15]);
    }

    #[test]
    fn weeks_are_padded() {
        let window = MonthWindow::new(2024, 8).unwrap();
        let grid = month_grid(&window, &BTreeSet::new(), None);
        let weeks = grid.weeks();

        assert_eq!(weeks.len(), 5);
        assert!(weeks[0][..4].iter().all(|c| c.is_none()));
        assert_eq!(weeks[0][4].map(|c| c.day), Some(1));
        assert_eq!(weeks[4][6].map(|c| c.day), Some(31));
    }

    #[test]
    fn schedule_dates_cover_entry_period_and_results() {
        let entities = vec![ScheduleEntity::new(
            "A",
            "a",
            date(2024, 8, 5),
            date(2024, 8, 8),
            date(2024, 8, 15),
        )];

        let dates: Vec<_> = schedule_dates(&entities).into_iter().map(|d| d.day()).collect();
        assert_eq!(dates, vec![5, 6, 7, 8, 15]);
    }
}
