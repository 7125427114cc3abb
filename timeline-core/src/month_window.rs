//! Month window: the day axis of one rendered month.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::entity::ScheduleEntity;
use crate::error::{TimelineError, TimelineResult};

/// Number of days in a Gregorian month.
///
/// Computed as the day before the first of the following month. Returns 0
/// for a month outside 1-12 or a year chrono cannot represent.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if !(1..=12).contains(&month) {
        return 0;
    }

    let (next_year, next_month) = if month == 12 {
        (year.saturating_add(1), 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(0)
}

/// How an entity qualifies for a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlapMode {
    /// One of start, end or result date lies in the month. An entity that
    /// only passes through the month is left out.
    #[default]
    Landing,
    /// The range from the earliest to the latest date touches the month.
    Span,
}

/// One month of the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
    pub total_days: u32,
}

impl MonthWindow {
    pub fn new(year: i32, month: u32) -> TimelineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimelineError::InvalidMonth(month));
        }
        Ok(Self::from_valid(year, month))
    }

    /// Caller guarantees `month` is in 1-12.
    pub(crate) fn from_valid(year: i32, month: u32) -> Self {
        MonthWindow {
            year,
            month,
            total_days: days_in_month(year, month),
        }
    }

    fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        month_key(date) == self.key()
    }

    /// Column for `date` on this month's axis, pinned to the first or last
    /// day when the date lies before or after the month.
    pub fn clamped_day(&self, date: NaiveDate) -> u32 {
        let key = month_key(date);
        if key < self.key() {
            1
        } else if key > self.key() {
            self.total_days.max(1)
        } else {
            date.day()
        }
    }

    /// Whether the closed range `first..=last` touches this month.
    pub fn overlaps(&self, first: NaiveDate, last: NaiveDate) -> bool {
        month_key(first) <= self.key() && self.key() <= month_key(last)
    }

    pub fn includes(&self, entity: &ScheduleEntity, mode: OverlapMode) -> bool {
        match mode {
            OverlapMode::Landing => entity.dates().iter().any(|d| self.contains(*d)),
            OverlapMode::Span => {
                let (first, last) = entity.extent();
                self.overlaps(first, last)
            }
        }
    }
}

fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// Entities shown in `window`, in input order.
pub fn entities_in_month<'a>(
    window: &MonthWindow,
    entities: &'a [ScheduleEntity],
    mode: OverlapMode,
) -> Vec<&'a ScheduleEntity> {
    entities
        .iter()
        .filter(|entity| window.includes(entity, mode))
        .collect()
}
