//! Month paging.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MONTH, DEFAULT_YEAR};
use crate::error::{TimelineError, TimelineResult};
use crate::month_window::MonthWindow;

/// The month a timeline widget is currently showing.
///
/// A plain value: each widget owns its own, and navigation returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawViewState")]
pub struct TimelineViewState {
    year: i32,
    month: u32,
}

#[derive(Deserialize)]
struct RawViewState {
    year: i32,
    month: u32,
}

impl TryFrom<RawViewState> for TimelineViewState {
    type Error = TimelineError;

    fn try_from(raw: RawViewState) -> TimelineResult<Self> {
        TimelineViewState::new(raw.year, raw.month)
    }
}

impl Default for TimelineViewState {
    fn default() -> Self {
        TimelineViewState {
            year: DEFAULT_YEAR,
            month: DEFAULT_MONTH,
        }
    }
}

impl TimelineViewState {
    pub fn new(year: i32, month: u32) -> TimelineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TimelineError::InvalidMonth(month));
        }
        Ok(TimelineViewState { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn window(&self) -> MonthWindow {
        MonthWindow::from_valid(self.year, self.month)
    }

    pub fn next(self) -> Self {
        navigate_month(self, 1)
    }

    pub fn prev(self) -> Self {
        navigate_month(self, -1)
    }
}

/// Move `direction` months from `state`.
///
/// The step is not validated. Overflow past December lands on January of the
/// next year and underflow past January lands on December of the previous
/// year, whatever the size of the step.
pub fn navigate_month(state: TimelineViewState, direction: i32) -> TimelineViewState {
    let month = i64::from(state.month) + i64::from(direction);

    let (year, month) = if month > 12 {
        (state.year.saturating_add(1), 1)
    } else if month < 1 {
        (state.year.saturating_sub(1), 12)
    } else {
        (state.year, month as u32)
    };

    log::debug!(
        "Timeline moved {:+} month(s): {}/{} -> {}/{}",
        direction,
        state.year,
        state.month,
        year,
        month
    );

    TimelineViewState { year, month }
}
