//! Gantt bar layout.
//!
//! Columns are 1-based days on the month axis. A bar covers
//! `start_day..=end_day` and the milestone sits on a single column.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::constants::{DEFAULT_DETAIL_URL, LABEL_ELLIPSIS, LABEL_MAX_CHARS};
use crate::entity::{ContestStatus, ScheduleEntity};
use crate::error::{TimelineError, TimelineResult};
use crate::month_window::MonthWindow;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutOptions {
    pub label_max_chars: usize,
    /// Pin columns of dates outside the month to the month's edges.
    pub clamp: bool,
    /// Link template, `{id}` is replaced by the entity id.
    pub detail_url: String,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        LayoutOptions {
            label_max_chars: LABEL_MAX_CHARS,
            clamp: true,
            detail_url: DEFAULT_DETAIL_URL.to_string(),
        }
    }
}

/// Inclusive day range covered by a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSpan {
    pub start_day: u32,
    pub end_day: u32,
}

impl BarSpan {
    /// Width in day units.
    pub fn width(&self) -> u32 {
        self.end_day.saturating_sub(self.start_day) + 1
    }

    /// CSS `grid-column` value; grid lines are exclusive at the end.
    pub fn grid_column(&self) -> String {
        format!("{} / {}", self.start_day, self.end_day + 1)
    }
}

/// Everything a page needs to draw one timeline row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDescriptor {
    pub id: String,
    /// Display text, possibly truncated
    pub label: String,
    /// Untruncated name for the title attribute
    pub full_label: String,
    pub bar: BarSpan,
    /// False when the entry period lies entirely in other months; the bar
    /// is then not drawn.
    pub bar_in_month: bool,
    pub milestone_day: u32,
    /// False when the result date is in another month
    pub milestone_in_month: bool,
    /// Entry period as dates, e.g. "8/5–8/8" or "7/25–8/5"
    pub range_label: String,
    pub status: ContestStatus,
    pub detail_href: String,
}

/// Cut `name` to `max_chars` characters and append an ellipsis.
pub fn truncate_label(name: &str, max_chars: usize) -> String {
    match name.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}{}", &name[..idx], LABEL_ELLIPSIS),
        None => name.to_string(),
    }
}

pub fn detail_href(template: &str, id: &str) -> String {
    template.replace("{id}", id)
}

pub fn range_label(start: NaiveDate, end: NaiveDate) -> String {
    format!(
        "{}/{}–{}/{}",
        start.month(),
        start.day(),
        end.month(),
        end.day()
    )
}

/// Lay out a single entity on `window`.
///
/// Fails when the entity's end date precedes its start date, or when, with
/// clamping off, an entry period crossing a month boundary would put the end
/// column before the start column.
pub fn layout_row(
    window: &MonthWindow,
    entity: &ScheduleEntity,
    options: &LayoutOptions,
) -> TimelineResult<RowDescriptor> {
    let column = |date: NaiveDate| {
        if options.clamp {
            window.clamped_day(date)
        } else {
            date.day()
        }
    };

    let bar = BarSpan {
        start_day: column(entity.start_date),
        end_day: column(entity.end_date),
    };
    let bar_in_month = window.overlaps(entity.start_date, entity.end_date);

    if entity.end_date < entity.start_date || (bar_in_month && bar.end_day < bar.start_day) {
        return Err(TimelineError::InvertedSpan {
            id: entity.id.clone(),
            start_day: bar.start_day,
            end_day: bar.end_day,
        });
    }

    Ok(RowDescriptor {
        id: entity.id.clone(),
        label: truncate_label(&entity.name, options.label_max_chars),
        full_label: entity.name.clone(),
        bar,
        bar_in_month,
        milestone_day: column(entity.result_date),
        milestone_in_month: window.contains(entity.result_date),
        range_label: range_label(entity.start_date, entity.end_date),
        status: entity.status,
        detail_href: detail_href(&options.detail_url, &entity.id),
    })
}
