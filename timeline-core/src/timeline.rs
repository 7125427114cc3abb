//! Assemble a month of the contest timeline.

use chrono::Datelike;
use serde::Serialize;

use crate::constants::TICK_DAYS;
use crate::entity::{ContestStatus, ScheduleEntity};
use crate::error::TimelineResult;
use crate::layout::{LayoutOptions, RowDescriptor, layout_row};
use crate::month_window::{MonthWindow, OverlapMode, entities_in_month};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimelineOptions {
    pub overlap: OverlapMode,
    pub layout: LayoutOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendKind {
    Active,
    Upcoming,
    Results,
}

impl LegendKind {
    pub fn label(&self) -> &'static str {
        match self {
            LegendKind::Active => "Active",
            LegendKind::Upcoming => "Upcoming",
            LegendKind::Results => "Results",
        }
    }
}

pub const LEGEND: [LegendKind; 3] = [LegendKind::Active, LegendKind::Upcoming, LegendKind::Results];

/// A fully laid out month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub window: MonthWindow,
    pub title: String,
    /// Days that get a marker in the header
    pub ticks: Vec<u32>,
    pub rows: Vec<RowDescriptor>,
    pub legend: Vec<LegendKind>,
}

pub fn timeline_title(window: &MonthWindow) -> String {
    format!("{}/{:02} contest timeline", window.year, window.month)
}

/// Lay out every entity shown in `(year, month)`.
///
/// Output depends only on the arguments. An entity that cannot be laid out
/// is logged and left out; it never stops the other rows.
pub fn render_timeline(
    year: i32,
    month: u32,
    entities: &[ScheduleEntity],
    options: &TimelineOptions,
) -> TimelineResult<Timeline> {
    let window = MonthWindow::new(year, month)?;
    Ok(render_window(&window, entities, options))
}

/// Same as `render_timeline` for an already validated window.
pub fn render_window(
    window: &MonthWindow,
    entities: &[ScheduleEntity],
    options: &TimelineOptions,
) -> Timeline {
    let rows = entities_in_month(window, entities, options.overlap)
        .into_iter()
        .filter_map(|entity| match layout_row(window, entity, &options.layout) {
            Ok(row) => Some(row),
            Err(e) => {
                log::warn!("Leaving {} off the timeline: {}", entity, e);
                None
            }
        })
        .collect();

    Timeline {
        window: *window,
        title: timeline_title(window),
        ticks: TICK_DAYS
            .iter()
            .copied()
            .filter(|day| *day <= window.total_days)
            .collect(),
        rows,
        legend: LEGEND.to_vec(),
    }
}

/// One line of the month's contest list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaEntry {
    /// First day of the entry period visible in this month, or the day the
    /// contest lands on when its entry period is in another month
    pub day: u32,
    pub id: String,
    pub name: String,
    pub status: ContestStatus,
}

fn agenda_day(window: &MonthWindow, entity: &ScheduleEntity) -> u32 {
    if window.overlaps(entity.start_date, entity.end_date) {
        return window.clamped_day(entity.start_date);
    }

    entity
        .dates()
        .into_iter()
        .find(|date| window.contains(*date))
        .map_or_else(|| window.clamped_day(entity.result_date), |date| date.day())
}

/// Contests of the month ordered by the day their entry period starts.
pub fn month_agenda(
    window: &MonthWindow,
    entities: &[ScheduleEntity],
    mode: OverlapMode,
) -> Vec<AgendaEntry> {
    let mut entries: Vec<AgendaEntry> = entities_in_month(window, entities, mode)
        .into_iter()
        .map(|entity| AgendaEntry {
            day: agenda_day(window, entity),
            id: entity.id.clone(),
            name: entity.name.clone(),
            status: entity.status,
        })
        .collect();

    // stable: ties keep input order
    entries.sort_by_key(|entry| entry.day);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BarSpan;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contests() -> Vec<ScheduleEntity> {
        vec![
            ScheduleEntity::new(
                "CONTEST001",
                "Summer Memories Photo Contest",
                date(2024, 8, 15),
                date(2024, 8, 20),
                date(2024, 8, 25),
            )
            .with_status(ContestStatus::Active),
            ScheduleEntity::new(
                "CONTEST002",
                "Fireworks Photo Contest",
                date(2024, 8, 25),
                date(2024, 8, 30),
                date(2024, 9, 5),
            ),
            ScheduleEntity::new(
                "CONTEST003",
                "Autumn Scenery Photo Contest",
                date(2024, 10, 1),
                date(2024, 10, 31),
                date(2024, 11, 10),
            ),
            ScheduleEntity::new(
                "CONTEST004",
                "Seaside",
                date(2024, 8, 5),
                date(2024, 8, 8),
                date(2024, 8, 15),
            )
            .with_status(ContestStatus::Active),
            ScheduleEntity::new(
                "BROKEN",
                "Backwards",
                date(2024, 8, 10),
                date(2024, 8, 2),
                date(2024, 8, 12),
            ),
        ]
    }

    #[test]
    fn renders_month_rows_in_input_order() {
        let timeline = render_timeline(2024, 8, &contests(), &TimelineOptions::default()).unwrap();

        let ids: Vec<_> = timeline.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["CONTEST001", "CONTEST002", "CONTEST004"]);

        let seaside = &timeline.rows[2];
        assert_eq!(seaside.bar, BarSpan { start_day: 5, end_day: 8 });
        assert_eq!(seaside.bar.width(), 4);
        assert_eq!(timeline.window.total_days, 31);
    }

    #[test]
    fn bad_entity_does_not_stop_the_rest() {
        let timeline = render_timeline(2024, 8, &contests(), &TimelineOptions::default()).unwrap();
        assert!(timeline.rows.iter().all(|r| r.id != "BROKEN"));
        assert_eq!(timeline.rows.len(), 3);
    }

    #[test]
    fn rendering_is_pure() {
        let entities = contests();
        let options = TimelineOptions::default();
        let first = render_timeline(2024, 8, &entities, &options).unwrap();
        let second = render_timeline(2024, 8, &entities, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn header_ticks_and_title() {
        let timeline = render_timeline(2024, 8, &[], &TimelineOptions::default()).unwrap();
        assert_eq!(timeline.ticks, vec![1, 8, 15, 22, 29]);
        assert_eq!(timeline.title, "2024/08 contest timeline");
        assert_eq!(timeline.legend, LEGEND.to_vec());

        let february = render_timeline(2023, 2, &[], &TimelineOptions::default()).unwrap();
        assert_eq!(february.ticks, vec![1, 8, 15, 22]);
    }

    #[test]
    fn months_without_dates_are_empty() {
        let timeline = render_timeline(2024, 9, &contests(), &TimelineOptions::default()).unwrap();
        let ids: Vec<_> = timeline.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["CONTEST002"]);

        let timeline = render_timeline(2024, 12, &contests(), &TimelineOptions::default()).unwrap();
        assert!(timeline.rows.is_empty());
    }

    #[test]
    fn invalid_month_is_an_error() {
        assert!(render_timeline(2024, 0, &contests(), &TimelineOptions::default()).is_err());
    }

    #[test]
    fn agenda_is_sorted_by_start_day() {
        let window = MonthWindow::new(2024, 8).unwrap();
        let agenda = month_agenda(&window, &contests(), OverlapMode::Landing);

        let days: Vec<_> = agenda.iter().map(|e| (e.day, e.id.as_str())).collect();
        assert_eq!(
            days,
            vec![
                (5, "CONTEST004"),
                (10, "BROKEN"),
                (15, "CONTEST001"),
                (25, "CONTEST002"),
            ]
        );
    }

    #[test]
    fn sample_schedule_august() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../data/contests.json");
        let schedule = crate::Schedule::from_path(&path).unwrap();
        assert_eq!(schedule.entities.len(), 6);

        let timeline =
            render_timeline(2024, 8, &schedule.entities, &TimelineOptions::default()).unwrap();
        let ids: Vec<_> = timeline.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["CONTEST001", "CONTEST002", "CONTEST004", "CONTEST005"]);

        let may = render_timeline(2024, 5, &schedule.entities, &TimelineOptions::default()).unwrap();
        assert_eq!(may.rows.len(), 1);
        let spring = &may.rows[0];
        assert_eq!(spring.id, "CONTEST006");
        assert!(!spring.bar_in_month);
        assert_eq!(spring.range_label, "4/1–4/30");
        assert_eq!(spring.milestone_day, 15);
        assert!(spring.milestone_in_month);

        let agenda = month_agenda(&may.window, &schedule.entities, OverlapMode::Landing);
        let days: Vec<_> = agenda.iter().map(|e| e.day).collect();
        assert_eq!(days, vec![15]);
    }

    #[test]
    fn agenda_uses_first_visible_day() {
        let crossing = ScheduleEntity::new(
            "CROSSING",
            "Crossing",
            date(2024, 8, 25),
            date(2024, 9, 10),
            date(2024, 9, 20),
        );
        let window = MonthWindow::new(2024, 9).unwrap();
        let agenda = month_agenda(&window, &[crossing], OverlapMode::Landing);
        assert_eq!(agenda.len(), 1);
        assert_eq!(agenda[0].day, 1);
    }

    #[test]
    fn agenda_day_of_results_only_month_is_the_result_day() {
        let window = MonthWindow::new(2024, 9).unwrap();
        let agenda = month_agenda(&window, &contests(), OverlapMode::Landing);
        assert_eq!(agenda.len(), 1);
        assert_eq!((agenda[0].id.as_str(), agenda[0].day), ("CONTEST002", 5));
    }

    #[test]
    fn span_mode_row_without_bar() {
        let pending = ScheduleEntity::new(
            "PENDING",
            "Pending",
            date(2024, 7, 1),
            date(2024, 7, 20),
            date(2024, 9, 5),
        );
        let options = TimelineOptions {
            overlap: OverlapMode::Span,
            ..TimelineOptions::default()
        };

        let timeline = render_timeline(2024, 8, &[pending.clone()], &options).unwrap();

        assert_eq!(timeline.rows.len(), 1);
        assert!(!timeline.rows[0].bar_in_month);
        assert_eq!(timeline.rows[0].range_label, "7/1–7/20");

        let agenda = month_agenda(&timeline.window, &[pending], OverlapMode::Span);
        assert_eq!(agenda[0].day, 31);
    }

    #[test]
    fn unclamped_crossing_entry_period_is_left_out() {
        let crossing = ScheduleEntity::new(
            "CROSSING",
            "Crossing",
            date(2024, 7, 25),
            date(2024, 8, 5),
            date(2024, 8, 10),
        );
        let mut options = TimelineOptions::default();
        options.layout.clamp = false;

        let timeline = render_timeline(2024, 8, &[crossing.clone()], &options).unwrap();
        assert!(timeline.rows.is_empty());

        let clamped = render_timeline(2024, 8, &[crossing], &TimelineOptions::default()).unwrap();
        assert_eq!(clamped.rows[0].bar, BarSpan { start_day: 1, end_day: 5 });
    }
}
