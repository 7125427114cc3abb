//! Terminal rendering for timeline types.
//!
//! Extension traits that draw timeline-core values with owo_colors.

use owo_colors::OwoColorize;
use timeline_core::calendar_grid::{DayCell, MonthGrid, WEEKDAYS};
use timeline_core::hover::HoverPoint;
use timeline_core::layout::RowDescriptor;
use timeline_core::timeline::{AgendaEntry, LegendKind};
use timeline_core::{ContestStatus, Timeline};

const BAR: char = '█';
const MILESTONE: char = '◆';
const EMPTY: char = '·';

/// Width of the label column; labels are already truncated by layout.
const LABEL_WIDTH: usize = 24;

pub trait Render {
    fn render(&self) -> String;
}

fn colorize_status(status: ContestStatus, text: &str) -> String {
    match status {
        ContestStatus::Active => text.green().to_string(),
        ContestStatus::Upcoming => text.cyan().to_string(),
        ContestStatus::Ended => text.dimmed().to_string(),
    }
}

fn pad_label(label: &str) -> String {
    let len = label.chars().count();
    if len >= LABEL_WIDTH {
        label.to_string()
    } else {
        format!("{}{}", label, " ".repeat(LABEL_WIDTH - len))
    }
}

/// Track cells for a row, one per day.
fn track_cells(row: &RowDescriptor, total_days: u32) -> String {
    (1..=total_days)
        .map(|day| {
            if day == row.milestone_day {
                MILESTONE.magenta().to_string()
            } else if row.bar_in_month && (row.bar.start_day..=row.bar.end_day).contains(&day) {
                colorize_status(row.status, &BAR.to_string())
            } else {
                EMPTY.dimmed().to_string()
            }
        })
        .collect()
}

/// Tick numbers placed over their day column.
fn tick_header(ticks: &[u32], total_days: u32) -> String {
    let mut cells = vec![' '; total_days as usize];

    for tick in ticks {
        let digits = tick.to_string();
        let start = (*tick as usize).saturating_sub(1);
        for (offset, ch) in digits.chars().enumerate() {
            if let Some(cell) = cells.get_mut(start + offset) {
                *cell = ch;
            }
        }
    }

    cells.into_iter().collect()
}

impl Render for LegendKind {
    fn render(&self) -> String {
        match self {
            LegendKind::Active => format!("{} {}", BAR.green(), self.label()),
            LegendKind::Upcoming => format!("{} {}", BAR.cyan(), self.label()),
            LegendKind::Results => format!("{} {}", MILESTONE.magenta(), self.label()),
        }
    }
}

impl Render for Timeline {
    fn render(&self) -> String {
        let total_days = self.window.total_days;
        let mut lines = Vec::new();

        lines.push(format!("📅 {}", self.title.bold()));
        lines.push(format!(
            "{} {}",
            " ".repeat(LABEL_WIDTH),
            tick_header(&self.ticks, total_days).dimmed()
        ));

        if self.rows.is_empty() {
            lines.push(format!("   {}", "No contests this month".dimmed()));
        }

        for row in &self.rows {
            lines.push(format!(
                "{} {}  {}",
                pad_label(&row.label),
                track_cells(row, total_days),
                colorize_status(row.status, &row.range_label)
            ));
        }

        let legend: Vec<String> = self.legend.iter().map(|kind| kind.render()).collect();
        lines.push(String::new());
        lines.push(format!("   {}", legend.join("   ")));

        lines.join("\n")
    }
}

impl Render for HoverPoint {
    fn render(&self) -> String {
        format!(
            "{} {}",
            self.label.bold(),
            format!("(day {}, left {:.1}px)", self.day, self.left_px).dimmed()
        )
    }
}

impl Render for AgendaEntry {
    fn render(&self) -> String {
        format!(
            "{:>2}  {}  {}",
            self.day,
            self.name,
            colorize_status(self.status, self.status.label())
        )
    }
}

fn render_cell(cell: Option<&DayCell>) -> String {
    let Some(cell) = cell else {
        return "   ".to_string();
    };

    let text = format!("{:>2}", cell.day);
    let text = if cell.has_event {
        format!("{}{}", text.green(), "•".green())
    } else {
        format!("{} ", text)
    };

    if cell.is_today {
        text.reversed().to_string()
    } else {
        text
    }
}

impl Render for MonthGrid {
    fn render(&self) -> String {
        let mut lines = vec![format!("{}/{:02}", self.window.year, self.window.month)
            .bold()
            .to_string()];

        lines.push(
            WEEKDAYS
                .iter()
                .map(|d| format!("{:<3}", &d[..2]))
                .collect::<Vec<_>>()
                .join(" ")
                .dimmed()
                .to_string(),
        );

        for week in self.weeks() {
            let cells: Vec<String> = week.iter().map(|cell| render_cell(*cell)).collect();
            lines.push(cells.join(" "));
        }

        lines.join("\n")
    }
}
