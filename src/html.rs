//! HTML fragment for the contest page's `#ganttChart` container.
//!
//! Markup and class names follow the page's stylesheet: a `.date-header`
//! with tick labels, one `.gantt` row per contest whose `.track` carries the
//! day count in `--days`, and a `.gantt-legend`. The page script attaches
//! hover handling to `.hoverline` / `.tooltip` and navigates via `data-href`.

use std::fmt::Write;

use timeline_core::Timeline;
use timeline_core::constants::{BAR_CAPTION, MILESTONE_CAPTION};
use timeline_core::layout::RowDescriptor;
use timeline_core::timeline::LegendKind;

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn legend_class(kind: LegendKind) -> &'static str {
    match kind {
        LegendKind::Active => "active",
        LegendKind::Upcoming => "upcoming",
        LegendKind::Results => "ended",
    }
}

fn row_html(out: &mut String, row: &RowDescriptor, timeline: &Timeline) {
    let window = &timeline.window;
    let href = html_escape(&row.detail_href);

    let _ = write!(
        out,
        r#"<div class="gantt {status}" data-id="{id}">
  <div class="label" title="{full}">{label}</div>
  <div class="track" style="--days: {days};" data-year="{year}" data-month="{month}">
"#,
        status = row.status.css_class(),
        id = html_escape(&row.id),
        full = html_escape(&row.full_label),
        label = html_escape(&row.label),
        days = window.total_days,
        year = window.year,
        month = window.month,
    );

    if row.bar_in_month {
        let _ = write!(
            out,
            r#"    <div class="bar" style="--start: {start}; --end: {end}; grid-column: {grid};" data-start="{start}" data-end="{end}" data-range="{range}" data-href="{href}"><span class="bar-label">{bar_caption}</span><span class="bar-range">{range}</span></div>
"#,
            start = row.bar.start_day,
            end = row.bar.end_day,
            grid = row.bar.grid_column(),
            range = html_escape(&row.range_label),
            bar_caption = BAR_CAPTION,
        );
    }

    let outside = if row.milestone_in_month {
        ""
    } else {
        " milestone--outside"
    };

    let _ = write!(
        out,
        r#"    <div class="milestone{outside}" style="--day: {day}; grid-column: {day};" title="{caption}" data-href="{href}">{caption}</div>
    <div class="hoverline" aria-hidden="true"></div>
    <div class="tooltip" aria-hidden="true"></div>
  </div>
</div>
"#,
        day = row.milestone_day,
        caption = MILESTONE_CAPTION,
    );
}

/// Render a laid out month as the gantt chart's inner HTML.
pub fn timeline_html(timeline: &Timeline) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        r#"<h3 class="gantt-title">📅 {}</h3>"#,
        html_escape(&timeline.title)
    );

    out.push_str("<div class=\"date-header\">\n");
    for tick in &timeline.ticks {
        let _ = writeln!(
            out,
            r#"  <div class="tick" style="grid-column: {tick}">{tick}</div>"#
        );
    }
    out.push_str("</div>\n<div class=\"gantt-timeline\">\n");

    for row in &timeline.rows {
        row_html(&mut out, row, timeline);
    }

    out.push_str("</div>\n<div class=\"gantt-legend\">\n");
    for kind in &timeline.legend {
        let _ = writeln!(
            out,
            r#"  <div class="gantt-legend-item"><div class="gantt-legend-color {}"></div><span>{}</span></div>"#,
            legend_class(*kind),
            kind.label()
        );
    }
    out.push_str("</div>\n");

    out
}
