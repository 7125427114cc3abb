//! Pointer-to-day mapping for a rendered track.
//!
//! A track is the horizontal strip a row's bar is drawn in. Its content box
//! (bounding box minus horizontal padding) is cached in `TrackGeometry` and
//! recomputed whenever the page lays out again.

use serde::Serialize;

use crate::month_window::MonthWindow;

/// Content box of a track, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackGeometry {
    /// Left edge of the content box (bounding box left + padding left)
    pub left_px: f64,
    /// Width of the content box (bounding box width - both paddings)
    pub width_px: f64,
    pub padding_left: f64,
    pub padding_right: f64,
}

impl TrackGeometry {
    /// Geometry for a track without padding.
    pub fn new(left_px: f64, width_px: f64) -> Self {
        TrackGeometry {
            left_px,
            width_px,
            padding_left: 0.0,
            padding_right: 0.0,
        }
    }

    /// Derive the content box from an element's bounding box and padding.
    pub fn from_bounding_box(
        box_left: f64,
        box_width: f64,
        padding_left: f64,
        padding_right: f64,
    ) -> Self {
        TrackGeometry {
            left_px: box_left + padding_left,
            width_px: box_width - padding_left - padding_right,
            padding_left,
            padding_right,
        }
    }

    /// Zero, negative or non-finite width: there is no axis to map onto.
    pub fn is_degenerate(&self) -> bool {
        !(self.width_px.is_finite() && self.width_px > 0.0 && self.left_px.is_finite())
    }
}

/// Map a pointer's horizontal client coordinate to a 1-based day.
///
/// `+ 0.5` before rounding buckets the axis so each day owns the span
/// around its column centre. Degenerate geometry, an empty month or a NaN
/// coordinate all map to day 1.
pub fn map_pointer_to_day(client_x: f64, geometry: &TrackGeometry, total_days: u32) -> u32 {
    if total_days == 0 || geometry.is_degenerate() || client_x.is_nan() {
        return 1;
    }

    let x = (client_x - geometry.left_px).clamp(0.0, geometry.width_px);
    let ratio = x / geometry.width_px;
    let day = (ratio * f64::from(total_days) + 0.5).round();

    day.clamp(1.0, f64::from(total_days)) as u32
}

/// Horizontal position of the centre of `day`'s column, relative to the
/// track's bounding box.
pub fn column_center(day: u32, geometry: &TrackGeometry, total_days: u32) -> f64 {
    if total_days == 0 || geometry.is_degenerate() {
        return geometry.padding_left;
    }

    geometry.width_px * (f64::from(day) - 0.5) / f64::from(total_days) + geometry.padding_left
}

pub fn tooltip_label(month: u32, day: u32) -> String {
    format!("{month}/{day}")
}

/// Where the hover line and tooltip go for one pointer position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoverPoint {
    pub day: u32,
    pub left_px: f64,
    pub label: String,
}

/// Hover state for one track.
#[derive(Debug, Clone)]
pub struct HoverMapper {
    window: MonthWindow,
    geometry: TrackGeometry,
}

impl HoverMapper {
    pub fn new(window: MonthWindow) -> Self {
        HoverMapper {
            window,
            geometry: TrackGeometry::default(),
        }
    }

    pub fn with_geometry(window: MonthWindow, geometry: TrackGeometry) -> Self {
        HoverMapper { window, geometry }
    }

    /// Recompute the cached content box. Depends only on the arguments, so
    /// calling it again after a resize with the same layout is a no-op.
    pub fn update_rect(
        &mut self,
        box_left: f64,
        box_width: f64,
        padding_left: f64,
        padding_right: f64,
    ) {
        self.geometry =
            TrackGeometry::from_bounding_box(box_left, box_width, padding_left, padding_right);
    }

    pub fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    pub fn window(&self) -> MonthWindow {
        self.window
    }

    pub fn day_at(&self, client_x: f64) -> u32 {
        map_pointer_to_day(client_x, &self.geometry, self.window.total_days)
    }

    pub fn hover(&self, client_x: f64) -> HoverPoint {
        let day = self.day_at(client_x);
        HoverPoint {
            day,
            left_px: column_center(day, &self.geometry, self.window.total_days),
            label: tooltip_label(self.window.month, day),
        }
    }
}

/// Coalesces pointer-move samples so only the latest one is resolved.
#[derive(Debug, Clone, Default)]
pub struct PointerDebounce {
    pending: Option<f64>,
    coalesced: u64,
}

impl PointerDebounce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a sample, replacing any sample not yet flushed.
    pub fn push(&mut self, client_x: f64) {
        if self.pending.replace(client_x).is_some() {
            self.coalesced += 1;
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Samples dropped because a newer one arrived first.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }

    /// Resolve the latest sample, if any.
    pub fn flush(&mut self, mapper: &HoverMapper) -> Option<HoverPoint> {
        self.pending.take().map(|x| mapper.hover(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> TrackGeometry {
        TrackGeometry::new(0.0, 310.0)
    }

    #[test]
    fn edges_and_midpoint() {
        assert_eq!(map_pointer_to_day(0.0, &track(), 31), 1);
        assert_eq!(map_pointer_to_day(310.0, &track(), 31), 31);
        assert_eq!(map_pointer_to_day(155.0, &track(), 31), 16);
    }

    #[test]
    fn pointer_outside_track_is_clamped() {
        assert_eq!(map_pointer_to_day(-50.0, &track(), 31), 1);
        assert_eq!(map_pointer_to_day(1000.0, &track(), 31), 31);
        assert_eq!(map_pointer_to_day(f64::INFINITY, &track(), 31), 31);
        assert_eq!(map_pointer_to_day(f64::NEG_INFINITY, &track(), 31), 1);
    }

    #[test]
    fn offset_track_is_relative_to_its_left_edge() {
        let geometry = TrackGeometry::new(100.0, 310.0);
        assert_eq!(map_pointer_to_day(100.0, &geometry, 31), 1);
        assert_eq!(map_pointer_to_day(255.0, &geometry, 31), 16);
        assert_eq!(map_pointer_to_day(410.0, &geometry, 31), 31);
    }

    #[test]
    fn every_day_is_reachable() {
        let geometry = track();
        let mut seen: Vec<u32> = (0..=310)
            .map(|x| map_pointer_to_day(f64::from(x), &geometry, 31))
            .collect();
        seen.dedup();
        assert_eq!(seen, (1..=31).collect::<Vec<_>>());
    }

    #[test]
    fn degenerate_geometry_maps_to_first_day() {
        assert_eq!(map_pointer_to_day(50.0, &TrackGeometry::new(0.0, 0.0), 31), 1);
        assert_eq!(map_pointer_to_day(50.0, &TrackGeometry::new(0.0, -10.0), 31), 1);
        assert_eq!(map_pointer_to_day(50.0, &TrackGeometry::new(0.0, f64::NAN), 31), 1);
        assert_eq!(map_pointer_to_day(f64::NAN, &track(), 31), 1);
        assert_eq!(map_pointer_to_day(50.0, &track(), 0), 1);
    }

    #[test]
    fn column_center_is_middle_of_day() {
        let geometry = track();
        assert_eq!(column_center(1, &geometry, 31), 5.0);
        assert_eq!(column_center(31, &geometry, 31), 305.0);

        let padded = TrackGeometry::from_bounding_box(0.0, 330.0, 12.0, 8.0);
        assert_eq!(padded.left_px, 12.0);
        assert_eq!(padded.width_px, 310.0);
        assert_eq!(column_center(1, &padded, 31), 17.0);
    }

    #[test]
    fn hover_reports_day_position_and_label() {
        let window = MonthWindow::new(2024, 8).unwrap();
        let mut mapper = HoverMapper::new(window);
        mapper.update_rect(40.0, 330.0, 12.0, 8.0);

        let point = mapper.hover(52.0 + 155.0);

        assert_eq!(point.day, 16);
        assert_eq!(point.label, "8/16");
        assert_eq!(point.left_px, 310.0 * 15.5 / 31.0 + 12.0);
    }

    #[test]
    fn update_rect_is_idempotent() {
        let mut mapper = HoverMapper::new(MonthWindow::new(2024, 8).unwrap());
        mapper.update_rect(10.0, 300.0, 4.0, 6.0);
        let first = mapper.geometry();
        mapper.update_rect(10.0, 300.0, 4.0, 6.0);
        assert_eq!(mapper.geometry(), first);

        mapper.update_rect(0.0, 500.0, 0.0, 0.0);
        mapper.update_rect(10.0, 300.0, 4.0, 6.0);
        assert_eq!(mapper.geometry(), first);
    }

    #[test]
    fn unmeasured_mapper_falls_back_to_first_day() {
        let mapper = HoverMapper::new(MonthWindow::new(2024, 8).unwrap());
        assert_eq!(mapper.hover(120.0).day, 1);
    }

    #[test]
    fn debounced_flush_matches_last_sample() {
        let mapper =
            HoverMapper::with_geometry(MonthWindow::new(2024, 2).unwrap(), TrackGeometry::new(0.0, 290.0));
        let mut debounce = PointerDebounce::new();

        assert!(debounce.flush(&mapper).is_none());

        for x in [3.0, 80.0, 150.0, 222.0] {
            debounce.push(x);
        }

        assert!(debounce.has_pending());
        assert_eq!(debounce.coalesced(), 3);
        assert_eq!(debounce.flush(&mapper), Some(mapper.hover(222.0)));
        assert!(!debounce.has_pending());
    }
}
