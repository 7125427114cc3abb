//! Core types for the contest timeline.
//!
//! This crate holds everything that does real date or geometry work and
//! nothing that touches a page:
//! - `entity` for the schedule model and JSON loading
//! - `month_window` for day counts and month filtering
//! - `layout` for gantt bar and milestone placement
//! - `hover` for pointer-to-day mapping on a rendered track
//! - `navigator` for month-to-month paging
//! - `timeline` to assemble a full month description

pub mod calendar_grid;
pub mod config;
pub mod constants;
pub mod entity;
pub mod error;
pub mod hover;
pub mod layout;
pub mod month_window;
pub mod navigator;
pub mod timeline;

pub use entity::{ContestStatus, Schedule, ScheduleEntity};
pub use error::{TimelineError, TimelineResult};
pub use hover::{HoverMapper, HoverPoint, TrackGeometry, map_pointer_to_day};
pub use layout::{BarSpan, RowDescriptor};
pub use month_window::{MonthWindow, OverlapMode, days_in_month};
pub use navigator::{TimelineViewState, navigate_month};
pub use timeline::{Timeline, TimelineOptions, render_timeline};
