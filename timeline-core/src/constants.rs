/// Month shown when nothing else is configured.
pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_MONTH: u32 = 8;

/// Labels longer than this many characters are cut and get an ellipsis.
pub const LABEL_MAX_CHARS: usize = 20;
pub const LABEL_ELLIPSIS: &str = "...";

/// Day markers drawn above the tracks (one per week).
pub const TICK_DAYS: [u32; 5] = [1, 8, 15, 22, 29];

/// Link target for a bar or milestone; `{id}` is replaced by the entity id.
pub const DEFAULT_DETAIL_URL: &str = "contest-detail.html?id={id}";

pub const BAR_CAPTION: &str = "Entry period";
pub const MILESTONE_CAPTION: &str = "Results";
