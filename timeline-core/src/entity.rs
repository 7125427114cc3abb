//! Schedule model.
//!
//! Contest data arrives as JSON with `YYYY-MM-DD` string dates. Each entry is
//! parsed on its own so that one bad record never hides the rest of the
//! schedule: it is skipped, logged, and reported back in `Schedule::skipped`.

use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{TimelineError, TimelineResult};

/// Where a contest is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Active,
    #[default]
    Upcoming,
    Ended,
}

impl ContestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ContestStatus::Active => "Active",
            ContestStatus::Upcoming => "Upcoming",
            ContestStatus::Ended => "Ended",
        }
    }

    /// CSS modifier used by the page for this status.
    pub fn css_class(&self) -> &'static str {
        match self {
            ContestStatus::Active => "active",
            ContestStatus::Upcoming => "upcoming",
            ContestStatus::Ended => "ended",
        }
    }
}

impl fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A scheduled contest: an entry period followed by a results date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntity {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub result_date: NaiveDate,
    pub status: ContestStatus,
}

impl ScheduleEntity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        result_date: NaiveDate,
    ) -> Self {
        ScheduleEntity {
            id: id.into(),
            name: name.into(),
            start_date,
            end_date,
            result_date,
            status: ContestStatus::default(),
        }
    }

    pub fn with_status(mut self, status: ContestStatus) -> Self {
        self.status = status;
        self
    }

    /// `start <= end <= result`. Not enforced, only reported.
    pub fn is_ordered(&self) -> bool {
        self.start_date <= self.end_date && self.end_date <= self.result_date
    }

    /// The three reference dates, in start/end/result order.
    pub fn dates(&self) -> [NaiveDate; 3] {
        [self.start_date, self.end_date, self.result_date]
    }

    /// Earliest and latest of the three reference dates.
    pub fn extent(&self) -> (NaiveDate, NaiveDate) {
        let dates = self.dates();
        let first = dates.iter().min().copied().unwrap_or(self.start_date);
        let last = dates.iter().max().copied().unwrap_or(self.result_date);
        (first, last)
    }
}

impl fmt::Display for ScheduleEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// Wire form of a schedule entry as found in the data files.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawScheduleEntity {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(alias = "title")]
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    /// Older data files omit it; the end of the entry period is used instead.
    #[serde(default)]
    pub result_date: Option<String>,
    #[serde(default)]
    pub status: ContestStatus,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Number(n) => n.to_string(),
    })
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(field: &'static str, value: &str) -> TimelineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TimelineError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

impl TryFrom<RawScheduleEntity> for ScheduleEntity {
    type Error = TimelineError;

    fn try_from(raw: RawScheduleEntity) -> TimelineResult<Self> {
        let start_date = parse_date("startDate", &raw.start_date)?;
        let end_date = parse_date("endDate", &raw.end_date)?;
        let result_date = match raw.result_date.as_deref() {
            Some(s) => parse_date("resultDate", s)?,
            None => end_date,
        };

        Ok(ScheduleEntity {
            id: raw.id,
            name: raw.name,
            start_date,
            end_date,
            result_date,
            status: raw.status,
        })
    }
}

/// An entry that could not be turned into a `ScheduleEntity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntity {
    /// Position in the source array
    pub index: usize,
    /// The entry's id, when it had a readable one
    pub id: Option<String>,
    pub reason: String,
}

impl fmt::Display for SkippedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "#{} ({}): {}", self.index, id, self.reason),
            None => write!(f, "#{}: {}", self.index, self.reason),
        }
    }
}

/// A loaded schedule, in source order.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    pub entities: Vec<ScheduleEntity>,
    pub skipped: Vec<SkippedEntity>,
}

impl Schedule {
    /// Parse a schedule from JSON.
    ///
    /// Accepts either a bare array or an object with a `contests` array.
    /// Only a document that is not JSON at all, or has neither shape, is an
    /// error; bad entries are skipped.
    pub fn from_json(json: &str) -> TimelineResult<Self> {
        let items = match serde_json::from_str::<Value>(json)? {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("contests") {
                Some(Value::Array(items)) => items,
                _ => {
                    return Err(TimelineError::Schema(
                        "expected a \"contests\" array".into(),
                    ));
                }
            },
            _ => {
                return Err(TimelineError::Schema(
                    "expected an array of contests".into(),
                ));
            }
        };

        let mut schedule = Schedule::default();

        for (index, item) in items.into_iter().enumerate() {
            let id = item.get("id").and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            });

            let parsed = serde_json::from_value::<RawScheduleEntity>(item)
                .map_err(TimelineError::from)
                .and_then(ScheduleEntity::try_from);

            match parsed {
                Ok(entity) => {
                    if !entity.is_ordered() {
                        log::warn!(
                            "Contest {} has dates out of order (start {}, end {}, result {})",
                            entity.id,
                            entity.start_date,
                            entity.end_date,
                            entity.result_date
                        );
                    }
                    schedule.entities.push(entity);
                }
                Err(e) => {
                    let skipped = SkippedEntity {
                        index,
                        id,
                        reason: e.to_string(),
                    };
                    log::warn!("Skipping schedule entry {}", skipped);
                    schedule.skipped.push(skipped);
                }
            }
        }

        log::debug!(
            "Loaded {} contests ({} skipped)",
            schedule.entities.len(),
            schedule.skipped.len()
        );

        Ok(schedule)
    }

    pub fn from_path(path: &Path) -> TimelineResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
