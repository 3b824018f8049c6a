// src/request/model.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduling request as handed over by the caller.
///
/// JSON form:
///
/// ```json
/// {
///   "tasks": [
///     { "title": "Design", "estimatedHours": 4, "dueDate": "2025-03-01", "dependencies": [] },
///     { "title": "Build", "estimatedHours": 12, "dependencies": ["Design"] }
///   ]
/// }
/// ```
///
/// TOML form:
///
/// ```toml
/// [[tasks]]
/// title = "Design"
/// estimated_hours = 4
/// due_date = "2025-03-01"
///
/// [[tasks]]
/// title = "Build"
/// dependencies = ["Design"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub tasks: Vec<TaskDescriptor>,
}

impl From<Vec<TaskDescriptor>> for ScheduleRequest {
    fn from(tasks: Vec<TaskDescriptor>) -> Self {
        Self { tasks }
    }
}

/// One task entry of a [`ScheduleRequest`].
///
/// Only `title` and `dependencies` take part in ordering. `estimated_hours`
/// and `due_date` are carried along as metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
    /// Identifier of the task within one request. Compared by exact equality.
    pub title: String,

    #[serde(default, alias = "estimated_hours")]
    pub estimated_hours: u32,

    #[serde(default, alias = "due_date", with = "due_date_format")]
    pub due_date: Option<NaiveDate>,

    /// Titles that must come before this task.
    ///
    /// Names that do not match any task in the same request are ignored.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl TaskDescriptor {
    /// A task with no dependencies and no metadata.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            estimated_hours: 0,
            due_date: None,
            dependencies: Vec::new(),
        }
    }
}

/// The resolver's answer: titles in recommended execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub recommended_order: Vec<String>,
}

/// Parse a due date the way callers tend to send them.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` timestamps. Only the date part is kept.
pub fn parse_due_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(s, due_date_format::DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(ts.date_naive());
    }
    s.parse::<chrono::NaiveDateTime>().ok().map(|ts| ts.date())
}

mod due_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub(super) const DATE_FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(DATE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;

        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse_due_date(s).map(Some).ok_or_else(|| {
                de::Error::custom(format!(
                    "invalid dueDate `{s}` (expected YYYY-MM-DD or an RFC 3339 timestamp)"
                ))
            }),
        }
    }
}
