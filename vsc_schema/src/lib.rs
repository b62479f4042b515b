use serde::{Deserialize, Serialize};

pub type Milliseconds = f64;

/// Type code of events that are removed when a chart is shifted.
pub const FILTERED_TYPE_CODE: &str = "3";

pub const FIELD_SEPARATOR: char = ',';

/// Decimal places kept on every rewritten timestamp.
pub const TIMESTAMP_PLACES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Only the recomputed timestamp is written; every other field is lost.
    #[default]
    TimestampOnly,
    /// The timestamp is replaced in place and the remaining fields are kept.
    Preserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Shifted lines are written after the existing content.
    #[default]
    Append,
    /// The file is truncated and holds only the shifted lines.
    Overwrite,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLine {
    pub timestamp_ms: Milliseconds,
    pub type_code: String,
    #[serde(default)]
    pub extra_fields: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChange {
    pub line: usize,
    pub type_code: String,
    pub before_ms: Option<Milliseconds>,
    /// `None` when the line was dropped.
    pub after_ms: Option<Milliseconds>,
}

impl LineChange {
    pub fn is_dropped(&self) -> bool {
        self.after_ms.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftReport {
    #[serde(default)]
    pub file: Option<String>,
    pub offset_ms: Milliseconds,
    pub field_policy: FieldPolicy,
    pub write_mode: WriteMode,
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_dropped: usize,
}
