//! Process status enumeration.
//!
//! Statuses are persisted as lowercase text. The set is closed: anything
//! outside the four values below is rejected at the API boundary. There are
//! no transition rules; any status may be set on any update.

use std::fmt;

use crate::error::CoreError;

/// Lifecycle status of a compliance process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Active,
    Paused,
    Completed,
    Overdue,
}

impl ProcessStatus {
    /// All valid statuses, in display order.
    pub const ALL: [ProcessStatus; 4] = [
        ProcessStatus::Active,
        ProcessStatus::Paused,
        ProcessStatus::Completed,
        ProcessStatus::Overdue,
    ];

    /// The persisted (and wire) representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ProcessStatus::Active => "active",
            ProcessStatus::Paused => "paused",
            ProcessStatus::Completed => "completed",
            ProcessStatus::Overdue => "overdue",
        }
    }

    /// Badge colour associated with each status.
    pub fn display_color(self) -> &'static str {
        match self {
            ProcessStatus::Active => "emerald",
            ProcessStatus::Paused => "yellow",
            ProcessStatus::Completed => "blue",
            ProcessStatus::Overdue => "red",
        }
    }

    /// Parse a persisted or client-supplied status string.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "active" => Ok(ProcessStatus::Active),
            "paused" => Ok(ProcessStatus::Paused),
            "completed" => Ok(ProcessStatus::Completed),
            "overdue" => Ok(ProcessStatus::Overdue),
            other => Err(CoreError::Validation(format!(
                "Unknown process status '{other}'. Must be one of: {}",
                Self::ALL.map(|s| s.as_str()).join(", ")
            ))),
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
