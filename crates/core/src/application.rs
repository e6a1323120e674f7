//! Review workflow status for a submitted application.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Workflow label an admin assigns to an application.
///
/// This is a flat label, not a guarded state machine: any status may be
/// set from any other status. Stored as text in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    InProgress,
    Completed,
    Rejected,
}

impl ApplicationStatus {
    /// All valid statuses, in workflow order.
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::New,
        ApplicationStatus::InProgress,
        ApplicationStatus::Completed,
        ApplicationStatus::Rejected,
    ];

    /// The database/wire representation of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::New => "new",
            ApplicationStatus::InProgress => "in_progress",
            ApplicationStatus::Completed => "completed",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Parse a status string, rejecting anything outside the enum.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str() == value)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{value}'. Expected one of: new, in_progress, completed, rejected"
                ))
            })
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parse_accepts_all_enum_values() {
        for status in ApplicationStatus::ALL {
            let parsed = ApplicationStatus::parse(status.as_str()).expect("valid status");
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn parse_rejects_unknown_value() {
        let err = ApplicationStatus::parse("invalid_value");
        assert_matches!(err, Err(CoreError::Validation(_)));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(ApplicationStatus::parse("New").is_err());
        assert!(ApplicationStatus::parse("IN_PROGRESS").is_err());
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&ApplicationStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
