use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{SessionId, StudentId};

/// Severity tiers in priority order. `Critical < Warning < Info`, so an ascending sort
/// puts the most urgent violations first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Critical, Self::Warning, Self::Info]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceRule {
    SigningDeadline,
    SoapCompleteness,
    GoalProgress,
    FrequencyCompliance,
}

impl ComplianceRule {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::SigningDeadline,
            Self::SoapCompleteness,
            Self::GoalProgress,
            Self::FrequencyCompliance,
        ]
    }

    /// Stable prefix for violation identifiers.
    pub const fn key(self) -> &'static str {
        match self {
            Self::SigningDeadline => "signing-deadline",
            Self::SoapCompleteness => "soap-incomplete",
            Self::GoalProgress => "goal-progress",
            Self::FrequencyCompliance => "frequency",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::SigningDeadline => "Session Signing Deadline",
            Self::SoapCompleteness => "Incomplete SOAP Note",
            Self::GoalProgress => "Goal Progress Documentation",
            Self::FrequencyCompliance => "Service Frequency",
        }
    }
}

/// A single compliance finding produced by one rule for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub id: String,
    pub severity: Severity,
    pub rule: ComplianceRule,
    pub rule_label: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_overdue: Option<u32>,
}

impl Violation {
    pub(crate) fn new(
        rule: ComplianceRule,
        record_id: &str,
        severity: Severity,
        message: String,
    ) -> Self {
        Self {
            id: format!("{}-{}", rule.key(), record_id),
            severity,
            rule,
            rule_label: rule.label().to_string(),
            message,
            session_id: None,
            student_id: None,
            due_date: None,
            days_overdue: None,
        }
    }

    pub(crate) fn for_session(mut self, session_id: &SessionId, student_id: &StudentId) -> Self {
        self.session_id = Some(session_id.clone());
        self.student_id = Some(student_id.clone());
        self
    }
}
