use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier wrapper for documented sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

/// Identifier wrapper for students on a caseload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StudentId(pub String);

/// Identifier wrapper for tracked goals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GoalId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle of a session note. Only `Draft` and `Signed` carry rule semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Draft,
    Signed,
    #[serde(other)]
    Other,
}

impl SessionStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Signed => "signed",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attendance {
    Present,
    Absent,
    Cancelled,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    InProgress,
    Baseline,
    Met,
    Discontinued,
    #[serde(other)]
    Other,
}

impl GoalStatus {
    /// Goals still being worked on are expected to receive progress data.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::InProgress | Self::Baseline)
    }
}

/// The four clinical sections of a SOAP note, in documentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoapSection {
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl SoapSection {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Subjective,
            Self::Objective,
            Self::Assessment,
            Self::Plan,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Subjective => "Subjective",
            Self::Objective => "Objective",
            Self::Assessment => "Assessment",
            Self::Plan => "Plan",
        }
    }
}

/// One documented therapy or service encounter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: SessionId,
    pub session_date: NaiveDate,
    pub status: SessionStatus,
    #[serde(default)]
    pub signed_at: Option<DateTime<Utc>>,
    pub student_id: StudentId,
    #[serde(default)]
    pub subjective: Option<String>,
    #[serde(default)]
    pub objective: Option<String>,
    #[serde(default)]
    pub assessment: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    pub attendance: Attendance,
    /// Denormalized display name resolved by the caller.
    #[serde(default)]
    pub student_name: Option<String>,
}

impl SessionRecord {
    pub fn section(&self, section: SoapSection) -> Option<&str> {
        match section {
            SoapSection::Subjective => self.subjective.as_deref(),
            SoapSection::Objective => self.objective.as_deref(),
            SoapSection::Assessment => self.assessment.as_deref(),
            SoapSection::Plan => self.plan.as_deref(),
        }
    }

    pub fn display_name(&self) -> String {
        display_name(self.student_name.as_deref(), &self.student_id)
    }

    pub fn is_draft(&self) -> bool {
        self.status == SessionStatus::Draft
    }

    pub fn is_present(&self) -> bool {
        self.attendance == Attendance::Present
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub student_id: StudentId,
    pub status: GoalStatus,
    #[serde(default)]
    pub description: String,
}

/// Progress captured against one goal during one session. A missing value means no data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressLink {
    pub session_id: SessionId,
    pub goal_id: GoalId,
    #[serde(default)]
    pub progress_value: Option<f64>,
}

/// Caller-aggregated delivery counts for one student against their service mandate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseloadSummary {
    pub student_id: StudentId,
    #[serde(default)]
    pub student_name: Option<String>,
    pub weekly_frequency: u32,
    pub sessions_this_week: u32,
    pub sessions_this_month: u32,
    pub expected_sessions_month: u32,
}

impl CaseloadSummary {
    pub fn display_name(&self) -> String {
        display_name(self.student_name.as_deref(), &self.student_id)
    }
}

/// Records fetched by the caller for one evaluation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSnapshot {
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    #[serde(default)]
    pub progress: Vec<ProgressLink>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub caseloads: Vec<CaseloadSummary>,
}

fn display_name(name: Option<&str>, student_id: &StudentId) -> String {
    match name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("student {student_id}"),
    }
}
