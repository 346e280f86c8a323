use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{ComplianceSnapshot, SessionId, StudentId};
use super::engine::{compliance_score, evaluate_compliance, ComplianceScore};
use super::violation::{ComplianceRule, Severity, Violation};

/// One evaluation pass: the prioritized violations and the score computed from them.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceReport {
    pub as_of: NaiveDate,
    pub violations: Vec<Violation>,
    pub score: ComplianceScore,
}

impl ComplianceReport {
    pub fn for_snapshot(snapshot: &ComplianceSnapshot, as_of: NaiveDate) -> Self {
        let violations = evaluate_compliance(snapshot, as_of);
        let score = compliance_score(&violations);
        Self {
            as_of,
            violations,
            score,
        }
    }

    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |violation| violation.severity == severity)
    }

    pub fn to_view(&self) -> ComplianceReportView {
        ComplianceReportView {
            as_of: self.as_of,
            score: self.score,
            violations: self.violations.iter().map(Violation::to_view).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViolationView {
    pub id: String,
    pub severity: Severity,
    pub severity_label: &'static str,
    pub rule: ComplianceRule,
    pub rule_label: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_overdue: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReportView {
    pub as_of: NaiveDate,
    pub score: ComplianceScore,
    pub violations: Vec<ViolationView>,
}

impl Violation {
    pub fn to_view(&self) -> ViolationView {
        ViolationView {
            id: self.id.clone(),
            severity: self.severity,
            severity_label: self.severity.label(),
            rule: self.rule,
            rule_label: self.rule_label.clone(),
            message: self.message.clone(),
            session_id: self.session_id.clone(),
            student_id: self.student_id.clone(),
            due_date: self.due_date,
            days_overdue: self.days_overdue,
        }
    }
}
