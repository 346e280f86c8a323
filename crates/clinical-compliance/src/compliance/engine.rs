use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::domain::ComplianceSnapshot;
use super::rules::{
    check_frequency_compliance, check_goal_progress, check_signing_deadlines,
    check_soap_completeness,
};
use super::violation::{Severity, Violation};

const CRITICAL_PENALTY: usize = 20;
const WARNING_PENALTY: usize = 5;
const INFO_PENALTY: usize = 1;
const MAX_SCORE: usize = 100;

/// Run every rule against one snapshot and return the violations in priority order.
///
/// Ordering is severity first (critical, warning, info). Among violations of the same
/// severity, those carrying `days_overdue` come first, most overdue leading; everything
/// else keeps the order the rules produced it in. No deduplication is applied.
pub fn evaluate_compliance(snapshot: &ComplianceSnapshot, as_of: NaiveDate) -> Vec<Violation> {
    let mut violations = check_signing_deadlines(&snapshot.sessions, as_of);
    violations.extend(check_soap_completeness(&snapshot.sessions));
    violations.extend(check_goal_progress(
        &snapshot.sessions,
        &snapshot.progress,
        &snapshot.goals,
    ));
    violations.extend(check_frequency_compliance(&snapshot.caseloads));

    sort_violations(&mut violations);

    debug!(
        %as_of,
        sessions = snapshot.sessions.len(),
        caseloads = snapshot.caseloads.len(),
        violations = violations.len(),
        "compliance snapshot evaluated"
    );

    violations
}

/// Stable sort by severity, then by days overdue descending.
///
/// Within one severity, a violation carrying `days_overdue` sorts ahead of one without.
/// Only critical signing violations carry the count and the signing rule runs first, so
/// for `evaluate_compliance` output this matches rule order among the remaining pairs.
/// Arbitrary input mixing both kinds may be reordered.
pub fn sort_violations(violations: &mut [Violation]) {
    violations.sort_by(|a, b| {
        a.severity
            .cmp(&b.severity)
            .then_with(|| b.days_overdue.cmp(&a.days_overdue))
    });
}

/// Aggregate 0-100 score derived from weighted deductions per open violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceScore {
    pub score: u8,
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
    pub total: usize,
}

impl ComplianceScore {
    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::Warning => self.warning,
            Severity::Info => self.info,
        }
    }
}

pub fn compliance_score(violations: &[Violation]) -> ComplianceScore {
    let (critical, warning, info) =
        violations
            .iter()
            .fold((0usize, 0usize, 0usize), |(c, w, i), violation| {
                match violation.severity {
                    Severity::Critical => (c + 1, w, i),
                    Severity::Warning => (c, w + 1, i),
                    Severity::Info => (c, w, i + 1),
                }
            });

    let deductions = critical
        .saturating_mul(CRITICAL_PENALTY)
        .saturating_add(warning.saturating_mul(WARNING_PENALTY))
        .saturating_add(info.saturating_mul(INFO_PENALTY))
        .min(MAX_SCORE);

    ComplianceScore {
        score: (MAX_SCORE - deductions) as u8,
        critical,
        warning,
        info,
        total: violations.len(),
    }
}
