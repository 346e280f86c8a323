use chrono::NaiveDate;

use super::common::*;
use crate::compliance::domain::{ComplianceSnapshot, GoalStatus};
use crate::compliance::violation::{ComplianceRule, Severity, Violation};
use crate::compliance::{
    compliance_score, evaluate_compliance, sort_violations, ComplianceReport,
};

fn violation_with(severity: Severity, id: &str, days_overdue: Option<u32>) -> Violation {
    let mut violation = Violation::new(
        ComplianceRule::SigningDeadline,
        id,
        severity,
        format!("synthetic {id}"),
    );
    violation.days_overdue = days_overdue;
    violation
}

fn repeated(severity: Severity, count: usize) -> Vec<Violation> {
    (0..count)
        .map(|index| violation_with(severity, &format!("{index}"), None))
        .collect()
}

#[test]
fn empty_snapshot_is_fully_compliant() {
    let violations = evaluate_compliance(&ComplianceSnapshot::default(), as_of());
    let score = compliance_score(&violations);

    assert!(violations.is_empty());
    assert_eq!(score.score, 100);
    assert_eq!(score.total, 0);
}

#[test]
fn evaluation_orders_by_severity() {
    let violations = evaluate_compliance(&mixed_snapshot(), as_of());

    let severities: Vec<Severity> = violations.iter().map(|v| v.severity).collect();
    assert_eq!(
        severities,
        vec![Severity::Critical, Severity::Warning, Severity::Info]
    );
    assert_eq!(violations[0].id, "frequency-stu-crit");
    assert_eq!(violations[2].rule, ComplianceRule::GoalProgress);
}

#[test]
fn most_overdue_signing_violation_leads() {
    let snapshot = ComplianceSnapshot {
        sessions: vec![
            draft_session("late-1", days_ago(8)),
            draft_session("late-10", days_ago(17)),
            draft_session("late-4", days_ago(11)),
        ],
        caseloads: vec![caseload("stu-crit", 1, 5)],
        ..ComplianceSnapshot::default()
    };

    let violations = evaluate_compliance(&snapshot, as_of());

    let order: Vec<&str> = violations.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "signing-deadline-late-10",
            "signing-deadline-late-4",
            "signing-deadline-late-1",
            "frequency-stu-crit",
        ]
    );
}

#[test]
fn sort_keeps_insertion_order_without_overdue_counts() {
    let mut violations = vec![
        violation_with(Severity::Warning, "b", None),
        violation_with(Severity::Info, "c", None),
        violation_with(Severity::Warning, "a", None),
        violation_with(Severity::Critical, "d", None),
    ];

    sort_violations(&mut violations);

    let order: Vec<&str> = violations.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "signing-deadline-d",
            "signing-deadline-b",
            "signing-deadline-a",
            "signing-deadline-c",
        ]
    );
}

#[test]
fn same_record_may_appear_under_several_rules() {
    let mut session = draft_session("sess-dup", days_ago(9));
    session.plan = None;
    let snapshot = ComplianceSnapshot {
        sessions: vec![session],
        ..ComplianceSnapshot::default()
    };

    let violations = evaluate_compliance(&snapshot, as_of());

    assert_eq!(violations.len(), 2);
    assert!(violations
        .iter()
        .all(|v| v.session_id.as_ref().map(|id| id.0.as_str()) == Some("sess-dup")));
}

#[test]
fn evaluation_is_deterministic_for_a_fixed_date() {
    let mut snapshot = mixed_snapshot();
    snapshot.sessions.push(draft_session("late", days_ago(12)));
    snapshot.goals.push(goal("goal-2", GoalStatus::Baseline));

    let first = serde_json::to_string(&evaluate_compliance(&snapshot, as_of())).expect("json");
    let second = serde_json::to_string(&evaluate_compliance(&snapshot, as_of())).expect("json");

    assert_eq!(first, second);
}

#[test]
fn score_applies_weighted_deductions() {
    let mut violations = repeated(Severity::Critical, 2);
    violations.extend(repeated(Severity::Warning, 3));
    violations.extend(repeated(Severity::Info, 10));

    let score = compliance_score(&violations);

    assert_eq!(score.score, 35);
    assert_eq!(score.critical, 2);
    assert_eq!(score.warning, 3);
    assert_eq!(score.info, 10);
    assert_eq!(score.total, 15);
    assert_eq!(score.count(Severity::Warning), 3);
}

#[test]
fn score_never_drops_below_zero() {
    let score = compliance_score(&repeated(Severity::Critical, 10));
    assert_eq!(score.score, 0);

    let score = compliance_score(&repeated(Severity::Critical, 12));
    assert_eq!(score.score, 0);
    assert_eq!(score.total, 12);
}

#[test]
fn report_bundles_violations_and_score() {
    let report = ComplianceReport::for_snapshot(&mixed_snapshot(), as_of());

    assert_eq!(report.as_of, as_of());
    assert_eq!(report.score.score, 100 - 20 - 5 - 1);
    assert_eq!(report.with_severity(Severity::Warning).count(), 1);

    let view = report.to_view();
    assert_eq!(view.violations.len(), 3);
    assert_eq!(view.violations[0].severity_label, "Critical");
    assert_eq!(view.violations[2].severity_label, "Info");
}

#[test]
fn sort_places_overdue_counts_ahead_within_severity() {
    let mut violations = vec![
        violation_with(Severity::Critical, "freq", None),
        violation_with(Severity::Critical, "sign", Some(3)),
    ];

    sort_violations(&mut violations);

    let order: Vec<&str> = violations.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(order, vec!["signing-deadline-sign", "signing-deadline-freq"]);
}

#[test]
fn far_future_draft_does_not_break_evaluation() {
    let snapshot = ComplianceSnapshot {
        sessions: vec![draft_session("far-future", NaiveDate::MAX)],
        ..ComplianceSnapshot::default()
    };

    let violations = evaluate_compliance(&snapshot, as_of());

    assert!(violations
        .iter()
        .all(|violation| violation.rule != ComplianceRule::SigningDeadline));
}
