use chrono::{Duration, NaiveDate};

use crate::compliance::domain::{
    Attendance, CaseloadSummary, ComplianceSnapshot, Goal, GoalId, GoalStatus, ProgressLink,
    SessionId, SessionRecord, SessionStatus, StudentId,
};

pub(super) const STUDENT: &str = "stu-001";

pub(super) fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
}

pub(super) fn days_ago(days: i64) -> NaiveDate {
    as_of() - Duration::days(days)
}

pub(super) fn draft_session(id: &str, session_date: NaiveDate) -> SessionRecord {
    SessionRecord {
        id: SessionId(id.to_string()),
        session_date,
        status: SessionStatus::Draft,
        signed_at: None,
        student_id: StudentId(STUDENT.to_string()),
        subjective: Some("Reports fatigue after lunch".to_string()),
        objective: Some("Produced /s/ in initial position with 80% accuracy".to_string()),
        assessment: Some("Steady progress toward articulation goal".to_string()),
        plan: Some("Continue weekly drills, add carryover to sentences".to_string()),
        attendance: Attendance::Present,
        student_name: Some("Avery Chen".to_string()),
    }
}

pub(super) fn signed_session(id: &str, session_date: NaiveDate) -> SessionRecord {
    let mut session = draft_session(id, session_date);
    session.status = SessionStatus::Signed;
    session.signed_at = Some(
        session_date
            .and_hms_opt(16, 30, 0)
            .expect("valid time")
            .and_utc(),
    );
    session
}

pub(super) fn goal(id: &str, status: GoalStatus) -> Goal {
    Goal {
        id: GoalId(id.to_string()),
        student_id: StudentId(STUDENT.to_string()),
        status,
        description: "Produce /s/ in all word positions".to_string(),
    }
}

pub(super) fn progress(session_id: &str, goal_id: &str, value: Option<f64>) -> ProgressLink {
    ProgressLink {
        session_id: SessionId(session_id.to_string()),
        goal_id: GoalId(goal_id.to_string()),
        progress_value: value,
    }
}

pub(super) fn caseload(student: &str, delivered: u32, expected: u32) -> CaseloadSummary {
    CaseloadSummary {
        student_id: StudentId(student.to_string()),
        student_name: Some("Jordan Ruiz".to_string()),
        weekly_frequency: 2,
        sessions_this_week: 1,
        sessions_this_month: delivered,
        expected_sessions_month: expected,
    }
}

/// Snapshot yielding one violation of each severity: an info (goal progress), a warning
/// (frequency at 75%) and a critical (frequency at 40%).
pub(super) fn mixed_snapshot() -> ComplianceSnapshot {
    ComplianceSnapshot {
        sessions: vec![signed_session("sess-signed", days_ago(1))],
        progress: vec![progress("sess-signed", "goal-1", None)],
        goals: vec![goal("goal-1", GoalStatus::InProgress)],
        caseloads: vec![caseload("stu-warn", 3, 4), caseload("stu-crit", 2, 5)],
    }
}
