use chrono::{Duration, NaiveDate};

use super::super::domain::SessionRecord;
use super::super::violation::{ComplianceRule, Severity, Violation};

/// Calendar days after the session date within which a draft must be signed.
const SIGNING_WINDOW_DAYS: i64 = 7;
/// Drafts due within this many days raise a warning before they go overdue.
const SIGNING_WARNING_DAYS: i64 = 2;

/// Flag draft notes that are past, or close to, their signing deadline.
pub fn check_signing_deadlines(sessions: &[SessionRecord], as_of: NaiveDate) -> Vec<Violation> {
    sessions
        .iter()
        .filter(|session| session.is_draft())
        .filter_map(|session| signing_violation(session, as_of))
        .collect()
}

fn signing_violation(session: &SessionRecord, as_of: NaiveDate) -> Option<Violation> {
    // A deadline past the end of the calendar is never due.
    let due_date = session.session_date.checked_add_signed(Duration::days(SIGNING_WINDOW_DAYS))?;
    let days_until_due = (due_date - as_of).num_days();
    let name = session.display_name();

    if days_until_due < 0 {
        let days_overdue = u32::try_from(days_until_due.unsigned_abs()).unwrap_or(u32::MAX);
        let message = format!(
            "Session for {} on {} is {} {} overdue for signature (due {})",
            name,
            session.session_date,
            days_overdue,
            day_noun(days_overdue),
            due_date
        );
        let mut violation = Violation::new(
            ComplianceRule::SigningDeadline,
            &session.id.0,
            Severity::Critical,
            message,
        )
        .for_session(&session.id, &session.student_id);
        violation.due_date = Some(due_date);
        violation.days_overdue = Some(days_overdue);
        return Some(violation);
    }

    if days_until_due <= SIGNING_WARNING_DAYS {
        let when = match days_until_due {
            0 => "today".to_string(),
            1 => "in 1 day".to_string(),
            days => format!("in {days} days"),
        };
        let message = format!(
            "Session for {} on {} must be signed {}",
            name, session.session_date, when
        );
        let mut violation = Violation::new(
            ComplianceRule::SigningDeadline,
            &session.id.0,
            Severity::Warning,
            message,
        )
        .for_session(&session.id, &session.student_id);
        violation.due_date = Some(due_date);
        return Some(violation);
    }

    None
}

fn day_noun(count: u32) -> &'static str {
    if count == 1 {
        "day"
    } else {
        "days"
    }
}
