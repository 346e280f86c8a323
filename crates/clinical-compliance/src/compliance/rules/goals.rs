use std::collections::{HashMap, HashSet};

use super::super::domain::{
    Goal, ProgressLink, SessionId, SessionRecord, SessionStatus, StudentId,
};
use super::super::violation::{ComplianceRule, Severity, Violation};

/// Note signed, attended sessions that recorded no goal progress for a student with active goals.
pub fn check_goal_progress(
    sessions: &[SessionRecord],
    progress: &[ProgressLink],
    goals: &[Goal],
) -> Vec<Violation> {
    let students_with_active_goals: HashSet<&StudentId> = goals
        .iter()
        .filter(|goal| goal.status.is_active())
        .map(|goal| &goal.student_id)
        .collect();

    let mut data_points: HashMap<&SessionId, usize> = HashMap::new();
    for link in progress.iter().filter(|link| link.progress_value.is_some()) {
        *data_points.entry(&link.session_id).or_default() += 1;
    }

    sessions
        .iter()
        .filter(|session| session.status == SessionStatus::Signed && session.is_present())
        .filter(|session| students_with_active_goals.contains(&session.student_id))
        .filter(|session| data_points.get(&session.id).copied().unwrap_or(0) == 0)
        .map(|session| {
            let message = format!(
                "Signed session for {} on {} has no goal progress data recorded",
                session.display_name(),
                session.session_date
            );
            Violation::new(
                ComplianceRule::GoalProgress,
                &session.id.0,
                Severity::Info,
                message,
            )
            .for_session(&session.id, &session.student_id)
        })
        .collect()
}
