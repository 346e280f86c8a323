use super::super::domain::{SessionRecord, SoapSection};
use super::super::violation::{ComplianceRule, Severity, Violation};

/// Warn about draft notes for attended sessions with empty SOAP sections.
///
/// Only empty strings count as missing here; whitespace-only content is left to the
/// stricter pre-signing validator.
pub fn check_soap_completeness(sessions: &[SessionRecord]) -> Vec<Violation> {
    sessions
        .iter()
        .filter(|session| session.is_draft() && session.is_present())
        .filter_map(|session| {
            let missing: Vec<&str> = SoapSection::ordered()
                .into_iter()
                .filter(|section| session.section(*section).map_or(true, str::is_empty))
                .map(SoapSection::label)
                .collect();

            if missing.is_empty() {
                return None;
            }

            let message = format!(
                "Session for {} on {} is missing: {}",
                session.display_name(),
                session.session_date,
                missing.join(", ")
            );

            Some(
                Violation::new(
                    ComplianceRule::SoapCompleteness,
                    &session.id.0,
                    Severity::Warning,
                    message,
                )
                .for_session(&session.id, &session.student_id),
            )
        })
        .collect()
}
