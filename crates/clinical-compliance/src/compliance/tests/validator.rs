use chrono::{TimeZone, Utc};

use super::common::*;
use crate::compliance::domain::{Attendance, SessionStatus};
use crate::compliance::{validate_for_signing, SigningError, SigningGate};

#[test]
fn complete_note_passes() {
    let validation = validate_for_signing(&draft_session("ok", days_ago(1)));

    assert!(validation.valid);
    assert!(validation.errors.is_empty());
}

#[test]
fn whitespace_section_fails_validation() {
    let mut session = draft_session("blank", days_ago(1));
    session.subjective = Some("   ".to_string());

    let validation = validate_for_signing(&session);

    assert!(!validation.valid);
    assert_eq!(validation.errors, vec!["Subjective section is required"]);
}

#[test]
fn errors_follow_note_order() {
    let mut session = draft_session("gaps", days_ago(1));
    session.plan = Some("\n\t".to_string());
    session.objective = None;
    session.assessment = Some(String::new());

    let validation = validate_for_signing(&session);

    assert_eq!(
        validation.errors,
        vec![
            "Objective section is required",
            "Assessment section is required",
            "Plan section is required",
        ]
    );
}

#[test]
fn non_attended_sessions_always_pass() {
    for attendance in [Attendance::Absent, Attendance::Cancelled, Attendance::Other] {
        let mut session = draft_session("absent", days_ago(1));
        session.attendance = attendance;
        session.subjective = Some("   ".to_string());
        session.objective = None;

        assert!(validate_for_signing(&session).valid, "{attendance:?}");
    }
}

#[test]
fn gate_signs_complete_drafts_without_touching_input() {
    let draft = draft_session("sign-me", days_ago(1));
    let signed_at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 15, 0).unwrap();

    let signed = SigningGate.sign(&draft, signed_at).expect("draft signs");

    assert_eq!(signed.status, SessionStatus::Signed);
    assert_eq!(signed.signed_at, Some(signed_at));
    assert_eq!(draft.status, SessionStatus::Draft);
    assert!(draft.signed_at.is_none());
}

#[test]
fn gate_blocks_incomplete_documentation() {
    let mut draft = draft_session("incomplete", days_ago(1));
    draft.plan = Some(" ".to_string());

    match SigningGate.sign(&draft, Utc::now()) {
        Err(SigningError::IncompleteDocumentation { errors }) => {
            assert_eq!(errors, vec!["Plan section is required"]);
        }
        other => panic!("expected incomplete documentation, got {other:?}"),
    }
}

#[test]
fn gate_rejects_already_signed_sessions() {
    let signed = signed_session("done", days_ago(3));

    match SigningGate.sign(&signed, Utc::now()) {
        Err(SigningError::NotDraft { status }) => assert_eq!(status, SessionStatus::Signed),
        other => panic!("expected not-draft error, got {other:?}"),
    }
}

#[test]
fn gate_signs_absent_drafts_without_notes() {
    let mut draft = draft_session("no-show", days_ago(1));
    draft.attendance = Attendance::Absent;
    draft.subjective = None;
    draft.objective = None;
    draft.assessment = None;
    draft.plan = None;

    let signed = SigningGate.sign(&draft, Utc::now()).expect("absent draft signs");
    assert_eq!(signed.status, SessionStatus::Signed);
}
