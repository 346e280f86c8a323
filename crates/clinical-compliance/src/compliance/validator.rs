use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{SessionRecord, SessionStatus, SoapSection};

/// Outcome of the pre-signing check. An invalid result is a normal return value whose
/// errors name the sections the clinician still has to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Validate that an attended session documents every SOAP section with non-blank text.
///
/// Sessions that were not attended need no clinical content and always pass.
pub fn validate_for_signing(session: &SessionRecord) -> SigningValidation {
    if !session.is_present() {
        return SigningValidation {
            valid: true,
            errors: Vec::new(),
        };
    }

    let errors: Vec<String> = SoapSection::ordered()
        .into_iter()
        .filter(|section| {
            session
                .section(*section)
                .map_or(true, |text| text.trim().is_empty())
        })
        .map(|section| format!("{} section is required", section.label()))
        .collect();

    SigningValidation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Errors preventing a draft from transitioning to signed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigningError {
    #[error("session is {} and cannot be signed", status.label())]
    NotDraft { status: SessionStatus },
    #[error("session documentation incomplete: {}", errors.join("; "))]
    IncompleteDocumentation { errors: Vec<String> },
}

/// Gate guarding the draft to signed transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct SigningGate;

impl SigningGate {
    /// Produce the signed copy of `session`, or the reasons it cannot be signed yet.
    pub fn sign(
        &self,
        session: &SessionRecord,
        signed_at: DateTime<Utc>,
    ) -> Result<SessionRecord, SigningError> {
        if !session.is_draft() {
            return Err(SigningError::NotDraft {
                status: session.status,
            });
        }

        let validation = validate_for_signing(session);
        if !validation.valid {
            return Err(SigningError::IncompleteDocumentation {
                errors: validation.errors,
            });
        }

        let mut signed = session.clone();
        signed.status = SessionStatus::Signed;
        signed.signed_at = Some(signed_at);
        Ok(signed)
    }
}
