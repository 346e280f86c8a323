//! Compliance rules engine for session documentation.
//!
//! Rule checks, the aggregator, the scorer and the pre-signing validator are pure
//! functions over a caller-supplied snapshot. The evaluation date is always passed in;
//! nothing below the router reads the clock.

pub mod domain;
mod engine;
pub mod import;
mod report;
pub mod router;
pub mod rules;
mod validator;
pub mod violation;

#[cfg(test)]
mod tests;

pub use domain::{
    Attendance, CaseloadSummary, ComplianceSnapshot, Goal, GoalId, GoalStatus, ProgressLink,
    SessionId, SessionRecord, SessionStatus, SoapSection, StudentId,
};
pub use engine::{compliance_score, evaluate_compliance, sort_violations, ComplianceScore};
pub use import::{SnapshotError, SnapshotImporter};
pub use report::{ComplianceReport, ComplianceReportView, ViolationView};
pub use router::{compliance_router, ComplianceApiState};
pub use validator::{validate_for_signing, SigningError, SigningGate, SigningValidation};
pub use violation::{ComplianceRule, Severity, Violation};
