use super::super::domain::CaseloadSummary;
use super::super::violation::{ComplianceRule, Severity, Violation};

/// Monthly delivery below this percentage of the mandate is flagged.
const WARNING_RATE_PCT: u64 = 80;
/// Monthly delivery below this percentage of the mandate is critical.
const CRITICAL_RATE_PCT: u64 = 60;

/// Flag students whose delivered sessions this month fall short of their mandate.
///
/// Thresholds compare with integer arithmetic so the 60% and 80% boundaries are exact.
pub fn check_frequency_compliance(caseloads: &[CaseloadSummary]) -> Vec<Violation> {
    caseloads
        .iter()
        .filter(|summary| summary.expected_sessions_month > 0)
        .filter_map(|summary| {
            let delivered = u64::from(summary.sessions_this_month) * 100;
            let expected = u64::from(summary.expected_sessions_month);

            if delivered >= expected * WARNING_RATE_PCT {
                return None;
            }

            let severity = if delivered < expected * CRITICAL_RATE_PCT {
                Severity::Critical
            } else {
                Severity::Warning
            };

            let message = format!(
                "{} received {} of {} expected sessions this month ({}%)",
                summary.display_name(),
                summary.sessions_this_month,
                summary.expected_sessions_month,
                rounded_rate(delivered, expected)
            );

            let mut violation = Violation::new(
                ComplianceRule::FrequencyCompliance,
                &summary.student_id.0,
                severity,
                message,
            );
            violation.student_id = Some(summary.student_id.clone());
            Some(violation)
        })
        .collect()
}

/// Percentage rounded half up.
fn rounded_rate(delivered_x100: u64, expected: u64) -> u64 {
    (delivered_x100 + expected / 2) / expected
}
