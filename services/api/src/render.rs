use clinical_compliance::compliance::{
    ComplianceReport, ComplianceRule, SessionRecord, Severity, SigningValidation,
};
use std::fmt::Write;

pub(crate) fn render_report(report: &ComplianceReport) -> String {
    let mut out = String::new();
    let score = &report.score;

    let _ = writeln!(out, "Compliance report as of {}", report.as_of);
    let _ = writeln!(
        out,
        "Score {}/100 | {} critical | {} warning | {} info",
        score.score, score.critical, score.warning, score.info
    );

    if report.violations.is_empty() {
        let _ = writeln!(out, "No open violations.");
        return out;
    }

    let tally: Vec<String> = ComplianceRule::ordered()
        .into_iter()
        .filter_map(|rule| {
            let count = report
                .violations
                .iter()
                .filter(|violation| violation.rule == rule)
                .count();
            (count > 0).then(|| format!("{} {count}", rule.label()))
        })
        .collect();
    let _ = writeln!(out, "Rules: {}", tally.join(", "));

    for severity in Severity::ordered() {
        let mut entries = report.with_severity(severity).peekable();
        if entries.peek().is_none() {
            continue;
        }
        let _ = writeln!(out, "\n{}", severity.label());
        for violation in entries {
            let _ = write!(out, "- [{}] {}", violation.rule_label, violation.message);
            if let Some(due) = violation.due_date {
                let _ = write!(out, " (due {due})");
            }
            let _ = writeln!(out);
        }
    }

    out
}

pub(crate) fn render_validation(session: &SessionRecord, validation: &SigningValidation) -> String {
    let mut out = String::new();
    if validation.valid {
        let _ = writeln!(out, "Session {} is ready to sign", session.id);
        return out;
    }

    let _ = writeln!(out, "Session {} cannot be signed yet:", session.id);
    for error in &validation.errors {
        let _ = writeln!(out, "- {error}");
    }
    out
}
