//! Independent rule checks. Each scans one slice of the snapshot and never depends on
//! another rule's output.

mod frequency;
mod goals;
mod signing;
mod soap;

pub use frequency::check_frequency_compliance;
pub use goals::check_goal_progress;
pub use signing::check_signing_deadlines;
pub use soap::check_soap_completeness;
