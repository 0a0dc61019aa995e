pub mod checker;
pub mod report;
pub mod violation;

pub use checker::{CheckOutcome, CourierActivity, check};
pub use report::{FeasibilityReport, RuleSection};
pub use violation::Violation;
