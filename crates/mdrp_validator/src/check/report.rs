use serde::Serialize;

use crate::check::Violation;

/// Outcome of one feasibility rule: an OK line when the violation list
/// is empty, an itemized section otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct RuleSection {
    pub ok_label: &'static str,
    pub failure_label: &'static str,
    pub violations: Vec<Violation>,
}

impl RuleSection {
    pub fn new(
        ok_label: &'static str,
        failure_label: &'static str,
        violations: Vec<Violation>,
    ) -> Self {
        RuleSection {
            ok_label,
            failure_label,
            violations,
        }
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// All rule sections of one run, in report order. The verdict is the
/// conjunction of all sections passing.
#[derive(Debug, Clone, Serialize)]
pub struct FeasibilityReport {
    pub sections: Vec<RuleSection>,
}

impl FeasibilityReport {
    pub fn feasible(&self) -> bool {
        self.sections.iter().all(RuleSection::passed)
    }

    pub fn violation_count(&self) -> usize {
        self.sections.iter().map(|s| s.violations.len()).sum()
    }
}
