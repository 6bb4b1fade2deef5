//! Triage stage

use serde_json::json;
use tracing::debug;

use crate::field::{Priority, RequiredField};
use crate::record::ClaimRecord;
use crate::stage::Stage;

/// Substrings that mark a claim as involving bodily harm
pub const INJURY_KEYWORDS: [&str; 3] = ["fracture", "injur", "hospital"];

/// Amount at or above which a claim without injuries is Medium priority
pub const MEDIUM_PRIORITY_THRESHOLD: f64 = 3000.0;

/// Claim type used when no policy type was extracted
pub const UNKNOWN_CLAIM_TYPE: &str = "Unknown";

/// Decides priority from injury keywords and the claim amount
///
/// ```text
/// injury keyword present         -> High
/// claim_amount >= 3000           -> Medium
/// otherwise                      -> Low
/// ```
pub fn assign_priority(text: &str, amount: f64) -> Priority {
    let lowered = text.to_lowercase();
    if INJURY_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        Priority::High
    } else if amount >= MEDIUM_PRIORITY_THRESHOLD {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Assigns `priority` and `claim_type`
#[derive(Debug, Clone, Default)]
pub struct TriageStage;

impl TriageStage {
    pub const NAME: &'static str = "triage";
    pub const ACTION: &'static str = "assign_triage";

    pub fn new() -> Self {
        Self
    }
}

impl Stage for TriageStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, record: &mut ClaimRecord) {
        let amount = record
            .field(RequiredField::ClaimAmount.key())
            .and_then(|v| v.as_number())
            .unwrap_or(0.0);
        let priority = assign_priority(&record.joined_text(), amount);
        let claim_type = record
            .field(RequiredField::PolicyType.key())
            .and_then(|v| v.as_text())
            .unwrap_or(UNKNOWN_CLAIM_TYPE)
            .to_string();

        record.set_triage("priority", priority.as_str());
        record.set_triage("claim_type", claim_type.as_str());

        debug!(%priority, %claim_type, amount, "Assigned triage");

        record.record_trace(
            Self::NAME,
            Self::ACTION,
            json!({
                "priority": priority.as_str(),
                "claim_type": claim_type,
                "amount": amount,
            }),
        );
    }
}
