//! Validation stage

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use core_kernel::{LanguageModel, Prompt};

use crate::parsing::mentioned_policy_types;
use crate::record::ClaimRecord;
use crate::stage::Stage;

const QA_SYSTEM: &str = "You are a precise and concise QA checker.";
const QA_TEMPERATURE: f32 = 0.2;

/// Flags missing required fields and contradictory policy mentions, and asks
/// the language model for a short QA note
///
/// Issues are only ever appended. A non-blank QA note goes in first, followed
/// by the computed issues.
pub struct ValidationStage {
    llm: Arc<dyn LanguageModel>,
}

impl ValidationStage {
    pub const NAME: &'static str = "validation";
    pub const ACTION: &'static str = "validate_fields";

    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self { llm }
    }

    fn qa_prompt(text: &str, fields_json: &str) -> Prompt {
        let user = format!(
            "You are a claims QA checker.\n\n\
             Text:\n{text}\n\n\
             Extracted fields:\n{fields_json}\n\n\
             1) Note any missing fields (claimant_name, policy_type, claim_amount, incident_date).\n\
             2) Note any contradictions.\n\n\
             Reply with 2-4 bullet points.\n"
        );
        Prompt::new(user)
            .with_system(QA_SYSTEM)
            .with_temperature(QA_TEMPERATURE)
    }
}

/// Issues derived from the record alone, without the language model
pub fn computed_issues(record: &ClaimRecord) -> Vec<String> {
    let mut issues: Vec<String> = record
        .missing_fields()
        .into_iter()
        .map(|field| format!("Missing field: {}", field))
        .collect();

    let mentioned = mentioned_policy_types(&record.joined_text());
    if mentioned.len() > 1 {
        let names: Vec<&str> = mentioned.iter().map(|p| p.as_str()).collect();
        issues.push(format!(
            "Multiple policy types mentioned in text: {}",
            names.join(", ")
        ));
    }

    issues
}

impl Stage for ValidationStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, record: &mut ClaimRecord) {
        let issues = computed_issues(record);

        let fields_json = serde_json::to_string(record.extracted_fields()).unwrap_or_default();
        let note = self.llm.respond(&Self::qa_prompt(&record.joined_text(), &fields_json));
        let note_present = !note.trim().is_empty();

        if note_present {
            record.push_issue(format!("LLM-note: {}", note));
        }
        for issue in &issues {
            record.push_issue(issue.clone());
        }

        debug!(issues = issues.len(), note_present, "Validated claim fields");

        record.record_trace(
            Self::NAME,
            Self::ACTION,
            json!({
                "issues": issues,
                "llm_note_present": note_present,
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CollaboratorStatus;

    struct FixedAnswer(&'static str);

    impl LanguageModel for FixedAnswer {
        fn respond(&self, _prompt: &Prompt) -> String {
            self.0.to_string()
        }

        fn status(&self) -> CollaboratorStatus {
            CollaboratorStatus::Enabled
        }
    }

    #[test]
    fn test_reports_every_missing_field_in_order() {
        let stage = ValidationStage::new(Arc::new(FixedAnswer("")));
        let mut record = ClaimRecord::from_text("no details at all");

        stage.run(&mut record);

        assert_eq!(
            record.issues(),
            &[
                "Missing field: claimant_name".to_string(),
                "Missing field: policy_type".to_string(),
                "Missing field: claim_amount".to_string(),
                "Missing field: incident_date".to_string(),
            ]
        );
        assert_eq!(record.trace()[0].info["llm_note_present"], false);
    }

    #[test]
    fn test_flags_multiple_policy_types() {
        let mut record = ClaimRecord::from_text("Auto accident that also damaged the property");
        record.set_field("claimant_name", "Jane Smith");
        record.set_field("policy_type", "Auto");
        record.set_field("claim_amount", 100.0);
        record.set_field("incident_date", "2024-01-01");

        let issues = computed_issues(&record);

        assert_eq!(issues, vec!["Multiple policy types mentioned in text: Auto, Property"]);
    }

    #[test]
    fn test_note_goes_before_computed_issues() {
        let stage = ValidationStage::new(Arc::new(FixedAnswer("- amount unclear")));
        let mut record = ClaimRecord::from_text("text");
        record.push_issue("pre-existing");

        stage.run(&mut record);

        assert_eq!(record.issues()[0], "pre-existing");
        assert_eq!(record.issues()[1], "LLM-note: - amount unclear");
        assert_eq!(record.issues().len(), 6);
    }

    #[test]
    fn test_blank_note_is_dropped() {
        let stage = ValidationStage::new(Arc::new(FixedAnswer("   \n")));
        let mut record = ClaimRecord::from_text("text");

        stage.run(&mut record);

        assert!(record.issues().iter().all(|i| !i.starts_with("LLM-note")));
    }
}
