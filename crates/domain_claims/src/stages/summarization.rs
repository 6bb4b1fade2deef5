//! Summarization stage

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use core_kernel::{LanguageModel, Prompt};

use crate::record::ClaimRecord;
use crate::stage::Stage;

const SUMMARY_SYSTEM: &str = "You summarize insurance claims accurately.";
const SUMMARY_TEMPERATURE: f32 = 0.3;
const PREVIEW_CHARS: usize = 120;

/// Asks the language model for an adjuster-facing summary and stores the
/// answer verbatim, placeholder answers included
pub struct SummarizationStage {
    llm: Arc<dyn LanguageModel>,
}

impl SummarizationStage {
    pub const NAME: &'static str = "summarization";
    pub const ACTION: &'static str = "summarize_claim";

    pub fn new(llm: Arc<dyn LanguageModel>) -> Self {
        Self { llm }
    }

    /// Builds the summary prompt from the text, fields and triage decision
    pub fn prompt(record: &ClaimRecord) -> Prompt {
        let fields = serde_json::to_string(record.extracted_fields()).unwrap_or_default();
        let triage = serde_json::to_string(record.triage()).unwrap_or_default();
        let text = record.joined_text();

        let user = format!(
            "You are an insurance claim summarization assistant.\n\n\
             Original text:\n{text}\n\n\
             Extracted fields:\n{fields}\n\n\
             Triage info:\n{triage}\n\n\
             Write a concise, factual summary (4-6 sentences) so a claim adjuster can quickly understand:\n\
             - Who is involved\n\
             - What happened and when\n\
             - Policy type and claim amount\n\
             - Priority and any notable issues\n\n\
             Do not hallucinate information not supported by the text.\n"
        );
        Prompt::new(user)
            .with_system(SUMMARY_SYSTEM)
            .with_temperature(SUMMARY_TEMPERATURE)
    }
}

impl Stage for SummarizationStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, record: &mut ClaimRecord) {
        let summary = self.llm.respond(&Self::prompt(record));
        let preview: String = summary.chars().take(PREVIEW_CHARS).collect();

        if !record.set_summary(summary) {
            warn!("Summary already present; keeping the existing one");
        }
        debug!("Summarized claim");

        record.record_trace(
            Self::NAME,
            Self::ACTION,
            json!({ "summary_preview": preview }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::CollaboratorStatus;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        prompts: Mutex<Vec<Prompt>>,
    }

    impl LanguageModel for Recorder {
        fn respond(&self, prompt: &Prompt) -> String {
            self.prompts.lock().unwrap().push(prompt.clone());
            "x".repeat(200)
        }

        fn status(&self) -> CollaboratorStatus {
            CollaboratorStatus::Enabled
        }
    }

    #[test]
    fn test_prompt_carries_fields_and_triage() {
        let mut record = ClaimRecord::from_text("Jane fell.");
        record.set_field("policy_type", "Health");
        record.set_triage("priority", "High");

        let prompt = SummarizationStage::prompt(&record);

        assert!(prompt.user.contains("Jane fell."));
        assert!(prompt.user.contains(r#"{"policy_type":"Health"}"#));
        assert!(prompt.user.contains(r#"{"priority":"High"}"#));
        assert_eq!(prompt.system.as_deref(), Some(SUMMARY_SYSTEM));
        assert_eq!(prompt.temperature, 0.3);
    }

    #[test]
    fn test_stores_full_answer_and_traces_preview() {
        let llm = Arc::new(Recorder::default());
        let stage = SummarizationStage::new(llm.clone());
        let mut record = ClaimRecord::from_text("text");

        stage.run(&mut record);

        assert_eq!(record.summary().map(str::len), Some(200));
        let preview = record.trace()[0].info["summary_preview"].as_str().unwrap();
        assert_eq!(preview.len(), 120);
        assert_eq!(llm.prompts.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_existing_summary_is_not_replaced() {
        let stage = SummarizationStage::new(Arc::new(Recorder::default()));
        let mut record = ClaimRecord::from_text("text");
        record.set_summary("kept");

        stage.run(&mut record);

        assert_eq!(record.summary(), Some("kept"));
        assert_eq!(record.trace().len(), 1);
    }
}
