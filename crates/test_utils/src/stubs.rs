//! Scripted Collaborators
//!
//! In-memory implementations of the recognizer and language-model ports,
//! plus an instrumented stage, for tests that need deterministic
//! collaborators or need to observe what the pipeline did.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use core_kernel::{CollaboratorStatus, Entity, EntityRecognizer, LanguageModel, PortError, Prompt};
use domain_claims::{ClaimRecord, Stage};
use serde_json::json;

/// Language model that replays scripted answers and records every prompt
///
/// Once the script runs out it keeps answering with the fallback.
pub struct ScriptedResponder {
    answers: Mutex<VecDeque<String>>,
    fallback: String,
    prompts: Mutex<Vec<Prompt>>,
}

impl ScriptedResponder {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(Into::into).collect()),
            fallback: String::new(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Answers every prompt with the same text
    pub fn always(answer: impl Into<String>) -> Self {
        Self {
            fallback: answer.into(),
            ..Self::new(Vec::<String>::new())
        }
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<Prompt> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl LanguageModel for ScriptedResponder {
    fn respond(&self, prompt: &Prompt) -> String {
        self.prompts.lock().unwrap().push(prompt.clone());
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }

    fn status(&self) -> CollaboratorStatus {
        CollaboratorStatus::Enabled
    }
}

/// Recognizer that returns the same entities for every text
pub struct FixedRecognizer {
    entities: Vec<Entity>,
}

impl FixedRecognizer {
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// Recognizer that always finds one person
    pub fn person(name: impl Into<String>) -> Self {
        Self::new(vec![Entity::person(name)])
    }
}

impl EntityRecognizer for FixedRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<Entity>, PortError> {
        Ok(self.entities.clone())
    }

    fn status(&self) -> CollaboratorStatus {
        CollaboratorStatus::Enabled
    }
}

/// Recognizer whose every call fails with a connection error
pub struct FailingRecognizer;

impl EntityRecognizer for FailingRecognizer {
    fn recognize(&self, _text: &str) -> Result<Vec<Entity>, PortError> {
        Err(PortError::connection("recognizer backend unreachable"))
    }

    fn status(&self) -> CollaboratorStatus {
        CollaboratorStatus::Enabled
    }
}

/// Stage that counts its invocations and leaves a trace entry
///
/// Clones share the counter, so a test can keep one handle while the
/// pipeline owns another.
#[derive(Clone)]
pub struct CountingStage {
    name: &'static str,
    calls: Arc<AtomicUsize>,
}

impl CountingStage {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Stage for CountingStage {
    fn name(&self) -> &'static str {
        self.name
    }

    fn run(&self, record: &mut ClaimRecord) {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        record.record_trace(self.name, "count", json!({ "call": call }));
    }
}

/// Stage that fills every required field and the summary in one go
pub struct CompletingStage;

impl Stage for CompletingStage {
    fn name(&self) -> &'static str {
        "completing"
    }

    fn run(&self, record: &mut ClaimRecord) {
        record.set_field("claimant_name", "Jane Smith");
        record.set_field("policy_type", "Health");
        record.set_field("claim_amount", 3750.0);
        record.set_field("incident_date", "2024-11-22");
        record.set_summary("pre-filled summary");
        record.record_trace("completing", "complete_record", json!({}));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_answers_then_fallback() {
        let llm = ScriptedResponder::new(["first", "second"]);
        let prompt = Prompt::new("q");

        assert_eq!(llm.respond(&prompt), "first");
        assert_eq!(llm.respond(&prompt), "second");
        assert_eq!(llm.respond(&prompt), "");
        assert_eq!(llm.call_count(), 3);
    }

    #[test]
    fn test_counting_stage_shares_counter() {
        let stage = CountingStage::new("count");
        let handle = stage.clone();
        let mut record = ClaimRecord::from_text("text");

        stage.run(&mut record);
        stage.run(&mut record);

        assert_eq!(handle.calls(), 2);
        assert_eq!(record.trace()[1].info["call"], 2);
    }
}
