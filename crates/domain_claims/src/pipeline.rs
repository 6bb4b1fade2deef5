//! Pipeline runner
//!
//! Owns the ordered stage list and the control flow of a run. The runner
//! never touches the record itself; every mutation happens inside a stage.
//!
//! # Run lifecycle
//!
//! ```text
//! Pending -> StageDone(extraction, #1) -> StageDone(validation, #2)
//!         -> StageDone(triage, #3) -> StageDone(summarization, #4) -> Complete
//! ```
//!
//! After each stage the runner evaluates [`ClaimRecord::is_complete`] and
//! stops as soon as it holds. With the standard order the summary only
//! exists after the last stage, so the early exit cannot fire before then;
//! the check stays in place for custom stage orders.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, info_span, warn};

use core_kernel::{EntityRecognizer, LanguageModel, RunId};

use crate::error::ClaimError;
use crate::record::ClaimRecord;
use crate::stage::Stage;
use crate::stages::{ExtractionStage, SummarizationStage, TriageStage, ValidationStage};

/// Where a run currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Pending,
    StageDone { stage: &'static str, position: usize },
    Complete,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Pending => f.write_str("pending"),
            RunPhase::StageDone { stage, position } => write!(f, "{} done (#{})", stage, position),
            RunPhase::Complete => f.write_str("complete"),
        }
    }
}

/// Drives a claim record through an ordered list of stages
pub struct ClaimPipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl ClaimPipeline {
    /// Standard order: extraction, validation, triage, summarization
    ///
    /// The responder and recognizer handles are shared by every stage that
    /// needs them.
    pub fn standard(llm: Arc<dyn LanguageModel>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self::with_stages(vec![
            Box::new(ExtractionStage::new(recognizer)),
            Box::new(ValidationStage::new(llm.clone())),
            Box::new(TriageStage::new()),
            Box::new(SummarizationStage::new(llm)),
        ])
    }

    /// Builds a runner over an arbitrary stage order
    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs the pipeline over a single claim text
    ///
    /// # Errors
    ///
    /// Returns `ClaimError::EmptyInput` for blank text; no record is built.
    pub fn execute(&self, text: &str) -> Result<ClaimRecord, ClaimError> {
        self.execute_texts(vec![text.to_string()])
    }

    /// Runs the pipeline over several text blocks; the first one is the
    /// extraction source
    pub fn execute_texts(&self, texts: Vec<String>) -> Result<ClaimRecord, ClaimError> {
        if texts.iter().all(|t| t.trim().is_empty()) {
            warn!("Claim text is empty; nothing to process");
            return Err(ClaimError::EmptyInput);
        }

        let run_id = RunId::new_v7();
        let span = info_span!("claim_run", run_id = %run_id);
        let _guard = span.enter();

        let mut record = ClaimRecord::new(texts);
        let mut phase = RunPhase::Pending;
        debug!(%phase, stages = self.stages.len(), "Starting claim run");

        for (position, stage) in self.stages.iter().enumerate() {
            stage.run(&mut record);
            phase = RunPhase::StageDone {
                stage: stage.name(),
                position: position + 1,
            };
            debug!(%phase, "Stage finished");

            if record.is_complete() {
                let skipped = self.stages.len() - position - 1;
                if skipped > 0 {
                    debug!(skipped, "Claim complete; skipping remaining stages");
                }
                phase = RunPhase::Complete;
                break;
            }
        }

        info!(
            %phase,
            trace_entries = record.trace().len(),
            issues = record.issues().len(),
            "Claim run finished"
        );
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CollaboratorStatus, DisabledRecognizer, Prompt};
    use serde_json::json;

    struct Named(&'static str);

    struct Silent;

    impl LanguageModel for Silent {
        fn respond(&self, _prompt: &Prompt) -> String {
            String::new()
        }

        fn status(&self) -> CollaboratorStatus {
            CollaboratorStatus::disabled("test")
        }
    }

    impl Stage for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn run(&self, record: &mut ClaimRecord) {
            record.record_trace(self.0, "noop", json!({}));
        }
    }

    #[test]
    fn test_runs_every_stage_in_order() {
        let pipeline = ClaimPipeline::with_stages(vec![Box::new(Named("a")), Box::new(Named("b"))]);

        let record = pipeline.execute("text").unwrap();

        let stages: Vec<&str> = record.trace().iter().map(|t| t.stage.as_str()).collect();
        assert_eq!(stages, vec!["a", "b"]);
    }

    #[test]
    fn test_blank_input_is_rejected() {
        let pipeline = ClaimPipeline::with_stages(vec![Box::new(Named("a"))]);

        assert!(matches!(pipeline.execute("  \n\t"), Err(ClaimError::EmptyInput)));
        assert!(matches!(pipeline.execute_texts(Vec::new()), Err(ClaimError::EmptyInput)));
    }

    #[test]
    fn test_phase_display() {
        let phase = RunPhase::StageDone { stage: "triage", position: 3 };
        assert_eq!(phase.to_string(), "triage done (#3)");
        assert_eq!(RunPhase::Pending.to_string(), "pending");
        assert_eq!(RunPhase::Complete.to_string(), "complete");
    }

    #[test]
    fn test_standard_phases_follow_stage_positions() {
        let pipeline = ClaimPipeline::standard(
            Arc::new(Silent),
            Arc::new(DisabledRecognizer),
        );
        let phases: Vec<String> = pipeline
            .stage_names()
            .into_iter()
            .enumerate()
            .map(|(i, stage)| RunPhase::StageDone { stage, position: i + 1 }.to_string())
            .collect();

        assert_eq!(
            phases,
            vec![
                "extraction done (#1)",
                "validation done (#2)",
                "triage done (#3)",
                "summarization done (#4)"
            ]
        );
    }
}
