//! Pipeline construction and the per-claim run

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use colored::Colorize;
use tracing::info;

use core_kernel::{DisabledRecognizer, EntityRecognizer, LanguageModel};
use domain_claims::{ClaimPipeline, ClaimRecord, PatternRecognizer};
use infra_llm::build_responder;

use crate::config::{CopilotConfig, RecognizerKind};
use crate::display::write_report;
use crate::error::CliError;
use crate::export::save_record;

/// A ready-to-run claim pipeline plus where its results go
pub struct Copilot {
    pipeline: ClaimPipeline,
    save_dir: Option<PathBuf>,
}

impl Copilot {
    /// Builds collaborators and the standard pipeline from configuration
    pub fn from_config(config: &CopilotConfig) -> Self {
        let llm = build_responder(&config.to_llm_config());
        let recognizer: Arc<dyn EntityRecognizer> = match config.recognizer {
            RecognizerKind::Pattern => Arc::new(PatternRecognizer::new()),
            RecognizerKind::Disabled => Arc::new(DisabledRecognizer),
        };
        info!(
            llm_enabled = llm.status().is_enabled(),
            recognizer_enabled = recognizer.status().is_enabled(),
            "Collaborators ready"
        );
        Self::new(llm, recognizer, config.save_dir())
    }

    pub fn new(
        llm: Arc<dyn LanguageModel>,
        recognizer: Arc<dyn EntityRecognizer>,
        save_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            pipeline: ClaimPipeline::standard(llm, recognizer),
            save_dir,
        }
    }

    /// Overrides where results are saved; `None` disables saving
    pub fn with_save_dir(mut self, save_dir: Option<PathBuf>) -> Self {
        self.save_dir = save_dir;
        self
    }

    /// Runs one claim, prints the report and saves the record
    pub fn process<W: Write>(&self, text: &str, out: &mut W) -> Result<ClaimRecord, CliError> {
        let record = self.pipeline.execute(text)?;
        write_report(out, &record)?;

        if let Some(dir) = &self.save_dir {
            let path = save_record(&record, dir)?;
            writeln!(out)?;
            writeln!(out, "{} {}", "Saved JSON result to:".green(), path.display())?;
        }
        Ok(record)
    }
}
