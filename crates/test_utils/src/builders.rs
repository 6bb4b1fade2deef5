//! Test Data Builders
//!
//! Provides builder patterns for constructing claim records with sensible
//! defaults. Tests specify only the fields relevant to them.

use domain_claims::{ClaimRecord, FieldValue, RequiredField};

use crate::fixtures::ClaimTextFixtures;

/// Builder for pre-populated [`ClaimRecord`]s
pub struct ClaimRecordBuilder {
    texts: Vec<String>,
    fields: Vec<(String, FieldValue)>,
    triage: Vec<(String, String)>,
    summary: Option<String>,
    issues: Vec<String>,
}

impl Default for ClaimRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimRecordBuilder {
    /// Creates a builder over the Jane Smith fixture with nothing extracted
    pub fn new() -> Self {
        Self {
            texts: vec![ClaimTextFixtures::jane_smith_fracture().to_string()],
            fields: Vec::new(),
            triage: Vec::new(),
            summary: None,
            issues: Vec::new(),
        }
    }

    /// Replaces the raw text with a single block
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.texts = vec![text.into()];
        self
    }

    /// Replaces the raw text with several blocks
    pub fn with_texts(mut self, texts: Vec<String>) -> Self {
        self.texts = texts;
        self
    }

    /// Sets one extracted field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// Sets every required field to the Jane Smith values
    pub fn with_all_required_fields(self) -> Self {
        self.with_field(RequiredField::ClaimantName.key(), "Jane Smith")
            .with_field(RequiredField::PolicyType.key(), "Health")
            .with_field(RequiredField::ClaimAmount.key(), 3750.0)
            .with_field(RequiredField::IncidentDate.key(), "2024-11-22")
    }

    pub fn with_triage(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.triage.push((key.into(), value.into()));
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.issues.push(issue.into());
        self
    }

    /// Builds the record
    pub fn build(self) -> ClaimRecord {
        let mut record = ClaimRecord::new(self.texts);
        for (key, value) in self.fields {
            record.set_field(key, value);
        }
        for (key, value) in self.triage {
            record.set_triage(key, value);
        }
        if let Some(summary) = self.summary {
            record.set_summary(summary);
        }
        for issue in self.issues {
            record.push_issue(issue);
        }
        record
    }
}
