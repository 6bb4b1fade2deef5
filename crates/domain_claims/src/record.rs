//! Claim record threaded through the pipeline

use std::collections::BTreeMap;

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClaimError;
use crate::field::{FieldValue, RequiredField};

/// Timestamp format used for trace entries
pub const TRACE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One audit-log entry: which stage ran, what it did, and what it saw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceEntry {
    pub timestamp: String,
    #[serde(rename = "agent")]
    pub stage: String,
    pub action: String,
    pub info: Value,
}

/// Mutable state for one claim as it moves through the stages
///
/// Fields are private: after construction the record only grows. Stages add
/// or overwrite keys, append issues and trace entries, and set the summary
/// once. Nothing is ever removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRecord {
    raw_texts: Vec<String>,
    extracted_fields: BTreeMap<String, FieldValue>,
    triage: BTreeMap<String, String>,
    summary: Option<String>,
    issues: Vec<String>,
    trace: Vec<TraceEntry>,
}

impl ClaimRecord {
    /// Creates an empty record over the given text blocks
    pub fn new(raw_texts: Vec<String>) -> Self {
        Self {
            raw_texts,
            extracted_fields: BTreeMap::new(),
            triage: BTreeMap::new(),
            summary: None,
            issues: Vec::new(),
            trace: Vec::new(),
        }
    }

    /// Creates a record from a single text block
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()])
    }

    pub fn raw_texts(&self) -> &[String] {
        &self.raw_texts
    }

    /// First text block, the source for field extraction
    pub fn primary_text(&self) -> &str {
        self.raw_texts.first().map(String::as_str).unwrap_or("")
    }

    /// All text blocks joined with a single space
    pub fn joined_text(&self) -> String {
        self.raw_texts.join(" ")
    }

    pub fn extracted_fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.extracted_fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldValue> {
        self.extracted_fields.get(key)
    }

    pub fn has_field(&self, field: RequiredField) -> bool {
        self.extracted_fields.contains_key(field.key())
    }

    /// Inserts or overwrites a field
    pub fn set_field(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.extracted_fields.insert(key.into(), value.into());
    }

    /// Inserts a field only if the key is not present yet
    ///
    /// Returns `true` if the value was stored.
    pub fn fill_field(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> bool {
        use std::collections::btree_map::Entry;

        match self.extracted_fields.entry(key.into()) {
            Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    pub fn triage(&self) -> &BTreeMap<String, String> {
        &self.triage
    }

    pub fn set_triage(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.triage.insert(key.into(), value.into());
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Sets the summary unless one is already present
    ///
    /// Returns `false` and leaves the record untouched when a summary exists.
    pub fn set_summary(&mut self, summary: impl Into<String>) -> bool {
        if self.summary.is_some() {
            return false;
        }
        self.summary = Some(summary.into());
        true
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn push_issue(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// Appends a trace entry stamped with the current local time
    pub fn record_trace(&mut self, stage: &str, action: &str, info: Value) {
        self.trace.push(TraceEntry {
            timestamp: Local::now().format(TRACE_TIMESTAMP_FORMAT).to_string(),
            stage: stage.to_string(),
            action: action.to_string(),
            info,
        });
    }

    /// Required fields that have not been extracted, in canonical order
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        RequiredField::ALL
            .into_iter()
            .filter(|field| !self.has_field(*field))
            .collect()
    }

    /// A claim is complete once every required field is present and a
    /// summary has been written
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty() && self.summary.is_some()
    }

    /// Pretty JSON document of the whole record
    pub fn to_json(&self) -> Result<String, ClaimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ClaimError> {
        Ok(serde_json::from_str(json)?)
    }
}
