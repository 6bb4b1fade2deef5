//! Field extraction stage

use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};

use core_kernel::{Entity, EntityLabel, EntityRecognizer};

use crate::field::{FieldValue, RequiredField};
use crate::parsing::{detect_policy_type, extract_claim_amount, extract_incident_date};
use crate::record::ClaimRecord;
use crate::stage::Stage;

/// Pulls claimant name, policy type, claim amount and incident date out of
/// the primary text
///
/// Fields that are already present are left alone, so running the stage
/// twice over the same text yields the same values.
pub struct ExtractionStage {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl ExtractionStage {
    pub const NAME: &'static str = "extraction";
    pub const ACTION: &'static str = "extract_fields";

    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }

    fn entities(&self, text: &str) -> Vec<Entity> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        match self.recognizer.recognize(text) {
            Ok(entities) => entities,
            Err(e) => {
                warn!(error = %e, "Entity recognition failed; continuing with pattern extraction only");
                Vec::new()
            }
        }
    }
}

impl Stage for ExtractionStage {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn run(&self, record: &mut ClaimRecord) {
        let text = record.primary_text().to_string();
        let entities = self.entities(&text);

        let policy = detect_policy_type(&text);
        let claimant_name = entities
            .iter()
            .find(|e| e.label == EntityLabel::Person)
            .map(|e| e.text.clone());
        let claim_amount = extract_claim_amount(&text);
        let incident_date = extract_incident_date(&text).map(|d| d.format("%Y-%m-%d").to_string());

        if let Some(name) = &claimant_name {
            record.fill_field(RequiredField::ClaimantName.key(), name.as_str());
        }
        if let Some(policy) = policy {
            record.fill_field(RequiredField::PolicyType.key(), policy.as_str());
        }
        if let Some(amount) = claim_amount {
            record.fill_field(RequiredField::ClaimAmount.key(), FieldValue::number(amount));
        }
        if let Some(date) = &incident_date {
            record.fill_field(RequiredField::IncidentDate.key(), date.as_str());
        }

        debug!(
            entities = entities.len(),
            policy = ?policy,
            has_amount = claim_amount.is_some(),
            has_date = incident_date.is_some(),
            "Extracted claim fields"
        );

        let entity_pairs: Vec<[&str; 2]> = entities
            .iter()
            .map(|e| [e.text.as_str(), e.label.as_str()])
            .collect();

        record.record_trace(
            Self::NAME,
            Self::ACTION,
            json!({
                "entities": entity_pairs,
                "policy_guess": policy.map(|p| p.as_str()),
                "claimant_name": claimant_name,
                "claim_amount": claim_amount,
                "incident_date": incident_date,
                "recognizer_enabled": self.recognizer.status().is_enabled(),
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CollaboratorStatus, DisabledRecognizer, PortError};

    struct BrokenRecognizer;

    impl EntityRecognizer for BrokenRecognizer {
        fn recognize(&self, _text: &str) -> Result<Vec<Entity>, PortError> {
            Err(PortError::internal("model crashed"))
        }

        fn status(&self) -> CollaboratorStatus {
            CollaboratorStatus::Enabled
        }
    }

    const TEXT: &str = "Jane Smith submitted a Health claim on 2024-11-22 after a slip and fall. \
                        The estimated cost is $3,750. The patient sustained a fracture.";

    #[test]
    fn test_extracts_pattern_fields_without_recognizer() {
        let stage = ExtractionStage::new(Arc::new(DisabledRecognizer));
        let mut record = ClaimRecord::from_text(TEXT);

        stage.run(&mut record);

        assert_eq!(record.field("policy_type"), Some(&FieldValue::text("Health")));
        assert_eq!(record.field("claim_amount"), Some(&FieldValue::Number(3750.0)));
        assert_eq!(record.field("incident_date"), Some(&FieldValue::text("2024-11-22")));
        assert!(record.field("claimant_name").is_none());
        assert_eq!(record.trace().len(), 1);
        assert_eq!(record.trace()[0].info["recognizer_enabled"], false);
    }

    #[test]
    fn test_recognizer_failure_degrades() {
        let stage = ExtractionStage::new(Arc::new(BrokenRecognizer));
        let mut record = ClaimRecord::from_text(TEXT);

        stage.run(&mut record);

        assert!(record.field("claimant_name").is_none());
        assert!(record.field("policy_type").is_some());
        assert_eq!(record.trace()[0].info["entities"], json!([]));
    }

    #[test]
    fn test_oversized_amount_is_still_recorded() {
        let stage = ExtractionStage::new(Arc::new(DisabledRecognizer));
        let mut record =
            ClaimRecord::from_text("Property claim for a total loss of $9999999999999999999999999999999999.");

        stage.run(&mut record);

        match record.field("claim_amount") {
            Some(FieldValue::Number(v)) => assert!(*v > 9.9e33),
            other => panic!("expected numeric claim_amount, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_text_still_traces() {
        let stage = ExtractionStage::new(Arc::new(DisabledRecognizer));
        let mut record = ClaimRecord::new(Vec::new());

        stage.run(&mut record);

        assert!(record.extracted_fields().is_empty());
        assert_eq!(record.trace().len(), 1);
        assert_eq!(record.trace()[0].action, "extract_fields");
    }
}
