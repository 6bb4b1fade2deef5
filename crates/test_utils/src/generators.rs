//! Property-Based Test Generators
//!
//! Provides proptest strategies for field values and claim records that
//! respect the record's invariants.

use domain_claims::{ClaimRecord, FieldValue, RequiredField};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use serde_json::json;

/// Strategy for extracted field values of every kind
pub fn field_value_strategy() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Null),
        (-1.0e9f64..1.0e9f64).prop_map(FieldValue::number),
        "[A-Za-z0-9 ,.$-]{0,24}".prop_map(FieldValue::text),
    ]
}

/// Strategy for non-null values of a required field
pub fn present_field_value_strategy() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        (0.0f64..100_000.0f64).prop_map(FieldValue::number),
        "[A-Za-z][A-Za-z ]{0,15}".prop_map(FieldValue::text),
    ]
}

/// Strategy for free claim text, never blank
pub fn claim_text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 ,.$'-]{0,80}"
}

/// Strategy for records in any state a pipeline run could leave behind
pub fn claim_record_strategy() -> impl Strategy<Value = ClaimRecord> {
    (
        vec(claim_text_strategy(), 1..3),
        vec(option::of(field_value_strategy()), 4),
        vec(("[a-z_]{1,10}", "[A-Za-z]{0,10}"), 0..3),
        option::of("[ -~]{0,40}"),
        vec("[ -~]{0,40}", 0..4),
        vec(("[a-z]{1,12}", "[a-z_]{1,16}"), 0..5),
    )
        .prop_map(|(texts, fields, triage, summary, issues, trace)| {
            let mut record = ClaimRecord::new(texts);
            for (field, value) in RequiredField::ALL.iter().zip(fields) {
                if let Some(value) = value {
                    record.set_field(field.key(), value);
                }
            }
            for (key, value) in triage {
                record.set_triage(key, value);
            }
            if let Some(summary) = summary {
                record.set_summary(summary);
            }
            for issue in issues {
                record.push_issue(issue);
            }
            for (position, (stage, action)) in trace.into_iter().enumerate() {
                record.record_trace(&stage, &action, json!({ "position": position }));
            }
            record
        })
}
