//! Custom Test Assertions
//!
//! Assertion helpers for claim records that give more meaningful failure
//! messages than comparing whole structures.

use domain_claims::{ClaimRecord, FieldValue};

/// Stage names of the trace entries, in order
pub fn trace_stages(record: &ClaimRecord) -> Vec<&str> {
    record.trace().iter().map(|t| t.stage.as_str()).collect()
}

/// Asserts that the trace lists exactly these stages in this order
pub fn assert_trace_stages(record: &ClaimRecord, expected: &[&str]) {
    let actual = trace_stages(record);
    assert_eq!(
        actual, expected,
        "Trace stages differ: actual={:?}, expected={:?}",
        actual, expected
    );
}

/// Asserts that `before` is a prefix of `after`
///
/// Issues are append-only, so a later snapshot must start with every issue
/// of an earlier one.
pub fn assert_issues_extend(before: &[String], after: &[String]) {
    assert!(
        after.len() >= before.len() && after[..before.len()] == *before,
        "Issues were not extended: before={:?}, after={:?}",
        before,
        after
    );
}

/// Asserts that some issue contains the given text
pub fn assert_has_issue(record: &ClaimRecord, needle: &str) {
    assert!(
        record.issues().iter().any(|i| i.contains(needle)),
        "No issue contains {:?}; issues={:?}",
        needle,
        record.issues()
    );
}

/// Asserts that a field holds the given text
pub fn assert_text_field(record: &ClaimRecord, key: &str, expected: &str) {
    assert_eq!(
        record.field(key).and_then(FieldValue::as_text),
        Some(expected),
        "Field {} mismatch; fields={:?}",
        key,
        record.extracted_fields()
    );
}

/// Asserts that a field holds a number within 0.001 of the expected value
pub fn assert_number_field(record: &ClaimRecord, key: &str, expected: f64) {
    let actual = record.field(key).and_then(FieldValue::as_number);
    assert!(
        actual.is_some_and(|v| (v - expected).abs() < 1e-3),
        "Field {} mismatch: actual={:?}, expected={}",
        key,
        actual,
        expected
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that an error matches a specific variant
#[macro_export]
macro_rules! assert_err_variant {
    ($result:expr, $pattern:pat) => {
        match $result {
            Ok(value) => panic!("Expected Err matching {}, got Ok({:?})", stringify!($pattern), value),
            Err(ref e) => {
                assert!(
                    matches!(e, $pattern),
                    "Error {:?} does not match pattern {}",
                    e,
                    stringify!($pattern)
                );
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issues_extend_accepts_prefix() {
        let before = vec!["a".to_string()];
        let after = vec!["a".to_string(), "b".to_string()];
        assert_issues_extend(&before, &after);
    }

    #[test]
    #[should_panic(expected = "Issues were not extended")]
    fn test_issues_extend_rejects_rewrite() {
        let before = vec!["a".to_string()];
        let after = vec!["b".to_string(), "a".to_string()];
        assert_issues_extend(&before, &after);
    }

    #[test]
    fn test_field_assertions() {
        let mut record = ClaimRecord::from_text("text");
        record.set_field("policy_type", "Auto");
        record.set_field("claim_amount", 12.5);

        assert_text_field(&record, "policy_type", "Auto");
        assert_number_field(&record, "claim_amount", 12.5);
    }
}
