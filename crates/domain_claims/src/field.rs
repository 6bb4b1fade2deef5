//! Field values and the small vocabularies used by the stages

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value stored under an extracted field key
///
/// Serializes to a bare JSON string, number or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Creates a number value; non-finite input becomes `Null` since JSON
    /// cannot carry it
    pub fn number(value: f64) -> Self {
        if value.is_finite() {
            FieldValue::Number(value)
        } else {
            FieldValue::Null
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("null"),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::text(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::number(value)
    }
}

/// Fields a claim must carry before it is considered complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    ClaimantName,
    PolicyType,
    ClaimAmount,
    IncidentDate,
}

impl RequiredField {
    /// Canonical order, used for issue reporting
    pub const ALL: [RequiredField; 4] = [
        RequiredField::ClaimantName,
        RequiredField::PolicyType,
        RequiredField::ClaimAmount,
        RequiredField::IncidentDate,
    ];

    /// Key under which the field is stored
    pub fn key(&self) -> &'static str {
        match self {
            RequiredField::ClaimantName => "claimant_name",
            RequiredField::PolicyType => "policy_type",
            RequiredField::ClaimAmount => "claim_amount",
            RequiredField::IncidentDate => "incident_date",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Policy lines recognized in claim text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyType {
    Health,
    Auto,
    Property,
}

impl PolicyType {
    /// Detection order: the first match in this list wins
    pub const ALL: [PolicyType; 3] = [PolicyType::Health, PolicyType::Auto, PolicyType::Property];

    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyType::Health => "Health",
            PolicyType::Auto => "Auto",
            PolicyType::Property => "Property",
        }
    }

    /// Lowercase keyword searched for in the text
    pub fn keyword(&self) -> &'static str {
        match self {
            PolicyType::Health => "health",
            PolicyType::Auto => "auto",
            PolicyType::Property => "property",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handling priority assigned by triage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
