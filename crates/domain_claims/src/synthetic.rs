//! Synthetic claim dataset
//!
//! Generates realistic-looking claim narratives together with the values a
//! perfect extraction would produce, for demos and regression fixtures. The
//! generator is seeded explicitly so the same seed always yields the same
//! dataset.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::field::{PolicyType, Priority};

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Mark", "Priya", "Carlos", "Emily",
    "Ravi", "Anita", "Michael", "Sara", "David", "Liu",
];

const LAST_NAMES: &[&str] = &[
    "Doe", "Smith", "Lee", "Nair", "Rivera", "Chen",
    "Patel", "Khan", "Johnson", "Brown", "Garcia", "Nguyen",
];

const HEALTH_EVENTS: &[&str] = &[
    "a slip and fall at home",
    "a workplace accident",
    "a sports injury during a local match",
    "a minor surgery following a chronic condition",
    "an emergency room visit after chest pain",
];

const HEALTH_OUTCOMES: &[&str] = &[
    "no complications were reported",
    "the patient suffered a minor sprain",
    "the patient sustained a fracture",
    "follow-up physiotherapy sessions were recommended",
    "the patient required an overnight hospital stay",
];

const AUTO_EVENTS: &[&str] = &[
    "a rear-end collision at a traffic light",
    "a side-impact accident at an intersection",
    "a low-speed parking lot collision",
    "a highway collision involving multiple vehicles",
    "a single-vehicle skid on a wet road",
];

const AUTO_OUTCOMES: &[&str] = &[
    "no injuries were reported",
    "the driver reported mild whiplash",
    "the passenger reported minor bruising",
    "no occupants were harmed",
];

const PROPERTY_EVENTS: &[&str] = &[
    "water damage from a burst pipe",
    "fire damage in the kitchen area",
    "storm damage to the roof and windows",
    "theft resulting in loss of electronics",
    "flooding in the basement after heavy rain",
];

const PROPERTY_OUTCOMES: &[&str] = &[
    "no injuries occurred",
    "no occupants were present at the time",
    "the tenant was not at home when the incident happened",
];

/// Days after 2024-01-01 an incident may fall on
const DATE_SPREAD_DAYS: u64 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    fn multiplier(&self) -> Decimal {
        match self {
            Severity::Low => Decimal::new(6, 1),
            Severity::Medium => Decimal::ONE,
            Severity::High => Decimal::new(16, 1),
        }
    }
}

/// One generated claim with its gold labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticClaim {
    pub id: String,
    pub text: String,
    pub claimant_name: String,
    pub policy_type: PolicyType,
    pub claim_amount: f64,
    pub incident_date: String,
    pub priority: Priority,
    pub gold_summary: String,
}

/// Seeded generator of [`SyntheticClaim`]s
pub struct SyntheticGenerator {
    rng: StdRng,
    generated: usize,
}

impl SyntheticGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            generated: 0,
        }
    }

    /// Generates `count` claims with ids continuing from earlier calls
    pub fn generate(&mut self, count: usize) -> Vec<SyntheticClaim> {
        (0..count).map(|_| self.next_claim()).collect()
    }

    pub fn next_claim(&mut self) -> SyntheticClaim {
        self.generated += 1;
        let id = format!("c{:05}", self.generated);

        let policy_type = PolicyType::ALL[self.rng.gen_range(0..PolicyType::ALL.len())];
        let claimant_name = format!("{} {}", self.pick(FIRST_NAMES), self.pick(LAST_NAMES));
        let incident_date = self.incident_date();

        let (event, outcome, base_amount) = match policy_type {
            PolicyType::Health => (
                self.pick(HEALTH_EVENTS),
                self.pick(HEALTH_OUTCOMES),
                self.rng.gen_range(600..=9000i64),
            ),
            PolicyType::Auto => (
                self.pick(AUTO_EVENTS),
                self.pick(AUTO_OUTCOMES),
                self.rng.gen_range(800..=15000i64),
            ),
            PolicyType::Property => (
                self.pick(PROPERTY_EVENTS),
                self.pick(PROPERTY_OUTCOMES),
                self.rng.gen_range(1000..=20000i64),
            ),
        };

        let severity = match self.rng.gen_range(0..3u8) {
            0 => Severity::Low,
            1 => Severity::Medium,
            _ => Severity::High,
        };
        let amount = (Decimal::from(base_amount) * severity.multiplier()).round_dp(2);
        let priority = gold_priority(outcome, severity, amount);

        let text = format!(
            "{} submitted a {} claim on {} after {}. The estimated cost is ${:.2}. {}.",
            claimant_name,
            policy_type,
            incident_date,
            event,
            amount,
            capitalize(outcome),
        );
        let gold_summary = format!(
            "{} filed a {}-priority {} claim on {} after {}, with an estimated cost of ${:.2} and {}.",
            claimant_name,
            priority.as_str().to_lowercase(),
            policy_type.as_str().to_lowercase(),
            incident_date,
            event,
            amount,
            outcome,
        );

        SyntheticClaim {
            id,
            text,
            claimant_name,
            policy_type,
            claim_amount: amount.to_f64().unwrap_or_default(),
            incident_date,
            priority,
            gold_summary,
        }
    }

    fn pick(&mut self, items: &[&'static str]) -> &'static str {
        items[self.rng.gen_range(0..items.len())]
    }

    fn incident_date(&mut self) -> String {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        let offset = self.rng.gen_range(0..=DATE_SPREAD_DAYS);
        base.checked_add_days(Days::new(offset))
            .unwrap_or(base)
            .format("%Y-%m-%d")
            .to_string()
    }
}

/// Gold priority label used by the dataset
///
/// Stricter than the triage stage: severe or expensive claims count as High
/// even without injury keywords.
fn gold_priority(outcome: &str, severity: Severity, amount: Decimal) -> Priority {
    if outcome.contains("fracture")
        || outcome.contains("surgery")
        || severity == Severity::High
        || amount > Decimal::from(5000)
    {
        Priority::High
    } else if amount >= Decimal::from(3000) {
        Priority::Medium
    } else {
        Priority::Low
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_same_seed_same_dataset() {
        let a = SyntheticGenerator::new(42).generate(25);
        let b = SyntheticGenerator::new(42).generate(25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_dataset() {
        let a = SyntheticGenerator::new(1).generate(10);
        let b = SyntheticGenerator::new(2).generate(10);
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut generator = SyntheticGenerator::new(7);
        let first = generator.generate(2);
        let next = generator.next_claim();

        assert_eq!(first[0].id, "c00001");
        assert_eq!(first[1].id, "c00002");
        assert_eq!(next.id, "c00003");
    }

    #[test]
    fn test_text_mentions_its_labels() {
        for claim in SyntheticGenerator::new(3).generate(50) {
            assert!(claim.text.starts_with(&claim.claimant_name));
            assert!(claim.text.contains(claim.policy_type.as_str()));
            assert!(claim.text.contains(&claim.incident_date));
            assert!(claim.text.contains(&format!("${:.2}", claim.claim_amount)));
            assert!(claim.incident_date.starts_with("2024-"));
        }
    }

    #[test]
    fn test_gold_priority_rules() {
        assert_eq!(gold_priority("the patient sustained a fracture", Severity::Low, dec!(100)), Priority::High);
        assert_eq!(gold_priority("no injuries", Severity::High, dec!(100)), Priority::High);
        assert_eq!(gold_priority("no injuries", Severity::Low, dec!(5000.01)), Priority::High);
        assert_eq!(gold_priority("no injuries", Severity::Low, dec!(3000)), Priority::Medium);
        assert_eq!(gold_priority("no injuries", Severity::Low, dec!(2999.99)), Priority::Low);
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("no injuries occurred"), "No injuries occurred");
        assert_eq!(capitalize(""), "");
    }
}
