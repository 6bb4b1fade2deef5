//! Best-effort scalar extraction from claim text
//!
//! These helpers never fail: when nothing usable is found they return `None`
//! (or an empty list) and the extraction stage simply leaves the field unset.

use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

use crate::field::PolicyType;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(20\d{2})-(\d{2})-(\d{2})\b").expect("valid ISO date regex"));

static LONG_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2}),\s*(\d{4})",
    )
    .expect("valid long-form date regex")
});

static DOLLAR_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\s*([\d,]+(?:\.\d+)?)").expect("valid amount regex"));

const MONTHS: [&str; 12] = [
    "january", "february", "march", "april", "may", "june",
    "july", "august", "september", "october", "november", "december",
];

/// Finds the incident date and returns it as `YYYY-MM-DD`
///
/// ISO dates (`2024-06-05`) take precedence over long-form dates
/// (`November 22, 2024`). Impossible calendar dates are skipped.
pub fn extract_incident_date(text: &str) -> Option<NaiveDate> {
    let iso = ISO_DATE.captures_iter(text).find_map(|caps| {
        let year = caps[1].parse().ok()?;
        let month = caps[2].parse().ok()?;
        let day = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    });
    if iso.is_some() {
        return iso;
    }

    LONG_DATE.captures_iter(text).find_map(|caps| {
        let month_name = caps[1].to_lowercase();
        let month = MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
        let day = caps[2].parse().ok()?;
        let year = caps[3].parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    })
}

/// Finds the main claim amount
///
/// Only `$`-prefixed numbers count, so years are never mistaken for money.
/// When several amounts appear (repairs plus medical, say) the largest one
/// is taken as the claim amount.
pub fn extract_claim_amount(text: &str) -> Option<f64> {
    DOLLAR_AMOUNT
        .captures_iter(text)
        .filter_map(|caps| parse_amount(&caps[1].replace(',', "")))
        .fold(None, |largest: Option<f64>, amount| {
            Some(largest.map_or(amount, |l| l.max(amount)))
        })
}

/// Parses through `Decimal` so cents survive exactly; figures outside its
/// range fall back to `f64`
fn parse_amount(digits: &str) -> Option<f64> {
    match Decimal::from_str(digits) {
        Ok(amount) => amount.to_f64(),
        Err(e) => {
            let fallback = digits.parse::<f64>().ok().filter(|v| v.is_finite());
            warn!(
                amount = digits,
                error = %e,
                fallback = ?fallback,
                "Dollar amount exceeds decimal range; using floating point"
            );
            fallback
        }
    }
}

/// Policy types mentioned anywhere in the text, in detection order
pub fn mentioned_policy_types(text: &str) -> Vec<PolicyType> {
    let lowered = text.to_lowercase();
    PolicyType::ALL
        .into_iter()
        .filter(|policy| lowered.contains(policy.keyword()))
        .collect()
}

/// First policy type mentioned, by detection order
pub fn detect_policy_type(text: &str) -> Option<PolicyType> {
    mentioned_policy_types(text).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(
            extract_incident_date("Filed on 2024-11-22 after a fall."),
            Some(date(2024, 11, 22))
        );
    }

    #[test]
    fn test_long_form_date() {
        assert_eq!(
            extract_incident_date("The accident happened on November 2, 2024 downtown."),
            Some(date(2024, 11, 2))
        );
    }

    #[test]
    fn test_iso_date_wins_over_long_form() {
        let text = "Reported March 3, 2024 for an event on 2024-02-28.";
        assert_eq!(extract_incident_date(text), Some(date(2024, 2, 28)));
    }

    #[test]
    fn test_impossible_date_is_skipped() {
        assert_eq!(extract_incident_date("on 2024-13-45 or 2024-02-30"), None);
        assert_eq!(
            extract_incident_date("on 2024-02-30, really 2024-03-01"),
            Some(date(2024, 3, 1))
        );
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_incident_date("last Tuesday"), None);
    }

    #[test]
    fn test_amount_with_commas() {
        assert_eq!(extract_claim_amount("The estimated cost is $3,750."), Some(3750.0));
    }

    #[test]
    fn test_amount_picks_largest() {
        let text = "Repairs were $1200.50 and medical bills $280, total $ 1,480.50.";
        assert_eq!(extract_claim_amount(text), Some(1480.5));
    }

    #[test]
    fn test_cents_are_kept() {
        assert_eq!(extract_claim_amount("Quoted at $1,250.50."), Some(1250.5));
    }

    #[test]
    fn test_amount_beyond_decimal_range_falls_back_to_float() {
        let amount = extract_claim_amount("Total loss of $9999999999999999999999999999999999.");

        assert!(amount.is_some_and(|v| (v / 1e34 - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_oversized_amount_still_competes_for_largest() {
        let text = "Deductible $500 and a reported loss of $99999999999999999999999999999999.";
        assert!(extract_claim_amount(text).is_some_and(|v| v > 1e31));
    }

    #[test]
    fn test_years_are_not_amounts() {
        assert_eq!(extract_claim_amount("In 2024 we paid 5000 dollars."), None);
    }

    #[test]
    fn test_policy_detection_order() {
        assert_eq!(
            detect_policy_type("This property claim also touches health coverage"),
            Some(PolicyType::Health)
        );
        assert_eq!(
            mentioned_policy_types("AUTO and Property"),
            vec![PolicyType::Auto, PolicyType::Property]
        );
        assert_eq!(detect_policy_type("nothing relevant"), None);
    }
}
