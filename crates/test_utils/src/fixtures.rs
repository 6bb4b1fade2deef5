//! Pre-built Test Fixtures
//!
//! Claim narratives with known extraction results. Every text here is used
//! by at least one integration test, so edits must keep the documented
//! expectations true.

/// Fixture for claim narratives
pub struct ClaimTextFixtures;

impl ClaimTextFixtures {
    /// Health claim with a fracture
    ///
    /// Expected: policy Health, amount 3750.0, date 2024-11-22, priority
    /// High, claimant "Jane Smith" when a recognizer is available.
    pub fn jane_smith_fracture() -> &'static str {
        "Jane Smith submitted a Health claim on 2024-11-22 after a slip and fall. \
         The estimated cost is $3,750. The patient sustained a fracture."
    }

    /// Auto claim without injuries, amount below the Medium threshold
    pub fn parking_lot_bump() -> &'static str {
        "Carlos Rivera reported an Auto claim on March 3, 2024 after a low-speed \
         parking lot collision. Repairs are quoted at $1,250.50. No one was hurt."
    }

    /// Property claim with an amount exactly on the Medium threshold
    pub fn burst_pipe_threshold() -> &'static str {
        "Emily Chen filed a Property claim on 2024-02-14 for water damage from a \
         burst pipe. The contractor estimate is $3,000. Nobody was home."
    }

    /// Text mentioning more than one policy keyword
    pub fn mixed_policy_types() -> &'static str {
        "Ravi Patel had an auto accident on 2024-06-01 that also damaged his \
         property fence. Total estimate $4,200."
    }

    /// Text with no extractable fields at all
    pub fn no_details() -> &'static str {
        "something happened and someone should look into it"
    }

    /// Several dollar figures; the largest is the claim amount
    pub fn several_amounts() -> &'static str {
        "Deductible $500, towing $150 and body work $2,350.75 for an Auto claim \
         filed by Sara Khan on 2024-09-09."
    }

    /// Auto claim whose claimant name carries accented letters
    ///
    /// Expected: claimant "José García", policy Auto, amount 2100.0, date
    /// 2024-05-10, priority Low.
    pub fn accented_claimant() -> &'static str {
        "José García filed an Auto claim on 2024-05-10 after a rear-end collision \
         in a parking garage. Repairs are estimated at $2,100."
    }
}
