//! Tax identifier value object and its weighted checksum.
//!
//! An identifier is exactly 11 decimal digits (ABN format) and must satisfy
//! a positional weighted checksum: subtract 1 from the first digit, multiply
//! each digit by its weight, and the total must be divisible by 89.

use serde::{Deserialize, Serialize};

use billabong_core::{DomainError, DomainResult};

const WEIGHTS: [i64; 11] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Returns `true` iff `candidate` is exactly 11 base-10 digits and the
/// weighted checksum holds. Malformed input yields `false`, never an error.
pub fn is_checksum_valid(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    if bytes.len() != 11 || !bytes.iter().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut total: i64 = 0;
    for (i, b) in bytes.iter().enumerate() {
        let mut digit = i64::from(b - b'0');
        if i == 0 {
            // The first digit is reduced by 1; it may go negative for a
            // leading zero, which the sum tolerates.
            digit -= 1;
        }
        total += digit * WEIGHTS[i];
    }

    total % 89 == 0
}

/// Checksum-validated 11-digit tax identifier.
///
/// `parse` is the only constructor, so holding a `TaxId` implies the
/// checksum already held.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxId(String);

impl TaxId {
    pub fn parse(candidate: &str) -> DomainResult<Self> {
        if !is_checksum_valid(candidate) {
            return Err(DomainError::malformed_identifier(candidate));
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the identifier.
    ///
    /// Consistency checks compare tax identifiers by numeric value so that
    /// representation differences never cause false mismatches.
    pub fn numeric(&self) -> u64 {
        // 11 decimal digits always fit in a u64; parse cannot fail for a
        // constructed TaxId.
        self.0.parse().unwrap_or(0)
    }
}

impl core::fmt::Display for TaxId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
