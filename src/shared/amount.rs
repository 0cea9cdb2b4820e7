//! Conversion between major currency units and Paystack subunits.
//!
//! Every amount on the wire is an integer in the currency's subunit (kobo,
//! pesewas, cents). `Decimal` keeps `19.99` from turning into `1998`.

use crate::error::{SdkError, SdkResult};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const SUBUNITS_PER_UNIT: i64 = 100;

/// Converts a major-unit amount (e.g. naira) to subunits (kobo).
///
/// Fails when the amount is negative, has more precision than one subunit, or
/// does not fit in a `u64`.
pub fn to_subunit(amount: Decimal) -> SdkResult<u64> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(SdkError::app_with_status(
            format!("Amount {} must not be negative", amount),
            400,
        ));
    }
    let scaled = amount * Decimal::from(SUBUNITS_PER_UNIT);
    if scaled.fract() != Decimal::ZERO {
        return Err(SdkError::app_with_status(
            format!("Amount {} has more precision than one subunit", amount),
            400,
        ));
    }
    scaled.to_u64().ok_or_else(|| {
        SdkError::app_with_status(format!("Amount {} is out of range", amount), 400)
    })
}

/// Converts a subunit amount (kobo) back to major units (naira).
pub fn from_subunit(subunits: u64) -> Decimal {
    Decimal::from(subunits) / Decimal::from(SUBUNITS_PER_UNIT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_to_subunit_whole_and_fractional() {
        assert_eq!(to_subunit(Decimal::from(500)).unwrap(), 50_000);
        assert_eq!(to_subunit(Decimal::from_str("19.99").unwrap()).unwrap(), 1_999);
        assert_eq!(to_subunit(Decimal::from_str("0.5").unwrap()).unwrap(), 50);
    }

    #[test]
    fn test_to_subunit_rejects_sub_kobo_precision() {
        let err = to_subunit(Decimal::from_str("1.005").unwrap()).unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(err.to_string().contains("precision"));
    }

    #[test]
    fn test_to_subunit_rejects_negative() {
        assert!(to_subunit(Decimal::from(-5)).is_err());
        assert_eq!(to_subunit(Decimal::ZERO).unwrap(), 0);
    }

    #[test]
    fn test_from_subunit() {
        assert_eq!(from_subunit(50_000), Decimal::from(500));
        assert_eq!(from_subunit(1_999).to_string(), "19.99");
    }
}
