//! Alcohol by volume estimation
//!
//! The standard approximation `ABV = (OG - FG) * 131.25`. No rounding is
//! applied; callers format the full decimal as they see fit.

use rust_decimal::Decimal;

use crate::error::{CalcError, CalcResult};

/// Multiplier in the ABV approximation, 131.25
const ABV_MULTIPLIER: Decimal = Decimal::from_parts(13125, 0, 0, false, 2);

/// ABV from two gravity readings
pub fn abv_from_gravities(original_gravity: Decimal, final_gravity: Decimal) -> Decimal {
    (original_gravity - final_gravity) * ABV_MULTIPLIER
}

/// ABV from possibly-unrecorded gravity readings.
///
/// Both readings must be present; a batch still fermenting has no final
/// gravity and no meaningful ABV yet.
pub fn calculate_abv(
    original_gravity: Option<Decimal>,
    final_gravity: Option<Decimal>,
) -> CalcResult<Decimal> {
    match (original_gravity, final_gravity) {
        (Some(og), Some(fg)) => Ok(abv_from_gravities(og, fg)),
        _ => Err(CalcError::MissingGravityData),
    }
}
