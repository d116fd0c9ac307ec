//! Beer color estimation
//!
//! Malt Color Units per fermentable, summed and run through Morey's equation
//! to estimate SRM: `SRM = 1.4922 * (MCU ^ 0.6859)`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

use crate::error::{CalcError, CalcResult};
use crate::models::Fermentable;

/// Multiplier in Morey's equation, 1.4922
const MOREY_MULTIPLIER: Decimal = Decimal::from_parts(14922, 0, 0, false, 4);
/// Exponent in Morey's equation, 0.6859
const MOREY_EXPONENT: Decimal = Decimal::from_parts(6859, 0, 0, false, 4);

/// Malt Color Units contributed by one fermentable at the given volume.
///
/// MCU is the weight of the grain in pounds times its color in Lovibond,
/// divided by the volume in gallons. Fermentables with no color rating
/// (sugars, some adjuncts) contribute nothing.
pub fn calculate_mcu(fermentable: &Fermentable, gallons: Decimal) -> CalcResult<Decimal> {
    if gallons <= Decimal::ZERO {
        return Err(CalcError::InvalidVolume(gallons));
    }
    let color = fermentable.color.unwrap_or(Decimal::ZERO);
    Ok((fermentable.weight_in_pounds()? * color) / gallons)
}

/// Estimated SRM for a set of fermentables at the given volume in gallons.
///
/// Rounds half-to-even to the nearest whole SRM, which is how every stored
/// figure was produced.
pub fn estimate_srm(fermentables: &[Fermentable], gallons: Decimal) -> CalcResult<i64> {
    let mut total_mcu = Decimal::ZERO;
    for fermentable in fermentables {
        total_mcu += calculate_mcu(fermentable, gallons)?;
    }
    if total_mcu <= Decimal::ZERO {
        return Ok(0);
    }
    let srm = MOREY_MULTIPLIER * total_mcu.powd(MOREY_EXPONENT);
    // saturate instead of panicking on absurd MCU totals
    Ok(srm.round().to_i64().unwrap_or(i64::MAX))
}
