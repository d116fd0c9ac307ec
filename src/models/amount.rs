//! Ingredient amount value type
//!
//! Pairs a fixed-point quantity with its unit of measure. Immutable value
//! semantics; scaling returns a new value and never mutates in place.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::brewing::units::IngredientUnit;
use crate::error::{CalcError, CalcResult};

/// A quantity of an ingredient together with its unit of measure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientAmount {
    amount: Decimal,
    unit: IngredientUnit,
}

impl IngredientAmount {
    /// Create an amount. Negative quantities are rejected.
    pub fn new(amount: Decimal, unit: IngredientUnit) -> CalcResult<Self> {
        if amount < Decimal::ZERO {
            return Err(CalcError::NegativeAmount(amount));
        }
        Ok(Self { amount, unit })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn unit(&self) -> IngredientUnit {
        self.unit
    }

    /// A new amount multiplied by `factor`, unit unchanged.
    ///
    /// The factor must be positive; scaling a recipe to nothing or to a
    /// negative volume is a caller error.
    pub fn scaled_by(&self, factor: Decimal) -> CalcResult<Self> {
        if factor <= Decimal::ZERO {
            return Err(CalcError::InvalidScaleFactor(factor));
        }
        Ok(Self {
            amount: self.amount * factor,
            unit: self.unit,
        })
    }
}

impl fmt::Display for IngredientAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}

/// An ingredient whose recorded amount can be rescaled.
///
/// Implemented by every ingredient kind so the recipe scaler can walk the
/// four collections uniformly. Kinds with an optional amount (yeast,
/// miscellaneous ingredients) report `None` and pass through scaling
/// unchanged.
pub trait Scalable: Clone {
    /// The recorded amount, if there is one
    fn amount(&self) -> Option<IngredientAmount>;

    /// A copy of self carrying a different amount
    fn with_amount(&self, amount: IngredientAmount) -> Self;

    /// A copy of self with the amount multiplied by `factor`
    fn scaled_by(&self, factor: Decimal) -> CalcResult<Self> {
        match self.amount() {
            Some(amount) => Ok(self.with_amount(amount.scaled_by(factor)?)),
            None => Ok(self.clone()),
        }
    }
}
