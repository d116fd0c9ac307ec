//! Fermentable model
//!
//! A fermentable is anything that contributes substantially to the beer:
//! grains, malt extracts, sugars, honey, fruit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::brewing::units::{self, IngredientUnit};
use crate::error::{CalcError, CalcResult};
use crate::models::amount::{IngredientAmount, Scalable};

/// Broad categories of fermentables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FermentableType {
    Grain,
    DryExtract,
    LiquidExtract,
    Sugar,
    Adjunct,
}

/// A single fermentable in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fermentable {
    pub name: String,
    #[serde(default)]
    pub maltster: String,
    pub fermentable_type: FermentableType,
    pub amount: IngredientAmount,
    /// Color of the item in Lovibond units (SRM for liquid extracts).
    /// Sugars and adjuncts may have no rating; they contribute no color.
    pub color: Option<Decimal>,
}

impl Fermentable {
    /// Units a fermentable amount may be recorded in
    pub const SUPPORTED_UNITS: &'static [IngredientUnit] = &[
        IngredientUnit::Grams,
        IngredientUnit::Ounces,
        IngredientUnit::Kilograms,
        IngredientUnit::Pounds,
    ];

    /// Check the amount's unit against the units fermentables support
    pub fn validate(&self) -> CalcResult<()> {
        if !Self::SUPPORTED_UNITS.contains(&self.amount.unit()) {
            return Err(CalcError::UnsupportedUnit {
                unit: self.amount.unit(),
                kind: "fermentable",
            });
        }
        Ok(())
    }

    /// The recorded amount converted to pounds
    pub fn weight_in_pounds(&self) -> CalcResult<Decimal> {
        let unit = self
            .amount
            .unit()
            .as_weight()
            .ok_or(CalcError::NotAWeightUnit(self.amount.unit()))?;
        Ok(units::to_pounds(self.amount.amount(), unit))
    }
}

impl Scalable for Fermentable {
    fn amount(&self) -> Option<IngredientAmount> {
        Some(self.amount)
    }

    fn with_amount(&self, amount: IngredientAmount) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }
}
