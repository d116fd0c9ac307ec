//! Miscellaneous ingredient model
//!
//! Anything that is not a fermentable, hop, or yeast and does not
//! significantly change the gravity of the beer: spices, clarifying agents,
//! water treatments, and so on.

use serde::{Deserialize, Serialize};

use crate::brewing::units::IngredientUnit;
use crate::error::{CalcError, CalcResult};
use crate::models::amount::{IngredientAmount, Scalable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MiscType {
    Spice,
    Fining,
    WaterAgent,
    Herb,
    Flavor,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MiscUseStep {
    Boil,
    Mash,
    Primary,
    Secondary,
    Bottling,
}

/// A single miscellaneous ingredient in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiscIngredient {
    pub name: String,
    pub misc_type: MiscType,
    pub use_step: MiscUseStep,
    /// Time the item was boiled, steeped, mashed, etc in minutes
    pub use_time: u32,
    pub amount: Option<IngredientAmount>,
    /// Short description of what the ingredient is used for
    #[serde(default)]
    pub use_for: String,
}

impl MiscIngredient {
    /// Units a miscellaneous amount may be recorded in
    pub const SUPPORTED_UNITS: &'static [IngredientUnit] = &[
        IngredientUnit::Grams,
        IngredientUnit::Ounces,
        IngredientUnit::Kilograms,
        IngredientUnit::Pounds,
        IngredientUnit::Teaspoons,
        IngredientUnit::Tablespoons,
        IngredientUnit::FluidOunces,
        IngredientUnit::Liters,
        IngredientUnit::Gallons,
    ];

    /// Check the amount's unit, when present
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(amount) = self.amount {
            if !Self::SUPPORTED_UNITS.contains(&amount.unit()) {
                return Err(CalcError::UnsupportedUnit {
                    unit: amount.unit(),
                    kind: "miscellaneous ingredient",
                });
            }
        }
        Ok(())
    }
}

impl Scalable for MiscIngredient {
    fn amount(&self) -> Option<IngredientAmount> {
        self.amount
    }

    fn with_amount(&self, amount: IngredientAmount) -> Self {
        Self {
            amount: Some(amount),
            ..self.clone()
        }
    }
}
