//! Yeast model
//!
//! Covers dry yeast, liquid yeast, and starters. Amounts are optional; a
//! packet of dry yeast is often pitched without a measured quantity.

use serde::{Deserialize, Serialize};

use crate::brewing::units::IngredientUnit;
use crate::error::{CalcError, CalcResult};
use crate::models::amount::{IngredientAmount, Scalable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YeastType {
    Dry,
    Liquid,
}

/// A yeast used in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yeast {
    pub name: String,
    pub yeast_type: YeastType,
    pub amount: Option<IngredientAmount>,
    #[serde(default)]
    pub add_to_secondary: bool,
}

impl Yeast {
    /// Units a yeast amount may be recorded in, weight or small volumes
    pub const SUPPORTED_UNITS: &'static [IngredientUnit] = &[
        IngredientUnit::Grams,
        IngredientUnit::Ounces,
        IngredientUnit::Teaspoons,
        IngredientUnit::Tablespoons,
        IngredientUnit::FluidOunces,
        IngredientUnit::Liters,
    ];

    /// Check the amount's unit, when present, against the units yeasts support
    pub fn validate(&self) -> CalcResult<()> {
        if let Some(amount) = self.amount {
            if !Self::SUPPORTED_UNITS.contains(&amount.unit()) {
                return Err(CalcError::UnsupportedUnit {
                    unit: amount.unit(),
                    kind: "yeast",
                });
            }
        }
        Ok(())
    }

    pub fn amount_is_weight(&self) -> bool {
        self.amount.map(|a| a.unit().is_weight()).unwrap_or(false)
    }
}

impl Scalable for Yeast {
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
