//! Hop model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::brewing::units::{self, IngredientUnit};
use crate::error::{CalcError, CalcResult};
use crate::models::amount::{IngredientAmount, Scalable};

/// The form the hops come in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HopForm {
    Pellet,
    Plug,
    Leaf,
}

/// When in the process the hops are used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HopUseStep {
    Aroma,
    Boil,
    #[serde(rename = "dryhop")]
    DryHop,
    #[serde(rename = "firstwort")]
    FirstWort,
    Mash,
}

/// A single amount of hops in a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    pub name: String,
    pub alpha_acid_percent: Decimal,
    pub beta_acid_percent: Option<Decimal>,
    pub form: HopForm,
    pub use_step: HopUseStep,
    /// Time in minutes. Specific meaning varies by use type.
    pub use_time: u32,
    pub amount: IngredientAmount,
}

impl Hop {
    /// Units a hop amount may be recorded in
    pub const SUPPORTED_UNITS: &'static [IngredientUnit] =
        &[IngredientUnit::Grams, IngredientUnit::Ounces];

    /// Check the amount's unit against the units hops support
    pub fn validate(&self) -> CalcResult<()> {
        if !Self::SUPPORTED_UNITS.contains(&self.amount.unit()) {
            return Err(CalcError::UnsupportedUnit {
                unit: self.amount.unit(),
                kind: "hop",
            });
        }
        Ok(())
    }

    /// The recorded amount in ounces. Gram amounts convert at 0.035274 oz/g;
    /// anything else is already ounces.
    pub fn weight_in_ounces(&self) -> Decimal {
        if self.amount.unit() == IngredientUnit::Grams {
            return self.amount.amount() * units::OUNCES_PER_GRAM;
        }
        self.amount.amount()
    }
}

impl Scalable for Hop {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn fuggles(amount: Decimal, unit: IngredientUnit) -> Hop {
        Hop {
            name: "Fuggles".to_string(),
            alpha_acid_percent: Decimal::new(5000, 3),
            beta_acid_percent: None,
            form: HopForm::Pellet,
            use_step: HopUseStep::Boil,
            use_time: 60,
            amount: IngredientAmount::new(amount, unit).unwrap(),
        }
    }

    #[test]
    fn test_weight_in_ounces_from_grams() {
        let hop = fuggles(Decimal::new(28, 0), IngredientUnit::Grams);
        assert_eq!(hop.weight_in_ounces(), Decimal::new(987672, 6));
    }

    #[test]
    fn test_weight_in_ounces_identity() {
        let hop = fuggles(Decimal::new(70, 2), IngredientUnit::Ounces);
        assert_eq!(hop.weight_in_ounces(), Decimal::new(70, 2));
    }

    #[test]
    fn test_validate_unit() {
        assert!(fuggles(Decimal::ONE, IngredientUnit::Grams).validate().is_ok());
        assert_eq!(
            fuggles(Decimal::ONE, IngredientUnit::Pounds).validate(),
            Err(CalcError::UnsupportedUnit {
                unit: IngredientUnit::Pounds,
                kind: "hop",
            })
        );
    }

    #[test]
    fn test_scaled_by() {
        let hop = fuggles(Decimal::new(70, 2), IngredientUnit::Ounces);
        let scaled = hop.scaled_by(Decimal::TWO).unwrap();
        assert_eq!(scaled.amount.amount(), Decimal::new(140, 2));
        assert_eq!(scaled.use_time, 60);
    }
}
