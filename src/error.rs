//! Calculation error types
//!
//! Every failure is a deterministic validation error raised at the point of
//! detection. Nothing here is transient or retryable; the caller must supply
//! corrected input.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::brewing::units::IngredientUnit;

/// Calculation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Volume must be greater than zero, got {0}")]
    InvalidVolume(Decimal),

    #[error("Recipe batch size must convert to a positive volume in gallons, got {0}")]
    InvalidRecipeVolume(Decimal),

    #[error("Both original and final gravity readings are required")]
    MissingGravityData,

    #[error("Scale factor must be greater than zero, got {0}")]
    InvalidScaleFactor(Decimal),

    #[error("Ingredient amount must not be negative, got {0}")]
    NegativeAmount(Decimal),

    #[error("Cannot convert {0} to a weight in pounds")]
    NotAWeightUnit(IngredientUnit),

    #[error("{unit} is not a supported unit for a {kind}")]
    UnsupportedUnit {
        unit: IngredientUnit,
        kind: &'static str,
    },
}

/// Result type for calculation operations
pub type CalcResult<T> = Result<T, CalcError>;
