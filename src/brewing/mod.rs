//! Brewing calculations
//!
//! Unit conversion, recipe scaling, and the derived quantities (SRM color,
//! ABV) the formulas produce. Everything here is a pure function of its
//! inputs; all arithmetic is fixed-point decimal.

pub mod abv;
pub mod color;
pub mod scale;
pub mod units;

pub use abv::{abv_from_gravities, calculate_abv};
pub use color::{calculate_mcu, estimate_srm};
pub use scale::scale_recipe;
pub use units::{to_gallons, to_pounds, IngredientUnit, VolumeUnit, WeightUnit};
