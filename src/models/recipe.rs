//! Recipe model
//!
//! A beer formulation: target volumes, gravities, and the four ordered
//! ingredient collections. Recipes are created and edited by the layer above
//! this crate; here they are only read, and scaling returns a derived copy.

use std::ops::Deref;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::brewing::units::{self, VolumeUnit};
use crate::brewing::{abv, color, scale};
use crate::error::CalcResult;
use crate::models::{Fermentable, Hop, MiscIngredient, Yeast};

/// The type of beer recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeType {
    AllGrain,
    Extract,
    PartialMash,
}

/// A beer recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub recipe_type: RecipeType,
    /// Opaque reference to a beverage style record; styles live outside this
    /// crate and are never computed against.
    pub style: Option<i64>,
    pub volume_units: VolumeUnit,
    /// Target size of the finished batch
    pub batch_size: Decimal,
    /// Starting size for the main boil of the wort
    pub boil_size: Decimal,
    /// Total time to boil the wort in minutes
    pub boil_time: u32,
    /// Percent brewhouse efficiency used when estimating starting gravity
    pub efficiency: Option<u8>,
    pub boil_gravity: Option<Decimal>,
    pub original_gravity: Decimal,
    pub final_gravity: Decimal,
    /// IBUs are entered from other software, not calculated here
    pub ibus_tinseth: Decimal,
    #[serde(default)]
    pub notes: String,
    pub fermentables: Vec<Fermentable>,
    pub hops: Vec<Hop>,
    pub yeasts: Vec<Yeast>,
    pub miscellaneous_ingredients: Vec<MiscIngredient>,
}

impl Recipe {
    /// The batch volume converted to gallons for SRM estimation and scaling
    pub fn batch_volume_in_gallons(&self) -> Decimal {
        units::to_gallons(self.batch_size, self.volume_units)
    }

    /// Estimated color in SRM at the recipe's own batch volume
    pub fn color_srm(&self) -> CalcResult<i64> {
        color::estimate_srm(&self.fermentables, self.batch_volume_in_gallons())
    }

    /// Total weight of fermentables in pounds
    pub fn grain_pounds(&self) -> CalcResult<Decimal> {
        let mut weight = Decimal::ZERO;
        for fermentable in &self.fermentables {
            weight += fermentable.weight_in_pounds()?;
        }
        Ok(weight)
    }

    /// ABV from the recipe's own gravity readings
    pub fn abv(&self) -> Decimal {
        abv::abv_from_gravities(self.original_gravity, self.final_gravity)
    }

    /// A copy of this recipe rescaled to the target volume
    pub fn scaled_to_volume(
        &self,
        target_volume: Decimal,
        unit: VolumeUnit,
    ) -> CalcResult<ScaledRecipe> {
        scale::scale_recipe(self, target_volume, unit)
    }

    /// Check every ingredient's unit against its kind's supported units
    pub fn validate(&self) -> CalcResult<()> {
        for fermentable in &self.fermentables {
            fermentable.validate()?;
        }
        for hop in &self.hops {
            hop.validate()?;
        }
        for yeast in &self.yeasts {
            yeast.validate()?;
        }
        for misc in &self.miscellaneous_ingredients {
            misc.validate()?;
        }
        Ok(())
    }
}

/// A recipe rescaled to a different batch volume.
///
/// Structurally a [`Recipe`] with every ingredient amount multiplied by the
/// scale factor. It exists only for display and calculation; it is never
/// edited or saved and shares no state with the source recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledRecipe {
    recipe: Recipe,
    scale_factor: Decimal,
}

impl ScaledRecipe {
    pub(crate) fn new(recipe: Recipe, scale_factor: Decimal) -> Self {
        Self {
            recipe,
            scale_factor,
        }
    }

    /// The multiplier that was applied to every ingredient amount
    pub fn scale_factor(&self) -> Decimal {
        self.scale_factor
    }

    pub fn as_recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn into_recipe(self) -> Recipe {
        self.recipe
    }
}

impl Deref for ScaledRecipe {
    type Target = Recipe;

    fn deref(&self) -> &Recipe {
        &self.recipe
    }
}
