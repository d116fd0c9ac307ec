//! Batch model
//!
//! One real brewing event based on a recipe. A batch may have been brewed at
//! a different volume than the recipe was written for, so it resolves to an
//! effective recipe (original or scaled) and to measured-or-planned volumes
//! for the color math.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::brewing::units::{self, VolumeUnit};
use crate::brewing::{abv, color, scale};
use crate::error::CalcResult;
use crate::models::{Recipe, ScaledRecipe};

/// States a brew batch could be in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchStatus {
    Planned,
    Brewing,
    Fermenting,
    Complete,
}

impl BatchStatus {
    /// Whether the batch is still somewhere between planning and packaging
    pub fn is_in_progress(&self) -> bool {
        !matches!(self, BatchStatus::Complete)
    }
}

/// The recipe a batch should be read against: the original as written, or a
/// copy scaled to the batch's target volume
#[derive(Debug)]
pub enum EffectiveRecipe<'a> {
    Original(&'a Recipe),
    Scaled(ScaledRecipe),
}

impl EffectiveRecipe<'_> {
    pub fn as_recipe(&self) -> &Recipe {
        match self {
            EffectiveRecipe::Original(recipe) => recipe,
            EffectiveRecipe::Scaled(scaled) => scaled.as_recipe(),
        }
    }

    pub fn is_scaled(&self) -> bool {
        matches!(self, EffectiveRecipe::Scaled(_))
    }
}

/// A logged brewing of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    pub recipe: Recipe,
    pub status: BatchStatus,
    pub brewed_date: Option<NaiveDate>,
    pub packaged_date: Option<NaiveDate>,
    pub on_tap_date: Option<NaiveDate>,
    pub off_tap_date: Option<NaiveDate>,
    /// Measured starting gravity for this batch
    pub original_gravity: Option<Decimal>,
    /// Measured final gravity for this batch
    pub final_gravity: Option<Decimal>,
    /// Volume unit in effect for this batch; may differ from the recipe's
    pub volume_units: VolumeUnit,
    /// Measured volume prior to transfer to the fermenter
    pub post_boil_volume: Option<Decimal>,
    /// Measured volume in the fermenter
    pub volume_in_fermenter: Option<Decimal>,
    /// Volume the batch was brewed toward; defaults to the recipe's batch
    /// size when absent
    pub target_post_boil_volume: Option<Decimal>,
}

impl Batch {
    /// Whether this batch was brewed at a different volume than the recipe
    /// was written for.
    ///
    /// A unit mismatch alone counts as scaled even when the numbers match;
    /// 2.5 liters is not 2.5 gallons.
    pub fn uses_scaled_recipe(&self) -> bool {
        match self.target_post_boil_volume {
            Some(target) => {
                target != self.recipe.batch_size || self.volume_units != self.recipe.volume_units
            }
            None => false,
        }
    }

    /// The recipe as this batch actually used it
    pub fn effective_recipe(&self) -> CalcResult<EffectiveRecipe<'_>> {
        if self.uses_scaled_recipe() {
            // target_post_boil_volume is present whenever uses_scaled_recipe
            // returns true
            let target = self.target_post_boil_volume.unwrap_or(self.recipe.batch_size);
            let scaled = scale::scale_recipe(&self.recipe, target, self.volume_units)?;
            return Ok(EffectiveRecipe::Scaled(scaled));
        }
        Ok(EffectiveRecipe::Original(&self.recipe))
    }

    /// The post-boil volume in gallons.
    ///
    /// Falls back to the recipe's batch size when no measurement was
    /// recorded, always converting with this batch's units.
    pub fn post_boil_volume_as_gallons(&self) -> Decimal {
        let volume = match self.post_boil_volume {
            Some(volume) => volume,
            None => {
                tracing::debug!(
                    recipe = %self.recipe.name,
                    "no post-boil volume recorded, assuming the recipe batch size"
                );
                self.recipe.batch_size
            }
        };
        units::to_gallons(volume, self.volume_units)
    }

    /// The fermenter volume in gallons, with the same fallback as
    /// [`Batch::post_boil_volume_as_gallons`]
    pub fn fermenter_volume_as_gallons(&self) -> Decimal {
        let volume = match self.volume_in_fermenter {
            Some(volume) => volume,
            None => {
                tracing::debug!(
                    recipe = %self.recipe.name,
                    "no fermenter volume recorded, assuming the recipe batch size"
                );
                self.recipe.batch_size
            }
        };
        units::to_gallons(volume, self.volume_units)
    }

    /// Estimated color of this batch in SRM.
    ///
    /// Accounts for differences between actual and expected volume. It is
    /// assumed the effective recipe's fermentables were used exactly.
    pub fn color_srm(&self) -> CalcResult<i64> {
        let effective = self.effective_recipe()?;
        color::estimate_srm(
            &effective.as_recipe().fermentables,
            self.post_boil_volume_as_gallons(),
        )
    }

    /// The actual SRM when the final post-boil volume is known, otherwise
    /// the expected SRM for the recipe as written
    pub fn actual_or_expected_srm(&self) -> CalcResult<i64> {
        if self.post_boil_volume.is_some() {
            return self.color_srm();
        }
        self.recipe.color_srm()
    }

    /// ABV from this batch's measured gravity readings
    pub fn abv(&self) -> CalcResult<Decimal> {
        abv::calculate_abv(self.original_gravity, self.final_gravity)
    }
}
