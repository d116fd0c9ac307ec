//! Recipe scaling
//!
//! Produces a volume-adjusted copy of a recipe: batch size moves to the
//! requested target, every ingredient amount is multiplied by the volume
//! ratio, and boil size shifts by the absolute gallon difference. Boil-off
//! and trub losses are treated as roughly volume-independent overhead, which
//! is why boil size is additive while everything else is multiplicative.

use rust_decimal::Decimal;

use crate::brewing::units::{self, VolumeUnit};
use crate::error::{CalcError, CalcResult};
use crate::models::{Recipe, Scalable, ScaledRecipe};

/// Rescale a recipe to a target batch volume.
///
/// The source recipe is untouched; the returned [`ScaledRecipe`] owns fully
/// independent ingredient collections.
pub fn scale_recipe(
    recipe: &Recipe,
    target_volume: Decimal,
    target_unit: VolumeUnit,
) -> CalcResult<ScaledRecipe> {
    let target_gallons = units::to_gallons(target_volume, target_unit);
    let current_gallons = recipe.batch_volume_in_gallons();
    if current_gallons <= Decimal::ZERO {
        return Err(CalcError::InvalidRecipeVolume(current_gallons));
    }
    let scale_factor = target_gallons / current_gallons;
    let volume_difference = target_gallons - current_gallons;

    let mut scaled = recipe.clone();
    scaled.batch_size = target_volume;
    scaled.boil_size = recipe.boil_size + volume_difference;
    scaled.volume_units = target_unit;
    scaled.fermentables = scale_all(&recipe.fermentables, scale_factor)?;
    scaled.hops = scale_all(&recipe.hops, scale_factor)?;
    scaled.yeasts = scale_all(&recipe.yeasts, scale_factor)?;
    scaled.miscellaneous_ingredients =
        scale_all(&recipe.miscellaneous_ingredients, scale_factor)?;

    Ok(ScaledRecipe::new(scaled, scale_factor))
}

fn scale_all<T: Scalable>(items: &[T], factor: Decimal) -> CalcResult<Vec<T>> {
    items.iter().map(|item| item.scaled_by(factor)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_scale_to_double_volume() {
        let recipe = fixtures::porter_recipe();
        let scaled = scale_recipe(
            &recipe,
            recipe.batch_size * Decimal::TWO,
            recipe.volume_units,
        )
        .unwrap();

        assert_eq!(scaled.scale_factor(), Decimal::TWO);
        assert_eq!(scaled.batch_size, recipe.batch_size * Decimal::TWO);
        // boil size tracks the absolute gallon delta, not the ratio:
        // 3.60 + (5.00 - 2.50) = 6.10, not 7.20
        assert_eq!(scaled.boil_size, Decimal::new(610, 2));

        for (original, scaled) in recipe.fermentables.iter().zip(&scaled.fermentables) {
            assert_eq!(
                scaled.amount.amount(),
                original.amount.amount() * Decimal::TWO
            );
            assert_eq!(scaled.amount.unit(), original.amount.unit());
        }
        for (original, scaled) in recipe.hops.iter().zip(&scaled.hops) {
            assert_eq!(
                scaled.amount.amount(),
                original.amount.amount() * Decimal::TWO
            );
        }
        for (original, scaled) in recipe.yeasts.iter().zip(&scaled.yeasts) {
            assert_eq!(
                scaled.amount.unwrap().amount(),
                original.amount.unwrap().amount() * Decimal::TWO
            );
        }
        for (original, scaled) in recipe
            .miscellaneous_ingredients
            .iter()
            .zip(&scaled.miscellaneous_ingredients)
        {
            assert_eq!(
                scaled.amount.unwrap().amount(),
                original.amount.unwrap().amount() * Decimal::TWO
            );
        }
    }

    #[test]
    fn test_scale_leaves_source_recipe_untouched() {
        let recipe = fixtures::porter_recipe();
        let before = recipe.clone();
        let _scaled = scale_recipe(&recipe, Decimal::new(500, 2), VolumeUnit::Gallon).unwrap();
        assert_eq!(recipe, before);
    }

    #[test]
    fn test_scale_to_same_volume_in_other_unit() {
        // 2.5 gallons is 10 quarts; amounts are unchanged but the recipe now
        // reads in the requested unit
        let recipe = fixtures::porter_recipe();
        let scaled = scale_recipe(&recipe, Decimal::new(10, 0), VolumeUnit::Quart).unwrap();
        assert_eq!(scaled.scale_factor(), Decimal::ONE);
        assert_eq!(scaled.batch_size, Decimal::new(10, 0));
        assert_eq!(scaled.volume_units, VolumeUnit::Quart);
        for (original, scaled) in recipe.fermentables.iter().zip(&scaled.fermentables) {
            assert_eq!(scaled.amount.amount(), original.amount.amount());
        }
    }

    #[test]
    fn test_scale_round_trip_restores_amounts() {
        let recipe = fixtures::porter_recipe();
        let doubled = scale_recipe(
            &recipe,
            recipe.batch_size * Decimal::TWO,
            recipe.volume_units,
        )
        .unwrap();
        let back = scale_recipe(&doubled, recipe.batch_size, recipe.volume_units).unwrap();
        for (original, restored) in recipe.fermentables.iter().zip(&back.fermentables) {
            assert_eq!(restored.amount.amount(), original.amount.amount());
        }
        assert_eq!(back.batch_size, recipe.batch_size);
    }

    #[test]
    fn test_scale_copies_profile_fields() {
        let recipe = fixtures::porter_recipe();
        let scaled = scale_recipe(&recipe, Decimal::new(500, 2), VolumeUnit::Gallon).unwrap();
        assert_eq!(scaled.original_gravity, recipe.original_gravity);
        assert_eq!(scaled.final_gravity, recipe.final_gravity);
        assert_eq!(scaled.efficiency, recipe.efficiency);
        assert_eq!(scaled.style, recipe.style);
        assert_eq!(scaled.ibus_tinseth, recipe.ibus_tinseth);
        assert_eq!(scaled.notes, recipe.notes);
        assert_eq!(scaled.boil_time, recipe.boil_time);
    }

    #[test]
    fn test_scale_rejects_zero_volume_recipe() {
        let mut recipe = fixtures::porter_recipe();
        recipe.batch_size = Decimal::ZERO;
        assert_eq!(
            scale_recipe(&recipe, Decimal::new(500, 2), VolumeUnit::Gallon),
            Err(CalcError::InvalidRecipeVolume(Decimal::ZERO))
        );
    }
}
