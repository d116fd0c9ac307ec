//! Shared test fixtures
//!
//! The canonical porter recipe and batch used across the test modules. The
//! fermentable bill is the one every stored SRM figure was computed from, so
//! the expected values in the color tests are tied to these amounts.

use rust_decimal::Decimal;

use crate::brewing::units::{IngredientUnit, VolumeUnit};
use crate::models::{
    Batch, BatchStatus, Fermentable, FermentableType, Hop, HopForm, HopUseStep, IngredientAmount,
    MiscIngredient, MiscType, MiscUseStep, Recipe, RecipeType, Yeast, YeastType,
};

fn grain(
    name: &str,
    maltster: &str,
    amount: Decimal,
    unit: IngredientUnit,
    color: Decimal,
) -> Fermentable {
    Fermentable {
        name: name.to_string(),
        maltster: maltster.to_string(),
        fermentable_type: FermentableType::Grain,
        amount: IngredientAmount::new(amount, unit).unwrap(),
        color: Some(color),
    }
}

/// A 2.5 gallon English porter
pub(crate) fn porter_recipe() -> Recipe {
    Recipe {
        name: "English Porter".to_string(),
        recipe_type: RecipeType::AllGrain,
        style: Some(1),
        volume_units: VolumeUnit::Gallon,
        batch_size: Decimal::new(250, 2),
        boil_size: Decimal::new(360, 2),
        boil_time: 60,
        efficiency: Some(75),
        boil_gravity: None,
        original_gravity: Decimal::new(1050, 3),
        final_gravity: Decimal::new(1013, 3),
        ibus_tinseth: Decimal::new(2500, 2),
        notes: String::new(),
        fermentables: vec![
            grain(
                "Maris Otter",
                "William Crisp",
                Decimal::new(3600, 3),
                IngredientUnit::Pounds,
                Decimal::new(3000, 3),
            ),
            grain(
                "Crisp Brown Malt",
                "William Crisp",
                Decimal::new(800, 2),
                IngredientUnit::Ounces,
                Decimal::new(85000, 3),
            ),
            grain(
                "Caramel 40",
                "Briess",
                Decimal::new(500, 2),
                IngredientUnit::Ounces,
                Decimal::new(40000, 3),
            ),
            grain(
                "Caramel 80",
                "Briess",
                Decimal::new(300, 2),
                IngredientUnit::Ounces,
                Decimal::new(80000, 3),
            ),
            grain(
                "Chocolate Malt",
                "William Crisp",
                Decimal::new(200, 2),
                IngredientUnit::Ounces,
                Decimal::new(450000, 3),
            ),
            grain(
                "Pale Chocolate Malt",
                "William Crisp",
                Decimal::new(1500, 3),
                IngredientUnit::Ounces,
                Decimal::new(225000, 3),
            ),
        ],
        hops: vec![Hop {
            name: "Fuggles".to_string(),
            alpha_acid_percent: Decimal::new(5000, 3),
            beta_acid_percent: None,
            form: HopForm::Pellet,
            use_step: HopUseStep::Boil,
            use_time: 60,
            amount: IngredientAmount::new(Decimal::new(70, 2), IngredientUnit::Ounces).unwrap(),
        }],
        yeasts: vec![Yeast {
            name: "SafAle S-04".to_string(),
            yeast_type: YeastType::Dry,
            amount: Some(
                IngredientAmount::new(Decimal::new(388, 3), IngredientUnit::Ounces).unwrap(),
            ),
            add_to_secondary: false,
        }],
        miscellaneous_ingredients: vec![MiscIngredient {
            name: "Irish Moss".to_string(),
            misc_type: MiscType::Fining,
            use_step: MiscUseStep::Boil,
            use_time: 15,
            amount: Some(
                IngredientAmount::new(Decimal::new(5, 1), IngredientUnit::Teaspoons).unwrap(),
            ),
            use_for: "Clarity".to_string(),
        }],
    }
}

/// A freshly planned batch of the porter with no measurements yet
pub(crate) fn porter_batch() -> Batch {
    Batch {
        recipe: porter_recipe(),
        status: BatchStatus::Planned,
        brewed_date: None,
        packaged_date: None,
        on_tap_date: None,
        off_tap_date: None,
        original_gravity: None,
        final_gravity: None,
        volume_units: VolumeUnit::Gallon,
        post_boil_volume: None,
        volume_in_fermenter: None,
        target_post_boil_volume: None,
    }
}
