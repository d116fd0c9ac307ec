//! Data models
//!
//! Plain value types for recipes, batches, and their ingredients. These are
//! read from and handed back to the layer that owns persistence and display;
//! nothing in here touches storage.

mod amount;
mod batch;
mod fermentable;
mod hop;
mod misc_ingredient;
mod recipe;
mod yeast;

#[cfg(test)]
pub(crate) mod fixtures;

pub use amount::{IngredientAmount, Scalable};
pub use batch::{Batch, BatchStatus, EffectiveRecipe};
pub use fermentable::{Fermentable, FermentableType};
pub use hop::{Hop, HopForm, HopUseStep};
pub use misc_ingredient::{MiscIngredient, MiscType, MiscUseStep};
pub use recipe::{Recipe, RecipeType, ScaledRecipe};
pub use yeast::{Yeast, YeastType};
