//! Brewcalc library
//!
//! Recipe scaling and derived stats (SRM color, ABV) for homebrew recipes
//! and batch logs. The crate is a pure calculation engine: it reads plain
//! recipe and batch values, returns new derived values, and never touches
//! storage, pages, or rendering.

pub mod brewing;
pub mod error;
pub mod models;

pub use error::{CalcError, CalcResult};
