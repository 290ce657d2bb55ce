//! Character domain models and repository contract.

mod characters_model;
mod characters_traits;

pub use characters_model::*;
pub use characters_traits::*;
