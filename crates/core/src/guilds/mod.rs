//! Guild domain models and repository contract.

mod guilds_model;
mod guilds_traits;

pub use guilds_model::*;
pub use guilds_traits::*;
