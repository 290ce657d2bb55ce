//! Static reference data (classes, races, realms) and its one-shot import.

mod reference_model;
mod reference_service;
mod reference_traits;

pub use reference_model::*;
pub use reference_service::*;
pub use reference_traits::*;
