//! Remote profile API contract and the flat summary shapes it produces.

mod profile_model;
mod profile_traits;

pub use profile_model::*;
pub use profile_traits::*;
