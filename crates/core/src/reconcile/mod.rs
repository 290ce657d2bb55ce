//! Roster reconciliation: identity resolution and the sync engine.

mod identity;
mod reconcile_model;
mod reconcile_service;

pub use identity::*;
pub use reconcile_model::*;
pub use reconcile_service::*;
