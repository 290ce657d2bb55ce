use serde::{Deserialize, Serialize};

/// Outcome of one reconciliation run. Never persisted.
///
/// Reports only the character count; guild counts and per-item warnings are
/// log detail, not part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileSummary {
    pub user_id: String,
    pub battle_tag: String,
    pub characters_synced: usize,
}
