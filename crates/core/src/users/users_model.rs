use serde::{Deserialize, Serialize};

/// An account owner as written by the authentication subsystem.
///
/// The reconciliation engine only reads this: the token is consumed as-is and
/// is never refreshed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Display tag shown to the user, e.g. "Jaina#1234".
    pub battle_tag: String,
    /// OAuth bearer token for the remote profile API.
    #[serde(skip_serializing)]
    pub access_token: String,
    /// Region the account authenticated against, e.g. "us" or "eu".
    pub region: String,
}
