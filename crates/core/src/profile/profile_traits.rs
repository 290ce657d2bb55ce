use async_trait::async_trait;

use super::{RemoteCharacterSummary, RemoteGuildSummary};
use crate::errors::Result;

/// Authenticated access to the remote account-profile service.
///
/// Implementations must be safe to call once per character without assuming
/// any ordering guarantee from the remote service. Retry policy belongs to
/// the transport layer, not to callers of this trait.
#[async_trait]
pub trait ProfileProviderTrait: Send + Sync {
    /// Fetch the current roster of characters on the account the token
    /// belongs to.
    ///
    /// Fails with [`crate::Error::Unauthorized`] when the service rejects the
    /// token and [`crate::Error::Upstream`] on any other non-success status
    /// or transport error.
    async fn fetch_account_roster(
        &self,
        token: &str,
        region: &str,
    ) -> Result<Vec<RemoteCharacterSummary>>;

    /// Fetch guild membership for a single character.
    ///
    /// `Ok(None)` means the service answered and the character has no guild
    /// (including the character profile not being found). Transport or status
    /// errors are returned as `Err`; the caller decides whether that aborts
    /// anything.
    async fn fetch_character_detail(
        &self,
        token: &str,
        region: &str,
        realm_slug: &str,
        name: &str,
    ) -> Result<Option<RemoteGuildSummary>>;
}
