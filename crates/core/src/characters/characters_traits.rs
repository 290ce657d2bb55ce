use async_trait::async_trait;

use super::{Character, CharacterUpsert};
use crate::errors::Result;
use crate::reconcile::NaturalKey;

#[async_trait]
pub trait CharacterRepositoryTrait: Send + Sync {
    /// Upsert a batch of characters keyed on (name, realm_slug, region),
    /// returning the number of rows written.
    ///
    /// The batch is atomic; callers must never observe a partial write.
    async fn upsert_characters(&self, characters: Vec<CharacterUpsert>) -> Result<usize>;

    /// All stored characters owned by the given user.
    fn list_by_owner(&self, user_id: &str) -> Result<Vec<Character>>;

    /// Natural keys of all stored characters owned by the given user, in
    /// comparison (lowercased) form.
    fn list_keys_by_owner(&self, user_id: &str) -> Result<Vec<NaturalKey>>;

    /// Delete exactly the row matching (owner, natural key). Returns the
    /// affected row count; 0 means the row was already gone.
    async fn delete_by_owner_and_key(&self, user_id: &str, key: &NaturalKey) -> Result<usize>;
}
