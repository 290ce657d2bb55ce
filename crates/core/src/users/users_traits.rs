use async_trait::async_trait;

use super::User;
use crate::errors::Result;

#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Point lookup of a stored user. `Ok(None)` when the id is unknown.
    fn get_user(&self, user_id: &str) -> Result<Option<User>>;

    /// Insert or refresh a user row. Called by the auth subsystem when a
    /// login completes; the engine itself never writes users.
    async fn save_user(&self, user: User) -> Result<User>;
}
