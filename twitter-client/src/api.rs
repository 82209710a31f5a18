use async_trait::async_trait;

use crate::{Error, Status};

/// The operations the bot performs against the Twitter API.
///
/// [`Client`](crate::Client) is the real implementation.
#[async_trait]
pub trait Api: Send + Sync {
    /// Fetches the status with the given `id`.
    async fn show_status(&self, id: &str) -> Result<Status, Error>;

    /// Publishes a new status, optionally as a reply to the status `in_reply_to`.
    async fn update_status(&self, text: &str, in_reply_to: Option<&str>) -> Result<Status, Error>;

    /// Favorites the status with the given `id`.
    async fn create_favorite(&self, id: &str) -> Result<Status, Error>;

    /// Retweets the status with the given `id`.
    async fn retweet(&self, id: &str) -> Result<Status, Error>;

    /// Deletes the status with the given `id`. The status must belong to the authenticated user.
    async fn destroy_status(&self, id: &str) -> Result<Status, Error>;
}
