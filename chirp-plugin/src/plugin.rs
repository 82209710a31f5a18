use async_trait::async_trait;

use crate::{Author, Error, Name, Reply, Request, Version};

/// The base trait that all plugins must implement.
///
/// `C` is the context the host shares with its plugins.
#[async_trait]
pub trait Plugin<C = ()>: Send + Sync {
    /// The constructor for a new plugin.
    fn new(_ctx: &C) -> Self
    where
        Self: Sized;

    /// Returns the name of the plugin.
    fn name() -> Name
    where
        Self: Sized;

    /// Returns the author of the plugin.
    fn author() -> Author
    where
        Self: Sized;

    /// Returns the version of the plugin.
    fn version() -> Version
    where
        Self: Sized;

    /// Handles a command addressed to the bot, such as `.tweet hello world`.
    ///
    /// Plugins return [`Reply::None`] for commands they don't recognize.
    async fn handle_command(&self, _ctx: &C, _request: &Request) -> Result<Reply, Error> {
        Ok(Reply::None)
    }

    /// Handles every message, commands included. Commands are passed to
    /// [`handle_command`](Plugin::handle_command) first.
    async fn handle_message(&self, _ctx: &C, _request: &Request) -> Result<Reply, Error> {
        Ok(Reply::None)
    }
}
