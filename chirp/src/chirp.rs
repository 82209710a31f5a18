//! The main process for communicating over IRC and dispatching to plugins.

use futures::stream::StreamExt;
use irc::client::prelude::Client;
use irc::proto::Message;
use tracing::{debug, info};

use crate::config::Config;
use crate::{Context, Error, Registry, Reply, Request, http};

/// The IRC bot: owns the connection, the plugins and the context they share.
pub struct Chirp {
    /// The complete configuration loaded from file and environment
    config: Config,
    /// The plugin registry
    registry: Registry,
    /// The shared context for plugins
    context: Context,
}

impl Chirp {
    /// Creates a new bot from the provided configuration.
    ///
    /// This builds the shared HTTP client and initializes the plugins but doesn't connect yet.
    /// Call [`run`](Chirp::run) to start the bot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::HttpClient`] if the shared HTTP client can't be built.
    pub fn new(config: Config) -> Result<Self, Error> {
        let http = http::build_client(&config.http)?;
        let context = Context::new(config.clone(), http);
        let registry = Registry::preloaded(&context);

        Ok(Chirp {
            config,
            registry,
            context,
        })
    }

    /// Connects to IRC and processes messages until the connection closes.
    ///
    /// # Errors
    ///
    /// This function will return an error in the following situations:
    ///
    /// - [`Error::IrcClient`] - if the instantiation of the IRC client fails (e.g. due to
    ///   configuration issues.)
    /// - [`Error::IrcRegistration`] - if user registration fails.
    /// - [`Error::Irc`] - if a protocol or communication error occurred.
    /// - [`Error::Plugin`] - if a plugin fails or its reply can't be delivered.
    pub async fn run(&self) -> Result<(), Error> {
        let mut client = Client::from_config(self.config.irc.clone().into())
            .await
            .map_err(Error::IrcClient)?;

        client.identify().map_err(Error::IrcRegistration)?;

        info!(hostname = %self.config.irc.hostname, "connected");

        let mut stream = client.stream()?;

        while let Some(message) = stream.next().await.transpose()? {
            self.handle_message(&client, &message).await?;
        }

        Ok(())
    }

    /// Dispatches a single IRC message to every plugin and delivers their replies.
    async fn handle_message(&self, client: &Client, message: &Message) -> Result<(), Error> {
        debug!(?message, "processing irc message");

        let Some(request) = Request::from_message(message, &self.config.plugins.command_prefix)
        else {
            return Ok(());
        };

        for reply in self.dispatch(&request).await? {
            reply.send(client, request.reply_target())?;
        }

        Ok(())
    }

    /// Passes `request` to every plugin and returns the replies worth sending, in plugin order.
    ///
    /// Every request goes to [`Plugin::handle_message`](crate::Plugin::handle_message). Commands
    /// go to [`Plugin::handle_command`](crate::Plugin::handle_command) first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Plugin`] if a plugin fails.
    pub async fn dispatch(&self, request: &Request) -> Result<Vec<Reply>, Error> {
        let mut replies = vec![];

        for plugin in &self.registry.plugins {
            if request.is_command() {
                replies.push(plugin.handle_command(&self.context, request).await?);
            }

            replies.push(plugin.handle_message(&self.context, request).await?);
        }

        replies.retain(|reply| !reply.is_none());

        Ok(replies)
    }
}
