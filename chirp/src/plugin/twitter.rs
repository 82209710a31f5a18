//! Posting to Twitter from a channel, and expanding links to tweets.
//!
//! Every channel is configured separately through [`Settings`], see [`keys`] for the names of the
//! settings. A channel without `enabled` set can't use any of the commands that talk to the API.

use scraper::Html;
use tracing::{debug, error};
use twitter_client::{Api, Client, Credentials};
use url::Url;

use crate::plugin::prelude::*;
use crate::utils::Truncatable;

mod command;
pub mod reference;

pub use command::{Action, TwitterCommand};
use reference::{Mode, StatusId};

/// The maximum number of characters in a status.
pub const MAX_STATUS_LEN: usize = 280;
/// Appended to statuses that had to be truncated.
const ELLIPSIS: &str = "…";
/// Where profiles and statuses live.
const WEB_URL: &str = "https://twitter.com";

/// Names of the per-channel settings.
pub mod keys {
    /// Whether the channel may use the account.
    pub const ENABLED: &str = "enabled";
    /// The screen name of the channel's account.
    pub const NICKNAME: &str = "nickname";
    /// The application's consumer key.
    pub const CONSUMER_KEY: &str = "consumer_key";
    /// The application's consumer secret.
    pub const CONSUMER_SECRET: &str = "consumer_secret";
    /// The account's access token.
    pub const ACCESS_KEY: &str = "access_key";
    /// The account's access token secret.
    pub const ACCESS_SECRET: &str = "access_secret";
    /// Whether links to tweets posted in the channel are expanded.
    pub const RESOLVE: &str = "resolve";
}

/// Fixed replies.
pub mod messages {
    /// The channel doesn't have `enabled` set.
    pub const DISABLED: &str = "This channel has no Twitter account.";
    /// The argument isn't a link to a tweet or a status id.
    pub const NO_TWEET: &str = "You need to give me a tweet to refer to.";
    /// A favorite, retweet or delete went through.
    pub const ACKNOWLEDGED: &str = "Alright.";
    /// The API call failed.
    pub const FAILED: &str = "That didn't work.";
    /// The command was sent in a private message.
    pub const CHANNEL_ONLY: &str = "This command can only be used in a channel.";
}

/// Creates API handles from a channel's credentials.
pub trait Connect: Send + Sync {
    /// The handle type.
    type Api: Api;

    /// Returns a handle that authenticates with `credentials`.
    fn connect(&self, credentials: Credentials) -> Self::Api;
}

/// Connects to the real API through the bot's shared HTTP client.
pub struct Connector {
    http: reqwest::Client,
    api_url: Url,
}

impl Connector {
    /// Constructs a connector that sends requests through `http` to the API at `api_url`.
    #[must_use]
    pub const fn new(http: reqwest::Client, api_url: Url) -> Connector {
        Connector { http, api_url }
    }
}

impl Connect for Connector {
    type Api = Client;

    fn connect(&self, credentials: Credentials) -> Client {
        Client::with_client(self.http.clone(), credentials).with_base_url(self.api_url.clone())
    }
}

/// The account settings of a single channel.
struct Account {
    enabled: bool,
    nickname: String,
    credentials: Credentials,
}

impl Account {
    fn load(settings: &dyn Settings, channel: &str) -> Account {
        let get = |key| settings.get(channel, key).unwrap_or_default();

        Account {
            enabled: settings.get_bool(channel, keys::ENABLED),
            nickname: get(keys::NICKNAME),
            credentials: Credentials {
                consumer_key: get(keys::CONSUMER_KEY),
                consumer_secret: get(keys::CONSUMER_SECRET),
                access_token: get(keys::ACCESS_KEY),
                access_secret: get(keys::ACCESS_SECRET),
            },
        }
    }

    fn profile_url(&self) -> String {
        format!("{WEB_URL}/{}", self.nickname)
    }

    fn status_url(&self, id: &str) -> String {
        format!("{WEB_URL}/{}/status/{id}", self.nickname)
    }
}

/// The Twitter plugin.
pub struct Twitter<C = Connector> {
    connector: C,
}

impl<C: Connect> Twitter<C> {
    /// Constructs the plugin with a custom way of reaching the API.
    pub const fn with_connector(connector: C) -> Twitter<C> {
        Twitter { connector }
    }

    /// Handles one of the plugin's commands. Commands that belong to other plugins are ignored.
    pub async fn command(&self, settings: &dyn Settings, request: &Request) -> Reply {
        let command = match (TwitterCommand::parse(request), request.is_channel()) {
            (Ok(None), _) => return Reply::None,
            (_, false) => return Reply::message(messages::CHANNEL_ONLY),
            (Ok(Some(command)), true) => command,
            (Err(err), true) => return Reply::message(err.to_string()),
        };

        let account = Account::load(settings, &request.target);

        if !account.enabled {
            return Reply::message(messages::DISABLED);
        }

        debug!(channel = %request.target, ?command, "handling twitter command");

        match command {
            TwitterCommand::Profile => Reply::message(account.profile_url()),
            TwitterCommand::Tweet { text } => self.post(&account, &text, None).await,
            TwitterCommand::Reply { reference, text } => {
                match reference::resolve(&reference, Mode::Anchored) {
                    Some(id) => self.post(&account, &text, Some(&id)).await,
                    None => Reply::message(messages::NO_TWEET),
                }
            }
            TwitterCommand::Act { action, reference } => {
                match reference::resolve(&reference, Mode::Anchored) {
                    Some(id) => self.act(&account, action, &id).await,
                    None => Reply::message(messages::NO_TWEET),
                }
            }
        }
    }

    /// Publishes `text`, optionally as a reply to `in_reply_to`, and replies with its permalink.
    ///
    /// Replies that don't start with a mention are addressed to the author of the status being
    /// replied to.
    async fn post(&self, account: &Account, text: &str, in_reply_to: Option<&StatusId>) -> Reply {
        let api = self.connector.connect(account.credentials.clone());
        let mut text = text.to_string();

        if let Some(id) = in_reply_to
            && !text.starts_with('@')
        {
            match api.show_status(id.as_str()).await {
                Ok(status) => text = format!("@{} {text}", status.user.screen_name),
                Err(err) => return failure("show_status", &err),
            }
        }

        let text = text.truncate_with_suffix(MAX_STATUS_LEN, ELLIPSIS);

        match api
            .update_status(&text, in_reply_to.map(StatusId::as_str))
            .await
        {
            Ok(status) => Reply::message(account.status_url(&status.id_str)),
            Err(err) => failure("update_status", &err),
        }
    }

    async fn act(&self, account: &Account, action: Action, id: &StatusId) -> Reply {
        let api = self.connector.connect(account.credentials.clone());
        let result = match action {
            Action::Favorite => api.create_favorite(id.as_str()).await,
            Action::Retweet => api.retweet(id.as_str()).await,
            Action::Delete => api.destroy_status(id.as_str()).await,
        };

        match result {
            Ok(_) => Reply::message(messages::ACKNOWLEDGED),
            Err(err) => failure(action.command(), &err),
        }
    }

    /// Replies with a notice containing the first tweet linked to in `request`, if the channel
    /// has `resolve` enabled. Commands are expanded too.
    pub async fn expand_links(&self, settings: &dyn Settings, request: &Request) -> Reply {
        if !request.is_channel()
            || !request.text.contains("twitter")
            || !settings.get_bool(&request.target, keys::RESOLVE)
        {
            return Reply::None;
        }

        let Some(id) = reference::resolve(&request.text, Mode::Search) else {
            return Reply::None;
        };

        let account = Account::load(settings, &request.target);
        let api = self.connector.connect(account.credentials);

        match api.show_status(id.as_str()).await {
            Ok(status) => Reply::notice(format!(
                "Tweet from @{}: {}",
                status.user.screen_name,
                clean_text(status.text())
            )),
            Err(err) => {
                log_failure("show_status", &err);

                Reply::None
            }
        }
    }
}

fn log_failure(operation: &str, err: &twitter_client::Error) {
    error!(%operation, ?err, "twitter api request failed");
}

/// Logs a failed API call and returns the reply for it.
fn failure(operation: &str, err: &twitter_client::Error) -> Reply {
    log_failure(operation, err);

    Reply::message(messages::FAILED)
}

/// Decodes HTML entities and puts `text` on a single line.
fn clean_text(text: &str) -> String {
    let text = text
        .replace('\0', "")
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ");
    let decoded: String = Html::parse_fragment(&text)
        .root_element()
        .text()
        .collect();

    decoded.replace(['\0', '\n', '\r'], " ")
}

#[async_trait]
impl Plugin<Context> for Twitter {
    fn new(ctx: &Context) -> Self {
        let connector = Connector::new(ctx.http.clone(), ctx.config.twitter.api_url.clone());

        Twitter::with_connector(connector)
    }

    fn name() -> Name {
        Name::from_static("twitter")
    }

    fn author() -> Author {
        Author::from_static("Mikkel Kroman <mk@maero.dk>")
    }

    fn version() -> Version {
        Version::from_static("0.1.0")
    }

    async fn handle_command(&self, ctx: &Context, request: &Request) -> Result<Reply, PluginError> {
        Ok(self.command(&ctx.settings, request).await)
    }

    async fn handle_message(&self, ctx: &Context, request: &Request) -> Result<Reply, PluginError> {
        Ok(self.expand_links(&ctx.settings, request).await)
    }
}
