//! Configuration loaded from the config file and the environment.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::consts;
use crate::settings::SettingValue;

/// The complete bot configuration.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    /// IRC client configuration
    pub irc: IrcConfig,
    /// Tracing configuration
    #[serde(default)]
    pub tracing: TracingConfig,
    /// HTTP client configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Plugin host configuration
    #[serde(default)]
    pub plugins: PluginsConfig,
    /// Twitter plugin configuration
    #[serde(default)]
    pub twitter: TwitterConfig,
}

/// Logging and trace export.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TracingConfig {
    /// Enable exporting traces over OTLP
    #[serde(default)]
    pub enabled: bool,
    /// Log JSON lines instead of human-readable output
    #[serde(default = "default_true")]
    pub json: bool,
}

/// The HTTP client shared by plugins.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Maximum duration of a request, e.g. `30s`
    #[serde(default = "default_http_timeout", with = "humantime_serde")]
    pub timeout: Duration,
    /// The `User-Agent` header to send
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// How messages are handed to plugins.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PluginsConfig {
    /// The prefix that marks a message as a command
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
}

/// Twitter plugin configuration.
///
/// Every key can be set for all channels in `defaults` and overridden for a single channel in
/// `channels`:
///
/// ```toml
/// [twitter.defaults]
/// resolve = true
///
/// [twitter.channels."#chirp"]
/// enabled = true
/// nickname = "chirpbot"
/// consumer_key = "..."
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TwitterConfig {
    /// The base URL of the REST API
    #[serde(default = "default_twitter_api_url")]
    pub api_url: Url,
    /// Settings that apply to every channel
    #[serde(default)]
    pub defaults: BTreeMap<String, SettingValue>,
    /// Settings for specific channels
    #[serde(default)]
    pub channels: HashMap<String, BTreeMap<String, SettingValue>>,
}

/// A channel to join.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct IrcChannelConfig {
    /// The shared key to access the channel.
    pub key: Option<String>,
}

/// TLS settings for the IRC connection.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct IrcTlsConfig {
    /// Enable TLS.
    pub enabled: bool,
}

/// The IRC connection.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct IrcConfig {
    /// The client's nickname.
    pub nickname: String,
    /// Alternative nicknames for the client, if the default is taken.
    #[serde(default)]
    pub alt_nicks: Vec<String>,
    /// The client's username.
    pub username: Option<String>,
    /// The client's real name.
    pub realname: Option<String>,
    /// The hostname of the server to connect to.
    pub hostname: String,
    /// The password to connect to the server.
    pub password: Option<String>,
    /// The port number of the server to connect to.
    pub port: Option<u16>,
    /// TLS configuration.
    pub tls: Option<IrcTlsConfig>,
    /// List of channels to automatically join.
    #[serde(default)]
    pub channels: HashMap<String, Option<IrcChannelConfig>>,
}

impl IrcConfig {
    /// Returns the configured port, or the default port for plain or TLS connections.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port.unwrap_or_else(|| self.fallback_port())
    }

    /// Return the port number to use based on whether the connection requires TLS or not.
    fn fallback_port(&self) -> u16 {
        if self.tls.as_ref().is_some_and(|tls| tls.enabled) {
            consts::IRC_TLS_PORT
        } else {
            consts::IRC_PORT
        }
    }
}

impl From<IrcConfig> for irc::client::data::Config {
    fn from(config: IrcConfig) -> Self {
        let port = config.port();
        let use_tls = config.tls.map(|x| x.enabled);
        let channel_keys = config
            .channels
            .iter()
            .filter_map(|(name, channel)| {
                let key = channel.as_ref()?.key.clone()?;

                Some((name.clone(), key))
            })
            .collect();
        let channels = config.channels.into_keys().collect();

        irc::client::data::Config {
            nickname: Some(config.nickname),
            username: config.username,
            realname: config.realname,
            password: config.password,
            server: Some(config.hostname),
            port: Some(port),
            use_tls,
            channels,
            channel_keys,
            alt_nicks: config.alt_nicks,
            ..Default::default()
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        TracingConfig {
            enabled: false,
            json: default_true(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        HttpConfig {
            timeout: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for PluginsConfig {
    fn default() -> Self {
        PluginsConfig {
            command_prefix: default_command_prefix(),
        }
    }
}

impl Default for TwitterConfig {
    fn default() -> Self {
        TwitterConfig {
            api_url: default_twitter_api_url(),
            defaults: BTreeMap::new(),
            channels: HashMap::new(),
        }
    }
}

const fn default_true() -> bool {
    true
}

/// The default request timeout.
#[must_use]
pub const fn default_http_timeout() -> Duration {
    consts::HTTP_TIMEOUT
}

/// The default `User-Agent` header.
#[must_use]
pub fn default_user_agent() -> String {
    consts::HTTP_USER_AGENT.to_string()
}

/// The default command prefix.
#[must_use]
pub fn default_command_prefix() -> String {
    consts::DEFAULT_COMMAND_PREFIX.to_string()
}

/// The public Twitter API.
#[must_use]
pub fn default_twitter_api_url() -> Url {
    Url::parse(twitter_client::client::BASE_URL).expect("BASE_URL is a valid url")
}
