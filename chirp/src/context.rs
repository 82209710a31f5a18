use crate::Config;
use crate::settings::ChannelSettings;

/// Shared context for plugin invocations.
pub struct Context {
    /// The bot configuration.
    pub config: Config,
    /// The HTTP client shared by plugins.
    pub http: reqwest::Client,
    /// Per-channel settings for the Twitter plugin.
    pub settings: ChannelSettings,
}

impl Context {
    /// Creates a new context.
    #[must_use]
    pub fn new(config: Config, http: reqwest::Client) -> Self {
        let settings = ChannelSettings::from(&config.twitter);

        Self {
            config,
            http,
            settings,
        }
    }
}
