//! Per-channel plugin settings.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use chirp_plugin::Settings;
use serde::{Deserialize, Serialize};

use crate::config::TwitterConfig;

/// A single configured value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    /// `true` or `false`.
    Bool(bool),
    /// A whole number.
    Integer(i64),
    /// Anything else.
    String(String),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{value}"),
            SettingValue::Integer(value) => write!(f, "{value}"),
            SettingValue::String(value) => f.write_str(value),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

/// Settings with plugin-wide defaults and per-channel overrides.
///
/// Channel names are compared using the RFC 1459 case mapping.
#[derive(Debug, Default, Clone)]
pub struct ChannelSettings {
    defaults: BTreeMap<String, String>,
    channels: HashMap<String, BTreeMap<String, String>>,
}

impl ChannelSettings {
    /// Constructs empty settings.
    #[must_use]
    pub fn new() -> ChannelSettings {
        ChannelSettings::default()
    }

    /// Sets `key` for every channel that doesn't override it.
    pub fn set_default(&mut self, key: &str, value: impl Into<SettingValue>) {
        self.defaults.insert(key.to_string(), value.into().to_string());
    }

    /// Sets `key` for `channel`.
    pub fn set(&mut self, channel: &str, key: &str, value: impl Into<SettingValue>) {
        self.channels
            .entry(casefold(channel))
            .or_default()
            .insert(key.to_string(), value.into().to_string());
    }
}

impl From<&TwitterConfig> for ChannelSettings {
    fn from(config: &TwitterConfig) -> Self {
        let mut settings = ChannelSettings::new();

        for (key, value) in &config.defaults {
            settings.set_default(key, value.clone());
        }

        for (channel, values) in &config.channels {
            for (key, value) in values {
                settings.set(channel, key, value.clone());
            }
        }

        settings
    }
}

impl Settings for ChannelSettings {
    fn get(&self, channel: &str, key: &str) -> Option<String> {
        self.channels
            .get(&casefold(channel))
            .and_then(|values| values.get(key))
            .or_else(|| self.defaults.get(key))
            .cloned()
    }
}

/// Lowercases a channel name using the RFC 1459 case mapping, where `[]\~` are the uppercase
/// forms of `{}|^`.
fn casefold(channel: &str) -> String {
    channel
        .chars()
        .map(|c| match c {
            '[' => '{',
            ']' => '}',
            '\\' => '|',
            '~' => '^',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}
