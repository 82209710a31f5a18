use std::collections::HashMap;

/// Per-channel key-value configuration owned by the host.
///
/// Plugins receive this capability from the host instead of reaching for global state.
pub trait Settings: Send + Sync {
    /// Returns the value of `key` in `channel`, if set.
    fn get(&self, channel: &str, key: &str) -> Option<String>;

    /// Returns the value of `key` in `channel` interpreted as a flag. Unset keys are `false`.
    fn get_bool(&self, channel: &str, key: &str) -> bool {
        self.get(channel, key)
            .is_some_and(|value| matches!(value.as_str(), "true" | "on" | "yes" | "1"))
    }
}

/// Settings backed by a map keyed on `(channel, key)`.
impl Settings for HashMap<(String, String), String> {
    fn get(&self, channel: &str, key: &str) -> Option<String> {
        self.get(&(channel.to_string(), key.to_string())).cloned()
    }
}
