//! Plugin interface between the chirp host and its plugins.
//!
//! The host turns IRC messages into [`Request`]s, hands them to every registered [`Plugin`] and
//! delivers whatever [`Reply`] comes back. Per-channel configuration is exposed to plugins through
//! the [`Settings`] capability.

mod error;
mod plugin;
mod reply;
mod request;
mod settings;
mod types;

pub use error::Error;
pub use plugin::Plugin;
pub use reply::Reply;
pub use request::Request;
pub use settings::Settings;
pub use types::{Author, Name, Version};
