//! Error types

use miette::Diagnostic;
use thiserror::Error;

/// Application errors for IRC, HTTP, and plugin operations.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Failed to create the IRC client.
    #[error("Could not create IRC client")]
    #[diagnostic(code(chirp::irc_client))]
    IrcClient(#[source] irc::error::Error),
    /// Failed to register with the IRC server.
    #[error("Could not send registration details for IRC")]
    #[diagnostic(code(chirp::irc_registration))]
    IrcRegistration(#[source] irc::error::Error),
    /// General IRC communication error.
    #[error("IRC error")]
    Irc(#[from] irc::error::Error),
    /// Failed to build the shared HTTP client.
    #[error("Could not build HTTP client")]
    #[diagnostic(code(chirp::http_client))]
    HttpClient(#[source] reqwest::Error),
    /// A plugin failed to handle a message.
    #[error("Plugin error: {0}")]
    Plugin(#[from] chirp_plugin::Error),
}
