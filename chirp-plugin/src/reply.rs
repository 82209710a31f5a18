use irc::client::Client;

use crate::Error;

/// The outcome of a plugin handling a [`Request`](crate::Request).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to send.
    #[default]
    None,
    /// A regular message.
    Message(String),
    /// A notice, for output that nobody explicitly asked for.
    Notice(String),
}

impl Reply {
    /// Constructs a regular message reply.
    pub fn message(text: impl Into<String>) -> Reply {
        Reply::Message(text.into())
    }

    /// Constructs a notice reply.
    pub fn notice(text: impl Into<String>) -> Reply {
        Reply::Notice(text.into())
    }

    /// Returns true if there is nothing to send.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Reply::None)
    }

    /// Sends the reply to `target` using the given IRC `client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Irc`] if the message could not be queued.
    pub fn send(&self, client: &Client, target: &str) -> Result<(), Error> {
        match self {
            Reply::None => {}
            Reply::Message(text) => client.send_privmsg(target, text)?,
            Reply::Notice(text) => client.send_notice(target, text)?,
        }

        Ok(())
    }
}
