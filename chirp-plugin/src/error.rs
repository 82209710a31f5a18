use thiserror::Error;

/// An error that occurred during plugin activity.
#[derive(Error, Debug)]
pub enum Error {
    /// Delivering a reply over IRC failed.
    #[error("IRC error: {0}")]
    Irc(#[from] irc::error::Error),
}
