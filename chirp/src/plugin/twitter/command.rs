//! Parsing of the plugin's commands.

use chirp_plugin::Request;
use thiserror::Error;

/// An action that only needs a tweet reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Favorite (like) the tweet.
    Favorite,
    /// Retweet the tweet.
    Retweet,
    /// Delete the tweet. Only works on the bot's own tweets.
    Delete,
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TwitterCommand {
    /// `.twitter`: link to the channel's account.
    Profile,
    /// `.tweet <text>`
    Tweet {
        /// The text to post.
        text: String,
    },
    /// `.reply <tweet url or id> <text>`
    Reply {
        /// The tweet to reply to, as given by the user.
        reference: String,
        /// The text to post.
        text: String,
    },
    /// `.fav`, `.rt` or `.delete` followed by `<tweet url or id>`
    Act {
        /// What to do with the tweet.
        action: Action,
        /// The tweet, as given by the user.
        reference: String,
    },
}

/// Errors from parsing a command.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A required argument is missing. Holds the usage line.
    #[error("usage: {0}")]
    MissingArguments(&'static str),
}

impl Action {
    /// Returns the name of the command that performs the action.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Action::Favorite => "fav",
            Action::Retweet => "rt",
            Action::Delete => "delete",
        }
    }

    const fn usage(self) -> &'static str {
        match self {
            Action::Favorite => "fav <tweet url or id>",
            Action::Retweet => "rt <tweet url or id>",
            Action::Delete => "delete <tweet url or id>",
        }
    }
}

impl TwitterCommand {
    /// Parses `request` as one of the plugin's commands.
    ///
    /// Returns `Ok(None)` if the command belongs to somebody else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingArguments`] with the usage line if a required argument is missing.
    pub fn parse(request: &Request) -> Result<Option<TwitterCommand>, Error> {
        let command = match request.command.as_str() {
            "twitter" => TwitterCommand::Profile,
            "tweet" => TwitterCommand::Tweet {
                text: request
                    .rest(0)
                    .ok_or(Error::MissingArguments("tweet <text>"))?,
            },
            "reply" => {
                let usage = Error::MissingArguments("reply <tweet url or id> <text>");
                let reference = request.arg(0).ok_or(usage.clone())?.to_string();
                let text = request.rest(1).ok_or(usage)?;

                TwitterCommand::Reply { reference, text }
            }
            "fav" => Self::act(request, Action::Favorite)?,
            "rt" => Self::act(request, Action::Retweet)?,
            "delete" => Self::act(request, Action::Delete)?,
            _ => return Ok(None),
        };

        Ok(Some(command))
    }

    fn act(request: &Request, action: Action) -> Result<TwitterCommand, Error> {
        let reference = request
            .arg(0)
            .ok_or(Error::MissingArguments(action.usage()))?
            .to_string();

        Ok(TwitterCommand::Act { action, reference })
    }
}
