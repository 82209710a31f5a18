use irc::proto::{Command, Message};

/// The delimiter that wraps CTCP messages.
const CTCP_DELIMITER: char = '\x01';

/// A chat message, in a form plugins can act on without knowing about the IRC protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    /// The channel or nickname the message was sent to.
    pub target: String,
    /// The nickname of the sender.
    pub author: String,
    /// The name of the command without its prefix, or empty if the message is not a command.
    pub command: String,
    /// The whitespace-separated arguments following the command.
    pub args: Vec<String>,
    /// The message text, with any CTCP framing removed.
    pub text: String,
    /// Whether the message is a CTCP `ACTION` (`/me`).
    pub is_action: bool,
}

impl Request {
    /// Builds a request from a `PRIVMSG`.
    ///
    /// Returns `None` for every other kind of message, for messages without a nickname source
    /// and for CTCP requests other than `ACTION`.
    #[must_use]
    pub fn from_message(message: &Message, prefix: &str) -> Option<Request> {
        let Command::PRIVMSG(ref target, ref body) = message.command else {
            return None;
        };
        let author = message.source_nickname()?;

        Request::parse(target, author, body, prefix)
    }

    /// Builds a request from the raw parts of a message.
    ///
    /// Messages starting with `prefix` directly followed by a word are commands. Actions are never
    /// commands.
    #[must_use]
    pub fn parse(target: &str, author: &str, body: &str, prefix: &str) -> Option<Request> {
        let (text, is_action) = match body.strip_prefix(CTCP_DELIMITER) {
            Some(ctcp) => {
                let ctcp = ctcp.strip_suffix(CTCP_DELIMITER).unwrap_or(ctcp);
                let action = ctcp.strip_prefix("ACTION")?;

                if !action.is_empty() && !action.starts_with(' ') {
                    return None;
                }

                (action.trim_start(), true)
            }
            None => (body, false),
        };

        let mut request = Request {
            target: target.to_string(),
            author: author.to_string(),
            text: text.to_string(),
            is_action,
            ..Default::default()
        };

        if !is_action
            && !prefix.is_empty()
            && let Some(line) = text.strip_prefix(prefix)
            && !line.starts_with(char::is_whitespace)
        {
            let mut words = line.split_whitespace();

            if let Some(command) = words.next() {
                request.command = command.to_string();
                request.args = words.map(str::to_string).collect();
            }
        }

        Some(request)
    }

    /// Returns true if the message is a command.
    #[must_use]
    pub fn is_command(&self) -> bool {
        !self.command.is_empty()
    }

    /// Returns true if the message was sent to a channel rather than directly to the bot.
    #[must_use]
    pub fn is_channel(&self) -> bool {
        self.target.starts_with(['#', '&', '+', '!'])
    }

    /// Returns where a reply to this message should go: the channel for channel messages and the
    /// author for private messages.
    #[must_use]
    pub fn reply_target(&self) -> &str {
        if self.is_channel() {
            &self.target
        } else {
            &self.author
        }
    }

    /// Returns the argument at `index`.
    #[must_use]
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    /// Joins the arguments from `index` onwards with single spaces, or returns `None` if there are
    /// none.
    #[must_use]
    pub fn rest(&self, index: usize) -> Option<String> {
        let rest = self.args.get(index..)?;

        (!rest.is_empty()).then(|| rest.join(" "))
    }
}
