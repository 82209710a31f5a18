//! Default values.

use std::time::Duration;

/// The `User-Agent` header to send when issuing HTTP requests.
pub const HTTP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The duration before a HTTP request times out.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// The prefix that marks a message as a command.
pub const DEFAULT_COMMAND_PREFIX: &str = ".";

/// The default IRC port for plain-text connections.
pub const IRC_PORT: u16 = 6667;

/// The default IRC port for TLS connections.
pub const IRC_TLS_PORT: u16 = 6697;
