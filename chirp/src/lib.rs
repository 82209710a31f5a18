//! An IRC bot that lets channel operators post to Twitter and expands links to tweets.

pub mod config;
pub mod consts;
mod context;
mod error;
pub mod http;
pub mod plugin;
pub mod settings;
pub mod tracing;
pub mod utils;
mod chirp;

pub use chirp::Chirp;
pub use chirp_plugin::{Reply, Request, Settings};
pub use config::Config;
pub use context::Context;
pub use error::Error;
pub use plugin::{Plugin, Registry};
