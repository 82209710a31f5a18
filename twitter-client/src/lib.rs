//! A small client for the Twitter REST API (v1.1).
//!
//! Requests are signed with OAuth 1.0a using credentials that were issued out of band; the
//! authorization flow itself is not implemented.

// Allow repetition of structure name instead of replacing with self as the output from
// rust-analyzer becomes more readable
#![allow(clippy::use_self)]

mod api;
pub mod client;
mod error;
pub mod oauth;
pub mod types;

pub use api::Api;
pub use client::Client;
pub use error::{ApiError, Error};
pub use oauth::Credentials;
pub use types::{Status, User};
