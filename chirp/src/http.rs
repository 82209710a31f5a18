//! HTTP features

/// Builders for the HTTP client shared by all plugins.
pub mod client {
    use reqwest::redirect::Policy;

    use crate::config::HttpConfig;

    pub use reqwest::Client;

    /// Returns an HTTP client builder configured from `config`.
    #[must_use]
    pub fn builder(config: &HttpConfig) -> reqwest::ClientBuilder {
        reqwest::ClientBuilder::new()
            .redirect(Policy::none())
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
    }
}

/// Builds the shared HTTP client.
///
/// # Errors
///
/// Returns [`Error::HttpClient`](crate::Error::HttpClient) if the TLS backend can't be
/// initialized.
pub fn build_client(config: &crate::config::HttpConfig) -> Result<client::Client, crate::Error> {
    client::builder(config)
        .build()
        .map_err(crate::Error::HttpClient)
}
