//! An asynchronous client for the Twitter REST API.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{Api, Credentials, Error, Status, oauth};

/// The base URL of the v1.1 API.
pub const BASE_URL: &str = "https://api.twitter.com/1.1/";

/// A Twitter API client acting on behalf of a single account.
#[derive(Debug, Clone)]
pub struct Client {
    /// The base URL that endpoint paths are resolved against.
    base_url: Url,
    /// The underlying [`reqwest::Client`] used for making HTTP requests.
    client: reqwest::Client,
    /// The credentials requests are signed with.
    credentials: Credentials,
}

impl Client {
    /// Constructs a `Client` using a pre-configured `reqwest::Client`.
    ///
    /// This lets many short-lived API clients share one connection pool.
    #[must_use]
    pub fn with_client(client: reqwest::Client, credentials: Credentials) -> Client {
        let base_url = Url::parse(BASE_URL).expect("BASE_URL is a valid url");

        Client {
            base_url,
            client,
            credentials,
        }
    }

    /// Replaces the base URL that endpoint paths are resolved against.
    #[must_use]
    pub fn with_base_url(mut self, mut base_url: Url) -> Client {
        // Relative joins drop the last path segment unless it ends with a slash.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        self.base_url = base_url;
        self
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends a signed request to the endpoint at `path` and decodes the JSON response.
    ///
    /// Parameters are sent in the query string for `GET` requests and as a form body otherwise.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = self.base_url.join(path)?;
        let authorization =
            oauth::authorization_header(&self.credentials, method.as_str(), &url, params);

        #[cfg(feature = "log")]
        tracing::debug!(%method, %url, "sending twitter api request");

        let request = if method == Method::GET {
            self.client.get(url).query(params)
        } else {
            self.client.request(method, url).form(params)
        };
        let response = request
            .header(AUTHORIZATION, authorization)
            .send()
            .await
            .map_err(Error::Request)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::Request)?;

        if !status.is_success() {
            return Err(Error::from_response(status, &body));
        }

        let deserializer = &mut serde_json::Deserializer::from_str(&body);

        serde_path_to_error::deserialize(deserializer).map_err(Error::Decode)
    }
}

#[async_trait]
impl Api for Client {
    async fn show_status(&self, id: &str) -> Result<Status, Error> {
        let params = [("id", id), ("tweet_mode", "extended")];

        self.request(Method::GET, "statuses/show.json", &params).await
    }

    async fn update_status(&self, text: &str, in_reply_to: Option<&str>) -> Result<Status, Error> {
        let mut params = vec![("status", text)];

        if let Some(id) = in_reply_to {
            params.push(("in_reply_to_status_id", id));
        }

        self.request(Method::POST, "statuses/update.json", &params)
            .await
    }

    async fn create_favorite(&self, id: &str) -> Result<Status, Error> {
        self.request(Method::POST, "favorites/create.json", &[("id", id)])
            .await
    }

    async fn retweet(&self, id: &str) -> Result<Status, Error> {
        let path = format!("statuses/retweet/{}.json", urlencoding::encode(id));

        self.request(Method::POST, &path, &[]).await
    }

    async fn destroy_status(&self, id: &str) -> Result<Status, Error> {
        let path = format!("statuses/destroy/{}.json", urlencoding::encode(id));

        self.request(Method::POST, &path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_default_to_the_public_api() {
        let client = Client::with_client(reqwest::Client::new(), Credentials::default());

        assert_eq!(client.base_url().as_str(), BASE_URL);
    }

    #[test]
    fn it_should_append_a_trailing_slash_to_base_urls() {
        let client = Client::with_client(reqwest::Client::new(), Credentials::default())
            .with_base_url(Url::parse("http://localhost:8080/1.1").unwrap());

        assert_eq!(
            client.base_url().join("statuses/show.json").unwrap().as_str(),
            "http://localhost:8080/1.1/statuses/show.json"
        );
    }
}
