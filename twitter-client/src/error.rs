use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors returned by the API client.
#[derive(Debug, Error)]
pub enum Error {
    /// An endpoint path could not be joined onto the base URL.
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The request could not be sent or its body could not be read.
    #[error("request error: {0}")]
    Request(#[source] reqwest::Error),
    /// The API responded with a non-success status.
    #[error("api returned {status}: {}", describe(.errors))]
    Api {
        /// The HTTP status of the response.
        status: StatusCode,
        /// The errors listed in the response body, if it had any.
        errors: Vec<ApiError>,
    },
    /// The response body was not the expected JSON.
    #[error("could not decode response: {0}")]
    Decode(#[source] serde_path_to_error::Error<serde_json::Error>),
}

/// A single entry of the `errors` list the API returns with failed requests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// The Twitter error code, e.g. `144` for "No status found with that ID".
    pub code: u32,
    /// A human-readable description.
    pub message: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<ApiError>,
}

impl Error {
    /// Builds an [`Error::Api`] from a failed response, keeping whatever errors the body lists.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Error {
        let errors = serde_json::from_str::<ErrorResponse>(body)
            .map(|response| response.errors)
            .unwrap_or_default();

        Error::Api { status, errors }
    }
}

fn describe(errors: &[ApiError]) -> String {
    if errors.is_empty() {
        return String::from("no details");
    }

    errors
        .iter()
        .map(|e| format!("{} (code {})", e.message, e.code))
        .collect::<Vec<_>>()
        .join(", ")
}
