//! OAuth 1.0a request signing.
//!
//! See <https://developer.twitter.com/en/docs/authentication/oauth-1-0a/creating-a-signature>.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use hmac::{Hmac, Mac};
use rand::Rng;
use rand::distributions::Alphanumeric;
use sha1::Sha1;
use time::OffsetDateTime;
use url::Url;
use urlencoding::encode;

/// The only signature method we support.
const SIGNATURE_METHOD: &str = "HMAC-SHA1";
/// The protocol version sent with each request.
const OAUTH_VERSION: &str = "1.0";
/// The number of characters in a nonce.
const NONCE_LEN: usize = 32;

/// The consumer (application) and access (user) credentials that requests are signed with.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// The application's consumer key.
    pub consumer_key: String,
    /// The application's consumer secret.
    pub consumer_secret: String,
    /// The user's access token.
    pub access_token: String,
    /// The user's access token secret.
    pub access_secret: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"[REDACTED]")
            .field("access_token", &self.access_token)
            .field("access_secret", &"[REDACTED]")
            .finish()
    }
}

/// Returns the value of the `Authorization` header for a request.
///
/// `params` must contain every query and form parameter that will be sent with the request.
#[must_use]
pub fn authorization_header(
    credentials: &Credentials,
    method: &str,
    url: &Url,
    params: &[(&str, &str)],
) -> String {
    let timestamp = OffsetDateTime::now_utc().unix_timestamp().to_string();

    sign(credentials, method, url, params, &nonce(), &timestamp)
}

/// Returns the `Authorization` header for a request with a fixed `nonce` and `timestamp`.
fn sign(
    credentials: &Credentials,
    method: &str,
    url: &Url,
    params: &[(&str, &str)],
    nonce: &str,
    timestamp: &str,
) -> String {
    let oauth_params = [
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", OAUTH_VERSION),
    ];
    let base = signature_base(method, url, params.iter().chain(oauth_params.iter()));
    let signature = signature(credentials, &base);

    let fields = oauth_params
        .iter()
        .copied()
        .chain([("oauth_signature", signature.as_str())])
        .map(|(key, value)| format!("{}=\"{}\"", encode(key), encode(value)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("OAuth {fields}")
}

/// Builds the signature base string: the method, the base URL and the sorted, encoded parameters.
fn signature_base<'a, I>(method: &str, url: &Url, params: I) -> String
where
    I: Iterator<Item = &'a (&'a str, &'a str)>,
{
    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    let mut encoded = params
        .map(|(key, value)| (encode(key).into_owned(), encode(value).into_owned()))
        .collect::<Vec<_>>();
    encoded.sort();

    let param_string = encoded
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(base_url.as_str()),
        encode(&param_string)
    )
}

/// Computes the base64-encoded HMAC-SHA1 of `base`.
fn signature(credentials: &Credentials, base: &str) -> String {
    let key = format!(
        "{}&{}",
        encode(&credentials.consumer_secret),
        encode(&credentials.access_secret)
    );
    let mut mac =
        Hmac::<Sha1>::new_from_slice(key.as_bytes()).expect("hmac accepts keys of any length");
    mac.update(base.as_bytes());

    BASE64.encode(mac.finalize().into_bytes())
}

/// Returns a random alphanumeric nonce.
fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The worked example from Twitter's "Creating a signature" documentation.
    fn example_credentials() -> Credentials {
        Credentials {
            consumer_key: "xvz1evFS4wEEPTGEFPHBog".to_string(),
            consumer_secret: "kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw".to_string(),
            access_token: "370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb".to_string(),
            access_secret: "LswwdoUaIvS8ltyTt5jkRh4J50vUPVVHtR2YPi5kE".to_string(),
        }
    }

    const EXAMPLE_PARAMS: [(&str, &str); 2] = [
        ("include_entities", "true"),
        (
            "status",
            "Hello Ladies + Gentlemen, a signed OAuth request!",
        ),
    ];
    const EXAMPLE_NONCE: &str = "kYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg";
    const EXAMPLE_TIMESTAMP: &str = "1318622958";

    fn example_url() -> Url {
        Url::parse("https://api.twitter.com/1.1/statuses/update.json?include_entities=true")
            .unwrap()
    }

    #[test]
    fn it_should_build_the_signature_base_string() {
        let credentials = example_credentials();
        let oauth_params = [
            ("oauth_consumer_key", credentials.consumer_key.as_str()),
            ("oauth_nonce", EXAMPLE_NONCE),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", EXAMPLE_TIMESTAMP),
            ("oauth_token", credentials.access_token.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ];
        let base = signature_base(
            "post",
            &example_url(),
            EXAMPLE_PARAMS.iter().chain(oauth_params.iter()),
        );

        assert_eq!(
            base,
            "POST&https%3A%2F%2Fapi.twitter.com%2F1.1%2Fstatuses%2Fupdate.json&include_entities%3Dtrue%26oauth_consumer_key%3Dxvz1evFS4wEEPTGEFPHBog%26oauth_nonce%3DkYjzVBB8Y0ZFabxSWbWovY3uYSQ2pTgmZeNu2VS4cg%26oauth_signature_method%3DHMAC-SHA1%26oauth_timestamp%3D1318622958%26oauth_token%3D370773112-GmHxMAgYyLbNEtIKZeRNFsMKPR9EyMZeS9weJAEb%26oauth_version%3D1.0%26status%3DHello%2520Ladies%2520%252B%2520Gentlemen%252C%2520a%2520signed%2520OAuth%2520request%2521"
        );
    }

    #[test]
    fn it_should_sign_the_documented_example() {
        let header = sign(
            &example_credentials(),
            "POST",
            &example_url(),
            &EXAMPLE_PARAMS,
            EXAMPLE_NONCE,
            EXAMPLE_TIMESTAMP,
        );

        assert!(header.starts_with("OAuth oauth_consumer_key=\"xvz1evFS4wEEPTGEFPHBog\", "));
        assert!(header.ends_with("oauth_signature=\"hCtSmYh%2BiHYCEqBWrE7C7hYmtUk%3D\""));
    }

    #[test]
    fn nonces_are_random_alphanumerics() {
        let (a, b) = (nonce(), nonce());

        assert_eq!(a.len(), NONCE_LEN);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(a, b);
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let output = format!("{:?}", example_credentials());

        assert!(output.contains("xvz1evFS4wEEPTGEFPHBog"));
        assert!(!output.contains("kAcSOqF21Fu85e7zjz7ZN2U4ZRhfV3WpwPAoE3Z7kBw"));
    }
}
