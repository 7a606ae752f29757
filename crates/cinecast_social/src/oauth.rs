//! OAuth 1.0a request signing (HMAC-SHA1, user context).
//!
//! Only the pieces needed to sign a request whose body is JSON: body
//! parameters never take part in the signature, query parameters do.

use crate::SocialResult;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cinecast_error::{SocialError, SocialErrorKind};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;
use rand::distributions::Alphanumeric;
use sha1::Sha1;

/// Characters left unescaped by RFC 3986: ALPHA, DIGIT, `-`, `.`, `_`, `~`.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const VERSION: &str = "1.0";

/// Percent-encode a string per RFC 3986.
///
/// # Examples
///
/// ```
/// use cinecast_social::oauth::encode;
///
/// assert_eq!(encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(encode("a-b.c_d~e"), "a-b.c_d~e");
/// ```
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, UNRESERVED).to_string()
}

/// Consumer and access credentials for user-context signing.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthKeys {
    /// Consumer (API) key
    pub consumer_key: String,
    /// Consumer (API) secret
    pub consumer_secret: String,
    /// Access token
    pub token: String,
    /// Access token secret
    pub token_secret: String,
}

impl std::fmt::Debug for OAuthKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthKeys")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("token", &"<redacted>")
            .field("token_secret", &"<redacted>")
            .finish()
    }
}

/// Per-request values that make a signature unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nonce {
    /// Random single-use string
    pub value: String,
    /// Seconds since the Unix epoch
    pub timestamp: i64,
}

impl Nonce {
    /// Fresh nonce stamped with the current time.
    pub fn generate() -> Self {
        let value = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        Self {
            value,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// The `oauth_*` protocol parameters, sorted by name.
fn protocol_params(keys: &OAuthKeys, nonce: &Nonce) -> Vec<(String, String)> {
    vec![
        ("oauth_consumer_key".to_string(), keys.consumer_key.clone()),
        ("oauth_nonce".to_string(), nonce.value.clone()),
        ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
        ("oauth_timestamp".to_string(), nonce.timestamp.to_string()),
        ("oauth_token".to_string(), keys.token.clone()),
        ("oauth_version".to_string(), VERSION.to_string()),
    ]
}

/// Normalized parameter string: encoded pairs sorted by key then value.
pub fn parameter_string(params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();
    encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signature base string: `METHOD&url&params`, each part encoded.
pub fn signature_base(method: &str, url: &str, params: &[(String, String)]) -> String {
    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        encode(url),
        encode(&parameter_string(params))
    )
}

/// Base64 HMAC-SHA1 of the base string under `consumer_secret&token_secret`.
///
/// # Errors
///
/// Returns a `Signing` error if the MAC cannot be keyed.
pub fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> SocialResult<String> {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac = Hmac::<Sha1>::new_from_slice(key.as_bytes())
        .map_err(|e| SocialError::new(SocialErrorKind::Signing(e.to_string())))?;
    mac.update(base.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Build the `Authorization` header value for a request.
///
/// `extra_params` are query or form parameters that take part in the
/// signature; a JSON body contributes none.
///
/// # Errors
///
/// Returns a `Signing` error if the signature cannot be computed.
pub fn authorization_header(
    keys: &OAuthKeys,
    method: &str,
    url: &str,
    extra_params: &[(String, String)],
    nonce: &Nonce,
) -> SocialResult<String> {
    let mut oauth_params = protocol_params(keys, nonce);

    let mut all_params = oauth_params.clone();
    all_params.extend_from_slice(extra_params);
    let base = signature_base(method, url, &all_params);
    let signature = sign(&base, &keys.consumer_secret, &keys.token_secret)?;

    oauth_params.push(("oauth_signature".to_string(), signature));
    oauth_params.sort();

    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("OAuth {fields}"))
}
