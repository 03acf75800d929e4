//! OAuth 1.0a request signing for the Twitter/X API.
//!
//! This module builds the `Authorization` header for user-context requests signed
//! with HMAC-SHA1, as required by the v1.1 trends and status endpoints.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use rand::{distributions::Alphanumeric, Rng};
use sha1::Sha1;

use crate::config::TwitterConfig;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";

/// Per-request values that make each signature unique.
#[derive(Debug, Clone)]
pub struct OAuthParams {
    pub nonce: String,
    pub timestamp: i64,
}

impl OAuthParams {
    /// A fresh 32-character alphanumeric nonce and the current Unix time.
    pub fn generate() -> Self {
        let nonce = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        OAuthParams {
            nonce,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Percent-encodes a value per RFC 3986, leaving only `A-Z a-z 0-9 - . _ ~` as is.
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Builds the signature base string from the method, base URL and all request
/// parameters (query, form body and `oauth_*`).
///
/// Parameters are encoded first and then sorted by key, then by value.
pub fn signature_base_string(method: &str, base_url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let parameter_string = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(base_url),
        percent_encode(&parameter_string)
    )
}

/// Signs a base string with HMAC-SHA1 and returns the base64 signature.
///
/// # Errors
///
/// Fails only if the HMAC key is rejected, which HMAC-SHA1 never does in practice.
pub fn sign(
    base_string: &str,
    consumer_secret: &str,
    token_secret: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| format!("Invalid HMAC key: {}", e))?;
    mac.update(base_string.as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Builds the OAuth 1.0a `Authorization` header value for one request.
///
/// # Parameters
///
/// - `method`: HTTP method, e.g. `"GET"`
/// - `base_url`: URL without query string
/// - `request_params`: Query and form parameters sent with the request
/// - `config`: The four OAuth credentials
/// - `oauth`: Nonce and timestamp for this request
///
/// # Format
///
/// ```text
/// OAuth oauth_consumer_key="...", oauth_nonce="...", oauth_signature="...", ...
/// ```
pub fn build_oauth1_header(
    method: &str,
    base_url: &str,
    request_params: &[(String, String)],
    config: &TwitterConfig,
    oauth: &OAuthParams,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let mut oauth_fields: Vec<(String, String)> = vec![
        ("oauth_consumer_key".to_string(), config.consumer_key.clone()),
        ("oauth_nonce".to_string(), oauth.nonce.clone()),
        ("oauth_signature_method".to_string(), SIGNATURE_METHOD.to_string()),
        ("oauth_timestamp".to_string(), oauth.timestamp.to_string()),
        ("oauth_token".to_string(), config.access_token_key.clone()),
        ("oauth_version".to_string(), OAUTH_VERSION.to_string()),
    ];

    let mut all_params = oauth_fields.clone();
    all_params.extend_from_slice(request_params);
    let base_string = signature_base_string(method, base_url, &all_params);
    let signature = sign(
        &base_string,
        &config.consumer_secret,
        &config.access_token_secret,
    )?;

    oauth_fields.push(("oauth_signature".to_string(), signature));
    oauth_fields.sort();

    let header = oauth_fields
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    Ok(format!("OAuth {}", header))
}
