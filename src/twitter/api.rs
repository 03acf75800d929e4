//! Core Twitter API utilities.
//!
//! This module contains low-level helpers for sending OAuth 1.0a signed requests
//! to the Twitter API and reading their responses.

use log::{debug, error, info};

use crate::config::TwitterConfig;
use crate::oauth::{build_oauth1_header, OAuthParams};

/// Base URL of the Twitter v1.1 REST API.
pub(crate) const API_BASE: &str = "https://api.twitter.com/1.1";

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum length in characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let truncated: String = sanitized.chars().take(max_len).collect();
        format!(
            "{}... [truncated, {} total bytes]",
            truncated,
            text.len()
        )
    } else {
        sanitized
    }
}

/// Signs and sends a request, returning the body of a successful response.
///
/// `params` must list every query and form parameter carried by `request_builder`
/// so they are covered by the signature.
///
/// # Parameters
///
/// - `config`: OAuth credentials
/// - `method`: HTTP method used by `request_builder`
/// - `url`: Request URL without query string
/// - `params`: Query or form parameters of the request
/// - `request_builder`: A configured reqwest::RequestBuilder ready to send
/// - `operation_name`: Human-readable name for the operation (for logging)
///
/// # Returns
///
/// - `Ok(String)`: The API response body on success
/// - `Err(Box<dyn std::error::Error + Send + Sync>)`: On network failure or a non-2xx status
pub(crate) async fn send_signed_request(
    config: &TwitterConfig,
    method: &str,
    url: &str,
    params: &[(String, String)],
    request_builder: reqwest::RequestBuilder,
    operation_name: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    info!("Making signed request for operation: {}", operation_name);

    let auth_header = build_oauth1_header(method, url, params, config, &OAuthParams::generate())?;
    debug!("Request headers: Authorization: OAuth [REDACTED]");

    let response = request_builder
        .header(reqwest::header::AUTHORIZATION, auth_header)
        .send()
        .await?;

    let status = response.status();
    info!(
        "Received response with status: {} for operation: {}",
        status, operation_name
    );

    let response_text = response.text().await?;
    if status.is_success() {
        debug!(
            "Response summary for '{}': {} bytes received",
            operation_name,
            response_text.len()
        );
        return Ok(response_text);
    }

    error!("Operation '{}' failed - Status: {}", operation_name, status);
    debug!(
        "Error response for '{}': {}",
        operation_name,
        sanitize_for_logging(&response_text, 200)
    );
    Err(format!(
        "Twitter API error for operation '{}' ({}): {}",
        operation_name,
        status,
        sanitize_for_logging(&response_text, 200)
    )
    .into())
}
