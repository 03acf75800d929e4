//! Tweet operations for Twitter API.
//!
//! This module contains the status update call used to publish posts.

use log::{debug, info};
use reqwest::Client;

use crate::config::TwitterConfig;

use super::api::{sanitize_for_logging, send_signed_request, API_BASE};

/// Twitter's limit on status length, in characters.
pub const MAX_TWEET_CHARS: usize = 280;

/// Checks a status against the platform length limit.
///
/// # Errors
///
/// Returns an error for empty text or text longer than [`MAX_TWEET_CHARS`].
pub fn validate_status(text: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let length = text.chars().count();
    if length == 0 {
        return Err("Tweet text cannot be empty".into());
    }
    if length > MAX_TWEET_CHARS {
        return Err(format!(
            "Tweet is too long: {} characters (max {})",
            length, MAX_TWEET_CHARS
        )
        .into());
    }
    Ok(())
}

/// Posts a status update using the v1.1 `statuses/update` endpoint.
///
/// # Parameters
///
/// - `http`: Shared HTTP client
/// - `config`: OAuth credentials of the posting account
/// - `text`: The text content of the tweet to post
///
/// # Returns
///
/// - `Ok(String)`: The API response body on successful tweet posting
/// - `Err(Box<dyn std::error::Error + Send + Sync>)`: If the text is invalid, or on network or API error
///
/// # Errors
///
/// This function can fail for several reasons:
/// - Invalid or revoked credentials
/// - Network connectivity issues
/// - Twitter API rate limiting or duplicate status rejection
/// - Invalid tweet content (too long, etc.)
pub(crate) async fn post_status(
    http: &Client,
    config: &TwitterConfig,
    text: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    info!(
        "Starting tweet post operation for text: '{}'",
        sanitize_for_logging(text, 100)
    );
    validate_status(text)?;

    let url = format!("{}/statuses/update.json", API_BASE);
    let params = vec![("status".to_string(), text.to_string())];
    debug!("Tweet length: {} characters", text.chars().count());

    let request_builder = http.post(&url).form(&params);

    send_signed_request(config, "POST", &url, &params, request_builder, "post_status").await
}
