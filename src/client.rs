//! The capability a platform client must offer to the hash poster.
//!
//! Only two calls are needed: fetch the current trends, and post a status update.
//! [`crate::twitter::TwitterClient`] is the production implementation.

use async_trait::async_trait;
use serde::Deserialize;

/// A trending topic as reported by the platform.
///
/// Only the display name matters here. It may be missing or null in malformed
/// responses, in which case the trend is simply skipped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trend {
    #[serde(default)]
    pub name: Option<String>,
}

impl Trend {
    pub fn named(name: &str) -> Self {
        Trend {
            name: Some(name.to_string()),
        }
    }
}

/// Platform operations used by [`crate::HashPoster`].
///
/// Errors are returned unmodified to the caller; implementations decide on
/// their own transport retries.
#[async_trait]
pub trait SocialClient: Send + Sync {
    /// Fetches the current trending topics, highest ranked first.
    async fn fetch_trending(
        &self,
    ) -> Result<Vec<Trend>, Box<dyn std::error::Error + Send + Sync>>;

    /// Posts a new status update with the given text.
    async fn post_update(
        &self,
        text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
