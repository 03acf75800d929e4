//! Twitter/X API integration module.
//!
//! This module contains the concrete [`SocialClient`] used by the bot: trends are
//! read from the v1.1 `trends/place` endpoint and posts are published through
//! `statuses/update`, both signed with OAuth 1.0a user context credentials.

mod api;
mod trends;
mod tweets;

use async_trait::async_trait;
use log::info;
use reqwest::Client;

use crate::client::{SocialClient, Trend};
use crate::config::TwitterConfig;

pub use trends::parse_trends_response;
pub use tweets::{validate_status, MAX_TWEET_CHARS};

#[cfg(test)]
pub(crate) use api::sanitize_for_logging;

/// Twitter/X client holding one HTTP connection pool and one set of credentials
/// for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    http: Client,
    config: TwitterConfig,
    woeid: u32,
}

impl TwitterClient {
    /// Creates a client that reads trends for `woeid` and posts as the account
    /// identified by `config`.
    pub fn new(
        config: TwitterConfig,
        woeid: u32,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        info!("Twitter client ready (trends WOEID {})", woeid);
        Ok(TwitterClient { http, config, woeid })
    }
}

#[async_trait]
impl SocialClient for TwitterClient {
    async fn fetch_trending(
        &self,
    ) -> Result<Vec<Trend>, Box<dyn std::error::Error + Send + Sync>> {
        trends::fetch_trends(&self.http, &self.config, self.woeid).await
    }

    async fn post_update(
        &self,
        text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        tweets::post_status(&self.http, &self.config, text).await?;
        Ok(())
    }
}
