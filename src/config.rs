//! Configuration module for the hashofhashtag bot.
//!
//! This module contains the credential and scheduling structures built from the
//! command line, along with validation and masked logging of secrets.

use chrono::TimeDelta;
use log::{debug, error, info, warn};
use std::fmt;
use std::time::Duration;

use crate::cli::RunArgs;

/// Default time between posts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Yahoo! "Where On Earth" identifier for worldwide trends.
pub const WORLDWIDE_WOEID: u32 = 1;

/// OAuth 1.0a credentials for the Twitter/X API.
///
/// All four values come from the app's "Keys and tokens" page in the Twitter
/// Developer Portal and are required for every request.
#[derive(Clone)]
pub struct TwitterConfig {
    /// The API key identifying the app
    pub consumer_key: String,
    /// The API key secret used to sign requests
    pub consumer_secret: String,
    /// The access token identifying the posting account
    pub access_token_key: String,
    /// The access token secret used to sign requests
    pub access_token_secret: String,
}

impl TwitterConfig {
    /// Builds and validates the credentials.
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If every credential is non-empty
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: Naming the first empty credential
    ///
    /// # Example
    ///
    /// ```rust
    /// use hashofhashtag::TwitterConfig;
    ///
    /// let config = TwitterConfig::new("ck", "cs", "at", "ats").unwrap();
    /// assert_eq!(config.consumer_key, "ck");
    /// assert!(TwitterConfig::new("", "cs", "at", "ats").is_err());
    /// ```
    pub fn new(
        consumer_key: &str,
        consumer_secret: &str,
        access_token_key: &str,
        access_token_secret: &str,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading Twitter credentials");

        let fields = [
            ("consumer-key", consumer_key),
            ("consumer-secret", consumer_secret),
            ("access-token-key", access_token_key),
            ("access-token-secret", access_token_secret),
        ];
        for (name, value) in fields {
            let value = value.trim();
            if value.is_empty() {
                error!("Credential --{} is empty", name);
                return Err(format!("Credential --{} cannot be empty", name).into());
            }
            if value.len() < 10 {
                warn!(
                    "Credential --{} seems unusually short ({} characters)",
                    name,
                    value.len()
                );
            }
            debug!("{} (masked): {}", name, mask_secret(value));
        }

        info!("Twitter credentials loaded successfully");
        Ok(TwitterConfig {
            consumer_key: consumer_key.trim().to_string(),
            consumer_secret: consumer_secret.trim().to_string(),
            access_token_key: access_token_key.trim().to_string(),
            access_token_secret: access_token_secret.trim().to_string(),
        })
    }

    pub fn from_run_args(
        args: &RunArgs,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Self::new(
            &args.consumer_key,
            &args.consumer_secret,
            &args.access_token_key,
            &args.access_token_secret,
        )
    }
}

impl fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterConfig")
            .field("consumer_key", &mask_secret(&self.consumer_key))
            .field("consumer_secret", &mask_secret(&self.consumer_secret))
            .field("access_token_key", &mask_secret(&self.access_token_key))
            .field("access_token_secret", &mask_secret(&self.access_token_secret))
            .finish()
    }
}

/// How often to post, and which trends to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotSettings {
    /// Minimum time between two posts
    pub interval: Duration,
    /// Location whose trends are read
    pub woeid: u32,
}

impl Default for BotSettings {
    fn default() -> Self {
        BotSettings {
            interval: DEFAULT_INTERVAL,
            woeid: WORLDWIDE_WOEID,
        }
    }
}

impl BotSettings {
    /// Builds the schedule from the `run` arguments.
    ///
    /// # Errors
    ///
    /// Rejects an interval of zero, and one too large to compare against the
    /// time since the last post.
    pub fn from_run_args(
        args: &RunArgs,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        if args.interval_secs == 0 {
            return Err("--interval-secs must be greater than zero".into());
        }
        let interval = Duration::from_secs(args.interval_secs);
        if TimeDelta::from_std(interval).is_err() {
            error!("--interval-secs {} is out of range", args.interval_secs);
            return Err(format!(
                "--interval-secs {} is too large to schedule",
                args.interval_secs
            )
            .into());
        }
        Ok(BotSettings {
            interval,
            woeid: args.woeid,
        })
    }
}

/// Masks a secret for logging, keeping at most the first and last 4 characters.
///
/// Secrets of 8 characters or fewer are fully masked.
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();
    if len <= 8 {
        return "*".repeat(len);
    }
    let prefix: String = chars[..4].iter().collect();
    let suffix: String = chars[len - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}
