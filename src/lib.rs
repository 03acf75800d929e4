//! # HashOfHashtag Library
//!
//! A Twitter/X bot that, every few minutes, takes the top trending hashtag it has
//! not used yet, computes its SHA-256 and posts
//! `#<sha256> #<hashtag> #HashOfHashtag`.
//!
//! ## Features
//!
//! - [`Hashtag`] value type with `#` marker normalization
//! - [`HashPoster`] selection policy with in-memory post history and an ignore list
//! - Twitter/X v1.1 client with OAuth 1.0a request signing
//! - Elapsed-time driving loop with Ctrl+C shutdown
//! - Structured logging
//!
//! ## Configuration
//!
//! The `run` command needs four OAuth 1.0a credentials, given as flags or through
//! `TWITTER_CONSUMER_KEY`, `TWITTER_CONSUMER_SECRET`, `TWITTER_ACCESS_TOKEN_KEY`
//! and `TWITTER_ACCESS_TOKEN_SECRET`. Log level is controlled by `RUST_LOG`.
//!
//! Post history is never persisted: restarting the bot forgets which hashtags
//! were already used.

pub mod cli;
pub mod client;
pub mod config;
pub mod hashtag;
pub mod oauth;
pub mod poster;
pub mod runner;
pub mod twitter;

// Re-export commonly used types and functions
pub use client::{SocialClient, Trend};
pub use config::{BotSettings, TwitterConfig};
pub use hashtag::Hashtag;
pub use poster::{HashPoster, PostHistoryEntry, CAMPAIGN_TAG};
pub use runner::{run_forever, run_once, run_until, Tick};
pub use twitter::TwitterClient;
