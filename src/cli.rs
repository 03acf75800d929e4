//! Command line definitions for the `hashofhashtag` binary.

use clap::{Args, Parser, Subcommand};

use crate::config::WORLDWIDE_WOEID;

/// Post the SHA-256 of the top trending hashtag to Twitter/X.
#[derive(Parser, Debug)]
#[command(name = "hashofhashtag", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run until interrupted.
    ///
    /// While running, a post is made every 5 minutes using the top hashtag from
    /// the trending API. The same hashtag will not be used more than once during
    /// a session, but this history is not saved between executions.
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Hashtags to ignore completely. "DaftPunk" and "#DaftPunk" are equal.
    #[arg(long, num_args = 0..)]
    pub ignore: Vec<String>,

    #[arg(
        long,
        env = "TWITTER_CONSUMER_KEY",
        hide_env_values = true,
        help_heading = "Auth Credentials"
    )]
    pub consumer_key: String,

    #[arg(
        long,
        env = "TWITTER_CONSUMER_SECRET",
        hide_env_values = true,
        help_heading = "Auth Credentials"
    )]
    pub consumer_secret: String,

    #[arg(
        long,
        env = "TWITTER_ACCESS_TOKEN_KEY",
        hide_env_values = true,
        help_heading = "Auth Credentials"
    )]
    pub access_token_key: String,

    #[arg(
        long,
        env = "TWITTER_ACCESS_TOKEN_SECRET",
        hide_env_values = true,
        help_heading = "Auth Credentials"
    )]
    pub access_token_secret: String,

    /// Seconds between posts.
    #[arg(long, default_value_t = 300)]
    pub interval_secs: u64,

    /// Where On Earth ID of the trends location (1 is worldwide).
    #[arg(long, default_value_t = WORLDWIDE_WOEID)]
    pub woeid: u32,
}
