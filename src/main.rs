//! # HashOfHashtag
//!
//! Command line entry point for the bot.
//!
//! ## Usage
//!
//! ```bash
//! hashofhashtag run \
//!     --consumer-key ... --consumer-secret ... \
//!     --access-token-key ... --access-token-secret ... \
//!     --ignore DaftPunk "#Eurovision"
//! ```
//!
//! Log levels can be controlled via the `RUST_LOG` environment variable and
//! default to `info`.

use clap::Parser;
use log::{error, info};

use hashofhashtag::cli::{Cli, Commands, RunArgs};
use hashofhashtag::{run_forever, BotSettings, HashPoster, TwitterClient, TwitterConfig};

/// Builds the client and poster from the `run` arguments and loops until Ctrl+C.
async fn run(args: RunArgs) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = TwitterConfig::from_run_args(&args)?;
    let settings = BotSettings::from_run_args(&args)?;
    let client = TwitterClient::new(config, settings.woeid)?;

    info!("Will ignore tags: {:?}", args.ignore);
    let poster = HashPoster::new(client, Some(args.ignore));

    info!(
        "Posting at most once every {} seconds",
        settings.interval.as_secs()
    );
    run_forever(poster, &settings).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run(args) => run(args).await,
    };

    if let Err(e) = result {
        error!("hashofhashtag stopped: {}", e);
        std::process::exit(1);
    }
}
