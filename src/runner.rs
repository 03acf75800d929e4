//! Driving loop for the bot.
//!
//! This module replaces a fixed cron schedule with an elapsed-time check: each
//! step asks the poster how long ago it last posted, and only looks for a fresh
//! hashtag once the posting interval has passed.

use chrono::TimeDelta;
use log::{error, info};
use std::future::Future;
use std::time::Duration;

use crate::client::SocialClient;
use crate::config::BotSettings;
use crate::poster::{HashPoster, PostHistoryEntry};

/// Outcome of a single loop step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Not due yet; holds the time left until the interval has passed.
    Waiting(Duration),
    /// Due, but every trending hashtag has been posted or ignored.
    NoFreshHashtag,
    /// A hashtag hash was posted.
    Posted(PostHistoryEntry),
}

/// Performs one step of the posting loop without sleeping.
///
/// # Errors
///
/// Client errors from fetching trends or posting are returned unchanged.
pub async fn run_once<C: SocialClient>(
    poster: &mut HashPoster<C>,
    interval: Duration,
) -> Result<Tick, Box<dyn std::error::Error + Send + Sync>> {
    let interval_delta = TimeDelta::from_std(interval)?;
    let since = poster.time_since_last_post();
    if since < interval_delta {
        let remaining = (interval_delta - since)
            .to_std()
            .unwrap_or(Duration::ZERO)
            .min(interval);
        return Ok(Tick::Waiting(remaining));
    }

    info!("Getting top hashtag...");
    let top_hashtag = match poster.top_hashtag().await? {
        Some(hashtag) => hashtag,
        None => {
            info!("No fresh hashtags.");
            return Ok(Tick::NoFreshHashtag);
        }
    };

    info!("Posting hashtag \"{}\"...", top_hashtag);
    let entry = poster.post_hashtag_hash(top_hashtag).await?;
    info!("Done.");
    Ok(Tick::Posted(entry))
}

/// Runs the posting loop until Ctrl+C is received.
///
/// See [`run_until`] for the sleeping and error behavior.
///
/// # Errors
///
/// Only fails if the shutdown signal handler cannot be installed.
pub async fn run_forever<C: SocialClient>(
    mut poster: HashPoster<C>,
    settings: &BotSettings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    run_until(&mut poster, settings, tokio::signal::ctrl_c()).await
}

/// Runs the posting loop until `shutdown` resolves.
///
/// Sleeps for the remaining interval while waiting, and for the full interval
/// when no hashtag is fresh or the client reported an error. Client errors are
/// logged and the loop carries on. Shutdown is honored while sleeping and while
/// a client call is in flight; an interrupted call records nothing.
///
/// # Errors
///
/// Only fails if `shutdown` itself resolves to an error.
pub async fn run_until<C, F>(
    poster: &mut HashPoster<C>,
    settings: &BotSettings,
    shutdown: F,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    C: SocialClient,
    F: Future<Output = std::io::Result<()>>,
{
    tokio::pin!(shutdown);

    loop {
        let step = tokio::select! {
            step = run_once(poster, settings.interval) => Some(step),
            signal = &mut shutdown => {
                signal?;
                None
            }
        };
        let Some(step) = step else {
            return stopped(poster);
        };

        let pause = match step {
            Ok(Tick::Waiting(remaining)) => remaining,
            Ok(Tick::NoFreshHashtag) => settings.interval,
            Ok(Tick::Posted(_)) => continue,
            Err(e) => {
                error!("Posting step failed: {}", e);
                settings.interval
            }
        };

        info!("Going to sleep for {} seconds.", pause.as_secs_f64());
        tokio::select! {
            _ = tokio::time::sleep(pause) => {}
            signal = &mut shutdown => {
                signal?;
                return stopped(poster);
            }
        }
    }
}

fn stopped<C: SocialClient>(
    poster: &HashPoster<C>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(
        "Received shutdown signal, stopping after {} posts",
        poster.post_history().len()
    );
    Ok(())
}
