//! Hashtag selection and posting policy.
//!
//! [`HashPoster`] picks the highest ranked trending hashtag that has neither been
//! posted during this run nor been ignored by the operator, and posts the SHA-256
//! of it. History lives in memory only and is lost when the process exits.

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use tokio::time::Instant;

use crate::client::{SocialClient, Trend};
use crate::hashtag::Hashtag;

/// Fixed campaign tag appended to every post.
pub const CAMPAIGN_TAG: &str = "#HashOfHashtag";

/// Formats the status text: digest first, then the original hashtag, then the campaign tag.
pub fn format_post(original: &Hashtag, hashed: &Hashtag) -> String {
    format!("{} {} {}", hashed, original, CAMPAIGN_TAG)
}

/// Record of one successful post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostHistoryEntry {
    pub hashtag: Hashtag,
    pub hashtag_hash: Hashtag,
    pub post_time: DateTime<Utc>,
}

/// Selects, hashes and posts trending hashtags, never repeating one within a run.
pub struct HashPoster<C> {
    client: C,
    last_post: Option<PostHistoryEntry>,
    last_post_at: Option<Instant>,
    post_history: HashMap<String, PostHistoryEntry>,
    ignored_tags: HashSet<String>,
}

impl<C: SocialClient> HashPoster<C> {
    /// Creates a poster around a platform client.
    ///
    /// Ignored tags may be given with or without the `#` marker; both forms are
    /// stored as bare tag text.
    pub fn new(client: C, ignored_tags: Option<Vec<String>>) -> Self {
        let ignored_tags = ignored_tags
            .unwrap_or_default()
            .iter()
            .map(|raw| Hashtag::new(raw).tag().to_string())
            .collect();

        HashPoster {
            client,
            last_post: None,
            last_post_at: None,
            post_history: HashMap::new(),
            ignored_tags,
        }
    }

    /// Fetches trends and returns the fresh hashtags among them, in API rank order.
    ///
    /// Trend names that are not hashtags are dropped, as are tags already posted
    /// this run and ignored tags. Duplicates within one response are kept.
    ///
    /// # Errors
    ///
    /// Propagates any error from the client's trending fetch.
    pub async fn trending_hashtags(
        &self,
    ) -> Result<Vec<Hashtag>, Box<dyn std::error::Error + Send + Sync>> {
        let trends = self.client.fetch_trending().await?;
        debug!("Fetched {} trends", trends.len());

        let hashtags: Vec<Hashtag> = trends
            .iter()
            .filter_map(Self::hashtag_from_trend)
            .filter(|hashtag| {
                !self.post_history.contains_key(hashtag.tag())
                    && !self.ignored_tags.contains(hashtag.tag())
            })
            .collect();

        debug!("{} fresh hashtags among trends", hashtags.len());
        Ok(hashtags)
    }

    /// Returns the highest ranked fresh hashtag, or `None` if every trend is used up.
    pub async fn top_hashtag(
        &self,
    ) -> Result<Option<Hashtag>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.trending_hashtags().await?.into_iter().next())
    }

    /// Posts the hash of a hashtag and records it in history.
    ///
    /// History is only touched after the client reports success, so a failed
    /// post leaves the hashtag eligible for the next attempt.
    ///
    /// # Errors
    ///
    /// Propagates any error from the client's post call.
    pub async fn post_hashtag_hash(
        &mut self,
        hashtag: Hashtag,
    ) -> Result<PostHistoryEntry, Box<dyn std::error::Error + Send + Sync>> {
        let hashtag_hash = Self::hash_hashtag(&hashtag);
        let text = format_post(&hashtag, &hashtag_hash);
        info!("Posting update: {}", text);

        self.client.post_update(&text).await?;

        let entry = PostHistoryEntry {
            hashtag,
            hashtag_hash,
            post_time: Utc::now(),
        };
        self.post_history
            .insert(entry.hashtag.tag().to_string(), entry.clone());
        self.last_post = Some(entry.clone());
        self.last_post_at = Some(Instant::now());
        Ok(entry)
    }

    /// Time elapsed since the last successful post.
    ///
    /// Measured on the monotonic clock, so wall clock adjustments do not shift
    /// the schedule. Before the first post this is [`TimeDelta::MAX`], so the
    /// first post is never delayed.
    pub fn time_since_last_post(&self) -> TimeDelta {
        match self.last_post_at {
            Some(at) => TimeDelta::from_std(at.elapsed()).unwrap_or(TimeDelta::MAX),
            None => TimeDelta::MAX,
        }
    }

    pub fn hash_hashtag(hashtag: &Hashtag) -> Hashtag {
        hashtag.hashed()
    }

    fn hashtag_from_trend(trend: &Trend) -> Option<Hashtag> {
        Hashtag::from_candidate(trend.name.as_deref())
    }

    pub fn last_post(&self) -> Option<&PostHistoryEntry> {
        self.last_post.as_ref()
    }

    pub fn post_history(&self) -> &HashMap<String, PostHistoryEntry> {
        &self.post_history
    }

    pub fn ignored_tags(&self) -> &HashSet<String> {
        &self.ignored_tags
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}
