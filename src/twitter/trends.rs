//! Trending topics for Twitter API.
//!
//! This module fetches and parses the trends of a location from the
//! v1.1 `trends/place` endpoint.

use log::{debug, info, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::client::Trend;
use crate::config::TwitterConfig;

use super::api::{send_signed_request, API_BASE};

/// One entry of the `trends/place` response array.
#[derive(Debug, Deserialize)]
struct TrendLocation {
    #[serde(default)]
    trends: Vec<Trend>,
}

/// Parses a `trends/place` response body into the trends of its first location.
///
/// The endpoint answers with an array holding one object per requested location,
/// each with a `trends` list already ordered by rank. An empty array yields no trends.
///
/// # Errors
///
/// Returns an error if the body is not the expected JSON shape.
pub fn parse_trends_response(
    body: &str,
) -> Result<Vec<Trend>, Box<dyn std::error::Error + Send + Sync>> {
    let locations: Vec<TrendLocation> = serde_json::from_str(body)?;
    match locations.into_iter().next() {
        Some(location) => Ok(location.trends),
        None => {
            warn!("Trends response contained no locations");
            Ok(Vec::new())
        }
    }
}

/// Fetches current trends for a location.
///
/// # Parameters
///
/// - `http`: Shared HTTP client
/// - `config`: OAuth credentials
/// - `woeid`: Where On Earth ID of the location (1 is worldwide)
pub(crate) async fn fetch_trends(
    http: &Client,
    config: &TwitterConfig,
    woeid: u32,
) -> Result<Vec<Trend>, Box<dyn std::error::Error + Send + Sync>> {
    info!("Fetching trends for WOEID {}", woeid);

    let url = format!("{}/trends/place.json", API_BASE);
    let params = vec![("id".to_string(), woeid.to_string())];
    let request_builder = http.get(&url).query(&params);

    let body = send_signed_request(config, "GET", &url, &params, request_builder, "fetch_trends")
        .await?;
    let trends = parse_trends_response(&body)?;
    debug!("Parsed {} trends", trends.len());
    Ok(trends)
}
