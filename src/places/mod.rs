//! Google Places client: text search for a place id, then a details lookup.

pub mod types;

pub use types::{PlaceDetails, RawPlaceDetails};

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use tracing::{debug, warn};

use crate::settings::Settings;
use types::{DetailsResponse, SearchResponse};

const SEARCH_PATH: &str = "/maps/api/place/findplacefromtext/json";
const DETAILS_PATH: &str = "/maps/api/place/details/json";

/// New York, 50 km around lower Manhattan.
const LOCATION_BIAS: &str = "circle:50000@40.724313,-73.999531";
const DETAILS_FIELDS: &str = "name,place_id,formatted_address,price_level,rating,url,website";

#[async_trait]
pub trait PlaceDirectory: Send + Sync {
    /// Place id of the best candidate for `name`, or `None` on no match.
    async fn search(&self, name: &str) -> Result<Option<String>>;

    /// Details record for `place_id`, or `None` when the directory has no result.
    async fn details(&self, place_id: &str) -> Result<Option<RawPlaceDetails>>;
}

pub struct PlacesClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PlacesClient {
    pub fn new(client: reqwest::Client, settings: &Settings) -> Self {
        Self {
            client,
            base_url: settings.places_base_url.trim_end_matches('/').to_string(),
            api_key: settings.google_api_key.clone(),
        }
    }

    pub fn search_url(&self, name: &str) -> Result<Url> {
        let input = format!("{} restaurant", name);
        let url = Url::parse_with_params(
            &format!("{}{}", self.base_url, SEARCH_PATH),
            &[
                ("input", input.as_str()),
                ("inputtype", "textquery"),
                ("locationbias", LOCATION_BIAS),
                ("key", self.api_key.as_str()),
            ],
        )?;
        Ok(url)
    }

    pub fn details_url(&self, place_id: &str) -> Result<Url> {
        let url = Url::parse_with_params(
            &format!("{}{}", self.base_url, DETAILS_PATH),
            &[
                ("place_id", place_id),
                ("fields", DETAILS_FIELDS),
                ("key", self.api_key.as_str()),
            ],
        )?;
        Ok(url)
    }

    async fn get_json_body(&self, url: Url, what: &str) -> Result<String> {
        // The request URL carries the API key; reqwest errors are stripped of it.
        debug!(endpoint = url.path(), "Querying places API");
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Places {} request failed", what))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("Places {} returned {}: {}", what, status, body);
        }

        resp.text()
            .await
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Failed to read places {} response", what))
    }
}

#[async_trait]
impl PlaceDirectory for PlacesClient {
    async fn search(&self, name: &str) -> Result<Option<String>> {
        let body = self.get_json_body(self.search_url(name)?, "search").await?;
        parse_search(&body)
    }

    async fn details(&self, place_id: &str) -> Result<Option<RawPlaceDetails>> {
        let body = self
            .get_json_body(self.details_url(place_id)?, "details")
            .await?;
        parse_details(&body)
    }
}

pub fn parse_search(body: &str) -> Result<Option<String>> {
    let resp: SearchResponse =
        serde_json::from_str(body).context("Malformed places search response")?;
    log_api_status("search", resp.status.as_deref(), resp.error_message.as_deref());
    Ok(resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.place_id))
}

pub fn parse_details(body: &str) -> Result<Option<RawPlaceDetails>> {
    let resp: DetailsResponse =
        serde_json::from_str(body).context("Malformed places details response")?;
    log_api_status("details", resp.status.as_deref(), resp.error_message.as_deref());
    Ok(resp.result)
}

fn log_api_status(endpoint: &str, status: Option<&str>, error_message: Option<&str>) {
    match status {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some(status) => warn!(
            endpoint,
            status,
            error = error_message.unwrap_or(""),
            "Places API reported an error status"
        ),
    }
}
