//! Five-stage pipeline: list articles → extract name → search place →
//! get details → publish. Each stage maps the previous stage's payload to
//! `Result<_, StageError>`; the first error short-circuits the rest.

use serde::Serialize;
use tracing::{error, info};

use crate::error::{Stage, StageError};
use crate::magazine::{self, PageFetcher};
use crate::notify::{self, Publisher};
use crate::parser;
use crate::places::{PlaceDetails, PlaceDirectory};
use crate::settings::Settings;

/// Outcome reported to the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub success: bool,
}

impl<T> From<&Result<T, StageError>> for RunReport {
    fn from(outcome: &Result<T, StageError>) -> Self {
        RunReport {
            success: outcome.is_ok(),
        }
    }
}

pub struct Pipeline<'a> {
    settings: &'a Settings,
    pages: &'a dyn PageFetcher,
    places: &'a dyn PlaceDirectory,
    publisher: &'a dyn Publisher,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        settings: &'a Settings,
        pages: &'a dyn PageFetcher,
        places: &'a dyn PlaceDirectory,
        publisher: &'a dyn Publisher,
    ) -> Self {
        Self {
            settings,
            pages,
            places,
            publisher,
        }
    }

    /// Run every stage in order and return the published record.
    pub async fn run(&self) -> Result<PlaceDetails, StageError> {
        let outcome = self.run_stages().await;
        match &outcome {
            Ok(details) => info!(
                record = %serde_json::to_string(details).unwrap_or_default(),
                "found a place!"
            ),
            Err(e) => error!(
                stage = e.stage().as_str(),
                error = %e,
                cause = ?std::error::Error::source(e).map(|s| s.to_string()),
                "{}",
                e.diagnostic()
            ),
        }
        outcome
    }

    async fn run_stages(&self) -> Result<PlaceDetails, StageError> {
        let base = &self.settings.magazine_base_url;
        let reference = first_article(self.pages, base).await?;
        let article_url = magazine::article_url(base, &reference);
        let name = restaurant_name(self.pages, &article_url).await?;
        let place_id = search_place(self.places, &name).await?;
        let details = place_details(self.places, &place_id, article_url).await?;
        publish(self.publisher, &self.settings.aws_sns_arn, &details).await?;
        Ok(details)
    }
}

/// Stage 1 without the "pick first" step: every article reference on the
/// listing page.
pub async fn article_references(
    pages: &dyn PageFetcher,
    base_url: &str,
) -> Result<Vec<String>, StageError> {
    let url = magazine::listing_url(base_url);
    let markup = pages
        .fetch(&url)
        .await
        .map_err(|e| StageError::failed(Stage::ListArticles, &url, e))?;
    let references = parser::extract_article_references(&markup);
    info!(url = %url, count = references.len(), "Parsed listing page");
    Ok(references)
}

async fn first_article(pages: &dyn PageFetcher, base_url: &str) -> Result<String, StageError> {
    article_references(pages, base_url)
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| StageError::missing(Stage::ListArticles, magazine::listing_url(base_url)))
}

async fn restaurant_name(pages: &dyn PageFetcher, article_url: &str) -> Result<String, StageError> {
    let markup = pages
        .fetch(article_url)
        .await
        .map_err(|e| StageError::failed(Stage::ExtractName, article_url, e))?;
    let name = parser::extract_restaurant_name(&markup)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| StageError::missing(Stage::ExtractName, article_url))?;
    info!(name = %name, url = article_url, "Found restaurant name");
    Ok(name)
}

async fn search_place(places: &dyn PlaceDirectory, name: &str) -> Result<String, StageError> {
    places
        .search(name)
        .await
        .map_err(|e| StageError::failed(Stage::SearchPlace, name, e))?
        .ok_or_else(|| StageError::missing(Stage::SearchPlace, name))
}

async fn place_details(
    places: &dyn PlaceDirectory,
    place_id: &str,
    source_article_url: String,
) -> Result<PlaceDetails, StageError> {
    let raw = places
        .details(place_id)
        .await
        .map_err(|e| StageError::failed(Stage::GetDetails, place_id, e))?
        .ok_or_else(|| StageError::missing(Stage::GetDetails, place_id))?;
    Ok(raw.into_place_details(source_article_url))
}

async fn publish(
    publisher: &dyn Publisher,
    topic: &str,
    details: &PlaceDetails,
) -> Result<(), StageError> {
    let envelope = notify::format_envelope(topic, details);
    let message_id = publisher
        .publish(&envelope)
        .await
        .map_err(|e| StageError::failed(Stage::Publish, topic, e))?;
    info!(topic, message_id = message_id.as_deref().unwrap_or(""), "Notification sent");
    Ok(())
}
