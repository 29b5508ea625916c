use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub place_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailsResponse {
    pub result: Option<RawPlaceDetails>,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

/// The `result` object of a details response, restricted to the fields the
/// details request asks for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawPlaceDetails {
    pub name: String,
    pub place_id: String,
    #[serde(default)]
    pub formatted_address: String,
    pub price_level: Option<u8>,
    pub rating: Option<f64>,
    pub url: Option<String>,
    pub website: Option<String>,
}

/// A fully resolved place plus the article it was recommended in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceDetails {
    pub name: String,
    pub place_id: String,
    pub formatted_address: String,
    pub price_level: Option<u8>,
    pub rating: Option<f64>,
    pub maps_url: Option<String>,
    pub website: Option<String>,
    pub source_article_url: String,
}

impl RawPlaceDetails {
    /// Renames `url` to `maps_url` and attaches provenance.
    pub fn into_place_details(self, source_article_url: String) -> PlaceDetails {
        PlaceDetails {
            name: self.name,
            place_id: self.place_id,
            formatted_address: self.formatted_address,
            price_level: self.price_level,
            rating: self.rating,
            maps_url: self.url,
            website: self.website,
            source_article_url,
        }
    }
}
