//! PokeAPI client
//!
//! This module fetches resources from PokeAPI and decodes them into our data
//! structures. Every request goes through the response cache first: a hit skips
//! the network entirely, and a successful response is stored under its URL.

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::{LocationArea, LocationAreaPage, Pokemon};
use crate::cache::Cache;

/// Base URL for PokeAPI v2
pub const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when fetching from PokeAPI
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The resource does not exist
    #[error("Not found: {url}")]
    NotFound { url: String },

    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status { status: StatusCode, url: String },

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for PokeAPI that consults a response cache before the network
#[derive(Debug)]
pub struct PokeApiClient {
    http_client: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client against the public PokeAPI
    pub fn new(cache: Cache) -> Self {
        Self::with_base_url(cache, POKEAPI_BASE_URL)
    }

    /// Creates a client against a custom base URL (mirrors, mock servers)
    pub fn with_base_url(cache: Cache, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: Client::new(),
            base_url,
            cache,
        }
    }

    /// The response cache backing this client
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Consumes the client, returning its cache
    pub fn into_cache(self) -> Cache {
        self.cache
    }

    /// URL of the first location-area page
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// URL of a single location area
    pub fn location_area_url(&self, name: &str) -> String {
        format!("{}/location-area/{}", self.base_url, name)
    }

    /// URL of a single pokemon
    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    /// Fetches the raw body at `url`, from the cache when possible
    ///
    /// # Returns
    /// * `Ok(Bytes)` - The cached or freshly fetched body
    /// * `Err(ApiError)` - If the request fails or the status is not a success.
    ///   Failed responses are never cached.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, ApiError> {
        if let Some(body) = self.cache.get(url) {
            tracing::debug!(url, "using cached data");
            return Ok(body);
        }

        tracing::debug!(url, "cache miss, requesting");
        let response = self.http_client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                url: url.to_string(),
            });
        }
        if !status.is_success() {
            tracing::warn!(url, %status, "request failed");
            return Err(ApiError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a page of location areas
    ///
    /// # Arguments
    /// * `page_url` - A `next`/`previous` link from an earlier page, or `None` for the first page
    pub async fn list_location_areas(
        &self,
        page_url: Option<&str>,
    ) -> Result<LocationAreaPage, ApiError> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => self.location_areas_url(),
        };
        self.fetch_json(&url).await
    }

    /// Fetches a single location area by name
    pub async fn get_location_area(&self, name: &str) -> Result<LocationArea, ApiError> {
        self.fetch_json(&self.location_area_url(name)).await
    }

    /// Fetches a single pokemon by name
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        self.fetch_json(&self.pokemon_url(name)).await
    }
}
