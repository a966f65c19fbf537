//! Read-only client for the external creature catalog API.
//!
//! Stateless request/response plumbing: one page request plus a
//! concurrent per-entry detail fan-out for listings, a single request for
//! detail lookups. No retry, no timeout beyond reqwest defaults, no
//! caching; every failure collapses into [`CatalogError::RemoteUnavailable`].

use futures::future::try_join_all;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, error};

use shared::{
    domain::CreatureId,
    protocol::{CreatureDetail, CreaturePage, CreatureSummary},
};

/// Public instance of the catalog API used when nothing is configured.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog api unavailable: {0}")]
    RemoteUnavailable(#[from] reqwest::Error),
}

#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches one page of the catalog, then the full detail document for
    /// every listed entry, concurrently. Results come back in the page's
    /// order regardless of completion order. Any failed request fails the
    /// whole call; there is no partial result.
    pub async fn list_creatures(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<CreatureSummary>, CatalogError> {
        let page = self.fetch_page(limit, offset).await.map_err(|err| {
            error!(limit, offset, %err, "catalog page request failed");
            err
        })?;

        debug!(limit, offset, listed = page.results.len(), "catalog page fetched");

        let details = try_join_all(page.results.iter().map(|item| self.fetch_detail(&item.url)))
            .await
            .map_err(|err| {
                error!(limit, offset, %err, "catalog detail fan-out failed");
                err
            })?;

        Ok(details.into_iter().map(CreatureSummary::from).collect())
    }

    /// Fetches the full detail document for one creature.
    pub async fn get_creature_detail(
        &self,
        creature_id: CreatureId,
    ) -> Result<CreatureDetail, CatalogError> {
        let url = format!("{}/pokemon/{}", self.base_url, creature_id);
        self.fetch_detail(&url).await.map_err(|err| {
            error!(%creature_id, %err, "creature detail request failed");
            err
        })
    }

    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CreaturePage, CatalogError> {
        let page = self
            .http
            .get(format!("{}/pokemon", self.base_url))
            .query(&[("limit", limit), ("offset", offset)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(page)
    }

    async fn fetch_detail(&self, url: &str) -> Result<CreatureDetail, CatalogError> {
        let detail = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(detail)
    }
}

#[cfg(test)]
mod tests;
