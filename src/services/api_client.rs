// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// GET against disease.sh. No retry, no pagination. Successful bodies go
// through the in-memory cache so sibling views share one fetch.
// ============================================================================

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;
use crate::config::CONFIG;
use super::cache_service;
use super::endpoints::Endpoint;
use super::error::FetchError;

/// disease.sh client
#[derive(Clone)]
pub struct DiseaseApiClient {
    base_url: String,
    cache_ttl: chrono::Duration,
}

impl DiseaseApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base_url.clone(),
            cache_ttl: CONFIG.cache_ttl(),
        }
    }

    /// GET + decode one endpoint. `signal` aborts the request when the
    /// owning view unmounts.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        signal: Option<&AbortSignal>,
    ) -> Result<T, FetchError> {
        if let Some(body) = cache_service::cached_body(endpoint, self.cache_ttl) {
            log::debug!("💾 Cache hit: {}", endpoint.path());
            return Ok(serde_json::from_str(&body)?);
        }

        let url = endpoint.url(&self.base_url);
        log::info!("🌐 GET {}", url);

        let response = Request::get(&url)
            .abort_signal(signal)
            .send()
            .await?;

        if !response.ok() {
            return Err(FetchError::Http {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let body = response.text().await?;
        let data = serde_json::from_str::<T>(&body)?;

        // Only bodies that decoded are worth keeping
        cache_service::store_body(endpoint, body);
        log::info!("✅ {} loaded", endpoint.path());

        Ok(data)
    }
}

impl Default for DiseaseApiClient {
    fn default() -> Self {
        Self::new()
    }
}
