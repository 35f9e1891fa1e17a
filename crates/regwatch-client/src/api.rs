//! REST client for the regulatory intelligence backend.

use std::sync::Arc;

use regwatch_core::{Regulation, ScrapeJob, ScrapeRequest, normalize};
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::error::{FetchError, ScrapeError};
use crate::http::{HttpClient, ReqwestHttpClient};

/// Feed routes probed in order. The public route is a fallback for
/// deployments where the authenticated route is not exposed.
pub const REGULATION_ROUTES: &[&str] = &["/api/v1/regulations", "/api/v1/public/regulations"];

/// Job-creation endpoint.
pub const SCRAPE_ROUTE: &str = "/api/v1/scrape";

/// AI analysis endpoint. The backend accepts a `{query}` body here but
/// no client call is wired up yet.
pub const ANALYZE_ROUTE: &str = "/api/v1/analyze";

/// Authenticated client for the backend's read and job-trigger endpoints.
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        let http = Arc::new(ReqwestHttpClient::new(config.timeout()));
        Self { http, config }
    }

    /// Build a client over a custom transport.
    pub fn with_http(http: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self { http, config }
    }

    /// Fetch the regulation feed.
    ///
    /// Candidate routes are tried in order; probing stops at the first
    /// 2xx and moves on only on a non-success status or a transport
    /// fault. A 2xx body that decodes to an unrecognized shape yields
    /// the empty list, not an error. Both routes failing yields the
    /// last error seen.
    pub async fn list_regulations(&self) -> Result<Vec<Regulation>, FetchError> {
        let base = self
            .config
            .base_url()
            .ok_or(FetchError::ConfigurationMissing)?;

        let mut last_err = None;
        for route in REGULATION_ROUTES {
            let url = format!("{base}{route}");
            info!(url = %url, "fetching regulations");
            match self.http.get(&url, self.config.api_token()).await {
                Ok(resp) if is_success(resp.status) => {
                    let records = decode_feed(&resp.body);
                    info!(count = records.len(), "fetched regulations");
                    return Ok(records);
                }
                Ok(resp) => {
                    warn!(url = %url, status = resp.status, "feed route returned non-success");
                    last_err = Some(FetchError::Server {
                        status: resp.status,
                        body: resp.body,
                    });
                }
                Err(err) => {
                    warn!(url = %url, error = %err, "feed route unreachable");
                    last_err = Some(err.into());
                }
            }
        }
        Err(last_err.unwrap_or(FetchError::ConfigurationMissing))
    }

    /// Start a scraping job.
    ///
    /// Fire-and-forget: the backend returns a job id and nothing about
    /// completion is observable from this client.
    pub async fn start_scrape(&self, req: &ScrapeRequest) -> Result<ScrapeJob, ScrapeError> {
        let base = self
            .config
            .base_url()
            .ok_or(ScrapeError::ConfigurationMissing)?;
        let url = format!("{base}{SCRAPE_ROUTE}");

        info!(url = %url, target = %req.url, jurisdiction = %req.jurisdiction, "starting scrape job");
        let body = serde_json::to_value(req)?;
        let resp = self
            .http
            .post_json(&url, self.config.api_token(), body)
            .await?;
        if !is_success(resp.status) {
            return Err(ScrapeError::Server {
                status: resp.status,
                body: resp.body,
            });
        }

        let job: ScrapeJob = serde_json::from_str(&resp.body)?;
        info!(job_id = %job.job_id, "scrape job created");
        Ok(job)
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a feed body, degrading anything undecodable to the empty list.
fn decode_feed(body: &str) -> Vec<Regulation> {
    match serde_json::from_str(body) {
        Ok(payload) => normalize(payload),
        Err(err) => {
            warn!(error = %err, "feed body is not JSON, treating as empty");
            Vec::new()
        }
    }
}
