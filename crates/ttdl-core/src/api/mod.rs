//! ClipX API client.

pub mod types;

use anyhow::{Context, Result};
use serde::Deserialize;

use types::{ApiResponse, ContactInfo, RateLimitInfo};

/// Header carrying the unlimited token.
pub const UNLIMITED_HEADER: &str = "X-ClipX-Unlimited";

const IP_API_URL: &str = "https://api.ipify.org?format=json";

/// Cheap pre-check before any request goes out.
pub fn is_tiktok_url(link: &str) -> bool {
    link.to_lowercase().contains("tiktok.com")
}

/// Client for the ClipX worker endpoint.
pub struct ClipxClient {
    http: reqwest::Client,
    base: String,
    token: Option<String>,
}

impl ClipxClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.into(),
            token,
        }
    }

    /// The underlying HTTP client, shared with the media downloader.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn get(&self, query: &[(&str, &str)]) -> reqwest::RequestBuilder {
        let mut builder = self.http.get(&self.base).query(query);
        if let Some(token) = self.token.as_deref() {
            builder = builder.header(UNLIMITED_HEADER, token);
        }
        builder
    }

    /// Fetches metadata for a TikTok link.
    pub async fn fetch(&self, link: &str) -> Result<ApiResponse> {
        tracing::debug!(link, "fetching media metadata");
        let response = self
            .get(&[("url", link), ("format", "true"), ("rate_limit", "true")])
            .send()
            .await
            .context("Error occurred during the request")?;
        response
            .json::<ApiResponse>()
            .await
            .context("Could not decode the API response")
    }

    /// Fetches the current rate limits for this caller.
    pub async fn rate_limits(&self) -> Result<RateLimitInfo> {
        let response = self
            .get(&[("rate_limit", "true")])
            .send()
            .await
            .context("Could not fetch rate limits")?;
        let envelope: ApiResponse = response
            .json()
            .await
            .context("Could not decode the rate-limit response")?;
        Ok(envelope.rate_limit_info().cloned().unwrap_or_default())
    }

    /// Fetches the maintainer contact block. Best effort: failures collapse
    /// to an empty value, matching how the tool treats this data.
    pub async fn contact(&self) -> ContactInfo {
        let result: Result<ApiResponse> = async {
            let response = self.get(&[]).send().await?;
            Ok(response.json().await?)
        }
        .await;
        match result {
            Ok(envelope) => envelope.contact.unwrap_or_default(),
            Err(e) => {
                tracing::debug!(error = %e, "contact info unavailable");
                ContactInfo::default()
            }
        }
    }
}

/// Public IP for the header box. `None` means "Unable to retrieve IP";
/// the caller renders that, never an error.
pub async fn fetch_public_ip(http: &reqwest::Client) -> Option<String> {
    #[derive(Deserialize)]
    struct IpResponse {
        ip: String,
    }

    let response = http.get(IP_API_URL).send().await.ok()?;
    let body: IpResponse = response.json().await.ok()?;
    Some(body.ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiktok_link_check_is_case_insensitive() {
        assert!(is_tiktok_url("https://www.tiktok.com/@u/video/1"));
        assert!(is_tiktok_url("https://VM.TIKTOK.COM/x"));
        assert!(!is_tiktok_url("https://example.com/video"));
        assert!(!is_tiktok_url(""));
    }
}
