//! Fetch command: metadata lookup and the info boxes.

use anyhow::Result;
use ttdl_core::api::{self, ClipxClient};
use ttdl_core::api::types::ApiResponse;
use ttdl_core::config::Config;
use ttdl_core::theme::Theme;

use crate::cli::render;

/// Validates the link, fetches metadata, and prints the info boxes.
///
/// Returns `None` for every caller-facing rejection (empty link, non-TikTok
/// link, missing media); the boxes already told the user why.
pub async fn fetch_and_show(
    theme: &Theme,
    client: &ClipxClient,
    link: &str,
) -> Result<Option<ApiResponse>> {
    if link.is_empty() {
        render::error_box(theme, "TikTok link is empty. Please enter a valid link.");
        return Ok(None);
    }
    if !api::is_tiktok_url(link) {
        render::error_box(theme, "Invalid TikTok link \u{1f517}");
        return Ok(None);
    }

    let resp = client.fetch(link).await?;
    let Some(data) = resp.data.as_ref() else {
        render::invalid_link_box(theme);
        return Ok(None);
    };
    if !resp.success || data.title.trim().is_empty() {
        render::invalid_link_box(theme);
        return Ok(None);
    }
    render::print_media_info(theme, data);
    render::print_api_info(theme, &resp);
    if let Some(limits) = resp.rate_limit_info() {
        render::print_rate_limits(theme, limits);
    }

    let has_media = data.video.is_some()
        || data.images.as_ref().is_some_and(|urls| !urls.is_empty());
    if !has_media {
        render::invalid_link_box(theme);
        return Ok(None);
    }
    Ok(Some(resp))
}

pub async fn run(theme: &Theme, config: &Config, url: &str) -> Result<()> {
    let client = super::client(config);
    fetch_and_show(theme, &client, url).await?;
    Ok(())
}
