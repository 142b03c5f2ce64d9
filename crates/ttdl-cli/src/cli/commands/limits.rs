//! Rate-limits command.

use anyhow::Result;
use ttdl_core::config::Config;
use ttdl_core::theme::Theme;

use crate::cli::render;

pub async fn run(theme: &Theme, config: &Config) -> Result<()> {
    let client = super::client(config);
    match client.rate_limits().await {
        Ok(info) => render::print_rate_limits(theme, &info),
        Err(e) => {
            tracing::warn!(error = %e, "rate limit lookup failed");
            render::warn_box(theme, "Rate Limits", "Could not fetch rate limits. Try again later.");
        }
    }
    Ok(())
}
