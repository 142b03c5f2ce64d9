//! Command handlers.

pub mod about;
pub mod config;
pub mod download;
pub mod fetch;
pub mod limits;
pub mod token;

use ttdl_core::api::ClipxClient;
use ttdl_core::config::Config;
use ttdl_core::token as token_file;

/// An API client carrying the unlimited token when one is set.
pub fn client(config: &Config) -> ClipxClient {
    let status = token_file::read();
    let token = status.token().map(str::to_string);
    ClipxClient::new(config.api_base.clone(), token)
}
