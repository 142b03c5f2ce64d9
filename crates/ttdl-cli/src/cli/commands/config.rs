//! Config command handlers.

use std::path::Path;

use anyhow::{Context, Result};
use ttdl_core::config;
use ttdl_core::theme::Theme;

use crate::cli::render;

pub fn path() -> Result<()> {
    println!("{}", config::paths::config_path().display());
    Ok(())
}

pub fn init() -> Result<()> {
    let config_path = config::paths::config_path();
    config::Config::init_at(&config_path)
        .with_context(|| format!("init config at {}", config_path.display()))?;
    println!("Created config at {}", config_path.display());
    Ok(())
}

pub fn set_dir(theme: &Theme, path: &str) -> Result<()> {
    let dir = Path::new(path);
    if !dir.is_dir() {
        render::warn_box(theme, "Error", "Invalid path. Directory does not exist");
        return Ok(());
    }
    config::ensure_writable_dir(dir)?;
    config::Config::save_download_dir_to(&config::paths::config_path(), path)?;
    render::dir_set_box(theme, path);
    Ok(())
}
