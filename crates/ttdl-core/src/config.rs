//! Configuration management for ttdl.
//!
//! Loads configuration from ${TTDL_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Default ClipX API endpoint.
pub const DEFAULT_API_BASE: &str = "https://clipx.zamdev.workers.dev";

/// Preferred download location when running inside Termux on Android.
const ANDROID_DOWNLOAD_DIR: &str = "/sdcard/DCIM/TTDL";
const TERMUX_HOME: &str = "/data/data/com.termux/files/home";

pub mod paths {
    //! Path resolution for ttdl configuration and data files.
    //!
    //! TTDL_HOME resolution order:
    //! 1. TTDL_HOME environment variable (if set)
    //! 2. ~/.config/ttdl (default)

    use std::path::PathBuf;

    /// Returns the ttdl home directory.
    pub fn ttdl_home() -> PathBuf {
        if let Ok(home) = std::env::var("TTDL_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("ttdl"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        ttdl_home().join("config.toml")
    }

    /// Returns the path of the log file the CLI appends to.
    pub fn log_path() -> PathBuf {
        ttdl_home().join("ttdl.log")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory media is saved into. Falls back to a platform default
    /// when unset or no longer existing.
    pub download_dir: Option<String>,

    /// Base URL of the ClipX API.
    pub api_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            download_dir: None,
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Where a resolved download directory came from.
#[derive(Debug, Clone)]
pub struct DownloadDir {
    pub path: PathBuf,
    /// True when config.toml named a directory that no longer exists and the
    /// default was used instead.
    pub stale_config: bool,
}

fn default_config_template() -> &'static str {
    "\
# ttdl configuration
# Where downloaded media is stored. Unset means the platform default
# (current directory, or /sdcard/DCIM/TTDL inside Termux).
# download_dir = \"/path/to/downloads\"

# ClipX API endpoint.
# api_base = \"https://clipx.zamdev.workers.dev\"
"
}

impl Config {
    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a fresh config file from the commented template.
    /// Fails if one already exists.
    pub fn init_at(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }
        write_config(path, default_config_template())
    }

    /// Saves only the download_dir field, preserving other fields and
    /// comments via toml_edit. Creates the file from the template if absent.
    pub fn save_download_dir_to(path: &Path, dir: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        doc["download_dir"] = value(dir);

        write_config(path, &doc.to_string())
    }

    /// Resolves the directory downloads go into.
    ///
    /// The configured directory wins while it still exists; otherwise the
    /// platform default is used and the staleness is reported so the UI can
    /// warn about it.
    pub fn resolve_download_dir(&self) -> DownloadDir {
        if let Some(configured) = self.download_dir.as_deref() {
            let path = PathBuf::from(configured);
            if path.exists() {
                return DownloadDir {
                    path,
                    stale_config: false,
                };
            }
            return DownloadDir {
                path: default_download_base(),
                stale_config: true,
            };
        }
        DownloadDir {
            path: default_download_base(),
            stale_config: false,
        }
    }
}

fn write_config(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))
}

/// Verifies a directory exists and is writable by creating a probe file in it.
pub fn ensure_writable_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        bail!("Directory does not exist: {}", path.display());
    }
    tempfile::NamedTempFile::new_in(path)
        .with_context(|| format!("Directory is not writable: {}", path.display()))?;
    Ok(())
}

/// Default download base: the Android camera folder when running inside
/// Termux and it is writable, otherwise the current directory.
fn default_download_base() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if cwd.starts_with(TERMUX_HOME) {
        let android = PathBuf::from(ANDROID_DOWNLOAD_DIR);
        let usable = fs::create_dir_all(&android)
            .map_err(anyhow::Error::from)
            .and_then(|()| ensure_writable_dir(&android))
            .is_ok();
        if usable {
            return android;
        }
        tracing::warn!(dir = ANDROID_DOWNLOAD_DIR, "Android download dir unusable, using cwd");
    }
    cwd
}
