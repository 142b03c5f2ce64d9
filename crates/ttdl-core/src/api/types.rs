//! ClipX API response types.
//!
//! The envelope mixes snake_case and camelCase depending on the worker
//! version, and several numeric fields arrive as either numbers or strings,
//! so the loose ones decode as `serde_json::Value`.

use serde::Deserialize;
use serde_json::Value;

/// Top-level response envelope.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<MediaData>,
    pub cache: Option<CacheInfo>,
    pub rate_limit: Option<RateLimitInfo>,
    pub meta: Option<MetaInfo>,
    pub contact: Option<ContactInfo>,
    pub trace: Option<TraceInfo>,
    pub processing_time: Option<Value>,
}

impl ApiResponse {
    /// Rate-limit info may sit at the top level or inside `data`.
    pub fn rate_limit_info(&self) -> Option<&RateLimitInfo> {
        self.rate_limit
            .as_ref()
            .or_else(|| self.data.as_ref().and_then(|d| d.rate_limit.as_ref()))
    }
}

/// The `data` object describing one video or image post.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct MediaData {
    pub title: String,
    pub id: Option<Value>,
    pub region: Option<String>,
    pub create_time: Option<Value>,
    pub duration: Option<Value>,
    pub cover: Option<String>,
    pub origin_cover: Option<String>,
    pub ai_dynamic_cover: Option<String>,
    pub audio: Option<AudioLinks>,
    pub author: Option<Author>,
    pub stats: Option<Stats>,
    pub video: Option<VideoLinks>,
    pub images: Option<Vec<String>>,
    pub rate_limit: Option<RateLimitInfo>,
}

impl MediaData {
    /// Trimmed title, cut to 60 characters with a trailing marker. Used both
    /// for display and as the base of downloaded file names.
    pub fn short_title(&self) -> String {
        let trimmed = self.title.trim();
        if trimmed.chars().count() > 60 {
            let head: String = trimmed.chars().take(60).collect();
            format!("{head}...")
        } else {
            trimmed.to_string()
        }
    }

    /// First available cover image URL.
    pub fn thumbnail(&self) -> Option<&str> {
        self.cover
            .as_deref()
            .or(self.origin_cover.as_deref())
            .or(self.ai_dynamic_cover.as_deref())
    }

    /// Audio stream URL, when the post has one.
    pub fn audio_url(&self) -> Option<&str> {
        self.audio.as_ref().and_then(|a| a.play.as_deref())
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct AudioLinks {
    pub play: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Author {
    pub username: Option<String>,
    pub nickname: Option<String>,
}

impl Author {
    /// `Nickname (@username)`, or whichever half is available.
    pub fn label(&self) -> Option<String> {
        match (self.nickname.as_deref(), self.username.as_deref()) {
            (Some(nick), Some(user)) => Some(format!("{nick} (@{user})")),
            (Some(nick), None) => Some(nick.to_string()),
            (None, Some(user)) => Some(format!("@{user}")),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Stats {
    pub views: Option<Value>,
    pub play_count: Option<Value>,
    pub digg_count: Option<Value>,
    pub comment_count: Option<Value>,
    pub favourite_count: Option<Value>,
    pub share_count: Option<Value>,
    pub download_count: Option<Value>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct VideoLinks {
    pub standard_mp4: Option<String>,
    pub hd_mp4: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RateLimitInfo {
    pub unlimited: Option<Value>,
    pub allowed: Option<Value>,
    pub remaining: Option<Value>,
    pub limit: Option<Value>,
    #[serde(alias = "resetTime")]
    pub reset_time: Option<Value>,
    #[serde(alias = "windowMs")]
    pub window_ms: Option<Value>,
    #[serde(alias = "dailyRemaining")]
    pub daily_remaining: Option<Value>,
    #[serde(alias = "dailyLimit")]
    pub daily_limit: Option<Value>,
    #[serde(alias = "dailyResetTime")]
    pub daily_reset_time: Option<Value>,
    #[serde(alias = "dailyWindowMs")]
    pub daily_window_ms: Option<Value>,
}

impl RateLimitInfo {
    pub fn is_unlimited(&self) -> bool {
        matches!(self.unlimited, Some(Value::Bool(true)))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct CacheInfo {
    pub hit: Option<Value>,
    #[serde(alias = "expiresIn")]
    pub expires_in: Option<Value>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct MetaInfo {
    pub api_info: Option<ApiInfo>,
    pub parameters_used: Option<ParametersUsed>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ApiInfo {
    pub name: Option<String>,
    pub version: Option<Value>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct ParametersUsed {
    pub quality: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct TraceInfo {
    pub worker_location: Option<String>,
    pub request_id: Option<String>,
}

/// Renders a loose JSON value for display: strings without quotes,
/// everything else in its JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_video_envelope() {
        let raw = serde_json::json!({
            "success": true,
            "data": {
                "title": "  A video  ",
                "id": 7_123_456u64,
                "region": "US",
                "create_time": 1_700_000_000u64,
                "duration": "15s",
                "cover": "https://cdn.example/cover.jpg",
                "audio": {"play": "https://cdn.example/a.mp3"},
                "author": {"username": "someone", "nickname": "Someone"},
                "stats": {"views": "120k", "digg_count": 42},
                "video": {"standard_mp4": "https://cdn.example/v.mp4", "hd_mp4": null}
            },
            "cache": {"hit": true, "expiresIn": "5m"},
            "rate_limit": {"remaining": 9, "limit": 10, "resetTime": 1_700_000_100_000u64},
            "processing_time": "120ms"
        });

        let resp: ApiResponse = serde_json::from_value(raw).unwrap();
        assert!(resp.success);
        let data = resp.data.as_ref().unwrap();
        assert_eq!(data.short_title(), "A video");
        assert_eq!(data.thumbnail(), Some("https://cdn.example/cover.jpg"));
        assert_eq!(data.audio_url(), Some("https://cdn.example/a.mp3"));
        assert_eq!(
            data.author.as_ref().unwrap().label().as_deref(),
            Some("Someone (@someone)")
        );
        assert_eq!(
            data.video.as_ref().unwrap().standard_mp4.as_deref(),
            Some("https://cdn.example/v.mp4")
        );
        let limits = resp.rate_limit_info().unwrap();
        assert_eq!(value_text(limits.remaining.as_ref().unwrap()), "9");
        assert_eq!(value_text(resp.processing_time.as_ref().unwrap()), "120ms");
    }

    #[test]
    fn long_titles_are_cut_for_file_naming() {
        let data = MediaData {
            title: "x".repeat(100),
            ..MediaData::default()
        };
        let short = data.short_title();
        assert_eq!(short.chars().count(), 63);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn camel_case_rate_limit_aliases() {
        let raw = serde_json::json!({
            "dailyRemaining": 5,
            "dailyLimit": "10",
            "dailyWindowMs": 86_400_000u64,
            "unlimited": true
        });
        let limits: RateLimitInfo = serde_json::from_value(raw).unwrap();
        assert!(limits.is_unlimited());
        assert_eq!(value_text(limits.daily_remaining.as_ref().unwrap()), "5");
        assert_eq!(value_text(limits.daily_limit.as_ref().unwrap()), "10");
    }
}
