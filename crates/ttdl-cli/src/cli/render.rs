//! Boxed terminal output shared by the commands and the interactive menu.

use serde_json::Value;
use ttdl_core::api;
use ttdl_core::api::types::{ApiResponse, MediaData, RateLimitInfo, value_text};
use ttdl_core::boxes::{
    BOX_INNER_WIDTH, BOX_TOTAL_WIDTH, box_footer, box_header, bullet_line, content_line, kv_line,
    kv_line_colored, kv_line_styled, menu_line,
};
use ttdl_core::config::DownloadDir;
use ttdl_core::theme::{Theme, color};

pub const TELEGRAM_URL: &str = "https://zamdevio.t.me";
pub const TELEGRAM_BOT_URL: &str = "https://t.me/TikTok_DownloaderiBot";
pub const WEBSITE_URL: &str = "https://clipx.zamdev.dev";
pub const FALLBACK_CONTACT_EMAIL: &str = "clipx@zamdev.dev";

const INFINITY: &str = "\u{221e}";

const LOGO: [(&str, &str); 6] = [
    (color::GREEN1, "████████╗██╗██╗  ██╗████████╗ ██████╗ ██╗  ██╗     █████╗ ██████╗ ██╗"),
    (color::GREEN1, "╚══██╔══╝██║██║ ██╔╝╚══██╔══╝██╔═══██╗██║ ██╔╝    ██╔══██╗██╔══██╗██║"),
    (color::GREEN2, "   ██║   ██║█████╔╝    ██║   ██║   ██║█████╔╝     ███████║██████╔╝██║"),
    (color::GREEN2, "   ██║   ██║██╔═██╗    ██║   ██║   ██║██╔═██╗     ██╔══██║██╔═══╝ ██║"),
    (color::GREEN3, "   ██║   ██║██║  ██╗   ██║   ╚██████╔╝██║  ██╗    ██║  ██║██║     ██║"),
    (color::GREEN3, "   ╚═╝   ╚═╝╚═╝  ╚═╝   ╚═╝    ╚═════╝ ╚═╝  ╚═╝    ╚═╝  ╚═╝╚═╝     ╚═╝"),
];

pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}

/// ASCII-art banner plus the DEV INFO and YOUR INFO boxes.
pub async fn print_header(theme: &Theme, http: &reqwest::Client) {
    clear_screen();
    let ip = api::fetch_public_ip(http).await;
    let now = chrono::Local::now();

    println!("{}", box_header(theme, "CODING BY - ABDISAMED", BOX_TOTAL_WIDTH));
    let lights = format!(
        " {}\u{25cf} {}\u{25cf} {}\u{25cf}",
        theme.error,
        color::YELLOW,
        color::GREEN1
    );
    println!("{}", content_line(theme, &lights, BOX_INNER_WIDTH));
    println!("{}", content_line(theme, "", BOX_INNER_WIDTH));
    for (paint, row) in LOGO {
        let art = format!("{paint}{row}");
        println!("{}", content_line(theme, &art, BOX_INNER_WIDTH));
    }

    println!("{}", box_header(theme, "DEV INFO", BOX_TOTAL_WIDTH));
    let dev_info = [
        ("DEVELOPER", "Abdisamed Mohamed"),
        ("VERSION", env!("CARGO_PKG_VERSION")),
        ("TELEGRAM", TELEGRAM_URL),
        ("TELEGRAM BOT", TELEGRAM_BOT_URL),
        ("GITHUB", "https://github.com/zamdevio"),
        ("WEBSITE", "clipx.zamdev.dev"),
        ("TOOL'S NAME", "TikTok API"),
    ];
    for (label, value) in dev_info {
        println!(
            "{}",
            kv_line_styled(theme, label, value, color::YELLOW, color::GREEN2, BOX_INNER_WIDTH)
        );
    }
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));

    println!("{}", box_header(theme, "YOUR INFO", BOX_TOTAL_WIDTH));
    let ip_text = match ip {
        Some(ip) => ip,
        None => format!("{}Unable to retrieve IP", theme.error),
    };
    println!(
        "{}",
        kv_line_styled(theme, "YOUR IP", &ip_text, theme.label, theme.value, BOX_INNER_WIDTH)
    );
    let time = now.format("%I:%M:%S %p").to_string();
    let date = now.format("%d/%B/%Y").to_string();
    println!(
        "{}",
        kv_line_styled(theme, "TODAY TIME", &time, theme.label, theme.value, BOX_INNER_WIDTH)
    );
    println!(
        "{}",
        kv_line_styled(theme, "TODAY DATE", &date, theme.label, theme.value, BOX_INNER_WIDTH)
    );
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

/// An ERROR box with a single message line.
pub fn error_box(theme: &Theme, message: &str) {
    println!("{}", box_header(theme, "ERROR", BOX_TOTAL_WIDTH));
    println!("{}", bullet_line(theme, "=", theme.error, message, BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

/// A titled warning box with a `#` bullet.
pub fn warn_box(theme: &Theme, title: &str, message: &str) {
    println!("{}", box_header(theme, title, BOX_TOTAL_WIDTH));
    println!("{}", bullet_line(theme, "#", theme.error, message, BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

pub fn invalid_link_box(theme: &Theme) {
    error_box(theme, "Video not found. Maybe the video is private or blocked.");
}

/// Reports where downloads will land, and why, before the link prompt.
pub fn download_dir_box(theme: &Theme, resolved: &DownloadDir, config_exists: bool) {
    println!("{}", box_header(theme, "Download Dir", BOX_TOTAL_WIDTH));
    if resolved.stale_config {
        println!(
            "{}",
            bullet_line(
                theme,
                "\u{25cf}",
                theme.error,
                "Stored path in config does not exist. Using default directory.",
                BOX_INNER_WIDTH,
            )
        );
    } else if !config_exists {
        println!(
            "{}",
            bullet_line(
                theme,
                "\u{25cf}",
                color::YELLOW,
                "Config file not found. Using default directory.",
                BOX_INNER_WIDTH,
            )
        );
    } else {
        let path = resolved.path.display().to_string();
        println!(
            "{}",
            kv_line_colored(theme, "Saving to", &path, theme.menu, BOX_INNER_WIDTH)
        );
    }
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

/// First-run hint on how to pick a download directory.
pub fn usage_box(theme: &Theme) {
    println!("{}", box_header(theme, "Download Dir", BOX_TOTAL_WIDTH));
    let text = format!(
        "Use {}ttdl config set-dir /path/to/download_dir {}To Set New Dir",
        theme.menu, theme.border
    );
    println!("{}", bullet_line(theme, "#", theme.border, &text, BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

pub fn dir_set_box(theme: &Theme, path: &str) {
    println!("{}", box_header(theme, "Download Dir", BOX_TOTAL_WIDTH));
    let text = format!("Download Directory set to: {path}");
    println!("{}", bullet_line(theme, "#", theme.menu, &text, BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

pub fn home_menu(theme: &Theme, token_label: &str) {
    println!("{}", box_header(theme, "Home Menu", BOX_TOTAL_WIDTH));
    let entries = [
        ("01/A", "Download Mode"),
        ("02/B", "About"),
        ("03/C", "Visit Telegram Bot"),
        ("04/D", "Visit ClipX Website"),
        ("05/E", "Set Unlimited Token"),
        ("06/F", "Remove Unlimited Token"),
        ("07/G", "Rate Limits"),
        ("08/H", "Exit"),
    ];
    for (index, text) in entries {
        println!("{}", menu_line(theme, index, text, BOX_INNER_WIDTH));
    }
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
    println!("{}", kv_line(theme, "Unlimited Token", token_label, BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

/// The two-box prompt row asking for a TikTok link.
pub fn link_prompt_box(theme: &Theme) {
    let b = theme.border;
    let bg = theme.title_bg;
    let fg = theme.title_fg;
    let r = theme.reset;
    println!(
        "{b}\u{256d}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500} <{bg}{fg} ENTER LINK {r}{b}> \u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{256e}\u{256d}\u{2500}\u{2500}\u{2500}\u{2500}\u{256e}\u{256d}\u{2500}\u{2500}\u{2500}\u{2500} <{bg}{fg} EXIT OPTION {r}{b}> \u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{256e}"
    );
    println!(
        "{b}\u{2502} {bracket}\u{3010}{r}\u{2022}{bracket}\u{3011}{label}Enter TikTok Video Link \u{1f517}   {b}\u{2502}\u{2502}{r} OR {b}\u{2502}\u{2502} {b}Type {err}Exit {b}To {err}Quit        {b}\u{2502}",
        bracket = theme.bracket,
        label = theme.label,
        err = theme.error,
    );
    println!(
        "{b}\u{2570}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{256f}\u{2570}\u{2500}\u{2500}\u{2500}\u{2500}\u{256f}\u{2570}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{2500}\u{256f}"
    );
}

pub fn exit_box(theme: &Theme) {
    println!("{}", box_header(theme, "EXIT", BOX_TOTAL_WIDTH));
    println!("{}", bullet_line(theme, "=", theme.error, "EXIT", BOX_INNER_WIDTH));
    println!(
        "{}",
        bullet_line(theme, "=", color::GREEN1, "THANKS FOR USING THIS TOOL!", BOX_INNER_WIDTH)
    );
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

pub fn ctrlc_box(theme: &Theme) {
    println!("{}", box_header(theme, "CTRL + C", BOX_TOTAL_WIDTH));
    let detected = format!("{}CTRL+C{} Detected", theme.accent, color::YELLOW);
    println!("{}", bullet_line(theme, "+", color::GREEN3, &detected, BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
    println!("{}", box_header(theme, "CTRL + C", BOX_TOTAL_WIDTH));
    let question = format!(
        "Do you wanna exit {}\u{3010}{}Y{}|{}n{}\u{3011}",
        color::GREEN,
        color::YELLOW,
        theme.reset,
        color::YELLOW,
        color::GREEN
    );
    println!("{}", bullet_line(theme, "+", color::GREEN3, &question, BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

fn value_line(theme: &Theme, label: &str, value: Option<&Value>) -> String {
    let text = value.map(value_text).unwrap_or_default();
    kv_line(theme, label, &text, BOX_INNER_WIDTH)
}

/// The metadata box for a video or an image post.
pub fn print_media_info(theme: &Theme, data: &MediaData) {
    let is_images = data.images.as_ref().is_some_and(|urls| !urls.is_empty());
    let title = if is_images { "TikTok Images" } else { "TikTok Video" };
    let content_type = if is_images { "Images" } else { "Videos" };
    let id_label = if is_images { "Post ID" } else { "Video ID" };

    println!("{}", box_header(theme, title, BOX_TOTAL_WIDTH));
    println!(
        "{}",
        kv_line_colored(theme, "Content-Type", content_type, theme.accent, BOX_INNER_WIDTH)
    );
    println!(
        "{}",
        kv_line_colored(theme, "Title", &data.short_title(), color::GREEN3, BOX_INNER_WIDTH)
    );
    if let Some(id) = &data.id {
        println!("{}", value_line(theme, id_label, Some(id)));
    }
    if let Some(region) = data.region.as_deref() {
        println!("{}", kv_line(theme, "Region", region, BOX_INNER_WIDTH));
    }
    if let Some(author) = data.author.as_ref().and_then(|a| a.label()) {
        println!("{}", kv_line(theme, "Author", &author, BOX_INNER_WIDTH));
    }
    println!("{}", value_line(theme, "Create Time", data.create_time.as_ref()));

    let stats = data.stats.as_ref();
    println!("{}", value_line(theme, "Views", stats.and_then(|s| s.views.as_ref())));
    if let Some(plays) = stats.and_then(|s| s.play_count.as_ref()) {
        println!("{}", value_line(theme, "Play Count", Some(plays)));
    }
    println!("{}", value_line(theme, "Love Count", stats.and_then(|s| s.digg_count.as_ref())));
    println!(
        "{}",
        value_line(theme, "Comment Count", stats.and_then(|s| s.comment_count.as_ref()))
    );
    println!(
        "{}",
        value_line(theme, "Favorite Count", stats.and_then(|s| s.favourite_count.as_ref()))
    );
    if let Some(shares) = stats.and_then(|s| s.share_count.as_ref()) {
        println!("{}", value_line(theme, "Share Count", Some(shares)));
    }
    if let Some(downloads) = stats.and_then(|s| s.download_count.as_ref()) {
        println!("{}", value_line(theme, "Download Count", Some(downloads)));
    }

    if is_images {
        let total = data.images.as_ref().map_or(0, Vec::len);
        let noun = if total == 1 { "image" } else { "images" };
        let text = format!("{total} {noun}");
        println!(
            "{}",
            kv_line_colored(theme, "Total Images", &text, theme.accent, BOX_INNER_WIDTH)
        );
    } else {
        println!("{}", value_line(theme, "Duration", data.duration.as_ref()));
    }
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

/// The API Info box. Printed only when the envelope carries something.
pub fn print_api_info(theme: &Theme, resp: &ApiResponse) {
    let api_info = resp.meta.as_ref().and_then(|m| m.api_info.as_ref());
    let params = resp.meta.as_ref().and_then(|m| m.parameters_used.as_ref());
    let has_any = api_info.is_some()
        || resp.cache.is_some()
        || resp.trace.is_some()
        || resp.contact.is_some()
        || resp.processing_time.is_some();
    if !has_any {
        return;
    }

    println!("{}", box_header(theme, "API Info", BOX_TOTAL_WIDTH));
    if let Some(name) = api_info.and_then(|a| a.name.as_deref()) {
        println!("{}", kv_line(theme, "API", name, BOX_INNER_WIDTH));
    }
    if let Some(version) = api_info.and_then(|a| a.version.as_ref()) {
        println!("{}", value_line(theme, "Version", Some(version)));
    }
    if let Some(quality) = params.and_then(|p| p.quality.as_deref()) {
        println!("{}", kv_line(theme, "Quality", quality, BOX_INNER_WIDTH));
    }
    if let Some(cache) = resp.cache.as_ref() {
        if let Some(hit) = cache.hit.as_ref() {
            println!("{}", value_line(theme, "Cache Hit", Some(hit)));
        }
        if let Some(expires) = cache.expires_in.as_ref() {
            println!("{}", value_line(theme, "Cache Expires In", Some(expires)));
        }
    }
    if let Some(trace) = resp.trace.as_ref() {
        if let Some(worker) = trace.worker_location.as_deref() {
            println!("{}", kv_line(theme, "Worker", worker, BOX_INNER_WIDTH));
        }
        if let Some(request_id) = trace.request_id.as_deref() {
            println!("{}", kv_line(theme, "Request ID", request_id, BOX_INNER_WIDTH));
        }
    }
    if let Some(elapsed) = resp.processing_time.as_ref() {
        println!("{}", value_line(theme, "Processing Time", Some(elapsed)));
    }
    if let Some(contact) = resp.contact.as_ref() {
        if let Some(email) = contact.email.as_deref() {
            println!("{}", kv_line(theme, "Contact", email, BOX_INNER_WIDTH));
        }
        if let Some(message) = contact.message.as_deref() {
            println!("{}", kv_line(theme, "Contact Note", message, BOX_INNER_WIDTH));
        }
    }
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

/// The Rate Limits box. Unlimited tokens collapse every counter to infinity.
pub fn print_rate_limits(theme: &Theme, info: &RateLimitInfo) {
    println!("{}", box_header(theme, "Rate Limits", BOX_TOTAL_WIDTH));

    if info.is_unlimited() {
        println!("{}", kv_line(theme, "Unlimited", "true", BOX_INNER_WIDTH));
        println!("{}", kv_line(theme, "Allowed", "true", BOX_INNER_WIDTH));
        let labels = [
            "Per Minute Limit",
            "Per Minute Remaining",
            "Per Minute Reset",
            "Per Minute Window",
            "Daily Limit",
            "Daily Remaining",
            "Daily Reset",
            "Daily Window",
        ];
        for label in labels {
            println!("{}", kv_line(theme, label, INFINITY, BOX_INNER_WIDTH));
        }
        println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
        return;
    }

    println!("{}", kv_line(theme, "Unlimited", "false", BOX_INNER_WIDTH));
    if let Some(allowed) = info.allowed.as_ref() {
        println!("{}", value_line(theme, "Allowed", Some(allowed)));
    }
    if info.limit.is_some() || info.remaining.is_some() {
        if let Some(limit) = info.limit.as_ref() {
            println!("{}", value_line(theme, "Per Minute Limit", Some(limit)));
        }
        if let Some(remaining) = info.remaining.as_ref() {
            println!("{}", value_line(theme, "Per Minute Remaining", Some(remaining)));
        }
        if let Some(reset) = info.reset_time.as_ref() {
            let text = format_timestamp_ms(reset);
            println!("{}", kv_line(theme, "Per Minute Reset", &text, BOX_INNER_WIDTH));
        }
        if let Some(window) = info.window_ms.as_ref() {
            let text = format_window_ms(window);
            println!("{}", kv_line(theme, "Per Minute Window", &text, BOX_INNER_WIDTH));
        }
    }
    if info.daily_limit.is_some() || info.daily_remaining.is_some() {
        if let Some(limit) = info.daily_limit.as_ref() {
            println!("{}", value_line(theme, "Daily Limit", Some(limit)));
        }
        if let Some(remaining) = info.daily_remaining.as_ref() {
            println!("{}", value_line(theme, "Daily Remaining", Some(remaining)));
        }
        if let Some(reset) = info.daily_reset_time.as_ref() {
            let text = format_timestamp_ms(reset);
            println!("{}", kv_line(theme, "Daily Reset", &text, BOX_INNER_WIDTH));
        }
        if let Some(window) = info.daily_window_ms.as_ref() {
            let text = format_window_ms(window);
            println!("{}", kv_line(theme, "Daily Window", &text, BOX_INNER_WIDTH));
        }
    }
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

fn value_as_ms(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

/// Millisecond epoch timestamp as a local date-time; non-numeric values pass
/// through untouched.
pub fn format_timestamp_ms(value: &Value) -> String {
    use chrono::TimeZone;

    let Some(ms) = value_as_ms(value) else {
        return value_text(value);
    };
    match chrono::Local.timestamp_millis_opt(ms).single() {
        Some(when) => when.format("%d/%m/%Y, %H:%M:%S").to_string(),
        None => value_text(value),
    }
}

/// Millisecond duration as a compact `2h` / `5m` / `90s` form.
pub fn format_window_ms(value: &Value) -> String {
    let Some(ms) = value_as_ms(value) else {
        return value_text(value);
    };
    let seconds = ms / 1000;
    if seconds >= 3600 && seconds % 3600 == 0 {
        format!("{}h", seconds / 3600)
    } else if seconds >= 60 && seconds % 60 == 0 {
        format!("{}m", seconds / 60)
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn window_picks_the_largest_exact_unit() {
        assert_eq!(format_window_ms(&json!(3_600_000)), "1h");
        assert_eq!(format_window_ms(&json!(7_200_000)), "2h");
        assert_eq!(format_window_ms(&json!(60_000)), "1m");
        assert_eq!(format_window_ms(&json!(90_000)), "90s");
        assert_eq!(format_window_ms(&json!(1500)), "1s");
    }

    #[test]
    fn non_numeric_values_pass_through() {
        assert_eq!(format_window_ms(&json!("soon")), "soon");
        assert_eq!(format_timestamp_ms(&json!("soon")), "soon");
    }

    #[test]
    fn numeric_strings_are_accepted() {
        assert_eq!(format_window_ms(&json!("60000")), "1m");
        let formatted = format_timestamp_ms(&json!("1700000000000"));
        assert!(formatted.contains('/'));
        assert!(formatted.contains(','));
    }
}
