//! About command.

use anyhow::Result;
use ttdl_core::api::ClipxClient;
use ttdl_core::boxes::{BOX_INNER_WIDTH, BOX_TOTAL_WIDTH, box_footer, box_header, kv_line};
use ttdl_core::config::Config;
use ttdl_core::theme::Theme;

use crate::cli::render;

pub async fn show(theme: &Theme, client: &ClipxClient) {
    let contact = client.contact().await;
    let email = contact
        .email
        .as_deref()
        .unwrap_or(render::FALLBACK_CONTACT_EMAIL);

    println!("{}", box_header(theme, "About", BOX_TOTAL_WIDTH));
    let lines = [
        ("Tool", "TikTok Downloader API".to_string()),
        ("Developer", "Abdisamed Mohamed".to_string()),
        ("Telegram", render::TELEGRAM_URL.to_string()),
        ("Telegram Bot", render::TELEGRAM_BOT_URL.to_string()),
        ("Website", render::WEBSITE_URL.to_string()),
        ("GitHub", "https://github.com/zamdevio".to_string()),
        ("Token Request", format!("Email {email} or Telegram @zamdevio")),
    ];
    for (label, value) in &lines {
        println!("{}", kv_line(theme, label, value, BOX_INNER_WIDTH));
    }
    if let Some(note) = contact.message.as_deref() {
        println!("{}", kv_line(theme, "Note", note, BOX_INNER_WIDTH));
    }
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

pub async fn run(theme: &Theme, config: &Config) -> Result<()> {
    let client = super::client(config);
    show(theme, &client).await;
    Ok(())
}
