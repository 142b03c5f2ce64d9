//! Interactive mode: home menu, link prompt, and the per-post download menus.

use std::io::{self, Write};

use anyhow::{Context, Result};
use ttdl_core::api::ClipxClient;
use ttdl_core::api::types::MediaData;
use ttdl_core::boxes::{
    BOX_INNER_WIDTH, BOX_TOTAL_WIDTH, box_footer, box_header, bullet_line, kv_line, menu_line,
};
use ttdl_core::config::{self, Config};
use ttdl_core::interrupt;
use ttdl_core::theme::Theme;
use ttdl_core::token;

use super::actions::MediaFiles;
use super::commands;
use super::render;

/// Where control goes after a sub-menu finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Home,
    Exit,
}

pub async fn run(theme: &Theme, config: &Config) -> Result<()> {
    let client = commands::client(config);
    loop {
        render::print_header(theme, client.http()).await;
        render::home_menu(theme, token::read().label());
        let choice = arrow_prompt(theme)?.to_lowercase();
        if interrupt_checkpoint(theme)? {
            render::exit_box(theme);
            return Ok(());
        }

        match choice.as_str() {
            "01" | "1" | "a" => {
                if download_mode(theme, &client, config).await? == Flow::Exit {
                    render::exit_box(theme);
                    return Ok(());
                }
            }
            "02" | "2" | "b" => {
                commands::about::show(theme, &client).await;
                pause(theme)?;
            }
            "03" | "3" | "c" => {
                url_box(theme, "Telegram Bot", render::TELEGRAM_BOT_URL);
                open_url(render::TELEGRAM_BOT_URL);
                pause(theme)?;
            }
            "04" | "4" | "d" => {
                url_box(theme, "ClipX Website", render::WEBSITE_URL);
                open_url(render::WEBSITE_URL);
                pause(theme)?;
            }
            "05" | "5" | "e" => {
                set_token_flow(theme, &client).await?;
                pause(theme)?;
            }
            "06" | "6" | "f" => {
                remove_token_flow(theme)?;
                pause(theme)?;
            }
            "07" | "7" | "g" => {
                commands::limits::run(theme, config).await?;
                pause(theme)?;
            }
            "08" | "8" | "h" | "exit" => {
                render::exit_box(theme);
                return Ok(());
            }
            _ => {
                render::error_box(theme, "Invalid option. Please choose from the menu.");
                pause(theme)?;
            }
        }
    }
}

/// The link loop. Returns [`Flow::Exit`] when the user typed `exit`.
async fn download_mode(theme: &Theme, client: &ClipxClient, config: &Config) -> Result<Flow> {
    let config_exists = config::paths::config_path().exists();
    let resolved = config.resolve_download_dir();
    render::download_dir_box(theme, &resolved, config_exists);
    if !config_exists {
        render::usage_box(theme);
    }

    loop {
        render::link_prompt_box(theme);
        let link = arrow_prompt(theme)?;
        if interrupt_checkpoint(theme)? {
            return Ok(Flow::Exit);
        }
        if link.eq_ignore_ascii_case("exit") {
            return Ok(Flow::Exit);
        }

        let resp = match commands::fetch::fetch_and_show(theme, client, &link).await {
            Ok(Some(resp)) => resp,
            Ok(None) => continue,
            Err(e) => {
                tracing::error!(error = %e, link, "metadata fetch failed");
                render::error_box(theme, "Error occurred during the request");
                continue;
            }
        };
        let Some(data) = resp.data.as_ref() else {
            continue;
        };

        let files = MediaFiles::new(theme, client.http(), data, resolved.path.clone());
        let is_images = data.images.as_ref().is_some_and(|urls| !urls.is_empty());
        let flow = if is_images {
            images_menu(theme, &files, data).await?
        } else {
            video_menu(theme, &files, data).await?
        };
        return Ok(flow);
    }
}

/// Media menu for a video post.
async fn video_menu(theme: &Theme, files: &MediaFiles<'_>, data: &MediaData) -> Result<Flow> {
    let links = data.video.as_ref();
    let has_standard = links.is_some_and(|l| l.standard_mp4.is_some());
    let has_hd = links.is_some_and(|l| l.hd_mp4.is_some());

    loop {
        println!("{}", box_header(theme, "TikTok Links", BOX_TOTAL_WIDTH));
        let standard_label = if has_standard {
            "Download MP4 Standard"
        } else {
            "Download MP4 Standard (empty URL)"
        };
        let hd_label = if has_hd {
            "Download MP4 HD"
        } else {
            "Download MP4 HD (empty URL)"
        };
        println!("{}", menu_line(theme, "1", standard_label, BOX_INNER_WIDTH));
        println!("{}", menu_line(theme, "2", hd_label, BOX_INNER_WIDTH));
        println!("{}", menu_line(theme, "3", "Download MP3 Audio", BOX_INNER_WIDTH));
        println!("{}", menu_line(theme, "4", "Download Thumbnail", BOX_INNER_WIDTH));
        println!("{}", menu_line(theme, "5", "Go Back", BOX_INNER_WIDTH));
        choose_option_footer(theme);

        let choice = choose_prompt(theme)?;
        if interrupt_checkpoint(theme)? {
            return Ok(Flow::Exit);
        }
        match choice.as_str() {
            "1" => report(theme, files.video(links, false).await)?,
            "2" => report(theme, files.video(links, true).await)?,
            "3" => report(theme, files.audio(data.audio_url()).await)?,
            "4" => report(theme, files.thumbnail(data.thumbnail()).await)?,
            "5" => return Ok(Flow::Home),
            _ => render::error_box(theme, "Invalid option, please try again"),
        }
    }
}

/// Media menu for an image post.
async fn images_menu(theme: &Theme, files: &MediaFiles<'_>, data: &MediaData) -> Result<Flow> {
    let urls: &[String] = data.images.as_deref().unwrap_or(&[]);
    let total = urls.len();

    loop {
        println!("{}", box_header(theme, "TikTok Links", BOX_TOTAL_WIDTH));
        println!("{}", menu_line(theme, "1", "Download all images in a zip file", BOX_INNER_WIDTH));
        println!("{}", menu_line(theme, "2", "Download specific image by number", BOX_INNER_WIDTH));
        println!("{}", menu_line(theme, "3", "Download all images", BOX_INNER_WIDTH));
        println!("{}", menu_line(theme, "4", "Download MP3 Audio", BOX_INNER_WIDTH));
        println!("{}", menu_line(theme, "5", "Download Thumbnail", BOX_INNER_WIDTH));
        println!("{}", menu_line(theme, "6", "Go Back", BOX_INNER_WIDTH));
        choose_option_footer(theme);

        let choice = choose_prompt(theme)?;
        if interrupt_checkpoint(theme)? {
            return Ok(Flow::Exit);
        }
        match choice.as_str() {
            "1" => report(theme, files.images_zip(urls).await)?,
            "2" => {
                println!("{}", box_header(theme, "TikTok Images", BOX_TOTAL_WIDTH));
                let noun = if total == 1 { "image" } else { "images" };
                let ask = format!(
                    "Enter image number to download:{}    {}Total Images: {}{total} {noun}",
                    theme.reset, theme.border, theme.accent
                );
                println!("{}", bullet_line(theme, "\u{25cf}", theme.menu, &ask, BOX_INNER_WIDTH));
                println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));

                let raw = arrow_prompt(theme)?;
                match raw.parse::<usize>() {
                    Ok(number) => report(theme, files.image_at(urls, number).await)?,
                    Err(_) => render::error_box(
                        theme,
                        "Error: Please use only numeric values to download the image.",
                    ),
                }
            }
            "3" => report(theme, files.all_images(urls).await)?,
            "4" => report(theme, files.audio(data.audio_url()).await)?,
            "5" => report(theme, files.thumbnail(data.thumbnail()).await)?,
            "6" => return Ok(Flow::Home),
            _ => render::error_box(theme, "Invalid option, please try again"),
        }
    }
}

async fn set_token_flow(theme: &Theme, client: &ClipxClient) -> Result<()> {
    println!("{}", box_header(theme, "Set Unlimited Token", BOX_TOTAL_WIDTH));
    let contact = client.contact().await;
    let email = contact
        .email
        .as_deref()
        .unwrap_or(render::FALLBACK_CONTACT_EMAIL);
    let info = format!("Contact {email} to request a token");
    println!("{}", kv_line(theme, "Info", &info, BOX_INNER_WIDTH));
    if let Some(note) = contact.message.as_deref() {
        println!("{}", kv_line(theme, "Note", note, BOX_INNER_WIDTH));
    }
    println!(
        "{}",
        kv_line(theme, "Input", "Paste your token to set it or press Enter to go back", BOX_INNER_WIDTH)
    );
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));

    let existing = token::read();
    let overwrite_note = match existing {
        token::TokenStatus::Set(_) => Some("Token already set"),
        token::TokenStatus::Invalid(_) => Some("Current .unlimited is invalid"),
        token::TokenStatus::NotSet => None,
    };
    if let Some(note) = overwrite_note {
        println!("{}", box_header(theme, "Unlimited Token", BOX_TOTAL_WIDTH));
        println!("{}", kv_line(theme, "Status", note, BOX_INNER_WIDTH));
        println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
        let confirm = prompt(&format!("  {}Overwrite token? (y/N) {}", theme.border, theme.reset))?;
        if !confirm.eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }

    let value = arrow_prompt(theme)?;
    if value.is_empty() {
        return Ok(());
    }
    let cwd = std::env::current_dir().context("resolve working directory")?;
    match token::write_in(&cwd, &value) {
        Ok(()) => {
            println!("{}", box_header(theme, "Unlimited Token", BOX_TOTAL_WIDTH));
            println!("{}", kv_line(theme, "Status", "Token saved to .unlimited", BOX_INNER_WIDTH));
            println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
        }
        Err(e) => render::warn_box(theme, "Unlimited Token", &format!("{e:#}")),
    }
    Ok(())
}

fn remove_token_flow(theme: &Theme) -> Result<()> {
    let cwd = std::env::current_dir().context("resolve working directory")?;
    if token::read_in(&cwd) == token::TokenStatus::NotSet {
        render::warn_box(theme, "Unlimited Token", "No .unlimited file found to remove.");
        return Ok(());
    }
    let confirm = prompt(&format!("  {}Remove token? (y/N) {}", theme.border, theme.reset))?;
    if !confirm.eq_ignore_ascii_case("y") {
        return Ok(());
    }
    match token::remove_in(&cwd) {
        Ok(()) => {
            println!("{}", box_header(theme, "Unlimited Token", BOX_TOTAL_WIDTH));
            println!("{}", kv_line(theme, "Status", "Token removed", BOX_INNER_WIDTH));
            println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
        }
        Err(e) => render::warn_box(theme, "Unlimited Token", &format!("{e:#}")),
    }
    Ok(())
}

fn url_box(theme: &Theme, title: &str, url: &str) {
    println!("{}", box_header(theme, title, BOX_TOTAL_WIDTH));
    println!("{}", kv_line(theme, "URL", url, BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

fn open_url(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::debug!(error = %e, url, "could not open browser");
    }
}

fn choose_option_footer(theme: &Theme) {
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
    println!("{}", bullet_line(theme, "#", theme.menu, "Choose an option", BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

/// Reads one trimmed line. End of input is treated as an interrupt so the
/// process leaves with the conventional status instead of spinning.
fn prompt(prefix: &str) -> Result<String> {
    print!("{prefix}");
    io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line).context("read input")?;
    if read == 0 {
        return Err(interrupt::InterruptedError.into());
    }
    Ok(line.trim().to_string())
}

fn arrow_prompt(theme: &Theme) -> Result<String> {
    prompt(&format!("  {}\u{2570}\u{2500}>{} ", theme.border, theme.reset))
}

fn choose_prompt(theme: &Theme) -> Result<String> {
    prompt(&format!(
        "    {}\u{2514}\u{2500}\u{2500}{}\u{2ab8}{} ",
        theme.menu, theme.border, theme.reset
    ))
}

/// After Ctrl+C, asks whether to quit. Returns true when the session should
/// end; the caller owns printing the exit box.
fn interrupt_checkpoint(theme: &Theme) -> Result<bool> {
    if !interrupt::is_interrupted() {
        return Ok(false);
    }
    interrupt::reset();
    render::ctrlc_box(theme);
    let answer = prompt(&format!("   {}\u{2570}\u{2500}> {}", theme.menu, theme.reset))?;
    let stay = answer.eq_ignore_ascii_case("n") || answer.eq_ignore_ascii_case("no");
    if stay {
        return Ok(false);
    }
    if !answer.eq_ignore_ascii_case("y") && !answer.eq_ignore_ascii_case("yes") {
        render::error_box(theme, "Invalid option");
    }
    Ok(true)
}

/// Waits for Enter before redrawing the home screen.
fn pause(theme: &Theme) -> Result<()> {
    arrow_prompt(theme)?;
    Ok(())
}

/// Download errors inside a menu are reported in a box and the menu keeps
/// going; interrupts still bubble up.
fn report(theme: &Theme, result: Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.downcast_ref::<interrupt::InterruptedError>().is_some() => Err(e),
        Err(e) => {
            tracing::error!(error = %e, "download failed");
            render::error_box(theme, "An unexpected error occurred");
            Ok(())
        }
    }
}
