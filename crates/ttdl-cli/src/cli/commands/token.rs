//! Token command handlers. All operate on .unlimited in the current
//! directory, where the API client looks for it.

use anyhow::Result;
use ttdl_core::boxes::{BOX_INNER_WIDTH, BOX_TOTAL_WIDTH, box_footer, box_header, kv_line};
use ttdl_core::theme::Theme;
use ttdl_core::token;

use crate::cli::render;

fn status_box(theme: &Theme, status_text: &str) {
    println!("{}", box_header(theme, "Unlimited Token", BOX_TOTAL_WIDTH));
    println!("{}", kv_line(theme, "Status", status_text, BOX_INNER_WIDTH));
    println!("{}", box_footer(theme, BOX_TOTAL_WIDTH));
}

pub fn set(theme: &Theme, value: &str) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match token::write_in(&cwd, value) {
        Ok(()) => status_box(theme, "Token saved to .unlimited"),
        Err(e) => render::warn_box(theme, "Unlimited Token", &format!("{e:#}")),
    }
    Ok(())
}

pub fn remove(theme: &Theme) -> Result<()> {
    let cwd = std::env::current_dir()?;
    match token::remove_in(&cwd) {
        Ok(()) => status_box(theme, "Token removed"),
        Err(e) => render::warn_box(theme, "Unlimited Token", &format!("{e:#}")),
    }
    Ok(())
}

pub fn status(theme: &Theme) -> Result<()> {
    status_box(theme, token::read().label());
    Ok(())
}
