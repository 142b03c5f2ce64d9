//! Download flows: each one narrates itself with Download File / Download
//! Done boxes and returns quietly when the post has no matching media.

use std::path::PathBuf;

use anyhow::Result;
use ttdl_core::api::types::{MediaData, VideoLinks};
use ttdl_core::boxes::{BOX_INNER_WIDTH, BOX_TOTAL_WIDTH, box_footer, box_header, bullet_line, kv_line_styled};
use ttdl_core::download::{
    AUDIO_SUBDIR, THUMBNAIL_SUBDIR, VIDEO_HD_SUBDIR, VIDEO_STANDARD_SUBDIR, download_file,
    download_images_zip, ensure_subdir, sanitize_title,
};
use ttdl_core::interrupt;
use ttdl_core::text::shorten_path;
use ttdl_core::theme::Theme;

use super::render;

/// One post's media, bound to a download directory.
pub struct MediaFiles<'a> {
    theme: &'a Theme,
    http: &'a reqwest::Client,
    stem: String,
    base: PathBuf,
}

impl<'a> MediaFiles<'a> {
    pub fn new(theme: &'a Theme, http: &'a reqwest::Client, data: &MediaData, base: PathBuf) -> Self {
        Self {
            theme,
            http,
            stem: sanitize_title(&data.short_title()),
            base,
        }
    }

    fn file_box(&self, text: &str) {
        println!("{}", box_header(self.theme, "Download File", BOX_TOTAL_WIDTH));
        println!(
            "{}",
            bullet_line(self.theme, "\u{25cf}", self.theme.label, text, BOX_INNER_WIDTH)
        );
        println!("{}", box_footer(self.theme, BOX_TOTAL_WIDTH));
    }

    fn done_box(&self, path: &std::path::Path) {
        let shortened = shorten_path(&path.display().to_string(), 40);
        println!("{}", box_header(self.theme, "Download Done", BOX_TOTAL_WIDTH));
        println!(
            "{}",
            kv_line_styled(
                self.theme,
                "Downloading Complete",
                &shortened,
                self.theme.label,
                self.theme.accent,
                BOX_INNER_WIDTH,
            )
        );
        println!("{}", box_footer(self.theme, BOX_TOTAL_WIDTH));
    }

    /// Standard or HD MP4.
    pub async fn video(&self, links: Option<&VideoLinks>, hd: bool) -> Result<()> {
        let url = links.and_then(|l| {
            if hd {
                l.hd_mp4.as_deref()
            } else {
                l.standard_mp4.as_deref()
            }
        });
        let Some(url) = url else {
            let which = if hd { "MP4 HD" } else { "MP4 Standard" };
            let message = format!("{which} URL is empty or invalid. Try another option.");
            render::warn_box(self.theme, "Download File", &message);
            return Ok(());
        };
        let subdir = if hd { &VIDEO_HD_SUBDIR[..] } else { &VIDEO_STANDARD_SUBDIR[..] };
        let dir = ensure_subdir(&self.base, subdir)?;
        let text = format!(
            "Downloading {accent}Video {label}as {accent}MP4",
            accent = self.theme.accent,
            label = self.theme.label,
        );
        self.file_box(&text);
        let dest = download_file(self.http, url, &dir.join(format!("{}.mp4", self.stem))).await?;
        self.done_box(&dest);
        Ok(())
    }

    pub async fn audio(&self, url: Option<&str>) -> Result<()> {
        let Some(url) = url else {
            render::error_box(self.theme, "Error: No valid download URL, please try again.");
            return Ok(());
        };
        let dir = ensure_subdir(&self.base, &AUDIO_SUBDIR)?;
        let text = format!(
            "Downloading {accent}Audio {label}as {accent}MP3",
            accent = self.theme.accent,
            label = self.theme.label,
        );
        self.file_box(&text);
        let dest = download_file(self.http, url, &dir.join(format!("{}.mp3", self.stem))).await?;
        self.done_box(&dest);
        Ok(())
    }

    pub async fn thumbnail(&self, url: Option<&str>) -> Result<()> {
        let Some(url) = url else {
            render::error_box(self.theme, "Error: No valid download URL, please try again.");
            return Ok(());
        };
        let dir = ensure_subdir(&self.base, &THUMBNAIL_SUBDIR)?;
        let text = format!("Downloading {accent}Thumbnail", accent = self.theme.accent);
        self.file_box(&text);
        let dest = download_file(self.http, url, &dir.join(format!("{}.jpg", self.stem))).await?;
        self.done_box(&dest);
        Ok(())
    }

    /// One image of an image post, 1-based.
    pub async fn image_at(&self, urls: &[String], number: usize) -> Result<()> {
        if number == 0 || number > urls.len() {
            render::error_box(self.theme, "Error: Invalid image number, please try again.");
            return Ok(());
        }
        let text = format!(
            "Downloading {accent}Image {number}",
            accent = self.theme.accent
        );
        self.file_box(&text);
        let dest = self.base.join(format!("{}_images_{number}.jpg", self.stem));
        let dest = download_file(self.http, &urls[number - 1], &dest).await?;
        self.done_box(&dest);
        Ok(())
    }

    /// Every image, as separate files in the download base.
    pub async fn all_images(&self, urls: &[String]) -> Result<()> {
        if urls.is_empty() {
            render::error_box(self.theme, "Error: No valid download URL, please try again.");
            return Ok(());
        }
        let total = urls.len();
        for (i, url) in urls.iter().enumerate() {
            if interrupt::is_interrupted() {
                return Err(interrupt::InterruptedError.into());
            }
            let text = format!("Downloading image {} of {total} images...", i + 1);
            self.file_box(&text);
            let dest = self.base.join(format!("{}_images_{}.jpg", self.stem, i + 1));
            download_file(self.http, url, &dest).await?;
        }
        let noun = if total == 1 { "image" } else { "images" };
        self.file_box(&format!("Downloaded images {total} of {total} {noun}"));
        let pattern = self.base.join("*");
        self.done_box(&pattern);
        Ok(())
    }

    /// Every image, bundled into a single ZIP archive.
    pub async fn images_zip(&self, urls: &[String]) -> Result<()> {
        if urls.is_empty() {
            render::error_box(self.theme, "Error: No valid download URL, please try again.");
            return Ok(());
        }
        let text = format!(
            "Downloading all images into {accent}ZIP File",
            accent = self.theme.accent
        );
        self.file_box(&text);
        let zip_path = self.base.join(format!("{}_images.zip", self.stem));
        let dest = download_images_zip(self.http, urls, &zip_path, &self.stem).await?;
        self.done_box(&dest);
        Ok(())
    }
}
