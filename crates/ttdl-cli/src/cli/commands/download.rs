//! Download command: one-shot, non-interactive downloads.

use std::path::PathBuf;

use anyhow::Result;
use ttdl_core::config::{self, Config};
use ttdl_core::theme::Theme;

use crate::cli::Media;
use crate::cli::actions::MediaFiles;

pub struct DownloadArgs<'a> {
    pub url: &'a str,
    pub media: Media,
    pub image: Option<usize>,
    pub dir: Option<&'a str>,
}

pub async fn run(theme: &Theme, config: &Config, args: DownloadArgs<'_>) -> Result<()> {
    let client = super::client(config);
    let Some(resp) = super::fetch::fetch_and_show(theme, &client, args.url).await? else {
        return Ok(());
    };
    let Some(data) = resp.data.as_ref() else {
        return Ok(());
    };

    let base = match args.dir {
        Some(dir) => {
            let path = PathBuf::from(dir);
            config::ensure_writable_dir(&path)?;
            path
        }
        None => config.resolve_download_dir().path,
    };

    let files = MediaFiles::new(theme, client.http(), data, base);
    let images: &[String] = data.images.as_deref().unwrap_or(&[]);

    if let Some(number) = args.image {
        return files.image_at(images, number).await;
    }
    match args.media {
        Media::Standard => files.video(data.video.as_ref(), false).await,
        Media::Hd => files.video(data.video.as_ref(), true).await,
        Media::Mp3 => files.audio(data.audio_url()).await,
        Media::Thumbnail => files.thumbnail(data.thumbnail()).await,
        Media::Images => files.all_images(images).await,
        Media::Zip => files.images_zip(images).await,
    }
}
