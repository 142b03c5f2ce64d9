//! Streaming media downloads and the image ZIP archive.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures_util::StreamExt;
use tokio::io::AsyncWriteExt;

/// Media subdirectories under the download base.
pub const VIDEO_STANDARD_SUBDIR: [&str; 2] = ["video", "standard"];
pub const VIDEO_HD_SUBDIR: [&str; 2] = ["video", "hd"];
pub const AUDIO_SUBDIR: [&str; 1] = ["audio"];
pub const THUMBNAIL_SUBDIR: [&str; 1] = ["thumbnail"];

/// Creates (if needed) and returns `base/parts...`.
pub fn ensure_subdir(base: &Path, parts: &[&str]) -> Result<PathBuf> {
    let mut path = base.to_path_buf();
    for part in parts {
        path.push(part);
    }
    std::fs::create_dir_all(&path)
        .with_context(|| format!("Could not create {}", path.display()))?;
    Ok(path)
}

/// Makes a post title safe as a file stem. Titles come straight from the
/// API and can contain path separators.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            c => c,
        })
        .collect()
}

/// Streams `url` into `dest`, chunk by chunk.
pub async fn download_file(http: &reqwest::Client, url: &str, dest: &Path) -> Result<PathBuf> {
    tracing::debug!(url, dest = %dest.display(), "downloading");
    let response = http
        .get(url)
        .send()
        .await
        .context("Error occurred during the request")?
        .error_for_status()
        .context("Download request was rejected")?;

    let mut file = tokio::fs::File::create(dest)
        .await
        .with_context(|| format!("Could not create {}", dest.display()))?;
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.context("Download stream failed")?;
        file.write_all(&chunk)
            .await
            .with_context(|| format!("Could not write {}", dest.display()))?;
    }
    file.flush()
        .await
        .with_context(|| format!("Could not flush {}", dest.display()))?;
    Ok(dest.to_path_buf())
}

/// Fetches every image and stores them in one ZIP archive at `zip_path`.
/// Entries are named `<stem>_images_<n>.jpg` in post order.
pub async fn download_images_zip(
    http: &reqwest::Client,
    urls: &[String],
    zip_path: &Path,
    name_stem: &str,
) -> Result<PathBuf> {
    let file = std::fs::File::create(zip_path)
        .with_context(|| format!("Could not create {}", zip_path.display()))?;
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    for (i, url) in urls.iter().enumerate() {
        let bytes = http
            .get(url)
            .send()
            .await
            .context("Error occurred during the request")?
            .error_for_status()
            .context("Image request was rejected")?
            .bytes()
            .await
            .context("Download stream failed")?;
        let entry = format!("{name_stem}_images_{}.jpg", i + 1);
        zip.start_file(entry, options)
            .context("Could not add image to the archive")?;
        zip.write_all(&bytes)
            .context("Could not write image into the archive")?;
    }

    zip.finish().context("Could not finalize the archive")?;
    Ok(zip_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_subdir_creates_nested_dirs() {
        let dir = tempdir().unwrap();
        let path = ensure_subdir(dir.path(), &VIDEO_HD_SUBDIR).unwrap();
        assert!(path.is_dir());
        assert!(path.ends_with("video/hd"));
        // Idempotent.
        ensure_subdir(dir.path(), &VIDEO_HD_SUBDIR).unwrap();
    }

    #[test]
    fn sanitize_title_neutralizes_separators() {
        assert_eq!(sanitize_title("a/b\\c"), "a_b_c");
        assert_eq!(sanitize_title("plain title"), "plain title");
    }
}
