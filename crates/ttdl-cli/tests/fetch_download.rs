use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LINK: &str = "https://www.tiktok.com/@someone/video/7123456789";

fn write_config(home: &std::path::Path, api_base: &str) {
    std::fs::write(
        home.join("config.toml"),
        format!("api_base = \"{api_base}\"\n"),
    )
    .unwrap();
}

fn video_envelope(server_uri: &str) -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "title": "Test clip",
            "id": 7_123_456_789u64,
            "region": "US",
            "create_time": 1_700_000_000u64,
            "duration": "15s",
            "cover": format!("{server_uri}/cover.jpg"),
            "audio": {"play": format!("{server_uri}/audio.mp3")},
            "author": {"username": "someone", "nickname": "Someone"},
            "stats": {"views": 1200, "digg_count": 42, "comment_count": 7, "favourite_count": 3},
            "video": {
                "standard_mp4": format!("{server_uri}/video.mp4"),
                "hd_mp4": format!("{server_uri}/video_hd.mp4")
            }
        },
        "rate_limit": {"remaining": 9, "limit": 10, "windowMs": 60_000u64},
        "processing_time": "120ms"
    })
}

fn images_envelope(server_uri: &str) -> serde_json::Value {
    json!({
        "success": true,
        "data": {
            "title": "Test clip",
            "images": [
                format!("{server_uri}/img1.jpg"),
                format!("{server_uri}/img2.jpg")
            ],
            "stats": {"views": 5}
        }
    })
}

async fn mount_metadata(server: &MockServer, envelope: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("url", LINK))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope))
        .mount(server)
        .await;
}

async fn mount_bytes(server: &MockServer, route: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_prints_video_metadata() {
    let server = MockServer::start().await;
    mount_metadata(&server, video_envelope(&server.uri())).await;

    let home = tempdir().unwrap();
    write_config(home.path(), &server.uri());

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", home.path())
        .args(["fetch", LINK])
        .assert()
        .success()
        .stdout(predicate::str::contains("TikTok Video"))
        .stdout(predicate::str::contains("Test clip"))
        .stdout(predicate::str::contains("Someone (@someone)"))
        .stdout(predicate::str::contains("Rate Limits"))
        .stdout(predicate::str::contains("1m"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_rejects_non_tiktok_links() {
    let home = tempdir().unwrap();

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", home.path())
        .args(["fetch", "https://example.com/clip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid TikTok link"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetch_reports_missing_video() {
    let server = MockServer::start().await;
    mount_metadata(&server, json!({"success": false})).await;

    let home = tempdir().unwrap();
    write_config(home.path(), &server.uri());

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", home.path())
        .args(["fetch", LINK])
        .assert()
        .success()
        .stdout(predicate::str::contains("Video not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_mp3_saves_audio_file() {
    let server = MockServer::start().await;
    mount_metadata(&server, video_envelope(&server.uri())).await;
    mount_bytes(&server, "/audio.mp3", b"ID3 fake audio bytes").await;

    let home = tempdir().unwrap();
    let downloads = tempdir().unwrap();
    write_config(home.path(), &server.uri());

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", home.path())
        .args([
            "download",
            LINK,
            "--media",
            "mp3",
            "--dir",
            downloads.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloading Complete"));

    let saved = downloads.path().join("audio").join("Test clip.mp3");
    assert_eq!(std::fs::read(saved).unwrap(), b"ID3 fake audio bytes");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_standard_video_uses_subdir() {
    let server = MockServer::start().await;
    mount_metadata(&server, video_envelope(&server.uri())).await;
    mount_bytes(&server, "/video.mp4", b"fake mp4 bytes").await;

    let home = tempdir().unwrap();
    let downloads = tempdir().unwrap();
    write_config(home.path(), &server.uri());

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", home.path())
        .args([
            "download",
            LINK,
            "--dir",
            downloads.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Downloading Complete"));

    let saved = downloads
        .path()
        .join("video")
        .join("standard")
        .join("Test clip.mp4");
    assert_eq!(std::fs::read(saved).unwrap(), b"fake mp4 bytes");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_images_zip_bundles_all_images() {
    let server = MockServer::start().await;
    mount_metadata(&server, images_envelope(&server.uri())).await;
    mount_bytes(&server, "/img1.jpg", b"jpeg one").await;
    mount_bytes(&server, "/img2.jpg", b"jpeg two").await;

    let home = tempdir().unwrap();
    let downloads = tempdir().unwrap();
    write_config(home.path(), &server.uri());

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", home.path())
        .args([
            "download",
            LINK,
            "--media",
            "zip",
            "--dir",
            downloads.path().to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ZIP File"))
        .stdout(predicate::str::contains("Downloading Complete"));

    let archive = downloads.path().join("Test clip_images.zip");
    let metadata = std::fs::metadata(archive).unwrap();
    assert!(metadata.len() > 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unlimited_token_is_sent_as_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("url", LINK))
        .and(wiremock::matchers::header("X-ClipX-Unlimited", "secret1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(video_envelope(&server.uri())))
        .mount(&server)
        .await;

    let home = tempdir().unwrap();
    let work = tempdir().unwrap();
    write_config(home.path(), &server.uri());
    std::fs::write(work.path().join(".unlimited"), "secret1").unwrap();

    cargo_bin_cmd!("ttdl")
        .env("TTDL_HOME", home.path())
        .current_dir(work.path())
        .args(["fetch", LINK])
        .assert()
        .success()
        .stdout(predicate::str::contains("TikTok Video"));
}
