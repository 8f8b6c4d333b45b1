//! Integration tests for the postindex library
//!
//! These tests build real post directories on disk and check the index
//! written for them, including the failure paths that must leave an existing
//! index alone.

use postindex::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn post(title: &str, date: &str, slug: &str) -> String {
    format!(
        "---\ntitle: \"{title}\"\ndate: {date}\ntype: article\ntags: [rust, \"static sites\"]\nexcerpt: About {title}\nslug: {slug}\n---\n# {title}\n\nBody text.\n"
    )
}

fn setup(posts: &[(&str, String)]) -> (TempDir, IndexConfig) {
    let temp_dir = TempDir::new().unwrap();
    let posts_dir = temp_dir.path().join("posts");
    fs::create_dir(&posts_dir).unwrap();
    for (name, content) in posts {
        fs::write(posts_dir.join(name), content).unwrap();
    }
    let config = IndexConfig::default()
        .with_posts_dir(&posts_dir)
        .with_output_path(temp_dir.path().join("index.json"));
    (temp_dir, config)
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_complete_workflow() {
    let (_temp_dir, config) = setup(&[
        ("first.md", post("First", "2024-01-01", "first")),
        ("second.md", post("Second", "2024-06-15", "second")),
        ("old.md", post("Old", "2023-12-31", "old")),
        ("README.txt", "not a post".to_string()),
    ]);

    let index = build_index(config.clone()).unwrap();
    assert_eq!(index.len(), 3);

    let written = read_json(&config.output_path);
    let dates: Vec<_> = written["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["date"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(dates, vec!["2024-06-15", "2024-01-01", "2023-12-31"]);

    assert_eq!(
        written["posts"][0],
        json!({
            "title": "Second",
            "date": "2024-06-15",
            "type": "article",
            "tags": ["rust", "static sites"],
            "excerpt": "About Second",
            "slug": "second",
            "thumbnail": "",
            "media": {"kind": "none", "youtube_id": "", "images": []},
            "url": "/blog/second"
        })
    );
}

#[test]
fn test_output_format() {
    let (_temp_dir, config) = setup(&[("cafe.md", post("Café ☕", "2024-03-01", "cafe"))]);
    build_index(config.clone()).unwrap();

    let text = fs::read_to_string(&config.output_path).unwrap();
    assert!(text.contains("\"title\": \"Café ☕\""));
    assert!(text.starts_with("{\n  \"posts\": [\n    {\n"));
    assert!(text.contains(
        "      \"media\": {\n        \"kind\": \"none\",\n        \"youtube_id\": \"\",\n        \"images\": []\n      },\n"
    ));
}

#[test]
fn test_rebuild_is_byte_identical() {
    let (_temp_dir, config) = setup(&[
        ("a.md", post("A", "2024-01-01", "a")),
        ("b.md", post("B", "2024-01-01", "b")),
        ("c.md", post("C", "2022-05-05", "c")),
    ]);

    build_index(config.clone()).unwrap();
    let first = fs::read(&config.output_path).unwrap();
    build_index(config.clone()).unwrap();
    let second = fs::read(&config.output_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_slug_leaves_existing_index() {
    let broken = post("Broken", "2024-01-01", "x").replace("slug: x\n", "");
    let (_temp_dir, config) = setup(&[
        ("good.md", post("Good", "2024-01-01", "good")),
        ("broken.md", broken),
    ]);
    fs::write(&config.output_path, "previous index").unwrap();

    let err = build_index(config.clone()).unwrap_err();
    match &err {
        IndexError::MissingFields { path, fields } => {
            assert_eq!(path, Path::new("broken.md"));
            assert_eq!(fields, &vec!["slug".to_string()]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().contains("slug"));
    assert_eq!(
        fs::read_to_string(&config.output_path).unwrap(),
        "previous index"
    );
}

#[test]
fn test_missing_slug_writes_nothing() {
    let broken = post("Broken", "2024-01-01", "x").replace("slug: x\n", "");
    let (_temp_dir, config) = setup(&[("broken.md", broken)]);

    assert!(build_index(config.clone()).is_err());
    assert!(!config.output_path.exists());
}

#[test]
fn test_invalid_date_rejected() {
    let (_temp_dir, config) = setup(&[("bad.md", post("Bad", "2024-13-40", "bad"))]);

    let err = build_index(config.clone()).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, IndexError::InvalidDate { ref value, .. } if value == "2024-13-40"));
    assert!(err.to_string().contains("bad.md"));
    assert!(!config.output_path.exists());
}

#[test]
fn test_missing_front_matter_is_format_error() {
    let (_temp_dir, config) = setup(&[("plain.md", "# No header here\n".to_string())]);

    let err = build_index(config).unwrap_err();
    assert!(err.is_format());
    assert!(err.to_string().contains("plain.md"));
}

#[test]
fn test_unreadable_post_names_file() {
    let (_temp_dir, config) = setup(&[("good.md", post("Good", "2024-01-01", "good"))]);
    fs::write(config.posts_dir.join("latin1.md"), b"---\ntitle: caf\xe9\n---\n").unwrap();

    let err = build_index(config.clone()).unwrap_err();
    assert!(matches!(err, IndexError::ReadFile { .. }));
    assert!(err.to_string().contains("latin1.md"));
    assert!(!config.output_path.exists());
}

#[cfg(unix)]
#[test]
fn test_symlinked_post_is_indexed() {
    let (temp_dir, config) = setup(&[]);
    let target = temp_dir.path().join("shared.md");
    fs::write(&target, post("Shared", "2024-04-04", "shared")).unwrap();
    std::os::unix::fs::symlink(&target, config.posts_dir.join("link.md")).unwrap();

    let index = build_index(config).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(index.posts[0].slug, "shared");
}

#[test]
fn test_partial_media_kept_as_written() {
    let content = post("Video", "2024-02-02", "video")
        .replace("slug: video\n", "slug: video\nmedia:\n  kind: video\n");
    let (_temp_dir, config) = setup(&[("video.md", content)]);

    build_index(config.clone()).unwrap();
    let written = read_json(&config.output_path);
    assert_eq!(written["posts"][0]["media"], json!({"kind": "video"}));
}

#[test]
fn test_full_media_and_thumbnail() {
    let content = post("Gallery", "2024-02-02", "gallery").replace(
        "slug: gallery\n",
        "slug: gallery\nthumbnail: https://cdn.example.com:443/t.jpg\nmedia:\n  kind: gallery\n  youtube_id: \"\"\n\n  images: [one.jpg, 'two.jpg']\n",
    );
    let (_temp_dir, config) = setup(&[("gallery.md", content)]);

    let index = build_index(config).unwrap();
    let entry = &index.posts[0];
    assert_eq!(entry.thumbnail, "https://cdn.example.com:443/t.jpg");
    assert_eq!(
        serde_json::to_value(&entry.media).unwrap(),
        json!({"kind": "gallery", "youtube_id": "", "images": ["one.jpg", "two.jpg"]})
    );
}

#[test]
fn test_scalar_values_round_trip() {
    let content = "---\ntitle: 'Colons: and \"quotes\"'\ndate: 2021-07-04\ntype: Note\ntags: [z, a, m]\nexcerpt: 007\nslug: round-trip\n---\n";
    let (_temp_dir, config) = setup(&[("rt.md", content.to_string())]);

    let index = build_index(config).unwrap();
    let entry = &index.posts[0];
    assert_eq!(entry.title, "Colons: and \"quotes\"");
    assert_eq!(entry.kind, "Note");
    assert_eq!(entry.excerpt, "007");
    assert_eq!(entry.tags, vec!["z", "a", "m"]);
}

#[test]
fn test_empty_posts_directory() {
    let (_temp_dir, config) = setup(&[]);
    let index = build_index(config.clone()).unwrap();
    assert!(index.is_empty());
    assert_eq!(read_json(&config.output_path), json!({"posts": []}));
}

#[test]
fn test_missing_posts_directory() {
    let temp_dir = TempDir::new().unwrap();
    let config = IndexConfig::default()
        .with_posts_dir(temp_dir.path().join("absent"))
        .with_output_path(temp_dir.path().join("index.json"));

    let err = IndexBuilder::new(config).build().unwrap_err();
    assert!(matches!(err, IndexError::PathResolution { .. }));
}

#[test]
fn test_build_does_not_write() {
    let (_temp_dir, config) = setup(&[("a.md", post("A", "2024-01-01", "a"))]);
    let index = IndexBuilder::new(config.clone()).build().unwrap();
    assert_eq!(index.len(), 1);
    assert!(!config.output_path.exists());
}
