//! Normalized post entries
//!
//! A [`PostEntry`] is built once from a validated front matter mapping and
//! never changes afterwards. Validation errors carry no file path here; the
//! index builder attaches it.

use crate::core::value::{FrontMatter, FrontMatterValue};
use crate::error::{IndexError, Result};
use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Fields every post must carry with a non-empty value
pub const REQUIRED_FIELDS: [&str; 6] = ["title", "date", "type", "tags", "excerpt", "slug"];

/// Default URL prefix joined with the slug
pub const DEFAULT_URL_PREFIX: &str = "/blog/";

fn date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"))
}

/// One validated blog post as it appears in the index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostEntry {
    pub title: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    pub slug: String,
    pub thumbnail: String,
    pub media: FrontMatterValue,
    pub url: String,
}

impl PostEntry {
    /// Validate a front matter mapping and build the entry
    pub fn from_front_matter(fm: &FrontMatter, url_prefix: &str) -> Result<Self> {
        let missing = missing_fields(fm);
        if !missing.is_empty() {
            return Err(IndexError::missing_fields(PathBuf::new(), missing));
        }

        let date = required_str(fm, "date")?;
        validate_date(date)?;

        let slug = required_str(fm, "slug")?.to_string();
        let url = format!("{url_prefix}{slug}");

        Ok(Self {
            title: required_str(fm, "title")?.to_string(),
            date: date.to_string(),
            kind: required_str(fm, "type")?.to_string(),
            tags: required_list(fm, "tags")?.to_vec(),
            excerpt: required_str(fm, "excerpt")?.to_string(),
            slug,
            thumbnail: thumbnail(fm)?,
            media: fm.get("media").cloned().unwrap_or_else(default_media),
            url,
        })
    }
}

/// Required fields that are absent, empty strings or empty lists, in declaration order
pub fn missing_fields(fm: &FrontMatter) -> Vec<String> {
    REQUIRED_FIELDS
        .iter()
        .filter(|field| fm.get(field).map_or(true, FrontMatterValue::is_blank))
        .map(|field| field.to_string())
        .collect()
}

/// Check that a date is zero-padded `YYYY-MM-DD` and names a real day
pub fn validate_date(value: &str) -> Result<NaiveDate> {
    if !date_re().is_match(value) {
        return Err(IndexError::invalid_date(PathBuf::new(), value));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| IndexError::invalid_date(PathBuf::new(), value))
}

/// Media object used when a post has none
pub fn default_media() -> FrontMatterValue {
    let media: FrontMatter = [
        ("kind", FrontMatterValue::string("none")),
        ("youtube_id", FrontMatterValue::string("")),
        ("images", FrontMatterValue::List(Vec::new())),
    ]
    .into_iter()
    .collect();
    FrontMatterValue::Object(media)
}

fn required_str<'a>(fm: &'a FrontMatter, field: &str) -> Result<&'a str> {
    match fm.get(field) {
        Some(FrontMatterValue::String(s)) => Ok(s),
        Some(other) => Err(wrong_shape(field, "string", other)),
        None => Err(IndexError::missing_fields(PathBuf::new(), vec![field.to_string()])),
    }
}

fn required_list<'a>(fm: &'a FrontMatter, field: &str) -> Result<&'a [String]> {
    match fm.get(field) {
        Some(FrontMatterValue::List(items)) => Ok(items),
        Some(other) => Err(wrong_shape(field, "list", other)),
        None => Err(IndexError::missing_fields(PathBuf::new(), vec![field.to_string()])),
    }
}

fn thumbnail(fm: &FrontMatter) -> Result<String> {
    match fm.get("thumbnail") {
        None => Ok(String::new()),
        Some(value) if value.is_falsy() => Ok(String::new()),
        Some(FrontMatterValue::String(s)) => Ok(s.clone()),
        Some(other) => Err(wrong_shape("thumbnail", "string", other)),
    }
}

fn wrong_shape(field: &str, expected: &str, found: &FrontMatterValue) -> IndexError {
    IndexError::invalid_field(
        PathBuf::new(),
        field,
        format!("expected {expected}, found {}", found.type_name()),
    )
}
