//! Index building
//!
//! The builder reads every post in the configured directory, validates it,
//! and produces an [`IndexDocument`] sorted newest first. Any failing post
//! aborts the whole run before anything is written.

use crate::core::{extract, PostEntry};
use crate::core::post::DEFAULT_URL_PREFIX;
use crate::error::Result;
use crate::io::{list_markdown_files, read_to_string, write_atomic};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where posts are read from and where the index goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Directory holding the markdown posts
    pub posts_dir: PathBuf,
    /// Destination of the JSON index
    pub output_path: PathBuf,
    /// Prefix joined with each slug to form the post URL
    pub url_prefix: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("posts"),
            output_path: PathBuf::from("index.json"),
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
        }
    }
}

impl IndexConfig {
    pub fn with_posts_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.posts_dir = dir.into();
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_url_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.url_prefix = prefix.into();
        self
    }
}

/// The aggregated, sorted collection of posts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexDocument {
    pub posts: Vec<PostEntry>,
}

impl IndexDocument {
    /// Sort newest first; equal dates keep their discovery order
    pub fn from_entries(mut posts: Vec<PostEntry>) -> Self {
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        Self { posts }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Pretty JSON with two-space indentation and a trailing newline
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Builds the index from a posts directory
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    pub fn new(config: IndexConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Read and validate every post, returning the sorted index
    pub fn build(&self) -> Result<IndexDocument> {
        let files = list_markdown_files(&self.config.posts_dir)?;
        if files.is_empty() {
            warn!(
                "No markdown files found in {}",
                self.config.posts_dir.display()
            );
        }

        let mut entries = Vec::with_capacity(files.len());
        for file in &files {
            entries.push(self.build_entry(file)?);
        }
        Ok(IndexDocument::from_entries(entries))
    }

    /// Parse and validate a single post file
    pub fn build_entry(&self, file: &Path) -> Result<PostEntry> {
        debug!("Processing file: {}", file.display());
        let label = file.file_name().map(Path::new).unwrap_or(file);
        let text = read_to_string(file).map_err(|e| e.with_path(label))?;

        let front_matter = extract(&text).map_err(|e| e.with_path(label))?;
        PostEntry::from_front_matter(&front_matter, &self.config.url_prefix)
            .map_err(|e| e.with_path(label))
    }

    /// Build the index and replace the output file with it
    pub fn write_index(&self) -> Result<IndexDocument> {
        let index = self.build()?;
        let json = index.to_json()?;
        write_atomic(&self.config.output_path, &json)?;
        info!(
            "Wrote {} with {} posts",
            self.config.output_path.display(),
            index.len()
        );
        Ok(index)
    }
}

/// Build and write the index using `config`
pub fn build_index(config: IndexConfig) -> Result<IndexDocument> {
    IndexBuilder::new(config).write_index()
}
