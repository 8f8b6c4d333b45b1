//! Command-line argument definitions

use clap::Parser;
use postindex::IndexConfig;
use std::path::PathBuf;

/// Main CLI application
#[derive(Parser, Debug)]
#[command(
    name = "postindex",
    version,
    about = "Build a JSON listing index from the front matter of markdown blog posts",
    long_about = "postindex reads every .md file in the posts directory, validates its \
                  front matter and writes a single JSON index sorted by date, newest first. \
                  Any invalid post aborts the run and leaves the existing index untouched."
)]
pub struct Cli {
    /// Directory containing the markdown posts
    #[arg(long, value_name = "DIR", default_value = "posts")]
    pub posts_dir: PathBuf,

    /// Path of the JSON index to write
    #[arg(short, long, value_name = "FILE", default_value = "index.json")]
    pub output: PathBuf,

    /// Prefix joined with each slug to form the post URL
    #[arg(long, value_name = "PREFIX", default_value = "/blog/")]
    pub url_prefix: String,

    /// Print the index to stdout instead of writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn index_config(&self) -> IndexConfig {
        IndexConfig::default()
            .with_posts_dir(&self.posts_dir)
            .with_output_path(&self.output)
            .with_url_prefix(&self.url_prefix)
    }

    /// Default log filter implied by the verbosity flags
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        }
    }
}
