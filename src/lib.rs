//! postindex: builds a JSON listing index for a static blog
//!
//! Each markdown post opens with a small front matter header. The library
//! extracts that header, validates the fields a listing page needs, and
//! writes every post into a single JSON document sorted newest first.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use postindex::{IndexBuilder, IndexConfig, Result};
//!
//! fn main() -> Result<()> {
//!     let config = IndexConfig::default()
//!         .with_posts_dir("content/posts")
//!         .with_output_path("public/index.json");
//!     let index = IndexBuilder::new(config).write_index()?;
//!     println!("{} posts", index.len());
//!     Ok(())
//! }
//! ```
//!
//! Parsing a header on its own:
//!
//! ```rust
//! use postindex::core::{extract, FrontMatterValue};
//!
//! let fm = extract("---\ntitle: Hello\ntags: [a, 'b c']\n---\nbody").unwrap();
//! assert_eq!(fm.get("title").and_then(FrontMatterValue::as_str), Some("Hello"));
//! ```
//!
//! # Architecture
//!
//! - [`crate::core`]: front matter values, the header scanner and post validation
//! - [`io`]: markdown discovery and atomic output writes
//! - [`index`]: configuration and the index builder
//! - [`error`]: the error type shared by all of the above

pub use crate::core::{FrontMatter, FrontMatterValue, PostEntry};
pub use error::{IndexError, Result};
pub use index::{build_index, IndexBuilder, IndexConfig, IndexDocument};

pub mod core;
pub mod error;
pub mod index;
pub mod io;
