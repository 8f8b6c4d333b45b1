//! Core types for front matter extraction and post normalization
//!
//! - FrontMatterValue / FrontMatter: the values a header can hold
//! - parser: locates and scans the delimited header block
//! - PostEntry: one validated post as written to the index

pub mod parser;
pub mod post;
pub mod value;

pub use parser::{extract, parse_value, split_header};
pub use post::{default_media, missing_fields, validate_date, PostEntry, REQUIRED_FIELDS};
pub use value::{FrontMatter, FrontMatterValue};
