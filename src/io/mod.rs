pub mod fs;

pub use fs::{is_markdown, list_markdown_files, read_to_string, write_atomic};
