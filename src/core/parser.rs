//! Front matter extraction
//!
//! Headers are a small, line-oriented dialect: `key: value` pairs at the top
//! level, plus objects one level deep introduced by a bare `key:` line and
//! filled by lines indented with at least two spaces.
//!
//! ```text
//! ---
//! title: "Hello, world"
//! tags: [rust, 'static sites']
//! draft: false
//! media:
//!   kind: video
//!   youtube_id: dQw4w9WgXcQ
//! ---
//! ```
//!
//! Scanning is a two-state machine: either no object is open, or one named
//! object is collecting indented lines. Blank lines never change the state;
//! only the next non-indented content line closes an open object.

use crate::core::value::{FrontMatter, FrontMatterValue};
use crate::error::{IndexError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Marker line that opens and closes the header block
pub const DELIMITER: &str = "---";

/// Minimum indentation for a line to belong to an open object
const NESTED_INDENT: usize = 2;

fn object_open_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]+:\s*$").expect("valid object regex"))
}

/// Parse the front matter of a document into a mapping
///
/// Fails with a format error when the document does not open with a
/// delimited header block, or when a header line cannot be scanned.
pub fn extract(text: &str) -> Result<FrontMatter> {
    let (header, _body) = split_header(text)
        .ok_or_else(|| IndexError::format("missing header block (--- ... ---)"))?;

    let mut scanner = Scanner::new();
    for (idx, line) in header.iter().enumerate() {
        // +2: one for 1-based numbering, one for the opening delimiter
        scanner.feed(idx + 2, line)?;
    }
    Ok(scanner.finish())
}

/// Split a document into its header lines and the body after the closing delimiter
///
/// The opening delimiter must be the first line. Trailing whitespace on
/// delimiter lines is tolerated, and the closing delimiter may end the text
/// without a newline.
pub fn split_header(text: &str) -> Option<(Vec<&str>, &str)> {
    let mut offset = 0;
    let mut lines = text.split_inclusive('\n');

    let first = lines.next()?;
    if !is_delimiter(first) {
        return None;
    }
    offset += first.len();

    let mut header = Vec::new();
    for line in lines {
        offset += line.len();
        if is_delimiter(line) {
            return Some((header, &text[offset..]));
        }
        header.push(line.trim_end_matches(['\n', '\r']));
    }
    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Parse a raw value from the right-hand side of a colon
///
/// Quoted text is unquoted without escape processing, `[a, b]` becomes a
/// list, `true`/`false` in any case become booleans and everything else
/// stays a string. Numbers are not coerced.
pub fn parse_value(raw: &str) -> FrontMatterValue {
    let v = raw.trim();

    if let Some(inner) = strip_quotes(v) {
        return FrontMatterValue::string(inner);
    }

    if let Some(inner) = v.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let inner = inner.trim();
        if inner.is_empty() {
            return FrontMatterValue::List(Vec::new());
        }
        return FrontMatterValue::list(inner.split(',').map(|part| {
            let part = part.trim();
            strip_quotes(part).unwrap_or(part)
        }));
    }

    if v.eq_ignore_ascii_case("true") {
        return FrontMatterValue::Bool(true);
    }
    if v.eq_ignore_ascii_case("false") {
        return FrontMatterValue::Bool(false);
    }

    FrontMatterValue::string(v)
}

/// Strip one layer of matching double or single quotes
fn strip_quotes(v: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|q| {
        if v.len() >= 2 && v.starts_with(q) && v.ends_with(q) {
            Some(&v[1..v.len() - 1])
        } else {
            None
        }
    })
}

/// Which object, if any, indented lines attach to
#[derive(Debug, PartialEq)]
enum Scope {
    TopLevel,
    Object {
        key: String,
        /// Indentation of the first nested line, fixed once seen
        indent: Option<usize>,
        fields: FrontMatter,
    },
}

#[derive(Debug, PartialEq)]
enum LineKind<'a> {
    Blank,
    ObjectOpen(&'a str),
    Nested {
        indent: usize,
        content: &'a str,
    },
    TopLevel(&'a str),
}

/// Line-by-line header scanner
#[derive(Debug)]
struct Scanner {
    data: FrontMatter,
    scope: Scope,
}

impl Scanner {
    fn new() -> Self {
        Self {
            data: FrontMatter::new(),
            scope: Scope::TopLevel,
        }
    }

    fn classify<'a>(&self, line: &'a str) -> LineKind<'a> {
        if line.trim().is_empty() {
            return LineKind::Blank;
        }
        if object_open_re().is_match(line) {
            let key = line.split(':').next().unwrap_or_default();
            return LineKind::ObjectOpen(key);
        }
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent >= NESTED_INDENT && matches!(self.scope, Scope::Object { .. }) {
            return LineKind::Nested {
                indent,
                content: line.trim(),
            };
        }
        LineKind::TopLevel(line)
    }

    fn feed(&mut self, line_no: usize, line: &str) -> Result<()> {
        match self.classify(line) {
            LineKind::Blank => {}
            LineKind::ObjectOpen(key) => {
                self.close_scope();
                self.scope = Scope::Object {
                    key: key.to_string(),
                    indent: None,
                    fields: FrontMatter::new(),
                };
            }
            LineKind::Nested { indent, content } => {
                let (key, value) = split_pair(line_no, content)?;
                if let Scope::Object {
                    key: object,
                    indent: expected,
                    fields,
                } = &mut self.scope
                {
                    let expected = *expected.get_or_insert(indent);
                    if indent > expected {
                        return Err(IndexError::format(format!(
                            "line {line_no}: nesting deeper than one level under `{object}`"
                        )));
                    }
                    fields.insert(key, value);
                }
            }
            LineKind::TopLevel(line) => {
                self.close_scope();
                let (key, value) = split_pair(line_no, line)?;
                self.data.insert(key, value);
            }
        }
        Ok(())
    }

    fn close_scope(&mut self) {
        if let Scope::Object { key, fields, .. } =
            std::mem::replace(&mut self.scope, Scope::TopLevel)
        {
            self.data.insert(key, fields);
        }
    }

    fn finish(mut self) -> FrontMatter {
        self.close_scope();
        self.data
    }
}

/// Split `key: value` on the first colon
fn split_pair(line_no: usize, line: &str) -> Result<(String, FrontMatterValue)> {
    let (key, raw) = line.split_once(':').ok_or_else(|| {
        IndexError::format(format!("line {line_no}: expected `key: value`, found {:?}", line.trim()))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(IndexError::format(format!("line {line_no}: empty key")));
    }
    Ok((key.to_string(), parse_value(raw)))
}
