//! Frontmatter header parsing.
//!
//! A skill document starts with a metadata header delimited by `---` lines.
//! Only flat `key: value` pairs are recognized — a deliberately small
//! subset instead of a full YAML crate, which is everything the packaging
//! convention requires. Lines without a colon are silently ignored, and a
//! duplicated key keeps its last value.

use std::collections::HashMap;
use std::fmt;

/// Literal marker that opens and closes the metadata header.
pub const HEADER_DELIMITER: &str = "---";

/// Why a header failed to parse.
///
/// Either failure blocks every downstream check — without a parsed header
/// there is nothing for the field validators to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// The document does not begin with the delimiter on its own line.
    MissingStart,
    /// No closing delimiter line before end of input.
    MissingEnd,
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::MissingStart => {
                write!(f, "SKILL.md must start with '{HEADER_DELIMITER}' on its own line")
            }
            HeaderError::MissingEnd => {
                write!(f, "frontmatter must end with '{HEADER_DELIMITER}' on its own line")
            }
        }
    }
}

/// Parsed metadata header: flat string fields keyed by name.
#[derive(Debug, Default)]
pub struct Frontmatter {
    fields: HashMap<String, String>,
}

impl Frontmatter {
    /// Returns the value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Parses the metadata header from the full document text.
///
/// The first line must be exactly the delimiter; the header runs until the
/// next line whose trimmed form is the delimiter. Between the two, each
/// line containing a colon is split on the first colon into a key and a
/// value, both trimmed; a value wrapped in a matching pair of double
/// quotes has the quotes stripped (the inside is not re-trimmed).
///
/// # Errors
///
/// [`HeaderError::MissingStart`] when the document does not begin with the
/// delimiter, [`HeaderError::MissingEnd`] when no closing delimiter exists.
pub fn parse(content: &str) -> Result<Frontmatter, HeaderError> {
    // The opening delimiter must be the entire first line.
    if !content.starts_with("---\n") {
        return Err(HeaderError::MissingStart);
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let closing = lines
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, line)| line.trim() == HEADER_DELIMITER)
        .map(|(idx, _)| idx)
        .ok_or(HeaderError::MissingEnd)?;

    let mut fields = HashMap::new();
    for line in &lines[1..closing] {
        // Lines without a colon are ignored, not flagged.
        let Some(colon) = line.find(':') else {
            continue;
        };
        let key = line[..colon].trim().to_string();
        let mut value = line[colon + 1..].trim();
        if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
            value = &value[1..value.len() - 1];
        }
        // Last value wins for duplicate keys.
        fields.insert(key, value.to_string());
    }

    Ok(Frontmatter { fields })
}
