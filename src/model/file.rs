use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{HeaderSegment, TextSegment};

/// A parsed FCS file: HEADER offsets, TEXT keywords and the TEXT delimiter.
///
/// Produced by [`parse`](crate::parse); the fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FcsFile {
    header_segment: HeaderSegment,
    text_segment: TextSegment,
    delimiter: char,
}

impl FcsFile {
    pub(crate) fn new(header_segment: HeaderSegment, text_segment: TextSegment, delimiter: char) -> Self {
        Self {
            header_segment,
            text_segment,
            delimiter,
        }
    }

    /// The HEADER segment
    pub fn header(&self) -> &HeaderSegment {
        &self.header_segment
    }

    /// The TEXT segment
    pub fn text(&self) -> &TextSegment {
        &self.text_segment
    }

    /// Delimiter character of the TEXT segment
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Format version tag from the HEADER
    pub fn version(&self) -> &str {
        &self.header_segment.version
    }

    /// Keyword/value mapping from the TEXT segment
    pub fn keywords(&self) -> &HashMap<String, String> {
        &self.text_segment.kvpair
    }

    /// Split into the owned HEADER and TEXT segments
    pub fn into_parts(self) -> (HeaderSegment, TextSegment, char) {
        (self.header_segment, self.text_segment, self.delimiter)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize to indented JSON
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON produced by [`FcsFile::to_json`]
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
