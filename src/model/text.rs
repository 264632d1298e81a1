use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Decoded TEXT segment and its keyword/value pairs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    /// Raw decoded segment, including the leading delimiter
    pub full_text: String,

    /// Trimmed keyword to trimmed value. Values are never empty: a blank
    /// value is stored as a single space so the keyword is not lost.
    pub kvpair: HashMap<String, String>,
}

impl TextSegment {
    /// Value stored under `keyword`, matched exactly
    pub fn get(&self, keyword: &str) -> Option<&str> {
        self.kvpair.get(keyword).map(String::as_str)
    }

    /// Value stored under `keyword`, ignoring ASCII case
    ///
    /// FCS keywords are case-insensitive, but the mapping keeps them as they
    /// were written. An exact match wins over a case-folded one.
    pub fn get_ignore_case(&self, keyword: &str) -> Option<&str> {
        self.get(keyword).or_else(|| {
            self.kvpair
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(keyword))
                .map(|(_, v)| v.as_str())
        })
    }

    /// Whether `keyword` is present (exact match)
    pub fn contains(&self, keyword: &str) -> bool {
        self.kvpair.contains_key(keyword)
    }

    /// Number of keyword/value pairs
    pub fn len(&self) -> usize {
        self.kvpair.len()
    }

    /// Whether no pairs were parsed
    pub fn is_empty(&self) -> bool {
        self.kvpair.is_empty()
    }

    /// Keywords in sorted order
    pub fn sorted_keywords(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.kvpair.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
