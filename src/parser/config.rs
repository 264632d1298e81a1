//! Parser settings: TEXT segment encoding.

use serde::Deserialize;

use crate::error::ReadFailure;

/// Configuration for parsing FCS files
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Encoding used to decode the TEXT segment
    pub text_encoding: TextEncoding,
}

impl ParserConfig {
    /// Use the given TEXT segment encoding
    pub fn with_text_encoding(mut self, text_encoding: TextEncoding) -> Self {
        self.text_encoding = text_encoding;
        self
    }
}

/// Character encoding applied to the TEXT segment bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum TextEncoding {
    /// ISO-8859-1: every byte maps to exactly one character; decoding cannot fail
    #[default]
    #[serde(rename = "latin1", alias = "iso-8859-1", alias = "latin-1")]
    Latin1,

    /// Strict UTF-8; invalid sequences are reported as errors
    #[serde(rename = "utf-8", alias = "utf8")]
    Utf8,
}

impl TextEncoding {
    /// Human-readable encoding name
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Latin1 => "ISO-8859-1",
            TextEncoding::Utf8 => "UTF-8",
        }
    }

    /// Decode one segment's bytes
    pub fn decode(&self, bytes: Vec<u8>) -> Result<String, ReadFailure> {
        match self {
            TextEncoding::Latin1 => Ok(decode_latin1(&bytes)),
            TextEncoding::Utf8 => String::from_utf8(bytes).map_err(|e| ReadFailure::Decode {
                encoding: self.name(),
                position: e.utf8_error().valid_up_to(),
            }),
        }
    }
}

/// ISO-8859-1 decode: byte value == Unicode scalar value
pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
