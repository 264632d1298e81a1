//! Error types for FCS parsing.

use std::num::ParseIntError;

/// Errors that can occur while parsing an FCS file.
///
/// Every variant is fatal for the parse in progress; no partially populated
/// [`FcsFile`](crate::FcsFile) is ever returned alongside one of these.
#[derive(Debug, thiserror::Error)]
pub enum FcsError {
    /// The version field could not be read (stream too short or I/O failure)
    #[error("Failed to read FCS version: {0}")]
    VersionRead(#[source] ReadFailure),

    /// The version field does not carry the `FCS` prefix
    #[error("Missing FCS version from header (found {version:?}); file is not an FCS file")]
    InvalidFormat {
        /// The version text that was actually read
        version: String,
    },

    /// Discarding reserved or padding bytes failed
    #[error("Failed to skip {count} bytes: {source}")]
    Skip {
        /// Number of bytes that were to be skipped
        count: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The HEADER offset table could not be read or parsed
    #[error("Failed to read HEADER segment offsets: {0}")]
    SegmentRangeRead(#[source] ReadFailure),

    /// The TEXT segment could not be read, decoded or tokenized
    #[error("Failed to read TEXT segment: {0}")]
    TextSegmentRead(#[source] ReadFailure),
}

/// The underlying cause of a failed read stage.
#[derive(Debug, thiserror::Error)]
pub enum ReadFailure {
    /// I/O error from the byte source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before the declared number of bytes was available
    #[error("expected {expected} bytes but only {found} were available; file could be bad or truncated")]
    Truncated {
        /// Bytes the stage needed
        expected: usize,
        /// Bytes actually read before end of stream
        found: usize,
    },

    /// A HEADER offset field is not a base-10 integer
    #[error("{field} offset {value:?} is not a valid integer: {source}")]
    InvalidOffset {
        /// Name of the offending field
        field: &'static str,
        /// Trimmed field text
        value: String,
        /// Integer parse error
        #[source]
        source: ParseIntError,
    },

    /// The declared segment bounds describe a negative length
    #[error("segment bounds {start}..={end} describe a negative size")]
    InvalidSize {
        /// Declared first byte
        start: i64,
        /// Declared last byte
        end: i64,
    },

    /// The bytes are not valid in the configured text encoding
    #[error("invalid {encoding} sequence at byte {position}")]
    Decode {
        /// Name of the encoding in use
        encoding: &'static str,
        /// Offset of the first invalid byte within the segment
        position: usize,
    },

    /// The segment is empty, so there is no delimiter character
    #[error("segment is empty; no delimiter character available")]
    Empty,
}

/// A convenience `Result` alias using [`FcsError`].
pub type Result<T> = std::result::Result<T, FcsError>;
