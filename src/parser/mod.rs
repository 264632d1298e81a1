//! # FCS Segment Parser
//!
//! Two-stage, all-or-nothing parse of an FCS byte stream:
//!
//! ```text
//! byte 0      6        10                                58   TEXT start     TEXT end
//! ┌─────────┬────────┬──────────────────────────────────┬─────┬───────────────┐
//! │ version │reserved│ 6 × 8-byte ASCII offsets         │ gap │ /K/V/K/V/...  │
//! └─────────┴────────┴──────────────────────────────────┴─────┴───────────────┘
//! ```
//!
//! The HEADER stage fully determines where the TEXT stage seeks and how much
//! it reads. DATA and ANALYSIS are located but never read.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//!
//! let mut bytes = b"FCS3.1    ".to_vec();
//! bytes.extend_from_slice(b"      58      77       0       0       0       0");
//! bytes.extend_from_slice(b"/$PAR/1/$TOT/500/   ");
//!
//! let file = fcsparse::parse(Cursor::new(bytes))?;
//! assert_eq!(file.version(), "FCS3.1");
//! assert_eq!(file.delimiter(), '/');
//! assert_eq!(file.text().get("$TOT"), Some("500"));
//! # Ok::<(), fcsparse::FcsError>(())
//! ```

mod config;
mod header;
mod text;


use std::io::Read;

use log::{info, warn};

use crate::byte_reader::ByteReader;
use crate::error::{FcsError, Result};
use crate::model::FcsFile;

pub use config::{ParserConfig, TextEncoding};
pub use text::{tokenize, BLANK_VALUE};

/// Parse the HEADER and TEXT segments of an FCS stream with default settings.
///
/// The reader is consumed; it is buffered internally and dropped when the
/// parse finishes, whether it succeeded or not.
///
/// # Errors
/// Returns an [`FcsError`] naming the stage that failed:
/// - the version is truncated or lacks the `FCS` prefix
/// - the offset table is truncated or not numeric
/// - the TEXT segment is truncated, empty or not decodable
pub fn parse<R: Read>(reader: R) -> Result<FcsFile> {
    parse_with_config(reader, &ParserConfig::default())
}

/// Parse the HEADER and TEXT segments of an FCS stream.
pub fn parse_with_config<R: Read>(reader: R, config: &ParserConfig) -> Result<FcsFile> {
    let mut reader = ByteReader::new(reader);

    let header_segment = header::parse_header(&mut reader)?;
    let (text_segment, delimiter) = text::parse_text(&mut reader, &header_segment, config)?;

    info!(
        "FCS file parsed: version={}, {} keywords, TEXT {} bytes",
        header_segment.version,
        text_segment.kvpair.len(),
        header_segment.text_segment_size()
    );

    Ok(FcsFile::new(header_segment, text_segment, delimiter))
}

/// Discard `count` bytes; zero or negative counts are a no-op.
fn skip_bytes<R: Read>(reader: &mut ByteReader<R>, count: i64) -> Result<()> {
    if count <= 0 {
        return Ok(());
    }
    // i64 always fits in u64 once positive; clamp for 32-bit targets
    let count = usize::try_from(count).unwrap_or(usize::MAX);

    let skipped = reader
        .skip(count)
        .map_err(|source| FcsError::Skip { count, source })?;
    if (skipped as usize) < count {
        warn!("Stream ended after skipping {} of {} bytes", skipped, count);
    }
    info!("Skipped {} bytes", skipped);
    Ok(())
}

/// Trim the way FCS producers pad fields: any character at or below U+0020,
/// which covers spaces, tabs, line breaks and NUL padding.
pub(crate) fn trim_fcs(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}
