//! TEXT segment: locate, read, decode, tokenize.

use std::collections::HashMap;
use std::io::Read;

use log::{debug, warn};

use super::config::{ParserConfig, TextEncoding};
use super::{skip_bytes, trim_fcs};
use crate::byte_reader::ByteReader;
use crate::error::{FcsError, ReadFailure, Result};
use crate::model::{HeaderSegment, TextSegment};

/// Value stored for keywords whose value is blank after trimming
pub const BLANK_VALUE: &str = " ";

/// Read and tokenize the TEXT segment described by `header`.
///
/// The reader must be positioned just past the HEADER.
pub(super) fn parse_text<R: Read>(
    reader: &mut ByteReader<R>,
    header: &HeaderSegment,
    config: &ParserConfig,
) -> Result<(TextSegment, char)> {
    seek_to_text_start(reader, header)?;
    let full_text = read_full_text(reader, header, config.text_encoding)?;
    let delimiter = resolve_delimiter(&full_text)?;
    let kvpair = tokenize(&full_text, delimiter);

    Ok((TextSegment { full_text, kvpair }, delimiter))
}

/// Skip any padding between the end of the HEADER and the TEXT start.
pub(super) fn seek_to_text_start<R: Read>(
    reader: &mut ByteReader<R>,
    header: &HeaderSegment,
) -> Result<()> {
    let gap = i64::from(header.text_segment_start) - HeaderSegment::HEADER_SEGMENT_SIZE as i64;
    skip_bytes(reader, gap)
}

/// Read exactly the declared TEXT size and decode it.
pub(super) fn read_full_text<R: Read>(
    reader: &mut ByteReader<R>,
    header: &HeaderSegment,
    encoding: TextEncoding,
) -> Result<String> {
    let size = header.text_segment_size();
    let invalid_size = || {
        FcsError::TextSegmentRead(ReadFailure::InvalidSize {
            start: i64::from(header.text_segment_start),
            end: i64::from(header.text_segment_end),
        })
    };
    if size < 0 {
        return Err(invalid_size());
    }
    let size = usize::try_from(size).map_err(|_| invalid_size())?;

    debug!("Read FCS TEXT segment of size {}", size);
    let bytes = reader
        .read_up_to(size)
        .map_err(|e| FcsError::TextSegmentRead(e.into()))?;

    if bytes.len() < size {
        return Err(FcsError::TextSegmentRead(ReadFailure::Truncated {
            expected: size,
            found: bytes.len(),
        }));
    }

    encoding.decode(bytes).map_err(FcsError::TextSegmentRead)
}

/// The first character of the TEXT segment is its delimiter.
pub(super) fn resolve_delimiter(full_text: &str) -> Result<char> {
    let delimiter = full_text
        .chars()
        .next()
        .ok_or(FcsError::TextSegmentRead(ReadFailure::Empty))?;
    debug!("TEXT delimiter: {:?}", delimiter);
    Ok(delimiter)
}

/// Split TEXT content into keyword/value pairs.
///
/// The text is split on every literal occurrence of `delimiter`; the first
/// token (everything before the first delimiter, normally empty) is discarded
/// and the remaining tokens are taken as alternating keyword, value. A final
/// keyword with no value is dropped. Keywords and values are trimmed, a blank
/// value becomes [`BLANK_VALUE`], and a repeated keyword keeps its last value.
///
/// Doubled delimiters (the FCS escape for a literal delimiter) are not
/// reassembled; they yield empty tokens like any other delimiter pair.
pub fn tokenize(full_text: &str, delimiter: char) -> HashMap<String, String> {
    let tokens: Vec<&str> = full_text.split(delimiter).collect();
    let body = tokens.get(1..).unwrap_or_default();

    let pairs = body.chunks_exact(2);
    if let [dangling] = pairs.remainder() {
        if trim_fcs(dangling).is_empty() {
            debug!("Ignoring empty trailing token in TEXT segment");
        } else {
            warn!("Dropping TEXT keyword {:?} with no value", trim_fcs(dangling));
        }
    }

    let mut kvpair = HashMap::with_capacity(body.len() / 2);
    for pair in pairs {
        let key = trim_fcs(pair[0]);
        let value = match trim_fcs(pair[1]) {
            "" => BLANK_VALUE,
            value => value,
        };
        kvpair.insert(key.to_string(), value.to_string());
    }

    debug!("Parsed {} TEXT keyword/value pairs", kvpair.len());
    kvpair
}
