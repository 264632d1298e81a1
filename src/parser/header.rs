//! HEADER segment: version, reserved bytes, offset table.

use std::io::Read;
use std::num::ParseIntError;
use std::str::FromStr;

use log::{debug, info, warn};

use super::config::decode_latin1;
use super::{skip_bytes, trim_fcs};
use crate::byte_reader::ByteReader;
use crate::error::{FcsError, ReadFailure, Result};
use crate::model::HeaderSegment;

/// Names of the six offset fields, in file order
const OFFSET_FIELDS: [&str; 6] = [
    "TEXT start",
    "TEXT end",
    "DATA start",
    "DATA end",
    "ANALYSIS start",
    "ANALYSIS end",
];

/// Parse the full 58-byte HEADER: version, reserved bytes, offset table.
pub(super) fn parse_header<R: Read>(reader: &mut ByteReader<R>) -> Result<HeaderSegment> {
    let version = parse_version(reader)?;
    skip_reserved(reader)?;
    let offsets = parse_offset_table(reader)?;

    Ok(HeaderSegment { version, ..offsets })
}

/// Read the 6-byte version tag and check its `FCS` prefix.
pub(super) fn parse_version<R: Read>(reader: &mut ByteReader<R>) -> Result<String> {
    info!("Read FCS version");
    let bytes = reader
        .read_up_to(HeaderSegment::VERSION_SIZE)
        .map_err(|e| FcsError::VersionRead(e.into()))?;

    if bytes.len() < HeaderSegment::VERSION_SIZE {
        info!("FCS version field is truncated; file is not an FCS file");
        return Err(FcsError::VersionRead(ReadFailure::Truncated {
            expected: HeaderSegment::VERSION_SIZE,
            found: bytes.len(),
        }));
    }

    let version = decode_latin1(&bytes);
    if !version.starts_with(HeaderSegment::FCS_PREFIX) {
        warn!("Missing FCS version from header ({:?}); file is not an FCS file", version);
        return Err(FcsError::InvalidFormat { version });
    }

    debug!("FCS version: {}", version);
    Ok(version)
}

/// Discard the reserved bytes between the version and the offset table.
pub(super) fn skip_reserved<R: Read>(reader: &mut ByteReader<R>) -> Result<()> {
    skip_bytes(reader, HeaderSegment::RESERVED_SIZE as i64)
}

/// Read the 48-byte offset table and parse its six fixed-width fields.
///
/// The returned header has an empty `version`; [`parse_header`] fills it in.
pub(super) fn parse_offset_table<R: Read>(reader: &mut ByteReader<R>) -> Result<HeaderSegment> {
    info!("Read FCS header offsets of size {}", HeaderSegment::SEGMENT_RANGE_SIZE);
    let bytes = reader
        .read_up_to(HeaderSegment::SEGMENT_RANGE_SIZE)
        .map_err(|e| FcsError::SegmentRangeRead(e.into()))?;

    if bytes.len() < HeaderSegment::SEGMENT_RANGE_SIZE {
        return Err(FcsError::SegmentRangeRead(ReadFailure::Truncated {
            expected: HeaderSegment::SEGMENT_RANGE_SIZE,
            found: bytes.len(),
        }));
    }

    // 48 bytes always yield exactly six fields
    let fields: Vec<&[u8]> = bytes
        .chunks_exact(HeaderSegment::OFFSET_FIELD_WIDTH)
        .collect();

    let header = HeaderSegment {
        version: String::new(),
        text_segment_start: parse_offset(0, fields[0])?,
        text_segment_end: parse_offset(1, fields[1])?,
        data_segment_start: parse_offset(2, fields[2])?,
        data_segment_end: parse_offset(3, fields[3])?,
        analysis_segment_start: parse_offset(4, fields[4])?,
        analysis_segment_end: parse_offset(5, fields[5])?,
    };

    debug!(
        "Segment offsets: TEXT {}..={}, DATA {}..={}, ANALYSIS {}..={}",
        header.text_segment_start,
        header.text_segment_end,
        header.data_segment_start,
        header.data_segment_end,
        header.analysis_segment_start,
        header.analysis_segment_end
    );

    Ok(header)
}

/// Parse one trimmed, base-10 offset field
fn parse_offset<T>(index: usize, raw: &[u8]) -> Result<T>
where
    T: FromStr<Err = ParseIntError>,
{
    let text = decode_latin1(raw);
    let value = trim_fcs(&text);
    value.parse().map_err(|source| {
        FcsError::SegmentRangeRead(ReadFailure::InvalidOffset {
            field: OFFSET_FIELDS[index],
            value: value.to_string(),
            source,
        })
    })
}
