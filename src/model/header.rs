use serde::{Deserialize, Serialize};

/// Fixed-layout HEADER segment of an FCS file
///
/// All offsets are inclusive byte positions measured from the first byte of
/// the file. A `0,0` pair conventionally means the segment is absent (or, for
/// FCS 3.x, that its real offsets live in the TEXT segment).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderSegment {
    /// Format version tag, e.g. `"FCS3.1"`
    pub version: String,

    /// First byte of the TEXT segment
    pub text_segment_start: i32,

    /// Last byte of the TEXT segment
    pub text_segment_end: i32,

    /// First byte of the DATA segment
    pub data_segment_start: i64,

    /// Last byte of the DATA segment
    pub data_segment_end: i64,

    /// First byte of the ANALYSIS segment
    pub analysis_segment_start: i64,

    /// Last byte of the ANALYSIS segment
    pub analysis_segment_end: i64,
}

impl HeaderSegment {
    /// Size of the version field in bytes
    pub const VERSION_SIZE: usize = 6;

    /// Size of the reserved (blank) field following the version
    pub const RESERVED_SIZE: usize = 4;

    /// Size of the six-field offset table
    pub const SEGMENT_RANGE_SIZE: usize = 48;

    /// Width of each ASCII offset field
    pub const OFFSET_FIELD_WIDTH: usize = 8;

    /// Total HEADER size; the TEXT segment can begin no earlier than this
    pub const HEADER_SEGMENT_SIZE: usize =
        Self::VERSION_SIZE + Self::RESERVED_SIZE + Self::SEGMENT_RANGE_SIZE;

    /// Prefix every FCS version tag starts with
    pub const FCS_PREFIX: &'static str = "FCS";

    /// Number of bytes in the TEXT segment (`end - start + 1`)
    ///
    /// Computed in 64-bit so that corrupt offsets cannot overflow.
    pub fn text_segment_size(&self) -> i64 {
        i64::from(self.text_segment_end) - i64::from(self.text_segment_start) + 1
    }

    /// Number of bytes in the DATA segment (`end - start + 1`)
    pub fn data_segment_size(&self) -> i64 {
        self.data_segment_end - self.data_segment_start + 1
    }

    /// Number of bytes in the ANALYSIS segment (`end - start + 1`)
    pub fn analysis_segment_size(&self) -> i64 {
        self.analysis_segment_end - self.analysis_segment_start + 1
    }

    /// Version number without the `FCS` prefix, e.g. `"3.1"`
    pub fn version_number(&self) -> &str {
        self.version
            .strip_prefix(Self::FCS_PREFIX)
            .unwrap_or(&self.version)
            .trim()
    }
}
