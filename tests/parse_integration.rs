//! Integration tests for fcsparse
//!
//! These tests drive the public API end to end: byte stream in, FcsFile or
//! FcsError out, plus the validator on top of a parsed file.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Write};

use fcsparse::{FcsError, FcsFile, ReadFailure};
use tempfile::NamedTempFile;

// ============================================================================
// Helper Functions
// ============================================================================

/// Assemble an FCS byte stream with `gap` filler bytes between HEADER and TEXT
fn build_fcs(version: &str, gap: usize, text: &[u8]) -> Vec<u8> {
    let start = 58 + gap;
    let end = start + text.len() - 1;
    build_fcs_with_offsets(version, gap, text, [start as i64, end as i64, 0, 0, 0, 0])
}

fn build_fcs_with_offsets(version: &str, gap: usize, text: &[u8], offsets: [i64; 6]) -> Vec<u8> {
    let mut bytes = format!("{:<6}", version).into_bytes();
    bytes.extend_from_slice(&[0u8; 4]);
    for offset in offsets {
        bytes.extend_from_slice(format!("{:>8}", offset).as_bytes());
    }
    bytes.extend(std::iter::repeat(b' ').take(gap));
    bytes.extend_from_slice(text);
    bytes
}

fn parse_bytes(bytes: Vec<u8>) -> fcsparse::Result<FcsFile> {
    fcsparse::parse(Cursor::new(bytes))
}

fn mapping(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Successful Parses
// ============================================================================

#[test]
fn test_comma_delimited_text_with_padding() {
    let file = parse_bytes(build_fcs("FCS3.1", 0, b",KEY1,VAL1,KEY2,    ")).unwrap();

    assert_eq!(file.version(), "FCS3.1");
    assert_eq!(file.delimiter(), ',');
    assert_eq!(file.header().text_segment_start, 58);
    assert_eq!(file.header().text_segment_end, 77);
    assert_eq!(file.header().text_segment_size(), 20);
    assert_eq!(file.keywords(), &mapping(&[("KEY1", "VAL1"), ("KEY2", " ")]));
    assert_eq!(file.text().full_text, ",KEY1,VAL1,KEY2,    ");
}

#[test]
fn test_unpadded_text_keeps_blank_last_value() {
    let file = parse_bytes(build_fcs("FCS3.1", 0, b",KEY1,VAL1,KEY2,")).unwrap();

    assert_eq!(file.header().text_segment_size(), 16);
    assert_eq!(file.keywords(), &mapping(&[("KEY1", "VAL1"), ("KEY2", " ")]));

    let file = parse_bytes(build_fcs("FCS3.1", 0, b",A,1,B,,")).unwrap();
    assert_eq!(file.keywords(), &mapping(&[("A", "1"), ("B", " ")]));
}

#[test]
fn test_duplicate_keyword_last_wins() {
    let file = parse_bytes(build_fcs("FCS3.0", 0, b",K,V1,K,V2,")).unwrap();
    assert_eq!(file.keywords(), &mapping(&[("K", "V2")]));
}

#[test]
fn test_dangling_keyword_dropped() {
    let file = parse_bytes(build_fcs("FCS2.0", 0, b"/A/1/B")).unwrap();
    assert_eq!(file.keywords(), &mapping(&[("A", "1")]));
}

#[test]
fn test_gap_between_header_and_text_is_skipped() {
    let file = parse_bytes(build_fcs("FCS3.1", 198, b"|$PAR|2|$TOT|10|")).unwrap();

    assert_eq!(file.header().text_segment_start, 256);
    assert_eq!(file.delimiter(), '|');
    assert_eq!(file.text().parameter_count(), Some(2));
    assert_eq!(file.text().event_count(), Some(10));
}

#[test]
fn test_latin1_bytes_map_to_single_chars() {
    let file = parse_bytes(build_fcs("FCS3.1", 0, b"/$OP/Jos\xe9/$SYS/\xb5OS/")).unwrap();

    assert_eq!(file.text().get("$OP"), Some("Jos\u{e9}"));
    assert_eq!(file.text().get("$SYS"), Some("\u{b5}OS"));
}

#[test]
fn test_data_and_analysis_offsets_exposed_but_not_read() {
    let text = b"/$BEGINDATA/0/$ENDDATA/0/";
    let end = 58 + text.len() as i64 - 1;
    // DATA and ANALYSIS lie past the end of the stream
    let bytes = build_fcs_with_offsets("FCS3.1", 0, text, [58, end, 4096, 8191, 9000, 9099]);
    let file = parse_bytes(bytes).unwrap();

    assert_eq!(file.header().data_segment_size(), 4096);
    assert_eq!(file.header().analysis_segment_size(), 100);
}

#[test]
fn test_parse_from_file_on_disk() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(&build_fcs("FCS3.1", 32, b"\\$CYT\\FACSCanto\\$TOT\\1000\\"))
        .unwrap();
    tmp.flush().unwrap();

    let file = fcsparse::parse(File::open(tmp.path()).unwrap()).unwrap();
    assert_eq!(file.delimiter(), '\\');
    assert_eq!(file.text().get("$CYT"), Some("FACSCanto"));
    assert_eq!(file.text().get("$TOT"), Some("1000"));
}

#[test]
fn test_json_roundtrip_preserves_file() {
    let file = parse_bytes(build_fcs("FCS3.1", 0, b"/$PAR/1/$P1N/FSC-A/")).unwrap();
    let json = file.to_json().unwrap();
    assert_eq!(FcsFile::from_json(&json).unwrap(), file);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_empty_stream_fails_version_read() {
    let err = parse_bytes(Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        FcsError::VersionRead(ReadFailure::Truncated {
            expected: 6,
            found: 0
        })
    ));
}

#[test]
fn test_non_fcs_stream_is_invalid_format() {
    let err = parse_bytes(b"GIF89a and then some more bytes".to_vec()).unwrap_err();
    match err {
        FcsError::InvalidFormat { version } => assert_eq!(version, "GIF89a"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_truncated_offset_table() {
    let mut bytes = b"FCS3.1    ".to_vec();
    bytes.extend_from_slice(b"      58      77");
    let err = parse_bytes(bytes).unwrap_err();
    assert!(matches!(
        err,
        FcsError::SegmentRangeRead(ReadFailure::Truncated {
            expected: 48,
            found: 16
        })
    ));
}

#[test]
fn test_non_numeric_offset() {
    let mut bytes = b"FCS3.1    ".to_vec();
    bytes.extend_from_slice(b"      58     xyz       0       0       0       0");
    let err = parse_bytes(bytes).unwrap_err();
    match err {
        FcsError::SegmentRangeRead(ReadFailure::InvalidOffset { field, value, .. }) => {
            assert_eq!(field, "TEXT end");
            assert_eq!(value, "xyz");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_text_shorter_than_declared() {
    let bytes = build_fcs_with_offsets("FCS3.1", 0, b"/A/1/", [58, 157, 0, 0, 0, 0]);
    let err = parse_bytes(bytes).unwrap_err();
    assert!(matches!(
        err,
        FcsError::TextSegmentRead(ReadFailure::Truncated {
            expected: 100,
            found: 5
        })
    ));
    assert!(err.to_string().contains("truncated"));
}

#[test]
fn test_empty_text_segment() {
    let bytes = build_fcs_with_offsets("FCS3.1", 0, b"", [58, 57, 0, 0, 0, 0]);
    let err = parse_bytes(bytes).unwrap_err();
    assert!(matches!(err, FcsError::TextSegmentRead(ReadFailure::Empty)));
}

// ============================================================================
// Validation on top of parsing
// ============================================================================

#[test]
fn test_validate_parsed_file() {
    let text = b"/$BYTEORD/1,2,3,4/$DATATYPE/F/$MODE/L/$PAR/1/$TOT/10/$P1N/FSC-A/";
    let end = 58 + text.len() as i64 - 1;
    let bytes = build_fcs_with_offsets("FCS3.1", 0, text, [58, end, end + 1, end + 40, 0, 0]);
    let file = parse_bytes(bytes).unwrap();

    let report = fcsparse::validator::validate(&file, "memory");
    assert!(!report.has_failures(), "{}", report);
    assert!(!report.has_warnings(), "{}", report);
}

#[test]
fn test_validate_flags_missing_keywords() {
    let file = parse_bytes(build_fcs("FCS3.1", 0, b"/$PAR/2/$P1N/FSC-A/")).unwrap();

    let report = fcsparse::validator::validate(&file, "memory");
    assert!(!report.has_failures(), "{}", report);
    assert!(report.has_warnings());

    let tot = report.check("Required keyword $TOT").unwrap();
    assert!(tot.status.is_warning());
    let names = report.check("Parameter names").unwrap();
    assert!(names.status.is_warning());
}

#[test]
fn test_validate_survives_huge_parameter_count() {
    let file = parse_bytes(build_fcs("FCS3.1", 0, b"/$PAR/18446744073709551615/")).unwrap();

    let report = fcsparse::validator::validate(&file, "memory");
    let names = report.check("Parameter names").unwrap();
    assert!(names.status.is_warning());
    assert!(report.to_string().len() < 4096);
}

// ============================================================================
// Property-Based Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn keyword() -> impl Strategy<Value = String> {
        "[A-Za-z$][A-Za-z0-9$]{0,8}"
    }

    fn value() -> impl Strategy<Value = String> {
        "[A-Za-z0-9.:-]{1,12}"
    }

    proptest! {
        #[test]
        fn test_keyword_pairs_survive_parse(
            pairs in prop::collection::hash_map(keyword(), value(), 0..30),
            delimiter in prop::sample::select(vec![',', '/', '\\', '|']),
            gap in 0usize..64,
        ) {
            let mut text = String::new();
            text.push(delimiter);
            for (k, v) in &pairs {
                text.push_str(k);
                text.push(delimiter);
                text.push_str(v);
                text.push(delimiter);
            }

            let file = parse_bytes(build_fcs("FCS3.1", gap, text.as_bytes())).unwrap();
            prop_assert_eq!(file.delimiter(), delimiter);
            prop_assert_eq!(file.keywords(), &pairs);
        }

        #[test]
        fn test_arbitrary_bytes_never_panic(data in prop::collection::vec(any::<u8>(), 0..256)) {
            let _ = parse_bytes(data);
        }
    }
}
