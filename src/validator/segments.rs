use crate::keywords;
use crate::model::{FcsFile, HeaderSegment};

use super::{ValidationCheck, ValidationReport};

/// Version tags published by ISAC
pub const KNOWN_VERSIONS: [&str; 5] = ["FCS1.0", "FCS2.0", "FCS3.0", "FCS3.1", "FCS3.2"];

/// HEADER checks: version, TEXT placement, segment sizes, overlaps
pub(crate) fn check_segments(file: &FcsFile, report: &mut ValidationReport) {
    let header = file.header();

    if KNOWN_VERSIONS.contains(&header.version.as_str()) {
        report.add_check(ValidationCheck::ok(format!("Known version ({})", header.version)));
    } else {
        report.add_check(ValidationCheck::warning(
            "Known version",
            format!("Unrecognized version tag {:?}", header.version),
        ));
    }

    if i64::from(header.text_segment_start) >= HeaderSegment::HEADER_SEGMENT_SIZE as i64 {
        report.add_check(ValidationCheck::ok("TEXT follows HEADER"));
    } else {
        report.add_check(ValidationCheck::failed(
            "TEXT follows HEADER",
            format!(
                "TEXT starts at byte {}, inside the {}-byte HEADER",
                header.text_segment_start,
                HeaderSegment::HEADER_SEGMENT_SIZE
            ),
        ));
    }

    let text = (i64::from(header.text_segment_start), i64::from(header.text_segment_end));
    let data = (header.data_segment_start, header.data_segment_end);
    let analysis = (header.analysis_segment_start, header.analysis_segment_end);

    check_data_range(file, data, report);
    check_optional_range("ANALYSIS", analysis, report);

    for (name, range) in [("DATA", data), ("ANALYSIS", analysis)] {
        if is_absent(range) || range.1 < range.0 {
            continue;
        }
        let check_name = format!("{} does not overlap TEXT", name);
        if overlaps(text, range) {
            report.add_check(ValidationCheck::failed(
                check_name,
                format!(
                    "{} bytes {}..={} overlap TEXT bytes {}..={}",
                    name, range.0, range.1, text.0, text.1
                ),
            ));
        } else {
            report.add_check(ValidationCheck::ok(check_name));
        }
    }
}

/// DATA offsets of `0,0` are legal in FCS 3.x when `$BEGINDATA`/`$ENDDATA` are set
fn check_data_range(file: &FcsFile, range: (i64, i64), report: &mut ValidationReport) {
    if !is_absent(range) {
        check_size("DATA", range, report);
        return;
    }

    let text = file.text();
    let has_keywords = text.get_ignore_case(keywords::BEGINDATA).is_some()
        && text.get_ignore_case(keywords::ENDDATA).is_some();
    if has_keywords {
        report.add_check(ValidationCheck::ok("DATA offsets (from $BEGINDATA/$ENDDATA)"));
    } else {
        report.add_check(ValidationCheck::warning(
            "DATA offsets",
            "HEADER DATA offsets are 0 and $BEGINDATA/$ENDDATA are missing",
        ));
    }
}

fn check_optional_range(name: &str, range: (i64, i64), report: &mut ValidationReport) {
    if is_absent(range) {
        report.add_check(ValidationCheck::ok(format!("{} segment absent", name)));
    } else {
        check_size(name, range, report);
    }
}

fn check_size(name: &str, (start, end): (i64, i64), report: &mut ValidationReport) {
    let check_name = format!("{} size is non-negative", name);
    let size = end - start + 1;
    if size >= 0 {
        report.add_check(ValidationCheck::ok(check_name));
    } else {
        report.add_check(ValidationCheck::failed(
            check_name,
            format!("{} bytes {}..={} give size {}", name, start, end, size),
        ));
    }
}

fn is_absent((start, end): (i64, i64)) -> bool {
    start == 0 && end == 0
}

fn overlaps(a: (i64, i64), b: (i64, i64)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}
