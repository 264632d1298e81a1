//! # FCS Structural Validation
//!
//! Opt-in consistency checks over an already parsed [`FcsFile`]. Parsing
//! itself never rejects a file for any of these; they only report.
//!
//! ## Validation Checklist
//!
//! 1. **Segments**: known version tag, TEXT placed after the HEADER,
//!    non-negative DATA/ANALYSIS sizes, no overlap with TEXT
//! 2. **Keywords**: required `$` keywords present, a `$PnN` for every
//!    parameter, no empty keywords left behind by doubled-delimiter escapes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::fs::File;
//! use fcsparse::validator::validate;
//!
//! let file = fcsparse::parse(File::open("sample.fcs")?)?;
//! let report = validate(&file, "sample.fcs");
//! println!("{}", report);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod keywords;
mod report;
mod segments;

pub use report::{CheckStatus, ValidationCheck, ValidationReport};
pub use segments::KNOWN_VERSIONS;

use log::info;

use crate::model::FcsFile;

/// Run every structural check against `file`
///
/// `source` labels the report (typically the file path).
pub fn validate(file: &FcsFile, source: impl Into<String>) -> ValidationReport {
    let mut report = ValidationReport::new(source, file.version());

    segments::check_segments(file, &mut report);
    keywords::check_keywords(file, &mut report);

    info!(
        "Validated {}: {} passed, {} warnings, {} failed",
        report.source,
        report.success_count(),
        report.warning_count(),
        report.failure_count()
    );
    report
}
