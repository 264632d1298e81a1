//! # fcsparse - FCS HEADER and TEXT Segment Parser
//!
//! `fcsparse` reads Flow Cytometry Standard (FCS) files and extracts their
//! structural metadata: the format version, the byte ranges of the TEXT, DATA
//! and ANALYSIS segments, and the keyword/value pairs of the TEXT segment.
//!
//! ## Key Features
//!
//! - **Stream Based**: Parses from any [`std::io::Read`]; files, network
//!   streams and in-memory buffers all work the same way.
//!
//! - **All-or-Nothing**: [`parse`] either returns a complete, immutable
//!   [`FcsFile`] or an [`FcsError`] naming the stage that failed.
//!
//! - **Byte Exact**: The TEXT segment is decoded as ISO-8859-1 by default, so
//!   every byte maps to exactly one character and decoding never fails.
//!
//! - **Structural Validation**: An opt-in [`validator`] reports inconsistent
//!   offsets and missing standard keywords without rejecting the file.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::fs::File;
//!
//! let file = fcsparse::parse(File::open("sample.fcs")?)?;
//!
//! println!("Version: {}", file.version());
//! println!("TEXT bytes: {}", file.header().text_segment_size());
//! println!("Events: {:?}", file.text().event_count());
//!
//! for (keyword, value) in file.keywords() {
//!     println!("{} = {}", keyword, value);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Architecture
//!
//! - [`parser`]: HEADER and TEXT stages, tokenizer, parser configuration
//! - [`model`]: [`FcsFile`], [`HeaderSegment`], [`TextSegment`]
//! - [`keywords`]: standard `$` keyword names and typed lookups
//! - [`validator`]: structural checks and reports
//! - [`byte_reader`]: buffered forward-only byte source
//! - [`error`]: [`FcsError`] and its causes
//!
//! ## HEADER Layout
//!
//! | Bytes | Field | Encoding |
//! |-------|-------|----------|
//! | 0–5 | Version | ASCII, starts with `FCS` |
//! | 6–9 | Reserved | ignored |
//! | 10–17 | TEXT start | 8 ASCII digits, padded |
//! | 18–25 | TEXT end | 8 ASCII digits, padded |
//! | 26–33 | DATA start | 8 ASCII digits, padded |
//! | 34–41 | DATA end | 8 ASCII digits, padded |
//! | 42–49 | ANALYSIS start | 8 ASCII digits, padded |
//! | 50–57 | ANALYSIS end | 8 ASCII digits, padded |
//!
//! DATA and ANALYSIS contents are never read; only their offsets are exposed.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod byte_reader;
pub mod error;
pub mod keywords;
pub mod model;
pub mod parser;
pub mod validator;

pub use error::{FcsError, ReadFailure, Result};
pub use model::{FcsFile, HeaderSegment, TextSegment};
pub use parser::{parse, parse_with_config, ParserConfig, TextEncoding};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::error::{FcsError, ReadFailure, Result};
    pub use crate::model::{FcsFile, HeaderSegment, TextSegment};
    pub use crate::parser::{parse, parse_with_config, tokenize, ParserConfig, TextEncoding};
    pub use crate::validator::{validate, CheckStatus, ValidationReport};
}
