//! # Parsed FCS File Model
//!
//! Plain data produced by the parser. Nothing here reads bytes; the types only
//! hold what the HEADER and TEXT stages extracted and offer lookups over it.
//!
//! ```text
//! FcsFile
//! ├── HeaderSegment   version + six inclusive byte offsets
//! ├── TextSegment     full decoded text + keyword/value map
//! └── delimiter       first character of the TEXT segment
//! ```

mod file;
mod header;
mod text;


pub use file::FcsFile;
pub use header::HeaderSegment;
pub use text::TextSegment;
