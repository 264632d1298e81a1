//! Standard FCS TEXT keywords
//!
//! The FCS standard reserves `$`-prefixed keywords for required and optional
//! metadata. This module names the common ones and adds typed lookups on
//! [`TextSegment`]. Lookups are case-insensitive, as keywords are in the
//! standard. Nothing here reads the DATA segment.

use std::collections::BTreeSet;

use crate::model::TextSegment;

/// Number of parameters (channels) per event
pub const PAR: &str = "$PAR";

/// Total number of events in the DATA segment
pub const TOT: &str = "$TOT";

/// Byte order of DATA values, e.g. `1,2,3,4`
pub const BYTEORD: &str = "$BYTEORD";

/// DATA value type: `I`, `F`, `D` or `A`
pub const DATATYPE: &str = "$DATATYPE";

/// DATA mode: `L` (list), `C` or `U` (histogram)
pub const MODE: &str = "$MODE";

/// Byte offset of the first DATA byte (FCS 3.x, used when the HEADER holds 0)
pub const BEGINDATA: &str = "$BEGINDATA";

/// Byte offset of the last DATA byte (FCS 3.x)
pub const ENDDATA: &str = "$ENDDATA";

/// Byte offset of the first ANALYSIS byte (FCS 3.x)
pub const BEGINANALYSIS: &str = "$BEGINANALYSIS";

/// Byte offset of the last ANALYSIS byte (FCS 3.x)
pub const ENDANALYSIS: &str = "$ENDANALYSIS";

/// Instrument name
pub const CYT: &str = "$CYT";

/// Original file name
pub const FIL: &str = "$FIL";

/// Acquisition date
pub const DATE: &str = "$DATE";

/// Keywords every FCS 3.x TEXT segment must carry (besides `$PnX` per parameter)
pub const REQUIRED: [&str; 5] = [BYTEORD, DATATYPE, MODE, PAR, TOT];

/// `$PnN`: short name of parameter `n` (1-based)
pub fn parameter_name_key(n: usize) -> String {
    format!("$P{}N", n)
}

/// `$PnS`: long name (label) of parameter `n` (1-based)
pub fn parameter_label_key(n: usize) -> String {
    format!("$P{}S", n)
}

/// Parameter index `n` of a `$PnX` keyword with the given suffix letter
fn parameter_index(keyword: &str, suffix: char) -> Option<usize> {
    if !keyword.get(..2)?.eq_ignore_ascii_case("$P") {
        return None;
    }
    let digits = keyword[2..].strip_suffix(|c: char| c.eq_ignore_ascii_case(&suffix))?;
    if digits.is_empty() || digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl TextSegment {
    /// `$PAR` as a count, if present and numeric
    pub fn parameter_count(&self) -> Option<usize> {
        self.get_ignore_case(PAR)?.trim().parse().ok()
    }

    /// `$TOT` as a count, if present and numeric
    pub fn event_count(&self) -> Option<u64> {
        self.get_ignore_case(TOT)?.trim().parse().ok()
    }

    /// `$PnN` for parameter `n` (1-based)
    pub fn parameter_name(&self, n: usize) -> Option<&str> {
        self.get_ignore_case(&parameter_name_key(n))
    }

    /// `$PnS` for parameter `n` (1-based)
    pub fn parameter_label(&self, n: usize) -> Option<&str> {
        self.get_ignore_case(&parameter_label_key(n))
    }

    /// `$PnN` for every `n` in `1..=$PAR`; `None` entries are missing names
    ///
    /// `$PAR` comes straight from the file, so the iterator is lazy; take
    /// only what is needed.
    pub fn parameter_names(&self) -> impl Iterator<Item = Option<&str>> + '_ {
        let count = self.parameter_count().unwrap_or(0);
        (1..=count).map(move |n| self.parameter_name(n))
    }

    /// Indices `n` in `1..=$PAR` that have a `$PnN` keyword
    ///
    /// Bounded by the number of keywords present, not by `$PAR`.
    pub fn named_parameter_indices(&self) -> BTreeSet<usize> {
        let count = self.parameter_count().unwrap_or(0);
        self.kvpair
            .keys()
            .filter_map(|k| parameter_index(k, 'N'))
            .filter(|n| (1..=count).contains(n))
            .collect()
    }

    /// Required keywords absent from this segment
    pub fn missing_required_keywords(&self) -> Vec<&'static str> {
        REQUIRED
            .iter()
            .copied()
            .filter(|k| self.get_ignore_case(k).is_none())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;

    fn segment(text: &str) -> TextSegment {
        TextSegment {
            full_text: text.to_string(),
            kvpair: tokenize(text, '/'),
        }
    }

    #[test]
    fn test_counts() {
        let text = segment("/$PAR/3/$tot/ 10000 /");
        assert_eq!(text.parameter_count(), Some(3));
        assert_eq!(text.event_count(), Some(10_000));
    }

    #[test]
    fn test_non_numeric_count_is_none() {
        let text = segment("/$PAR/three/");
        assert_eq!(text.parameter_count(), None);
        assert_eq!(text.event_count(), None);
    }

    #[test]
    fn test_parameter_names() {
        let text = segment("/$PAR/3/$P1N/FSC-A/$P1S/Forward/$P3N/CD4/");
        assert_eq!(text.parameter_name(1), Some("FSC-A"));
        assert_eq!(text.parameter_label(1), Some("Forward"));
        assert_eq!(text.parameter_label(3), None);
        assert_eq!(
            text.parameter_names().collect::<Vec<_>>(),
            vec![Some("FSC-A"), None, Some("CD4")]
        );
        assert_eq!(text.named_parameter_indices().into_iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_named_parameter_indices_ignore_out_of_range_and_malformed() {
        let text = segment("/$PAR/2/$p2n/SSC-A/$P3N/extra/$P01N/zero/$P0N/none/$PXN/bad/");
        assert_eq!(text.named_parameter_indices().into_iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_huge_parameter_count_stays_lazy() {
        let text = segment("/$PAR/18446744073709551615/$P1N/FSC-A/");
        assert_eq!(text.parameter_count(), Some(usize::MAX));
        assert_eq!(
            text.parameter_names().take(2).collect::<Vec<_>>(),
            vec![Some("FSC-A"), None]
        );
        assert_eq!(text.named_parameter_indices().len(), 1);
    }

    #[test]
    fn test_missing_required_keywords() {
        let text = segment("/$PAR/1/$MODE/L/$datatype/F/");
        assert_eq!(text.missing_required_keywords(), vec![BYTEORD, TOT]);
    }

    #[test]
    fn test_key_builders() {
        assert_eq!(parameter_name_key(12), "$P12N");
        assert_eq!(parameter_label_key(2), "$P2S");
    }
}
