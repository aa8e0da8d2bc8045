use regex::Regex;
use lazy_static::lazy_static;

use crate::lesson::{find_section, KANJI_SECTION_START, KANJI_SECTION_ENDS};

lazy_static! {
    // Kanji 1: 猫 (neko)
    // Only single characters in the CJK Unified Ideographs block
    // (U+4E00-U+9FFF) are accepted. Extension-block kanji outside the
    // BMP are not matched.
    static ref RE_KANJI_ENTRY: Regex = Regex::new(r"Kanji \d+:\s*([\x{4E00}-\x{9FFF}])").unwrap();
}

/// Collects the kanji characters listed in the kanji-breakdown section,
/// in document order. Duplicates are kept.
///
/// Returns an empty list when the section is absent. An entry whose
/// character is outside the CJK range is skipped without error.
pub fn extract_kanjis(doc: &str) -> Vec<String> {
    let section = match find_section(doc, KANJI_SECTION_START, &KANJI_SECTION_ENDS) {
        Some(s) => s,
        None => return Vec::new(),
    };

    RE_KANJI_ENTRY.captures_iter(section)
        .map(|cap| cap[1].to_string())
        .collect()
}
