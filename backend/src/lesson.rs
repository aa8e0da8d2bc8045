use std::ops::Range;

use regex::Regex;
use lazy_static::lazy_static;

use crate::types::{Lesson, LessonError};

// Section marker vocabulary, verbatim as authored by the generative source.
// Matching is literal and case-sensitive.

pub static QUIZ_SECTION_START: &str = "### Mini Quiz Interactivo";
pub static KANJI_SECTION_START: &str = "### Desglose de Kanjis:";

/// A section ends at the first of these markers found after its start
/// marker, or at end-of-document.
pub static QUIZ_SECTION_ENDS: [&str; 1] = ["---"];
pub static KANJI_SECTION_ENDS: [&str; 2] = ["---", "###"];

/// Separator between the lesson body and the trailing image-prompt list.
pub static PROMPTS_SEPARATOR: &str = "--- PROMPTS ---";

fn section_range(doc: &str, start_marker: &str, end_markers: &[&str]) -> Option<Range<usize>> {
    let start = doc.find(start_marker)?;
    let search_from = start + start_marker.len();

    let end = end_markers.iter()
        .filter_map(|m| doc[search_from..].find(m))
        .min()
        .map(|rel| search_from + rel)
        .unwrap_or(doc.len());

    Some(start..end)
}

/// Returns the section from `start_marker` (inclusive) up to the first end
/// marker found after it, or to end-of-document. `None` when the start
/// marker is absent, which is a normal outcome for optional sections.
pub fn find_section<'a>(doc: &'a str, start_marker: &str, end_markers: &[&str]) -> Option<&'a str> {
    section_range(doc, start_marker, end_markers).map(|r| &doc[r])
}

/// Removes every occurrence of the located section.
pub fn strip_section(doc: &str, start_marker: &str, end_markers: &[&str]) -> String {
    let mut out = doc.to_string();
    while let Some(r) = section_range(&out, start_marker, end_markers) {
        out.replace_range(r, "");
    }
    out
}

/// Splits a raw generative response on the prompts separator.
///
/// The absent separator is the one fatal condition in this crate: without
/// it the response cannot be divided into lesson body and image prompts,
/// and the caller should show an error instead of an incomplete lesson.
pub fn parse_lesson_response(raw: &str) -> Result<Lesson, LessonError> {
    lazy_static! {
        // PROMPT: A cat sitting on a tatami mat...
        static ref RE_PROMPT_PREFIX: Regex = Regex::new(r"^PROMPT:\s*").unwrap();
    }

    let (body, prompts_text) = raw.split_once(PROMPTS_SEPARATOR)
        .ok_or(LessonError::MissingPromptsSeparator)?;

    let prompts: Vec<String> = prompts_text.trim().lines()
        .map(|line| RE_PROMPT_PREFIX.replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    Ok(Lesson {
        body: body.trim().to_string(),
        prompts,
    })
}
