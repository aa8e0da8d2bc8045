use regex::Regex;
use lazy_static::lazy_static;

use crate::MAX_DELIVERY_QUIZZES;
use crate::lesson::{find_section, QUIZ_SECTION_START, QUIZ_SECTION_ENDS};
use crate::types::{CorrectMarkerStrategy, DeliveryPayload, QuizParseOptions, QuizQuestion};

// The three interchangeable option-marker families. When two families
// start at the same position, array order below decides.
static GLYPH_MARKERS: [&str; 4] = ["🅰️", "🅱️", "🅲️", "🅳️"];
static LETTER_MARKERS: [&str; 4] = ["A)", "B)", "C)", "D)"];
static DIAMOND_MARKER: &str = "◆";

static CORRECT_GLYPH: &str = "✅";

lazy_static! {
    // Pregunta 1: ¿Qué significa "**猫**"?
    static ref RE_QUESTION_SPLIT: Regex = Regex::new(r"Pregunta \d+:").unwrap();
    // ✅🅱️ or ✅ 🅱️ - a checkmark immediately followed by a
    // distinguished option glyph
    static ref RE_CHECK_THEN_GLYPH: Regex = Regex::new(r"✅\s*(🅰️|🅱️|🅲️|🅳️)").unwrap();
    // ◆ Gato / * Gato - leading bullet decoration on an option
    static ref RE_OPTION_DECOR: Regex = Regex::new(r"^[◆*]\s*").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OptionFamily {
    Glyphs,
    Diamond,
    Letters,
}

/// Byte offsets of one recovered option marker within a question block.
struct OptionSpan {
    marker_start: usize,
    text_start: usize,
}

fn family_first_pos(block: &str, family: OptionFamily) -> Option<usize> {
    match family {
        OptionFamily::Glyphs => GLYPH_MARKERS.iter().filter_map(|m| block.find(m)).min(),
        OptionFamily::Diamond => block.find(DIAMOND_MARKER),
        OptionFamily::Letters => LETTER_MARKERS.iter().filter_map(|m| block.find(m)).min(),
    }
}

/// The family whose first marker occurs earliest in the block anchors
/// extraction for the whole block.
fn detect_family(block: &str) -> Option<(OptionFamily, usize)> {
    [OptionFamily::Glyphs, OptionFamily::Diamond, OptionFamily::Letters]
        .iter()
        .filter_map(|f| family_first_pos(block, *f).map(|pos| (*f, pos)))
        .min_by_key(|(_, pos)| *pos)
}

/// Finds the A-D markers of a lettered family, each searched after the
/// previous one so the spans stay in document order.
fn lettered_spans(block: &str, markers: &[&str; 4]) -> Vec<OptionSpan> {
    let mut spans = Vec::new();
    let mut from = 0;

    for marker in markers {
        if let Some(rel) = block[from..].find(marker) {
            let marker_start = from + rel;
            let text_start = marker_start + marker.len();
            spans.push(OptionSpan { marker_start, text_start });
            from = text_start;
        }
    }

    spans
}

fn diamond_spans(block: &str) -> Vec<OptionSpan> {
    block.match_indices(DIAMOND_MARKER)
        .take(4)
        .map(|(marker_start, m)| OptionSpan {
            marker_start,
            text_start: marker_start + m.len(),
        })
        .collect()
}

fn marker_spans(block: &str, family: OptionFamily) -> Vec<OptionSpan> {
    match family {
        OptionFamily::Glyphs => lettered_spans(block, &GLYPH_MARKERS),
        OptionFamily::Letters => lettered_spans(block, &LETTER_MARKERS),
        OptionFamily::Diamond => diamond_spans(block),
    }
}

/// An option's text runs from its marker to the next marker of the family
/// or end-of-block, truncated at the first newline.
fn option_line_end(block: &str, span: &OptionSpan, next_marker_start: Option<usize>) -> usize {
    let end = next_marker_start.unwrap_or(block.len());
    match block[span.text_start..end].find('\n') {
        Some(rel) => span.text_start + rel,
        None => end,
    }
}

fn clean_option_text(raw: &str) -> String {
    RE_OPTION_DECOR.replace(raw.trim(), "").to_string()
}

fn resolve_correct_index(
    block: &str,
    spans: &[OptionSpan],
    line_ends: &[usize],
    strategy: CorrectMarkerStrategy,
) -> usize {
    let fallback = spans.len() - 1;

    match strategy {
        CorrectMarkerStrategy::AdjacentInOption => {
            for (k, span) in spans.iter().enumerate() {
                if block[span.marker_start..line_ends[k]].contains(CORRECT_GLYPH) {
                    return k;
                }
            }
            fallback
        }
        CorrectMarkerStrategy::CheckmarkBeforeGlyph => {
            if let Some(cap) = RE_CHECK_THEN_GLYPH.captures(block) {
                let glyph = cap.get(1).map(|m| m.as_str()).unwrap_or("");
                if let Some(idx) = GLYPH_MARKERS.iter().position(|m| *m == glyph) {
                    // Only accept an index that refers to a recovered
                    // option, otherwise the last-option default keeps the
                    // correct_index invariant.
                    if idx < spans.len() {
                        return idx;
                    }
                }
            }
            fallback
        }
    }
}

fn parse_question_block(block: &str, strategy: CorrectMarkerStrategy) -> Option<QuizQuestion> {
    let (family, first_pos) = detect_family(block)?;

    let question = block[..first_pos].trim().to_string();

    let spans = marker_spans(block, family);
    if spans.len() < 2 {
        return None;
    }

    let mut options = Vec::new();
    let mut line_ends = Vec::new();
    for (k, span) in spans.iter().enumerate() {
        let next = spans.get(k + 1).map(|s| s.marker_start);
        let line_end = option_line_end(block, span, next);
        options.push(clean_option_text(&block[span.text_start..line_end]));
        line_ends.push(line_end);
    }

    let correct_index = resolve_correct_index(block, &spans, &line_ends, strategy);

    Some(QuizQuestion { question, options, correct_index })
}

/// Parses the quiz section into questions, in encountered order.
///
/// Returns an empty list when the quiz section is absent. A block with
/// fewer than 2 recoverable options is skipped, no partial item is
/// emitted.
pub fn parse_quiz_questions(doc: &str, opts: &QuizParseOptions) -> Vec<QuizQuestion> {
    let section = match find_section(doc, QUIZ_SECTION_START, &QUIZ_SECTION_ENDS) {
        Some(s) => s,
        None => return Vec::new(),
    };

    let mut questions = Vec::new();

    // The text before the first split point is the section header.
    for block in RE_QUESTION_SPLIT.split(section).skip(1) {
        if let Some(max) = opts.max_questions {
            if questions.len() >= max {
                break;
            }
        }
        if let Some(q) = parse_question_block(block, opts.strategy) {
            questions.push(q);
        }
    }

    questions
}

/// Display-oriented extraction: every recognizable question, checkmark
/// recognized within the option's own span.
pub fn extract_quizzes(doc: &str) -> Vec<QuizQuestion> {
    let opts = QuizParseOptions {
        max_questions: None,
        strategy: CorrectMarkerStrategy::AdjacentInOption,
    };
    parse_quiz_questions(doc, &opts)
}

/// Delivery-oriented extraction: capped at MAX_DELIVERY_QUIZZES, checkmark
/// recognized when followed by a distinguished option glyph.
pub fn extract_delivery_quizzes(doc: &str) -> Vec<DeliveryPayload> {
    let opts = QuizParseOptions {
        max_questions: Some(MAX_DELIVERY_QUIZZES),
        strategy: CorrectMarkerStrategy::CheckmarkBeforeGlyph,
    };

    let questions = parse_quiz_questions(doc, &opts);
    let total = questions.len();

    questions.into_iter().enumerate()
        .map(|(i, q)| DeliveryPayload {
            question: q.question,
            options: q.options,
            correct_option_id: q.correct_index,
            explanation: Some(format!("✅ ¡Correcto! Pregunta {} de {}", i + 1, total)),
        })
        .collect()
}
