use regex::{Captures, Regex};
use lazy_static::lazy_static;

use crate::lesson::{strip_section, QUIZ_SECTION_START, QUIZ_SECTION_ENDS};

/// Fixed-width divider line placed before decorated section headings and
/// at the end of the output.
pub static SECTION_DIVIDER: &str = "━━━━━━━━━━━━━━";

lazy_static! {
    // Runs of blank-ish lines (newlines around indented whitespace)
    static ref RE_BLANKISH_RUN: Regex = Regex::new(r"[\n\r]+\s+[\n\r]+").unwrap();
    static ref RE_BLANK_RUN: Regex = Regex::new(r"\n\s+\n").unwrap();
    // Heading markers, wherever they appear
    static ref RE_HEADING_MARK: Regex = Regex::new(r"###\s?").unwrap();
    // Lines consisting of hyphens only
    static ref RE_DIVIDER_LINE: Regex = Regex::new(r"(?m)^\s*-{2,}\s*$").unwrap();

    // Closed vocabulary of known section titles. Each is rewritten once,
    // case-insensitively, at line start.
    static ref RE_TITLE_PALABRA: Regex = Regex::new(r"(?mi)^Palabra a estudiar:").unwrap();
    static ref RE_TITLE_SIGNIFICADO_USO: Regex = Regex::new(r"(?mi)^Significado y Contextos de Uso:").unwrap();
    static ref RE_TITLE_SIGNIFICADO: Regex = Regex::new(r"(?mi)^Significado:").unwrap();
    static ref RE_TITLE_EJEMPLOS: Regex = Regex::new(r"(?mi)^Ejemplos:").unwrap();
    static ref RE_TITLE_KANJIS: Regex = Regex::new(r"(?mi)^Desglose de Kanjis:").unwrap();
    static ref RE_TITLE_DATO: Regex = Regex::new(r"(?mi)^Dato Curioso:").unwrap();

    // Safety net for section titles the generative source phrases
    // unexpectedly: a capitalized phrase ending in a colon. The optional
    // trailing asterisk capture stands in for a negative lookahead, which
    // the regex crate does not support.
    static ref RE_GENERIC_TITLE: Regex = Regex::new(r"(?m)^([A-ZÁÉÍÓÚÑ][^:\n]{5,80}):(\*?)").unwrap();

    // Repeated sub-bullet patterns in the kanji breakdown
    static ref RE_BULLET_KANJI: Regex = Regex::new(r"(?mi)^(• )?Kanji (\d+):").unwrap();
    static ref RE_BULLET_SIGNIFICADO: Regex = Regex::new(r"(?mi)^(• )?Significado:").unwrap();
    static ref RE_BULLET_OTRAS: Regex = Regex::new(r"(?mi)^(• )?Otras palabras con (.+):").unwrap();
    // Remaining generic bullet markers
    static ref RE_GENERIC_BULLET: Regex = Regex::new(r"(?m)^([*-])\s+(.)").unwrap();

    // Decoration stripped for the speech synthesis consumer
    static ref RE_DECOR_GLYPHS: Regex = Regex::new(r"[━📕📖✍\u{FE0F}🈶💡]").unwrap();
    static ref RE_LONG_HYPHEN_RUN: Regex = Regex::new(r"-{10,}").unwrap();
}

/// Rewrites the lesson into a compact plain-text rendering for a channel
/// with bold-only rich text support. The rewrite rules are ordered; later
/// rules key off text shapes the earlier ones introduce or preserve.
pub fn lesson_to_channel_text(doc: &str) -> String {
    let mut out = strip_section(doc, QUIZ_SECTION_START, &QUIZ_SECTION_ENDS);

    out = RE_BLANKISH_RUN.replace_all(&out, "\n\n").to_string();
    out = RE_HEADING_MARK.replace_all(&out, "").to_string();
    out = RE_DIVIDER_LINE.replace_all(&out, "").to_string();
    out = RE_BLANK_RUN.replace_all(&out, "\n\n").to_string();
    out = out.trim().to_string();

    // The first recognized title gets no leading divider.
    out = RE_TITLE_PALABRA.replace(&out, "📕 **Palabra a Estudiar:**").to_string();
    out = RE_TITLE_SIGNIFICADO_USO.replace(&out, format!("\n{}\n📖 **Significado y Contextos de Uso:**", SECTION_DIVIDER).as_str()).to_string();
    out = RE_TITLE_SIGNIFICADO.replace(&out, format!("\n{}\n📖 **Significado:**", SECTION_DIVIDER).as_str()).to_string();
    out = RE_TITLE_EJEMPLOS.replace(&out, format!("\n{}\n✍️ **Ejemplos:**", SECTION_DIVIDER).as_str()).to_string();
    out = RE_TITLE_KANJIS.replace(&out, format!("\n{}\n🈶 **Desglose de Kanjis:**", SECTION_DIVIDER).as_str()).to_string();
    out = RE_TITLE_DATO.replace(&out, format!("\n{}\n💡 **Dato Curioso:**", SECTION_DIVIDER).as_str()).to_string();

    out = RE_GENERIC_TITLE.replace_all(&out, |caps: &Captures| {
        let already_bold = caps.get(2).map_or(false, |m| !m.as_str().is_empty());
        if already_bold {
            caps[0].to_string()
        } else {
            format!("\n{}\n**{}:**", SECTION_DIVIDER, &caps[1])
        }
    }).to_string();

    out = RE_BULLET_KANJI.replace_all(&out, "• **Kanji $2:**").to_string();
    out = RE_BULLET_SIGNIFICADO.replace_all(&out, "• **Significado:**").to_string();
    out = RE_BULLET_OTRAS.replace_all(&out, "• **Otras palabras con $2:**").to_string();
    out = RE_GENERIC_BULLET.replace_all(&out, "• $2").to_string();

    out.push_str(&format!("\n{}", SECTION_DIVIDER));

    out
}

/// Strips channel and markdown decoration for a text-to-speech consumer.
pub fn speech_text(doc: &str) -> String {
    let mut out = RE_DECOR_GLYPHS.replace_all(doc, "").to_string();
    out = RE_LONG_HYPHEN_RUN.replace_all(&out, "").to_string();
    out = out.replace("**", "");
    out = out.replace("###", "");
    out.trim().to_string()
}
