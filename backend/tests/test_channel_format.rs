mod helpers;

use kotoba_backend::channel_format::{lesson_to_channel_text, speech_text, SECTION_DIVIDER};

use helpers::sample_lesson_body;

#[test]
fn test_quiz_section_never_appears() {
    let body = sample_lesson_body();
    let out = lesson_to_channel_text(&body);

    assert!(!out.contains("Mini Quiz Interactivo"));
    assert!(!out.contains("Pregunta 1:"));
}

#[test]
fn test_output_ends_with_divider_line() {
    let body = sample_lesson_body();
    let out = lesson_to_channel_text(&body);

    assert!(out.ends_with(&format!("\n{}", SECTION_DIVIDER)));
}

#[test]
fn test_first_title_gets_no_leading_divider() {
    let body = sample_lesson_body();
    let out = lesson_to_channel_text(&body);

    assert!(out.starts_with("📕 **Palabra a Estudiar:**"));
}

#[test]
fn test_known_titles_are_decorated() {
    let body = sample_lesson_body();
    let out = lesson_to_channel_text(&body);

    assert!(out.contains(&format!("{}\n📖 **Significado y Contextos de Uso:**", SECTION_DIVIDER)));
    assert!(out.contains(&format!("{}\n🈶 **Desglose de Kanjis:**", SECTION_DIVIDER)));
}

#[test]
fn test_unknown_title_is_promoted_by_fallback() {
    let body = sample_lesson_body();
    let out = lesson_to_channel_text(&body);

    // Not in the closed vocabulary, caught by the generic rule.
    assert!(out.contains(&format!("{}\n**Ejemplos Simples para Practicar:**", SECTION_DIVIDER)));
}

#[test]
fn test_heading_markers_and_dividers_are_gone() {
    let body = sample_lesson_body();
    let out = lesson_to_channel_text(&body);

    assert!(!out.contains("###"));
    assert!(!out.contains("---"));
}

#[test]
fn test_bullets_are_normalized() {
    let body = sample_lesson_body();
    let out = lesson_to_channel_text(&body);

    assert!(out.contains("• 猫がいます。"));
    assert!(!out.contains("*   猫がいます。"));
}

#[test]
fn test_dato_curioso_title() {
    let doc = "Dato Curioso:\nEl maneki-neko saluda con la pata.";
    let out = lesson_to_channel_text(doc);

    assert!(out.contains(&format!("{}\n💡 **Dato Curioso:**", SECTION_DIVIDER)));
}

#[test]
fn test_sub_bullet_patterns_become_bold() {
    let doc = "• Kanji 1: 猫\n• Significado: gato\n• Otras palabras con 猫: 子猫";
    let out = lesson_to_channel_text(doc);

    assert!(out.contains("• **Kanji 1:** 猫"));
    assert!(out.contains("• **Significado:** gato"));
    assert!(out.contains("• **Otras palabras con 猫:** 子猫"));
}

#[test]
fn test_already_bold_title_is_not_promoted_again() {
    let doc = "Palabra Compuesta Nueva:** ya en negrita**";
    let out = lesson_to_channel_text(doc);

    // The generic rule must leave a line whose colon is followed by an
    // asterisk untouched.
    assert!(!out.contains("**Palabra Compuesta Nueva:**\n"));
}

#[test]
fn test_speech_text_strips_decoration() {
    let doc = format!(
        "📕 **Palabra a Estudiar:**\n{}\n### Ejemplos:\n----------\n猫が好きです。",
        SECTION_DIVIDER
    );
    let out = speech_text(&doc);

    assert!(!out.contains('📕'));
    assert!(!out.contains('━'));
    assert!(!out.contains("**"));
    assert!(!out.contains("###"));
    assert!(!out.contains("----------"));
    assert!(out.contains("猫が好きです。"));
}

#[test]
fn test_double_quiz_sections_are_both_removed() {
    let doc = "intro\n### Mini Quiz Interactivo\nPregunta 1: a\n---\nmedio\n### Mini Quiz Interactivo\nPregunta 2: b";
    let out = lesson_to_channel_text(doc);

    assert!(!out.contains("Pregunta"));
    assert!(out.contains("intro"));
    assert!(out.contains("medio"));
}
