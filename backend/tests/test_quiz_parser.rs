mod helpers;

use kotoba_backend::quiz::{extract_delivery_quizzes, extract_quizzes, parse_quiz_questions};
use kotoba_backend::types::{CorrectMarkerStrategy, QuizParseOptions};

use helpers::sample_lesson_body;

#[test]
fn test_sample_lesson_has_three_questions() {
    let body = sample_lesson_body();
    let questions = extract_quizzes(&body);

    assert_eq!(questions.len(), 3);

    let q1 = &questions[0];
    assert!(q1.question.contains("¿Qué significa"));
    assert_eq!(q1.options, vec!["Perro", "Pájaro", "✅Gato", "Caballo"]);
    assert_eq!(q1.correct_index, 2);
}

#[test]
fn test_no_quiz_heading_returns_empty() {
    let doc = "### Palabra a estudiar:\n**猫** (neko)\n\nSin sección de quiz.";
    assert!(extract_quizzes(doc).is_empty());
    assert!(extract_delivery_quizzes(doc).is_empty());
}

#[test]
fn test_invariants_hold_for_all_questions() {
    let body = sample_lesson_body();

    for q in extract_quizzes(&body) {
        assert!(q.options.len() >= 2 && q.options.len() <= 4);
        assert!(q.correct_index < q.options.len());
    }
}

#[test]
fn test_fallback_to_last_option_without_checkmark() {
    let doc = "### Mini Quiz Interactivo\nPregunta 1: ¿Qué es 犬?\n🅰️ Gato\n🅱️ Perro";
    let questions = extract_quizzes(doc);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].options.len(), 2);
    assert_eq!(questions[0].correct_index, 1);
}

#[test]
fn test_delivery_extraction_never_exceeds_three() {
    let mut doc = String::from("### Mini Quiz Interactivo\n");
    for i in 1..=5 {
        doc.push_str(&format!(
            "Pregunta {}: ¿Pregunta número {}?\n🅰️ uno\n🅱️ dos\n🅲️ tres\n🅳️ cuatro\n\n",
            i, i
        ));
    }

    assert_eq!(extract_quizzes(&doc).len(), 5);
    assert_eq!(extract_delivery_quizzes(&doc).len(), 3);
}

#[test]
fn test_prose_block_is_skipped() {
    let doc = "### Mini Quiz Interactivo\nPregunta 1: ¿Qué es 猫?\n🅰️ Perro\n🅱️ ✅Gato\nPregunta 2: Esta pregunta quedó sin opciones, solo prosa.";
    let questions = extract_quizzes(doc);

    assert_eq!(questions.len(), 1);
}

#[test]
fn test_spec_scenario_glyph_family_with_checkmark() {
    let doc = "### Palabra a estudiar:\n**猫** (neko)\n\n---\n\n### Mini Quiz Interactivo\nPregunta 1: ¿Qué es 猫?\n🅰️ Perro\n🅱️ Gato\n🅲️ Pájaro\n🅳️ ✅Gato";
    let questions = extract_quizzes(doc);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].question, "¿Qué es 猫?");
    assert_eq!(questions[0].options, vec!["Perro", "Gato", "Pájaro", "✅Gato"]);
    assert_eq!(questions[0].correct_index, 3);

    // No kanji-breakdown section in this document.
    assert!(kotoba_backend::kanji::extract_kanjis(doc).is_empty());
}

#[test]
fn test_letter_marker_family() {
    let doc = "### Mini Quiz Interactivo\nPregunta 1: ¿Cómo se lee 犬?\nA) ねこ\nB) ✅いぬ\nC) とり\nD) うま";
    let questions = extract_quizzes(doc);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].options, vec!["ねこ", "✅いぬ", "とり", "うま"]);
    assert_eq!(questions[0].correct_index, 1);
}

#[test]
fn test_diamond_marker_family() {
    let doc = "### Mini Quiz Interactivo\nPregunta 1: ¿Qué es 猫?\n◆ Perro\n◆ ✅Gato\n◆ Pájaro\n◆ Caballo";
    let questions = extract_quizzes(doc);

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].options, vec!["Perro", "✅Gato", "Pájaro", "Caballo"]);
    assert_eq!(questions[0].correct_index, 1);
}

#[test]
fn test_strategies_can_diverge() {
    // The checkmark sits inside option C's text, and no checkmark-glyph
    // pair appears anywhere in the block.
    let doc = "### Mini Quiz Interactivo\nPregunta 1: ¿Qué significa 猫?\n🅰️ Perro\n🅱️ Pájaro\n🅲️ ✅Gato\n🅳️ Caballo";

    let adjacent = parse_quiz_questions(doc, &QuizParseOptions {
        max_questions: None,
        strategy: CorrectMarkerStrategy::AdjacentInOption,
    });
    let glyph = parse_quiz_questions(doc, &QuizParseOptions {
        max_questions: None,
        strategy: CorrectMarkerStrategy::CheckmarkBeforeGlyph,
    });

    assert_eq!(adjacent[0].correct_index, 2);
    assert_eq!(glyph[0].correct_index, 3);
}

#[test]
fn test_checkmark_before_glyph_recognition() {
    let body = sample_lesson_body();
    let payloads = extract_delivery_quizzes(&body);

    assert_eq!(payloads.len(), 3);
    // Pregunta 2 flags its answer with "Respuesta correcta: ✅ 🅱️".
    assert_eq!(payloads[1].correct_option_id, 1);
    // The other two have no checkmark-glyph pair and fall back to the
    // last option.
    assert_eq!(payloads[0].correct_option_id, 3);
    assert_eq!(payloads[2].correct_option_id, 3);
}

#[test]
fn test_delivery_payload_json_shape() {
    let body = sample_lesson_body();
    let payloads = extract_delivery_quizzes(&body);

    let value = serde_json::to_value(&payloads[0]).unwrap();
    let obj = value.as_object().unwrap();

    assert!(obj.contains_key("question"));
    assert!(obj.contains_key("options"));
    assert!(obj.contains_key("correct_option_id"));
    assert!(obj.contains_key("explanation"));

    let explanation = obj["explanation"].as_str().unwrap();
    assert_eq!(explanation, "✅ ¡Correcto! Pregunta 1 de 3");
}

#[test]
fn test_display_parse_is_uncapped() {
    let body = sample_lesson_body();
    let opts = QuizParseOptions {
        max_questions: None,
        strategy: CorrectMarkerStrategy::AdjacentInOption,
    };

    assert_eq!(parse_quiz_questions(&body, &opts).len(), 3);
}
