use kotoba_backend::lesson::parse_lesson_response;

/// A raw generative response shaped like the detailed lesson format,
/// including the trailing prompts block.
#[allow(dead_code)]
pub fn sample_lesson_response() -> String {
    r#"### Palabra a estudiar:
**猫** (neko): gato. Se escribe con el kanji 猫 y se lee ねこ.

---

### Significado y Contextos de Uso:
La palabra **猫** designa al gato doméstico. Se usa en la conversación diaria, en refranes y en nombres de cafeterías de gatos.
> **¡Dato Curioso!** El maneki-neko, el gato que saluda con la pata, es un amuleto de buena suerte en los comercios de Japón.

---

### Ejemplos Simples para Practicar:
*   猫がいます。
*   Neko ga imasu.
*   Hay un gato.

*   猫が好きです。
*   Neko ga suki desu.
*   Me gustan los gatos.

---

### Desglose de Kanjis:
*   **Kanji 1: 猫** (ねこ)
*   **Significado:** gato
*   **Otras palabras con 猫:** 子猫 (koneko, gatito), 黒猫 (kuroneko, gato negro)

---

### Mini Quiz Interactivo:
Pregunta 1: ¿Qué significa "**猫**"?
🅰️ Perro
🅱️ Pájaro
🅲️ ✅Gato
🅳️ Caballo

Pregunta 2: ¿Cómo se lee 猫?
🅰️ いぬ
🅱️ ねこ
🅲️ とり
🅳️ うま
Respuesta correcta: ✅ 🅱️

Pregunta 3: Completa: ___が好きです。
🅰️ ✅猫
🅱️ 本
🅲️ 車
🅳️ 山

--- PROMPTS ---
PROMPT: A cozy illustration of a cat sitting on a tatami mat, visibly showing the kanji 猫, the hiragana ねこ and the Spanish word "gato".
PROMPT: An educational infographic breaking down the kanji 猫, with labels in Spanish ("Componentes").
PROMPT: A person feeding a cat in a Japanese kitchen, visibly showing 猫, ねこ and "gato".
"#.to_string()
}

/// The lesson body of the sample response, as handed to the transform
/// components.
#[allow(dead_code)]
pub fn sample_lesson_body() -> String {
    parse_lesson_response(&sample_lesson_response())
        .expect("sample response has a prompts separator")
        .body
}
