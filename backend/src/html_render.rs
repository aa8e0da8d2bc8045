use regex::Regex;
use lazy_static::lazy_static;
use html_escape::encode_text;

use crate::lesson::{strip_section, QUIZ_SECTION_START, QUIZ_SECTION_ENDS};

lazy_static! {
    // **palabra** -> <strong>palabra</strong>
    static ref RE_BOLD_SPAN: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
}

/// The six recognized block forms. Anything else degrades to a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind<'a> {
    Heading(&'a str),
    Blockquote(&'a str),
    Divider,
    Bullet(&'a str),
    Text(&'a str),
    Blank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    None,
    InList,
}

fn classify(line: &str) -> LineKind<'_> {
    if let Some(rest) = line.strip_prefix("### ") {
        LineKind::Heading(rest)
    } else if let Some(rest) = line.strip_prefix("> ") {
        LineKind::Blockquote(rest)
    } else if is_divider_line(line) {
        LineKind::Divider
    } else if let Some(rest) = line.strip_prefix("* ") {
        LineKind::Bullet(rest)
    } else if line.trim().is_empty() {
        LineKind::Blank
    } else {
        LineKind::Text(line)
    }
}

fn is_divider_line(line: &str) -> bool {
    let t = line.trim();
    t.len() >= 3 && t.chars().all(|c| c == '-')
}

/// Entity-escapes the text, then applies the bold-span rule.
fn inline_html(text: &str) -> String {
    let escaped = encode_text(text);
    RE_BOLD_SPAN.replace_all(&escaped, "<strong>$1</strong>").to_string()
}

/// Renders the lesson body (quiz section excluded) as an HTML fragment.
///
/// Single forward pass over lines. The only block-level state is whether
/// a bullet list is open; every other block form closes it.
pub fn render_lesson_html(doc: &str) -> String {
    let without_quiz = strip_section(doc, QUIZ_SECTION_START, &QUIZ_SECTION_ENDS);

    let mut fragments: Vec<String> = Vec::new();
    let mut state = ListState::None;

    for line in without_quiz.trim().lines() {
        let kind = classify(line);

        if state == ListState::InList && !matches!(kind, LineKind::Bullet(_)) {
            fragments.push("</ul>".to_string());
            state = ListState::None;
        }

        match kind {
            LineKind::Heading(text) => {
                fragments.push(format!("<h3>{}</h3>", inline_html(text)));
            }
            LineKind::Blockquote(text) => {
                fragments.push(format!("<blockquote>{}</blockquote>", inline_html(text)));
            }
            LineKind::Divider => {
                fragments.push("<hr>".to_string());
            }
            LineKind::Bullet(text) => {
                if state == ListState::None {
                    fragments.push("<ul>".to_string());
                    state = ListState::InList;
                }
                fragments.push(format!("<li>{}</li>", inline_html(text)));
            }
            LineKind::Text(text) => {
                fragments.push(format!("<p>{}</p>", inline_html(text)));
            }
            LineKind::Blank => {
                fragments.push("<br>".to_string());
            }
        }
    }

    if state == ListState::InList {
        fragments.push("</ul>".to_string());
    }

    fragments.join("")
}
