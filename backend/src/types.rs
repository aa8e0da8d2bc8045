use std::str::FromStr;
use serde::{Serialize, Deserialize};
use serde_json::Value;
use thiserror::Error;

/// One multiple-choice question recovered from the quiz section.
///
/// Invariant: `correct_index` always refers to a valid position in
/// `options`, and `options` holds between 2 and 4 entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
}

/// The JSON shape accepted by the bot-delivery channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPayload {
    pub question: String,
    pub options: Vec<String>,
    pub correct_option_id: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Acknowledgment returned by the bot endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotResponse {
    pub status: String,
    pub message: Option<String>,
    pub result: Option<Value>,
}

/// A generative response split into the lesson body and the trailing
/// image-prompt list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub body: String,
    pub prompts: Vec<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LessonError {
    #[error("The generative response does not contain the prompts separator line")]
    MissingPromptsSeparator,
}

/// How the correct-answer checkmark is recognized within a question block.
///
/// The two heuristics come from two upstream call sites and are not
/// equivalent on all inputs. Both are kept as named strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CorrectMarkerStrategy {
    /// The checkmark appears within the option's own marker+text span.
    #[serde(rename = "adjacent")]
    AdjacentInOption,
    /// The checkmark is immediately followed by one of the four
    /// distinguished option glyphs, anywhere in the block.
    #[serde(rename = "checkmark-glyph")]
    CheckmarkBeforeGlyph,
}

// Custom error for parsing CorrectMarkerStrategy from string
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid CorrectMarkerStrategy value: {0}")]
pub struct ParseStrategyError(String);

impl FromStr for CorrectMarkerStrategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "adjacent" => Ok(CorrectMarkerStrategy::AdjacentInOption),
            "checkmark-glyph" => Ok(CorrectMarkerStrategy::CheckmarkBeforeGlyph),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// Caller intent for one quiz parse run.
#[derive(Debug, Clone, Copy)]
pub struct QuizParseOptions {
    pub max_questions: Option<usize>,
    pub strategy: CorrectMarkerStrategy,
}
