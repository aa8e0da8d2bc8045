use std::fs;
use std::path::PathBuf;
use std::process::exit;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use dotenvy::dotenv;
use anyhow::Context;

use kotoba_backend::{BOT_API_URL, DELIVERY_PAUSE_SECS};
use kotoba_backend::channel_format::{lesson_to_channel_text, speech_text};
use kotoba_backend::delivery;
use kotoba_backend::html_render::render_lesson_html;
use kotoba_backend::kanji::extract_kanjis;
use kotoba_backend::lesson::parse_lesson_response;
use kotoba_backend::quiz::{extract_delivery_quizzes, parse_quiz_questions};
use kotoba_backend::types::{CorrectMarkerStrategy, Lesson, QuizParseOptions};

fn read_lesson(path: &PathBuf) -> Result<Lesson, String> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read lesson file {:?}: {}", path, e))?;

    parse_lesson_response(&raw).map_err(|e| e.to_string())
}

fn render_lesson(path: &PathBuf, format: RenderFormat) -> Result<(), String> {
    let lesson = read_lesson(path)?;

    let output = match format {
        RenderFormat::Html => render_lesson_html(&lesson.body),
        RenderFormat::Channel => lesson_to_channel_text(&lesson.body),
        RenderFormat::Speech => speech_text(&lesson.body),
    };

    println!("{}", output);

    Ok(())
}

fn print_quiz(
    path: &PathBuf,
    as_json: bool,
    max: Option<usize>,
    strategy: CorrectMarkerStrategy,
) -> Result<(), String> {
    let lesson = read_lesson(path)?;

    let opts = QuizParseOptions {
        max_questions: max,
        strategy,
    };
    let questions = parse_quiz_questions(&lesson.body, &opts);

    if as_json {
        let json = serde_json::to_string_pretty(&questions)
            .map_err(|e| format!("Failed to serialize questions: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    if questions.is_empty() {
        println!("No quiz available in this lesson.");
        return Ok(());
    }

    for (i, q) in questions.iter().enumerate() {
        println!("Pregunta {}: {}", i + 1, q.question);
        for (k, option) in q.options.iter().enumerate() {
            let mark = if k == q.correct_index { "*" } else { " " };
            println!("  {} {}) {}", mark, (b'A' + k as u8) as char, option);
        }
    }

    Ok(())
}

fn print_kanjis(path: &PathBuf) -> Result<(), String> {
    let lesson = read_lesson(path)?;

    for kanji in extract_kanjis(&lesson.body) {
        println!("{}", kanji);
    }

    Ok(())
}

fn print_prompts(path: &PathBuf) -> Result<(), String> {
    let lesson = read_lesson(path)?;

    for prompt in lesson.prompts {
        println!("{}", prompt);
    }

    Ok(())
}

fn send_quiz_batch(path: &PathBuf, bot_url: &str, pause_secs: u64) -> anyhow::Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lesson file {:?}", path))?;
    let lesson = parse_lesson_response(&raw)?;

    let quizzes = extract_delivery_quizzes(&lesson.body);
    if quizzes.is_empty() {
        println!("No quiz payloads could be extracted from this lesson.");
        return Ok(());
    }

    println!("Sending {} quiz payload(s) to {} ...", quizzes.len(), bot_url);

    let sent = delivery::send_quizzes(bot_url, &quizzes, Duration::from_secs(pause_secs))
        .context("Quiz delivery aborted")?;

    println!("Delivered {} quiz payload(s).", sent);

    Ok(())
}

fn test_bot(bot_url: &str) -> Result<(), String> {
    if delivery::test_connection(bot_url) {
        println!("Bot connection OK: {}", bot_url);
        Ok(())
    } else {
        Err(format!("Bot is not reachable at {}", bot_url))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Kotoba lesson CLI", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Base URL of the quiz delivery bot.
    /// If not provided, the BOT_API_URL environment variable will be used.
    #[arg(long, global = true, value_name = "URL", env = "BOT_API_URL")]
    bot_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a lesson response in one of the output formats
    #[command(arg_required_else_help = true)]
    Render {
        /// Path to a raw generative response file
        #[arg(value_name = "FILE_PATH")]
        lesson_path: PathBuf,

        /// Output format
        #[arg(value_enum, long, default_value = "html")]
        format: RenderFormat,
    },

    /// Extract quiz questions from a lesson
    #[command(arg_required_else_help = true)]
    Quiz {
        #[arg(value_name = "FILE_PATH")]
        lesson_path: PathBuf,

        /// Print the questions as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Limit the number of extracted questions
        #[arg(long)]
        max: Option<usize>,

        /// Correct-answer recognition strategy: "adjacent" or "checkmark-glyph"
        #[arg(long, default_value = "adjacent")]
        strategy: CorrectMarkerStrategy,
    },

    /// Extract the kanji list from a lesson
    #[command(arg_required_else_help = true)]
    Kanji {
        #[arg(value_name = "FILE_PATH")]
        lesson_path: PathBuf,
    },

    /// Print the image-generation prompts of a lesson response
    #[command(arg_required_else_help = true)]
    Prompts {
        #[arg(value_name = "FILE_PATH")]
        lesson_path: PathBuf,
    },

    /// Send the delivery quiz payloads to the bot, in extraction order,
    /// pausing between consecutive dispatches
    #[command(arg_required_else_help = true)]
    SendQuiz {
        #[arg(value_name = "FILE_PATH")]
        lesson_path: PathBuf,

        /// Seconds to wait between consecutive dispatches
        #[arg(long, default_value_t = DELIVERY_PAUSE_SECS)]
        pause_secs: u64,
    },

    /// Probe the bot liveness endpoint
    TestBot,
}

/// Enum for the output formats of the render command.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum RenderFormat {
    Html,
    Channel,
    Speech,
}

fn main() {
    // Attempt to load .env file. This might define BOT_API_URL if it's not
    // already in the environment. Clap will pick it up via `env = "BOT_API_URL"`.
    if dotenv().is_err() {
        println!("Info: No .env file found or failed to load.");
    }

    let cli = Cli::parse();

    let bot_url = cli.bot_url.unwrap_or_else(|| BOT_API_URL.to_string());

    let command_result = match cli.command {
        Commands::Render { lesson_path, format } => {
            render_lesson(&lesson_path, format)
        }

        Commands::Quiz { lesson_path, json, max, strategy } => {
            print_quiz(&lesson_path, json, max, strategy)
        }

        Commands::Kanji { lesson_path } => {
            print_kanjis(&lesson_path)
        }

        Commands::Prompts { lesson_path } => {
            print_prompts(&lesson_path)
        }

        Commands::SendQuiz { lesson_path, pause_secs } => {
            send_quiz_batch(&lesson_path, &bot_url, pause_secs)
                .map_err(|e| format!("{:#}", e))
        }

        Commands::TestBot => {
            test_bot(&bot_url)
        }
    };

    if let Err(e) = command_result {
        eprintln!("Error executing command: {}", e);
        exit(1);
    }
}
