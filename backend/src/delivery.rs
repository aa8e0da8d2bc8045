use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::logger::{error, info};
use crate::types::{BotResponse, DeliveryPayload};

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Bot endpoint returned HTTP status {0}")]
    Status(u16),
    #[error("Bot request failed: {0}")]
    Transport(String),
    #[error("Could not read the bot response body: {0}")]
    InvalidResponse(String),
}

fn endpoint_url(bot_url: &str, path: &str) -> String {
    format!("{}/{}", bot_url.trim_end_matches('/'), path)
}

/// POSTs one quiz payload to the bot's send-quiz endpoint.
///
/// No automatic retry. A non-success HTTP status or a connection failure
/// is returned to the caller with the underlying status/message.
pub fn send_quiz(bot_url: &str, quiz: &DeliveryPayload) -> Result<BotResponse, DeliveryError> {
    let url = endpoint_url(bot_url, "send-quiz");

    match ureq::post(url).send_json(quiz) {
        Ok(mut resp) => {
            resp.body_mut().read_json::<BotResponse>()
                .map_err(|e| DeliveryError::InvalidResponse(e.to_string()))
        }
        Err(ureq::Error::StatusCode(code)) => Err(DeliveryError::Status(code)),
        Err(e) => Err(DeliveryError::Transport(e.to_string())),
    }
}

/// Liveness probe against the bot's test endpoint. Never panics; any
/// failure reads as "not reachable".
pub fn test_connection(bot_url: &str) -> bool {
    let url = endpoint_url(bot_url, "test");

    match ureq::get(url).call() {
        Ok(mut resp) => {
            if resp.status() != http::StatusCode::OK {
                return false;
            }
            match resp.body_mut().read_json::<BotResponse>() {
                Ok(body) => body.status == "ok",
                Err(_) => false,
            }
        }
        Err(_) => false,
    }
}

/// Dispatches payloads in extraction order, one at a time, sleeping
/// `pause` between consecutive sends. The first failure aborts the
/// remaining queue. Returns the number of payloads sent.
pub fn send_quizzes(
    bot_url: &str,
    quizzes: &[DeliveryPayload],
    pause: Duration,
) -> Result<usize, DeliveryError> {
    for (i, quiz) in quizzes.iter().enumerate() {
        if i > 0 {
            thread::sleep(pause);
        }

        match send_quiz(bot_url, quiz) {
            Ok(resp) => {
                info(&format!("Quiz {}/{} delivered, bot status: {}", i + 1, quizzes.len(), resp.status));
            }
            Err(e) => {
                error(&format!("Quiz {}/{} failed, aborting the batch: {}", i + 1, quizzes.len(), e));
                return Err(e);
            }
        }
    }

    Ok(quizzes.len())
}
