pub mod types;
pub mod lesson;
pub mod kanji;
pub mod quiz;
pub mod html_render;
pub mod channel_format;
pub mod delivery;
pub mod logger;

use std::fs::create_dir_all;
use std::path::PathBuf;
use std::error::Error;
use app_dirs::{get_app_root, AppDataType, AppInfo};

/// Maximum number of quiz payloads handed to the bot-delivery channel.
pub static MAX_DELIVERY_QUIZZES: usize = 3;

/// Minimum pause between consecutive quiz dispatches, to respect the
/// channel's rate limits.
pub static DELIVERY_PAUSE_SECS: u64 = 6;

pub static BOT_API_URL: &'static str = "http://localhost:8787";

pub const APP_INFO: AppInfo = AppInfo{name: "kotoba", author: "kotoba-project"};

pub fn get_create_kotoba_dir() -> Result<PathBuf, Box<dyn Error>> {
    let p = get_app_root(AppDataType::UserData, &APP_INFO)?;
    if !p.exists() {
        create_dir_all(&p)?;
    }
    Ok(p)
}
