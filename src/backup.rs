use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::board::RaffleBoard;
use crate::error::{Error, Result};

/// A structurally valid import: either a whole-store backup or one board.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportPayload {
    FullBackup(Vec<RaffleBoard>),
    SingleBoard(RaffleBoard),
}

/// Parse backup text pasted or read from a file.
///
/// A JSON array of boards is a full backup. A JSON object qualifies as a
/// single board only if it carries `id`, `title`, and `slots`. Anything
/// else, including non-JSON, is rejected as "invalid format".
pub fn parse_import(text: &str) -> Result<ImportPayload> {
    let value: Value = serde_json::from_str(text).map_err(|_| Error::invalid_format())?;

    if value.is_array() {
        let boards = serde_json::from_value(value).map_err(|_| Error::invalid_format())?;
        return Ok(ImportPayload::FullBackup(boards));
    }

    let looks_like_board = value.get("id").is_some()
        && value.get("title").is_some()
        && value.get("slots").is_some();
    if looks_like_board {
        let board = serde_json::from_value(value).map_err(|_| Error::invalid_format())?;
        return Ok(ImportPayload::SingleBoard(board));
    }

    Err(Error::invalid_format())
}

/// Pretty-printed JSON for one board, for download/share/manual-copy paths.
pub fn serialize_board(board: &RaffleBoard) -> Result<String> {
    Ok(serde_json::to_string_pretty(board)?)
}

/// Pretty-printed JSON of the whole collection (a full backup).
pub fn serialize_store(boards: &[RaffleBoard]) -> Result<String> {
    Ok(serde_json::to_string_pretty(boards)?)
}

/// Suggested download name: `raffle-board-<title>.json`, with anything
/// outside `[A-Za-z0-9_]` in the title replaced by underscores.
pub fn export_file_name(title: &str) -> String {
    let sanitized: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    format!("raffle-board-{}.json", sanitized)
}

/// Encode raw image bytes as the `data:` URL stored in `prize_image`.
pub fn encode_prize_image(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
