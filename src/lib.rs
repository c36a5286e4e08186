pub mod backup;
pub mod board;
pub mod config;
pub mod draw;
pub mod error;
pub mod logging;
pub mod storage;
pub mod store;

pub use backup::{
    encode_prize_image, export_file_name, parse_import, serialize_board, serialize_store,
    ImportPayload,
};
pub use board::{validate_setup, Currency, RaffleBoard, RaffleSlot};
pub use draw::{draw_winner, draw_winner_thread_rng};
pub use error::{Error, Result};
pub use storage::Database;
pub use store::{BoardConfigPatch, BoardStore, ImportOutcome};
