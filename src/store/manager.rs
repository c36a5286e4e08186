use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use log::{error, warn};

use crate::backup::ImportPayload;
use crate::board::{Currency, RaffleBoard, RaffleSlot};
use crate::config;
use crate::error::{Error, Result};
use crate::storage::database::{Database, BOARDS_KEY};

use super::ImportOutcome;

/// Partial board-settings update; unset fields are left alone.
/// Slot price is expected to be clamped to >= 0 by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardConfigPatch {
    pub title: Option<String>,
    pub currency: Option<Currency>,
    pub slot_price: Option<f64>,
}

/// Owns the board collection and mirrors every change to durable storage.
///
/// All mutations run synchronously on the caller's thread; each one that
/// changes the collection writes the full serialized snapshot under one
/// storage key before returning. A failed write is logged and the
/// in-memory state stands, so the user is never blocked on a disk error.
pub struct BoardStore {
    db: Arc<Database>,
    boards: Vec<RaffleBoard>,
}

impl BoardStore {
    /// Rehydrate from storage. Absent or malformed snapshots yield an
    /// empty collection; malformed data is logged and discarded.
    pub fn open(db: Arc<Database>) -> Self {
        let boards = match db.get(BOARDS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(boards) => boards,
                Err(e) => {
                    warn!("discarding malformed board snapshot: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("failed to read board snapshot: {}", e);
                Vec::new()
            }
        };
        Self { db, boards }
    }

    /// Open the database at the configured data directory and rehydrate.
    pub fn open_default() -> Result<Self> {
        let db = Database::open(Path::new(config::DATA_DIR))?;
        Ok(Self::open(Arc::new(db)))
    }

    pub fn boards(&self) -> &[RaffleBoard] {
        &self.boards
    }

    pub fn board(&self, board_id: &str) -> Option<&RaffleBoard> {
        self.boards.iter().find(|b| b.id == board_id)
    }

    /// Create a board with `slot_count` empty unpaid slots numbered
    /// `1..=slot_count` and append it. Returns the created board.
    ///
    /// The store only insists on a non-empty title and at least one slot;
    /// the setup form's [1, 500] bound is `board::validate_setup`'s job.
    pub fn create_board(&mut self, title: &str, slot_count: u32) -> Result<RaffleBoard> {
        if title.trim().is_empty() {
            return Err(Error::Validation("title must not be empty".to_string()));
        }
        if slot_count == 0 {
            return Err(Error::Validation(
                "a board needs at least one slot".to_string(),
            ));
        }
        let board = RaffleBoard::new(title, slot_count);
        self.boards.push(board.clone());
        self.persist();
        Ok(board)
    }

    /// Replace the slot with the matching id on the given board.
    /// Unknown board or slot ids are a silent no-op.
    pub fn update_slot(&mut self, board_id: &str, updated: RaffleSlot) {
        if let Some(board) = self.boards.iter_mut().find(|b| b.id == board_id) {
            if let Some(slot) = board.slots.iter_mut().find(|s| s.id == updated.id) {
                *slot = updated;
                self.persist();
            }
        }
    }

    /// Merge the set fields of `patch` into the board's settings.
    pub fn update_board_config(&mut self, board_id: &str, patch: BoardConfigPatch) {
        if let Some(board) = self.boards.iter_mut().find(|b| b.id == board_id) {
            if let Some(title) = patch.title {
                board.title = title;
            }
            if let Some(currency) = patch.currency {
                board.currency = currency;
            }
            if let Some(slot_price) = patch.slot_price {
                board.slot_price = slot_price;
            }
            self.persist();
        }
    }

    /// Attach a prize image (an opaque data-URL string).
    pub fn set_prize_image(&mut self, board_id: &str, data_url: String) {
        if let Some(board) = self.boards.iter_mut().find(|b| b.id == board_id) {
            board.prize_image = Some(data_url);
            self.persist();
        }
    }

    pub fn remove_prize_image(&mut self, board_id: &str) {
        if let Some(board) = self.boards.iter_mut().find(|b| b.id == board_id) {
            if board.prize_image.take().is_some() {
                self.persist();
            }
        }
    }

    /// Hard-remove a board. Returns true if it existed. Navigating away
    /// from a deleted active board is the embedder's concern.
    pub fn delete_board(&mut self, board_id: &str) -> bool {
        let before = self.boards.len();
        self.boards.retain(|b| b.id != board_id);
        let removed = self.boards.len() < before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Apply a parsed import. A full backup replaces the collection
    /// verbatim, duplicate ids and all. A single board appends when its
    /// id is new; otherwise nothing changes and the conflicting board is
    /// handed back for the caller to confirm.
    pub fn import_snapshot(&mut self, payload: ImportPayload) -> ImportOutcome {
        match payload {
            ImportPayload::FullBackup(boards) => {
                let count = boards.len();
                self.boards = boards;
                self.persist();
                ImportOutcome::ReplacedAll { count }
            }
            ImportPayload::SingleBoard(board) => {
                if self.boards.iter().any(|b| b.id == board.id) {
                    ImportOutcome::Conflict(board)
                } else {
                    self.boards.push(board);
                    self.persist();
                    ImportOutcome::Appended
                }
            }
        }
    }

    /// Confirmed half of the import conflict flow: replace the board with
    /// the same id, or append if it vanished in between.
    pub fn overwrite_board(&mut self, board: RaffleBoard) {
        if let Some(existing) = self.boards.iter_mut().find(|b| b.id == board.id) {
            *existing = board;
        } else {
            self.boards.push(board);
        }
        self.persist();
    }

    /// File-upload import: append candidates whose trimmed title is new
    /// to the store (case-sensitive match, including titles appended
    /// earlier in the same batch). Untitled candidates are skipped.
    /// Returns the number appended.
    pub fn merge_by_title(&mut self, candidates: Vec<RaffleBoard>) -> usize {
        let mut titles: HashSet<String> = self
            .boards
            .iter()
            .map(|b| b.title.trim().to_string())
            .collect();

        let mut appended = 0;
        for board in candidates {
            let title = board.title.trim().to_string();
            if title.is_empty() || !titles.insert(title) {
                continue;
            }
            self.boards.push(board);
            appended += 1;
        }
        if appended > 0 {
            self.persist();
        }
        appended
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.boards) {
            Ok(json) => json,
            Err(e) => {
                error!("failed to serialize board snapshot: {}", e);
                return;
            }
        };
        if let Err(e) = self.db.put(BOARDS_KEY, &json) {
            error!("failed to persist board snapshot: {}", e);
        }
    }
}
