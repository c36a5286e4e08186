pub mod manager;

pub use manager::{BoardConfigPatch, BoardStore};

use crate::board::RaffleBoard;

/// What an import did to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// A full backup replaced the whole collection.
    ReplacedAll { count: usize },
    /// A single board with a new id was appended.
    Appended,
    /// A board with this id already exists; the store was not touched.
    /// Confirm with the user, then apply via `BoardStore::overwrite_board`.
    Conflict(RaffleBoard),
}
