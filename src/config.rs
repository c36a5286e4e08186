/// Default on-disk data directory.
/// Override at build time: RAFFLEBOARD_DATA_DIR=/path/to/dir cargo build
pub const DATA_DIR: &str = match option_env!("RAFFLEBOARD_DATA_DIR") {
    Some(dir) => dir,
    None => "raffleboard-data",
};

/// Slot-count bounds enforced on the board setup form.
pub const MIN_SLOT_COUNT: u32 = 1;
pub const MAX_SLOT_COUNT: u32 = 500;

/// Pre-filled slot count on the setup form.
pub const DEFAULT_SLOT_COUNT: u32 = 75;
