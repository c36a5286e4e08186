use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{RaffleBoard, RaffleSlot};
use crate::error::{Error, Result};

/// Pick a winner uniformly among the board's eligible slots (filled and
/// paid). The random source is injected so callers can seed draws in
/// tests; the draw itself is stateless and leaves the board untouched.
pub fn draw_winner<'a, R: Rng + ?Sized>(
    board: &'a RaffleBoard,
    rng: &mut R,
) -> Result<&'a RaffleSlot> {
    let eligible = board.eligible_slots();
    eligible
        .choose(rng)
        .copied()
        .ok_or(Error::NoEligibleParticipants)
}

/// Draw using the thread-local RNG.
pub fn draw_winner_thread_rng(board: &RaffleBoard) -> Result<&RaffleSlot> {
    draw_winner(board, &mut rand::thread_rng())
}
