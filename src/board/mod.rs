pub mod slot;

pub use slot::RaffleSlot;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
}

impl Currency {
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }
}

/// A named raffle event: a fixed-size run of numbered slots plus pricing
/// and an optional prize image (an opaque data-URL string).
///
/// Serialized field names match the JSON shape the web client writes to
/// localStorage and backup files, so old exports import cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaffleBoard {
    pub id: String,
    pub title: String,
    pub slots: Vec<RaffleSlot>,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub slot_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prize_image: Option<String>,
}

impl RaffleBoard {
    /// Fresh board: `slot_count` empty unpaid slots numbered `1..=slot_count`,
    /// USD, free. The id is a new UUIDv4.
    pub fn new(title: impl Into<String>, slot_count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            slots: (1..=slot_count).map(RaffleSlot::empty).collect(),
            currency: Currency::Usd,
            slot_price: 0.0,
            prize_image: None,
        }
    }

    pub fn slot(&self, slot_id: u32) -> Option<&RaffleSlot> {
        self.slots.iter().find(|s| s.id == slot_id)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filled()).count()
    }

    pub fn eligible_slots(&self) -> Vec<&RaffleSlot> {
        self.slots.iter().filter(|s| s.is_eligible()).collect()
    }

    /// Fill ratio in [0, 1] for the home-screen progress bar.
    pub fn progress(&self) -> f64 {
        if self.slots.is_empty() {
            return 0.0;
        }
        self.filled_count() as f64 / self.slots.len() as f64
    }

    /// Price line shown on the board card, e.g. `"$5.00 / slot"`.
    /// None when the board is free.
    pub fn price_label(&self) -> Option<String> {
        if self.slot_price > 0.0 {
            Some(format!(
                "{}{:.2} / slot",
                self.currency.symbol(),
                self.slot_price
            ))
        } else {
            None
        }
    }
}

/// Setup-form validation: non-empty title and a slot count within the
/// configured bounds. The store itself accepts any count >= 1; this is the
/// caller-side check run before `create_board`.
pub fn validate_setup(title: &str, slot_count: u32) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation(
            "please enter a title for the raffle".to_string(),
        ));
    }
    if !(config::MIN_SLOT_COUNT..=config::MAX_SLOT_COUNT).contains(&slot_count) {
        return Err(Error::Validation(format!(
            "number of slots must be between {} and {}",
            config::MIN_SLOT_COUNT,
            config::MAX_SLOT_COUNT
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_has_contiguous_slot_ids() {
        let board = RaffleBoard::new("Prize A", 10);
        assert_eq!(board.slots.len(), 10);
        let ids: Vec<u32> = board.slots.iter().map(|s| s.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
        assert_eq!(board.filled_count(), 0);
        assert!(board.eligible_slots().is_empty());
        assert_eq!(board.currency, Currency::Usd);
        assert_eq!(board.slot_price, 0.0);
        assert!(board.prize_image.is_none());
    }

    #[test]
    fn test_fresh_boards_get_distinct_ids() {
        let a = RaffleBoard::new("A", 1);
        let b = RaffleBoard::new("A", 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_progress_and_price_label() {
        let mut board = RaffleBoard::new("Cruise", 4);
        assert_eq!(board.progress(), 0.0);
        assert_eq!(board.price_label(), None);

        board.slots[0].name = "Alice".to_string();
        board.slots[2].name = "Bob".to_string();
        assert_eq!(board.filled_count(), 2);
        assert!((board.progress() - 0.5).abs() < f64::EPSILON);

        board.slot_price = 5.0;
        assert_eq!(board.price_label().as_deref(), Some("$5.00 / slot"));
        board.currency = Currency::Eur;
        assert_eq!(board.price_label().as_deref(), Some("€5.00 / slot"));
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let mut board = RaffleBoard::new("Prize", 1);
        board.slot_price = 2.5;
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["slotPrice"], 2.5);
        assert_eq!(json["currency"], "USD");
        // prizeImage is omitted entirely while unset
        assert!(json.get("prizeImage").is_none());

        board.prize_image = Some("data:image/png;base64,AAAA".to_string());
        let json = serde_json::to_value(&board).unwrap();
        assert_eq!(json["prizeImage"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn test_validate_setup_bounds() {
        assert!(validate_setup("Prize", 1).is_ok());
        assert!(validate_setup("Prize", 500).is_ok());
        assert!(validate_setup("", 10).is_err());
        assert!(validate_setup("   ", 10).is_err());
        assert!(validate_setup("Prize", 0).is_err());
        assert!(validate_setup("Prize", 501).is_err());
    }
}
