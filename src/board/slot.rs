use serde::{Deserialize, Serialize};

/// One numbered entry on a raffle board.
///
/// Slot ids are assigned `1..=N` at board creation and never change; the
/// participant fields are edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaffleSlot {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cabin: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub paid: bool,
}

impl RaffleSlot {
    pub fn empty(id: u32) -> Self {
        Self {
            id,
            name: String::new(),
            cabin: String::new(),
            note: String::new(),
            paid: false,
        }
    }

    /// A slot counts as filled once a participant name is entered.
    pub fn is_filled(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Filled and paid up: allowed to take part in a draw.
    pub fn is_eligible(&self) -> bool {
        self.is_filled() && self.paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_is_neither_filled_nor_eligible() {
        let slot = RaffleSlot::empty(7);
        assert_eq!(slot.id, 7);
        assert!(!slot.is_filled());
        assert!(!slot.is_eligible());
    }

    #[test]
    fn test_whitespace_name_does_not_count_as_filled() {
        let mut slot = RaffleSlot::empty(1);
        slot.name = "   ".to_string();
        slot.paid = true;
        assert!(!slot.is_filled());
        assert!(!slot.is_eligible());
    }

    #[test]
    fn test_filled_but_unpaid_is_not_eligible() {
        let mut slot = RaffleSlot::empty(1);
        slot.name = "Alice".to_string();
        assert!(slot.is_filled());
        assert!(!slot.is_eligible());
    }
}
