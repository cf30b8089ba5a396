//! Core identity types for the poster quadrants

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two contrasted time periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Genesis,
    Modern,
}

/// Moral polarity of a quadrant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoralState {
    Good,
    Evil,
}

/// One of the four fixed quadrant positions
///
/// This is a closed enum: every slot the poster can show exists here, so
/// slot lookups never fail at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotId {
    GenesisGood,
    GenesisEvil,
    ModernGood,
    ModernEvil,
}

impl SlotId {
    /// All four slots in display order. Declaration order matters: it is
    /// also the index order of the poster's slot array.
    pub const ALL: [SlotId; 4] = [
        SlotId::GenesisGood,
        SlotId::GenesisEvil,
        SlotId::ModernGood,
        SlotId::ModernEvil,
    ];

    pub fn period(self) -> Period {
        match self {
            SlotId::GenesisGood | SlotId::GenesisEvil => Period::Genesis,
            SlotId::ModernGood | SlotId::ModernEvil => Period::Modern,
        }
    }

    pub fn moral_state(self) -> MoralState {
        match self {
            SlotId::GenesisGood | SlotId::ModernGood => MoralState::Good,
            SlotId::GenesisEvil | SlotId::ModernEvil => MoralState::Evil,
        }
    }

    /// Stable string form, also accepted by [`SlotId::parse`]
    pub fn as_str(self) -> &'static str {
        match self {
            SlotId::GenesisGood => "gen-good",
            SlotId::GenesisEvil => "gen-evil",
            SlotId::ModernGood => "mod-good",
            SlotId::ModernEvil => "mod-evil",
        }
    }

    /// Parse the string form used by the CLI and the catalog ids
    pub fn parse(s: &str) -> Option<SlotId> {
        match s {
            "gen-good" => Some(SlotId::GenesisGood),
            "gen-evil" => Some(SlotId::GenesisEvil),
            "mod-good" => Some(SlotId::ModernGood),
            "mod-evil" => Some(SlotId::ModernEvil),
            _ => None,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_string_form_round_trips() {
        for slot in SlotId::ALL {
            assert_eq!(SlotId::parse(slot.as_str()), Some(slot));
        }
        assert_eq!(SlotId::parse("mod-neutral"), None);
    }

    #[test]
    fn slot_period_and_state() {
        assert_eq!(SlotId::GenesisGood.period(), Period::Genesis);
        assert_eq!(SlotId::GenesisEvil.moral_state(), MoralState::Evil);
        assert_eq!(SlotId::ModernGood.moral_state(), MoralState::Good);
        assert_eq!(SlotId::ModernEvil.period(), Period::Modern);
    }

    #[test]
    fn slot_array_order_matches_discriminants() {
        for (i, slot) in SlotId::ALL.into_iter().enumerate() {
            assert_eq!(slot as usize, i);
        }
    }
}
