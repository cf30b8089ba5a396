//! Static catalog of quadrant content
//!
//! The poster contrasts two time periods, each split into a good and an
//! evil state. Genesis slots hold a single fixed scenario; the two modern
//! slots cycle through ordered scenario lists. The catalog is fully
//! enumerated at compile time and never changes at runtime - the only
//! mutable piece of slot state is the cycle position, which lives in the
//! poster, not here.

use crate::core::types::{MoralState, Period, SlotId};

/// The static text/prompt bundle describing a single displayable scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantContent {
    pub id: &'static str,
    pub period: Period,
    pub state: MoralState,
    pub title: &'static str,
    pub description: &'static str,
    /// Biblical verse, present only for Genesis entries
    pub verse: Option<&'static str>,
    /// Text fed to the image generator (before the uniform framing)
    pub image_prompt: &'static str,
    /// Image shown before the first successful generation, and kept on failure
    pub fallback_image_url: &'static str,
}

const GENESIS_GOOD: &[QuadrantContent] = &[QuadrantContent {
    id: "gen-good",
    period: Period::Genesis,
    state: MoralState::Good,
    title: "בראשית: הבריאה והאור",
    description: "התחלה של תקווה מוחלטת - בריאת האור והפרדתו מהחושך.",
    verse: Some("וַיֹּאמֶר אֱלֹהִים יְהִי אוֹר וַיְהִי אוֹר."),
    image_prompt: "The first moment of light in the universe. Ethereal golden rays \
        breaking through deep primordial shadows. Oil painting style, Michelangelo \
        inspiration.",
    fallback_image_url:
        "https://images.unsplash.com/photo-1518005020250-6eb5f3f2754d?auto=format&fit=crop&q=80&w=800",
}];

const GENESIS_EVIL: &[QuadrantContent] = &[QuadrantContent {
    id: "gen-evil",
    period: Period::Genesis,
    state: MoralState::Evil,
    title: "בראשית: קין והבל",
    description: "החטא הקדמון של האדם נגד אחיו - רצח הבל בידי קין.",
    verse: Some("וַיָּקָם קַיִן אֶל הֶבֶל אָחִיו וַיַּהַרְגֵהוּ."),
    image_prompt: "Dark atmospheric Baroque painting. Cain and Abel tragedy, deep \
        shadows, emotional loss, earth tones and dramatic lighting.",
    fallback_image_url:
        "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?auto=format&fit=crop&q=80&w=800",
}];

const MODERN_GOOD_SCENARIOS: &[QuadrantContent] = &[
    QuadrantContent {
        id: "mod-good-tech",
        period: Period::Modern,
        state: MoralState::Good,
        title: "היום: קידמה וריפוי",
        description: "טכנולוגיה המרחיבה את גבולות המחשבה, רובוטיקה רפואית המצילה חיים.",
        verse: None,
        image_prompt: "Futuristic medical robotics and blue neural light patterns. \
            Clean, optimistic, high-tech evolution. Cinematic photography.",
        fallback_image_url:
            "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=800",
    },
    QuadrantContent {
        id: "mod-good-space",
        period: Period::Modern,
        state: MoralState::Good,
        title: "היום: כיבוש הידע",
        description: "האדם מגיע לכוכבים וחוקר את מעמקי היקום - איחוד האנושות דרך מדע.",
        verse: None,
        image_prompt: "Modern space exploration, futuristic telescopes observing a \
            nebula, silhouettes of scientists in a bright high-tech control room.",
        fallback_image_url:
            "https://images.unsplash.com/photo-1446776811953-b23d57bd21aa?auto=format&fit=crop&q=80&w=800",
    },
];

const MODERN_EVIL_SCENARIOS: &[QuadrantContent] = &[
    QuadrantContent {
        id: "mod-evil-7oct",
        period: Period::Modern,
        state: MoralState::Evil,
        title: "היום: שבעה באוקטובר",
        description: "חורבן, כאב והרס ביישובי הדרום - עדות לרוע האנושי בעידן המודרני.",
        verse: None,
        image_prompt: "Gritty documentary photography. A charred ruined wall in a \
            kibbutz, smoke in the background, a single broken childhood item in the \
            dust. Tragic atmosphere.",
        fallback_image_url:
            "https://images.unsplash.com/photo-1496568818391-f39c58eef406?auto=format&fit=crop&q=80&w=800",
    },
    QuadrantContent {
        id: "mod-evil-warfare",
        period: Period::Modern,
        state: MoralState::Evil,
        title: "היום: מלחמה טכנולוגית",
        description: "טילים וכטב\"מים המופנים נגד חיי אדם - הצד האפל של הקידמה.",
        verse: None,
        image_prompt: "Urban warfare, high contrast silhouettes against a fiery sky, \
            military drones in a dark smoky atmosphere. Gritty, metallic, terrifying.",
        fallback_image_url:
            "https://images.unsplash.com/photo-1536431311719-398b6704d4cc?auto=format&fit=crop&q=80&w=800",
    },
];

/// All scenarios for a slot, in cycle order
pub fn scenarios(slot: SlotId) -> &'static [QuadrantContent] {
    match slot {
        SlotId::GenesisGood => GENESIS_GOOD,
        SlotId::GenesisEvil => GENESIS_EVIL,
        SlotId::ModernGood => MODERN_GOOD_SCENARIOS,
        SlotId::ModernEvil => MODERN_EVIL_SCENARIOS,
    }
}

/// The content active for `slot` at cycle position `index`
pub fn active(slot: SlotId, index: usize) -> &'static QuadrantContent {
    let list = scenarios(slot);
    &list[index % list.len()]
}

/// Next cycle position for `slot`, wrapping after the last entry
///
/// Genesis slots hold a single scenario, so the same modular step leaves
/// them fixed at position 0.
pub fn advance(slot: SlotId, index: usize) -> usize {
    (index + 1) % scenarios(slot).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn catalog_matches_slot_identities() {
        for slot in SlotId::ALL {
            let list = scenarios(slot);
            assert!(!list.is_empty(), "{slot} has no scenarios");
            for entry in list {
                assert_eq!(entry.period, slot.period(), "{}", entry.id);
                assert_eq!(entry.state, slot.moral_state(), "{}", entry.id);
                assert!(!entry.title.is_empty());
                assert!(!entry.image_prompt.is_empty());
                assert!(!entry.fallback_image_url.is_empty());
            }
        }
    }

    #[test]
    fn genesis_entries_are_singletons_with_verses() {
        for slot in [SlotId::GenesisGood, SlotId::GenesisEvil] {
            let list = scenarios(slot);
            assert_eq!(list.len(), 1);
            assert!(list[0].verse.is_some());
        }
    }

    #[test]
    fn modern_entries_carry_no_verse() {
        for slot in [SlotId::ModernGood, SlotId::ModernEvil] {
            for entry in scenarios(slot) {
                assert!(entry.verse.is_none(), "{}", entry.id);
            }
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = SlotId::ALL
            .iter()
            .flat_map(|&slot| scenarios(slot).iter().map(|c| c.id))
            .collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn modern_advance_wraps_around() {
        assert_eq!(advance(SlotId::ModernGood, 0), 1);
        assert_eq!(advance(SlotId::ModernGood, 1), 0);
    }

    #[test]
    fn genesis_advance_is_a_noop() {
        assert_eq!(advance(SlotId::GenesisGood, 0), 0);
        assert_eq!(advance(SlotId::GenesisEvil, 0), 0);
    }

    proptest! {
        /// Advancing any whole number of full cycles returns to the start
        #[test]
        fn full_cycles_return_to_start(cycles in 0usize..50) {
            for slot in SlotId::ALL {
                let len = scenarios(slot).len();
                let mut index = 0;
                for _ in 0..cycles * len {
                    index = advance(slot, index);
                }
                prop_assert_eq!(index, 0);
            }
        }
    }
}
