//! Slot refresh orchestration
//!
//! Each of the four quadrant slots moves IDLE -> LOADING -> IDLE around a
//! single generation call. The scenario index advances before the call, so
//! the prompt sent always belongs to the newly active content. Slots are
//! independent: one slot's failure or latency never blocks or alters
//! another's state.
//!
//! Exclusive borrows double as an in-flight guard - a second refresh of a
//! slot cannot be issued through the same poster while one is pending, so
//! there is no within-slot write race to arbitrate.

use crate::content::{self, QuadrantContent};
use crate::core::types::SlotId;
use crate::gen::{ImageGenerator, ImageRef, ImageResult};

/// Runtime state for one quadrant position
#[derive(Debug, Clone)]
pub struct SlotState {
    pub id: SlotId,
    /// Position in the slot's scenario cycle (fixed at 0 for Genesis)
    pub active_index: usize,
    /// Currently displayed image; starts as the active content's fallback
    /// and is only overwritten by a successful generation
    pub current_image: ImageRef,
    /// True while a generation request for this slot is in flight
    pub is_loading: bool,
}

impl SlotState {
    fn new(id: SlotId) -> Self {
        let fallback = content::active(id, 0).fallback_image_url;
        Self {
            id,
            active_index: 0,
            current_image: ImageRef::Url(fallback.to_string()),
            is_loading: false,
        }
    }

    /// The content currently active for this slot
    pub fn active_content(&self) -> &'static QuadrantContent {
        content::active(self.id, self.active_index)
    }
}

/// The four-quadrant poster and its image generator
pub struct Poster<G: ImageGenerator> {
    slots: [SlotState; 4],
    generator: G,
}

impl<G: ImageGenerator> Poster<G> {
    /// Create the poster with every slot showing its fallback image
    pub fn new(generator: G) -> Self {
        Self {
            slots: SlotId::ALL.map(SlotState::new),
            generator,
        }
    }

    pub fn slot(&self, id: SlotId) -> &SlotState {
        &self.slots[id as usize]
    }

    pub fn slots(&self) -> &[SlotState; 4] {
        &self.slots
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Refresh one quadrant: advance its scenario and regenerate its image
    pub async fn refresh(&mut self, id: SlotId) {
        refresh_slot(&mut self.slots[id as usize], &self.generator).await;
    }

    /// Refresh all four quadrants concurrently
    ///
    /// The four refreshes run as independent futures over disjoint slot
    /// borrows; completion order is unspecified and irrelevant.
    pub async fn refresh_all(&mut self) {
        let [gen_good, gen_evil, mod_good, mod_evil] = &mut self.slots;
        tokio::join!(
            refresh_slot(gen_good, &self.generator),
            refresh_slot(gen_evil, &self.generator),
            refresh_slot(mod_good, &self.generator),
            refresh_slot(mod_evil, &self.generator),
        );
    }
}

/// One IDLE -> LOADING -> IDLE cycle for a single slot
///
/// A failed call leaves the previous image in place; the loading flag
/// clears on every exit path.
async fn refresh_slot<G: ImageGenerator>(slot: &mut SlotState, generator: &G) {
    slot.active_index = content::advance(slot.id, slot.active_index);
    let active = content::active(slot.id, slot.active_index);

    slot.is_loading = true;
    match generator.generate(active.image_prompt).await {
        ImageResult::Success(image) => {
            tracing::info!(slot = %slot.id, scenario = active.id, "image regenerated");
            slot.current_image = image;
        }
        ImageResult::Failure => {
            tracing::debug!(slot = %slot.id, scenario = active.id, "refresh failed; keeping previous image");
        }
    }
    slot.is_loading = false;
}
