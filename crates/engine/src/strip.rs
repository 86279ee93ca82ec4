//! Roulette display strip construction
//!
//! The reveal animation scrolls a long strip of catalog items and stops on
//! the granted one. The strip is several repetitions of the catalog with the
//! winning item spliced in near the end, so the traversal has plenty of
//! distance to decelerate over.

use dailycase_core::PrizeItem;
use serde::Serialize;

/// Catalog repetitions laid down before the winning slot
const LEAD_REPEATS: usize = 5;
/// Repetitions after it, so the viewport never runs out of slots at rest
const TAIL_REPEATS: usize = 2;

/// A fixed display strip with one designated winning slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouletteStrip {
    slots: Vec<PrizeItem>,
    winning_index: usize,
}

impl RouletteStrip {
    /// Build the strip: five catalog repetitions, the granted item, two
    /// more repetitions. The winning slot therefore sits at
    /// `5 * catalog.len()`.
    pub fn build(catalog: &[PrizeItem], won: PrizeItem) -> Self {
        let mut slots = Vec::with_capacity(catalog.len() * (LEAD_REPEATS + TAIL_REPEATS) + 1);
        for _ in 0..LEAD_REPEATS {
            slots.extend_from_slice(catalog);
        }
        let winning_index = slots.len();
        slots.push(won);
        for _ in 0..TAIL_REPEATS {
            slots.extend_from_slice(catalog);
        }

        Self {
            slots,
            winning_index,
        }
    }

    pub fn slots(&self) -> &[PrizeItem] {
        &self.slots
    }

    pub fn winning_index(&self) -> usize {
        self.winning_index
    }

    pub fn winning_item(&self) -> &PrizeItem {
        &self.slots[self.winning_index]
    }

    /// Horizontal translation at which the winning slot's center sits on the
    /// viewport center.
    ///
    /// Derived from geometry rather than hand-tuned, so the visual resting
    /// position and the logical outcome stay consistent for any strip
    /// length, item width, or viewport: `(i + ½)·w − viewport/2` puts slot
    /// `i`'s midpoint exactly under the center marker.
    pub fn resting_offset(&self, item_width: f64, viewport_width: f64) -> f64 {
        (self.winning_index as f64 + 0.5) * item_width - viewport_width / 2.0
    }
}
