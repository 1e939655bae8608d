//! Active-Section Tracker
//!
//! Picks the navigation section to emphasize from the current scroll offset.
//! The probe point sits `PROBE_OFFSET` pixels below the scroll offset to
//! compensate for the fixed navigation bar.

use crate::sections::{SectionId, SectionLayout};

/// Fixed-height navigation bar compensation, in pixels
pub const PROBE_OFFSET: f64 = 100.0;

/// Vertical coordinate tested for section containment
pub fn probe_point(scroll_y: f64) -> f64 {
    scroll_y + PROBE_OFFSET
}

/// First section, in priority order, whose bounds contain `probe`.
///
/// Sections missing from the layout never match.
pub fn section_at(probe: f64, layout: &impl SectionLayout) -> Option<SectionId> {
    SectionId::ALL.into_iter().find(|&id| {
        layout
            .section_bounds(id)
            .is_some_and(|bounds| bounds.contains(probe))
    })
}

/// Holds the active section between scroll events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a section other than the default
    pub fn starting_at(active: SectionId) -> Self {
        Self { active }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Recompute the active section for a scroll event.
    ///
    /// Returns the new section when it changed. When no section contains the
    /// probe point the previous value is kept.
    pub fn on_scroll(&mut self, scroll_y: f64, layout: &impl SectionLayout) -> Option<SectionId> {
        let found = section_at(probe_point(scroll_y), layout)?;
        if found == self.active {
            return None;
        }
        self.active = found;
        Some(found)
    }
}
