//! Portfolio page component
//!
//! Owns the two pieces of UI state (active section, entrance flag) and hands
//! out immutable `ViewState` snapshots for rendering. Mounting registers a
//! scroll listener with the host; the returned guard removes it on drop so a
//! torn-down page never keeps a handler alive.

use crate::entrance::EntranceFlag;
use crate::sections::{SectionId, SectionLayout};
use crate::tracker::ActiveSectionTracker;

/// Handle for a registered scroll listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Event host the component attaches its scroll listener to
pub trait ListenerHost {
    fn add_scroll_listener(&self) -> ListenerId;
    fn remove_scroll_listener(&self, id: ListenerId);
}

/// Live scroll-listener registration; deregisters on drop
#[must_use = "dropping the subscription removes the scroll listener"]
pub struct ScrollSubscription<'h, H: ListenerHost + ?Sized> {
    host: &'h H,
    id: ListenerId,
}

impl<H: ListenerHost + ?Sized> ScrollSubscription<'_, H> {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl<H: ListenerHost + ?Sized> Drop for ScrollSubscription<'_, H> {
    fn drop(&mut self) {
        self.host.remove_scroll_listener(self.id);
    }
}

/// Render-time snapshot passed down to templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub active: SectionId,
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PortfolioComponent {
    tracker: ActiveSectionTracker,
    entrance: EntranceFlag,
}

impl PortfolioComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Component with a pre-selected active section (e.g. from a deep link)
    pub fn with_active(active: SectionId) -> Self {
        Self {
            tracker: ActiveSectionTracker::starting_at(active),
            entrance: EntranceFlag::new(),
        }
    }

    /// Become interactive: reveal the entrance flag and attach the scroll
    /// listener. Keep the subscription for as long as the page is mounted.
    pub fn mount<'h, H: ListenerHost + ?Sized>(&mut self, host: &'h H) -> ScrollSubscription<'h, H> {
        self.entrance.reveal();
        let id = host.add_scroll_listener();
        ScrollSubscription { host, id }
    }

    /// Scroll event callback; returns the new active section if it changed
    pub fn handle_scroll(&mut self, scroll_y: f64, layout: &impl SectionLayout) -> Option<SectionId> {
        self.tracker.on_scroll(scroll_y, layout)
    }

    pub fn view(&self) -> ViewState {
        ViewState {
            active: self.tracker.active(),
            visible: self.entrance.is_visible(),
        }
    }
}
