//! Section navigation: scroll the viewport so a section's top meets the
//! viewport top.

use crate::sections::{SectionId, SectionLayout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Scroll requests issued to the hosting viewport
pub trait Viewport {
    fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior);
}

/// Smooth-scroll to the section named `id`.
///
/// Unknown ids and sections absent from the layout are a silent no-op.
pub fn scroll_to_section(id: &str, layout: &impl SectionLayout, viewport: &mut impl Viewport) {
    let Some(section) = SectionId::parse(id) else {
        return;
    };
    if let Some(bounds) = layout.section_bounds(section) {
        viewport.scroll_to(bounds.top, ScrollBehavior::Smooth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::StaticLayout;

    #[derive(Default)]
    struct RecordingViewport {
        requests: Vec<(f64, ScrollBehavior)>,
    }

    impl Viewport for RecordingViewport {
        fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
            self.requests.push((top, behavior));
        }
    }

    fn layout() -> StaticLayout {
        StaticLayout::contiguous(&[800.0, 800.0, 1000.0, 600.0]).unwrap()
    }

    #[test]
    fn test_scrolls_to_section_top() {
        let mut viewport = RecordingViewport::default();
        scroll_to_section("projects", &layout(), &mut viewport);
        assert_eq!(viewport.requests, vec![(1600.0, ScrollBehavior::Smooth)]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut viewport = RecordingViewport::default();
        scroll_to_section("skills", &layout(), &mut viewport);
        scroll_to_section("", &layout(), &mut viewport);
        assert!(viewport.requests.is_empty());
    }

    #[test]
    fn test_unrendered_section_is_noop() {
        let mut viewport = RecordingViewport::default();
        let layout = layout().without(SectionId::Contact);
        scroll_to_section("contact", &layout, &mut viewport);
        assert!(viewport.requests.is_empty());
    }
}
