//! Page Sections
//!
//! The four navigable regions of the portfolio page and the layout capability
//! used to measure them. The tracker and navigation logic only ever see a
//! `SectionLayout`, so they run the same against a browser layout tree, a
//! server-side fixture, or a test table.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Navigable page section, in top-to-bottom priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    /// Hero / "about me"
    #[default]
    About,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// Priority order used by the tracker and the navigation bar
    pub const ALL: [SectionId; 4] = [
        SectionId::About,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Element id in the rendered document
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Capitalized label for the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }

    /// Parse an element id, `None` for anything that is not a known section
    pub fn parse(id: &str) -> Option<Self> {
        SectionId::ALL.into_iter().find(|s| s.as_str() == id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown section id: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::parse(s).ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a section, in pixels from document top
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment: `top <= y < top + height`
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Layout measurement supplied by the hosting rendering layer
pub trait SectionLayout {
    /// Current bounds of a section, `None` when it is not rendered
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds>;
}

impl<L: SectionLayout + ?Sized> SectionLayout for &L {
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        (**self).section_bounds(id)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("section {0} has a non-finite top or height")]
    NonFinite(SectionId),

    #[error("section {0} has negative height {1}")]
    NegativeHeight(SectionId, f64),

    #[error("section {later} starts at {later_top} before {earlier} ends at {earlier_bottom}")]
    Overlap {
        earlier: SectionId,
        earlier_bottom: f64,
        later: SectionId,
        later_top: f64,
    },

    #[error("section {0} listed more than once")]
    Duplicate(SectionId),
}

/// In-memory layout table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticLayout {
    bounds: [Option<SectionBounds>; 4],
}

impl StaticLayout {
    /// Build a layout, enforcing the ordering the tracker relies on: sections
    /// appear top-to-bottom in priority order and never overlap. Sections may
    /// be absent and gaps between them are allowed.
    pub fn new(
        entries: impl IntoIterator<Item = (SectionId, SectionBounds)>,
    ) -> Result<Self, LayoutError> {
        let mut layout = StaticLayout::default();
        for (id, bounds) in entries {
            if !bounds.top.is_finite() || !bounds.height.is_finite() {
                return Err(LayoutError::NonFinite(id));
            }
            if bounds.height < 0.0 {
                return Err(LayoutError::NegativeHeight(id, bounds.height));
            }
            let slot = &mut layout.bounds[index_of(id)];
            if slot.is_some() {
                return Err(LayoutError::Duplicate(id));
            }
            *slot = Some(bounds);
        }

        let mut previous: Option<(SectionId, SectionBounds)> = None;
        for id in SectionId::ALL {
            let Some(bounds) = layout.bounds[index_of(id)] else {
                continue;
            };
            if let Some((earlier, earlier_bounds)) = previous {
                if bounds.top < earlier_bounds.bottom() {
                    return Err(LayoutError::Overlap {
                        earlier,
                        earlier_bottom: earlier_bounds.bottom(),
                        later: id,
                        later_top: bounds.top,
                    });
                }
            }
            previous = Some((id, bounds));
        }

        Ok(layout)
    }

    /// Build a layout without ordering checks (host already guarantees it)
    pub fn unchecked(entries: impl IntoIterator<Item = (SectionId, SectionBounds)>) -> Self {
        let mut layout = StaticLayout::default();
        for (id, bounds) in entries {
            layout.bounds[index_of(id)] = Some(bounds);
        }
        layout
    }

    /// Back-to-back sections starting at 0, one height per section in
    /// priority order. Extra heights are ignored; missing ones leave the
    /// trailing sections absent.
    pub fn contiguous(heights: &[f64]) -> Result<Self, LayoutError> {
        let mut top = 0.0;
        let entries: Vec<_> = SectionId::ALL
            .into_iter()
            .zip(heights.iter().copied())
            .map(|(id, height)| {
                let bounds = SectionBounds::new(top, height);
                top += height.max(0.0);
                (id, bounds)
            })
            .collect();
        StaticLayout::new(entries)
    }

    /// Remove a section, as if its element were no longer rendered
    pub fn without(mut self, id: SectionId) -> Self {
        self.bounds[index_of(id)] = None;
        self
    }
}

impl SectionLayout for StaticLayout {
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        self.bounds[index_of(id)]
    }
}

fn index_of(id: SectionId) -> usize {
    match id {
        SectionId::About => 0,
        SectionId::Experience => 1,
        SectionId::Projects => 2,
        SectionId::Contact => 3,
    }
}
