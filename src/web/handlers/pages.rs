// Page rendering with Askama
//
// Templates receive an immutable `ViewState` snapshot plus the content; they
// never own UI state.

use askama::Template;
use chrono::Datelike;

use crate::component::ViewState;
use crate::content::PortfolioContent;
use crate::sections::SectionId;
use crate::tracker::PROBE_OFFSET;

/// One entry of the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub fn nav_links(active: SectionId) -> Vec<NavLink> {
    SectionId::ALL
        .into_iter()
        .map(|section| NavLink {
            id: section.as_str(),
            label: section.label(),
            active: section == active,
        })
        .collect()
}

/// Section ids in tracker priority order, as a JS array literal
fn section_order_json() -> String {
    let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
    serde_json::to_string(&ids).unwrap_or_else(|_| "[]".to_string())
}

// ============================================================================
// Navigation partial (htmx swap target)
// ============================================================================

#[derive(Template)]
#[template(path = "partials/nav.html")]
pub struct NavTemplate<'a> {
    pub brand: &'a str,
    pub nav_links: Vec<NavLink>,
}

impl<'a> NavTemplate<'a> {
    pub fn new(content: &'a PortfolioContent, view: ViewState) -> Self {
        Self {
            brand: &content.profile.short_name,
            nav_links: nav_links(view.active),
        }
    }
}

// ============================================================================
// Portfolio page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/portfolio.html")]
pub struct PortfolioTemplate<'a> {
    pub title: String,
    pub brand: &'a str,
    pub content: &'a PortfolioContent,
    pub nav_links: Vec<NavLink>,
    pub visible: bool,
    pub year: i32,
    pub section_order_json: String,
    pub probe_offset: f64,
}

impl<'a> PortfolioTemplate<'a> {
    pub fn new(content: &'a PortfolioContent, view: ViewState) -> Self {
        Self {
            title: format!("{} | Portfolio", content.profile.short_name),
            brand: &content.profile.short_name,
            content,
            nav_links: nav_links(view.active),
            visible: view.visible,
            year: chrono::Utc::now().year(),
            section_order_json: section_order_json(),
            probe_offset: PROBE_OFFSET,
        }
    }
}

pub fn render_page(content: &PortfolioContent, view: ViewState) -> askama::Result<String> {
    PortfolioTemplate::new(content, view).render()
}

pub fn render_nav(content: &PortfolioContent, view: ViewState) -> askama::Result<String> {
    NavTemplate::new(content, view).render()
}
