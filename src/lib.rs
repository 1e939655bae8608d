//! Portfolio Site
//!
//! Server-rendered personal portfolio page.
//!
//! - `sections`, `tracker`, `entrance`, `navigation`, `component`: page state
//!   logic written against host capabilities (layout, viewport, listeners)
//! - `content`: profile, skills, experience and project data
//! - `config`: environment configuration for the server
//! - `web` / `api_server`: Askama templates and the Axum router (feature `api`)

pub mod component;
pub mod config;
pub mod content;
pub mod entrance;
pub mod navigation;
pub mod sections;
pub mod tracker;

#[cfg(feature = "api")]
pub mod api_server;
#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use component::{ListenerHost, ListenerId, PortfolioComponent, ScrollSubscription, ViewState};
pub use config::{ConfigError, ServerConfig};
pub use content::{ContentError, PortfolioContent};
pub use entrance::EntranceFlag;
pub use navigation::{scroll_to_section, ScrollBehavior, Viewport};
pub use sections::{LayoutError, SectionBounds, SectionId, SectionLayout, StaticLayout};
pub use tracker::{ActiveSectionTracker, PROBE_OFFSET};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
