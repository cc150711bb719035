//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled text through
//! composable rendering components. It provides theme support, width-aware
//! layout, and search match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI text
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared text utilities (highlighting, padding, wrapping)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::Theme;
pub use viewmodel::{
    BrewCard, DialogInfo, EmptyState, FooterInfo, FormInfo, HeaderInfo, ListBody, SearchBarInfo,
    UIViewModel,
};
