//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are optimized for rendering and contain pre-computed display
//! information like formatted stats, highlight ranges, and swipe transforms.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use brewlog::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, ListBody, SearchBarInfo, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "BrewLog".to_string(), count: 0 },
//!     error_banner: None,
//!     search_bar: SearchBarInfo {
//!         query: String::new(),
//!         placeholder: "Search...".to_string(),
//!         show_clear: false,
//!     },
//!     body: ListBody::Empty(EmptyState {
//!         icon: "☕".to_string(),
//!         message: "No brews yet.".to_string(),
//!     }),
//!     dialog: None,
//!     form: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert!(vm.dialog.is_none());
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Message of the last failed operation, if any.
    pub error_banner: Option<String>,

    /// Search input state.
    pub search_bar: SearchBarInfo,

    /// The list area: loading text, empty state, or cards.
    pub body: ListBody,

    /// Open delete confirmation, drawn above everything else.
    pub dialog: Option<DialogInfo>,

    /// Open add-brew form.
    pub form: Option<FormInfo>,

    /// Help text and command hints.
    pub footer: FooterInfo,
}

/// Content of the list area.
#[derive(Debug, Clone, PartialEq)]
pub enum ListBody {
    /// A load or create request is in flight.
    Loading(String),

    /// No brews are visible.
    Empty(EmptyState),

    /// One card per visible brew, in display order.
    Cards(Vec<BrewCard>),
}

/// Display information for a single brew.
#[derive(Debug, Clone, PartialEq)]
pub struct BrewCard {
    pub id: i64,
    pub bean_type: String,
    pub brew_type: String,

    /// Image reference after origin fallback.
    pub image: String,

    /// `(label, value)` pairs in grid order.
    pub stats: Vec<(String, String)>,

    /// Bloom annotation, absent when no bloom was recorded.
    pub bloom: Option<String>,

    pub details: Option<String>,

    /// Horizontal swipe offset in `[-100, 0]`.
    pub offset: f64,

    /// Transition description, `none` while dragging.
    pub transition: String,

    /// Character ranges of the bean type matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Number of visible brews.
    pub count: usize,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hints for the current overlay.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: String,
    pub message: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Hint shown while the query is empty.
    pub placeholder: String,

    /// Whether the clear affordance is offered.
    pub show_clear: bool,
}

/// Delete confirmation display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogInfo {
    pub id: i64,
    pub title: String,
    pub message: String,
}

/// Add-brew form display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInfo {
    /// Text inputs in display order.
    pub fields: Vec<FormFieldInfo>,

    /// Selected method label, or the prompt when none is selected.
    pub method: String,

    /// Labels offered by the method dropdown.
    pub method_options: Vec<String>,

    /// Brew time as `MM:SS`.
    pub brew_time: String,

    /// Whether the minutes/seconds picker is expanded.
    pub picker_open: bool,

    /// Validation messages from the last rejected submit.
    pub errors: Vec<String>,
}

/// One text input of the add-brew form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldInfo {
    /// Command name used to edit the field.
    pub key: String,
    pub label: String,
    pub value: String,
    pub placeholder: String,
}
