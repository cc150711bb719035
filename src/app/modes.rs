//! Overlay mode of the application.
//!
//! At most one overlay covers the brew list at a time. The overlay decides how
//! pointer presses are routed and which hints the footer shows.
//!
//! # State Machine
//!
//! ```text
//!            open form                    swipe past threshold / trash
//!   AddForm ◄────────── None ──────────────────────────────► DeleteConfirm { id }
//!      │                 ▲  ▲                                       │
//!      └─ created/cancel ┘  └──────────── confirm / cancel ─────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use brewlog::app::modes::Overlay;
//!
//! let overlay = Overlay::DeleteConfirm { id: 3 };
//! assert_ne!(overlay, Overlay::None);
//! ```

/// What currently covers the brew list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// The list itself is interactive.
    None,

    /// The add-brew form is open.
    ///
    /// Backdrop clicks close it; the time picker may be open inside it.
    AddForm,

    /// The delete confirmation for the brew with `id` is open.
    DeleteConfirm {
        /// Brew the dialog asks about.
        id: i64,
    },
}
