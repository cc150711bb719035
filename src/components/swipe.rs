//! Swipe-to-delete gesture state for one list entry.
//!
//! Horizontal drag positions are turned into a visual offset bounded to
//! `[-MAX_SWIPE_DISTANCE, 0]`. Dragging left reveals the delete indicator;
//! dragging right only relaxes the offset back toward zero. Releasing past
//! [`DELETE_THRESHOLD`] asks for delete confirmation.
//!
//! # State Machine
//!
//! ```text
//!            start(p)                     end(), offset < -50
//!   Idle ───────────────► Dragging ──────────────────────────► ConfirmRequested
//!    ▲                     │    │
//!    │   end(), offset ≥ -50│    │ interrupt() (press outside)
//!    └─────────────────────┘◄───┘
//! ```

/// Furthest the entry may slide to the left, in display units.
pub const MAX_SWIPE_DISTANCE: f64 = 100.0;

/// Offset beyond which releasing the drag requests deletion.
pub const DELETE_THRESHOLD: f64 = 50.0;

/// Duration of the settle animation once dragging stops.
pub const SETTLE_DURATION_MS: u32 = 300;

/// Result of releasing a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeRelease {
    /// The entry slid far enough; the owner should show the confirmation.
    ConfirmDelete,
    /// The entry springs back to rest.
    SnapBack,
}

/// How the entry's transform changes are animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Follow the pointer immediately.
    None,
    /// Ease toward the new offset.
    Ease { duration_ms: u32 },
}

impl Transition {
    /// CSS-style description, e.g. `transform 0.3s ease`.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::None => "none".to_string(),
            Self::Ease { duration_ms } => {
                format!("transform {}s ease", f64::from(duration_ms) / 1000.0)
            }
        }
    }
}

/// Transform applied to the entry when drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeStyle {
    /// Horizontal translation; always in `[-MAX_SWIPE_DISTANCE, 0]`.
    pub offset: f64,
    pub transition: Transition,
}

/// Per-entry gesture state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwipeGesture {
    drag_origin: Option<f64>,
    current_offset: f64,
    is_dragging: bool,
}

impl SwipeGesture {
    /// Creates an idle gesture at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a drag at horizontal position `x`.
    pub fn start(&mut self, x: f64) {
        self.drag_origin = Some(x);
        self.is_dragging = true;
    }

    /// Tracks the pointer to position `x`.
    ///
    /// Ignored when no drag is in progress.
    pub fn move_to(&mut self, x: f64) {
        let Some(origin) = self.drag_origin else {
            return;
        };
        let delta = origin - x;
        self.current_offset = (-delta).clamp(-MAX_SWIPE_DISTANCE, 0.0);
    }

    /// Ends the drag and reports whether deletion should be confirmed.
    pub fn end(&mut self) -> SwipeRelease {
        let release = if self.current_offset < -DELETE_THRESHOLD {
            SwipeRelease::ConfirmDelete
        } else {
            self.current_offset = 0.0;
            SwipeRelease::SnapBack
        };
        self.drag_origin = None;
        self.is_dragging = false;
        release
    }

    /// Cancels an in-progress drag because of a press outside the entry.
    ///
    /// Returns `true` if a drag was actually interrupted.
    pub fn interrupt(&mut self) -> bool {
        if !self.is_dragging {
            return false;
        }
        self.current_offset = 0.0;
        self.is_dragging = false;
        self.drag_origin = None;
        true
    }

    /// Returns the entry to rest, e.g. after the confirmation closes.
    pub fn reset(&mut self) {
        self.current_offset = 0.0;
    }

    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.current_offset
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Transform for the current state.
    #[must_use]
    pub const fn style(&self) -> SwipeStyle {
        SwipeStyle {
            offset: self.current_offset,
            transition: if self.is_dragging {
                Transition::None
            } else {
                Transition::Ease {
                    duration_ms: SETTLE_DURATION_MS,
                }
            },
        }
    }
}
