//! Delete confirmation modal.
//!
//! A two-state dialog opened by a brew entry once a swipe passes the delete
//! threshold (or the trash button is pressed). Clicks are classified by the
//! part of the modal they land on: the backdrop and the cancel button dismiss
//! it, the confirm button accepts it, and the dialog body is inert.

/// Title shown at the top of the dialog.
pub const TITLE: &str = "Delete Brew";

/// Part of the modal a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogClick {
    /// The dimmed area surrounding the dialog.
    Backdrop,
    /// The dialog content itself (text, padding).
    Content,
    Cancel,
    Confirm,
}

/// Outcome of a click while the dialog is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

/// Open/closed state of the confirmation for one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteConfirmation {
    open: bool,
}

impl DeleteConfirmation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Applies a click and closes the dialog if it produced a decision.
    ///
    /// Returns `None` while closed or when the click hit the dialog content.
    pub fn click(&mut self, target: DialogClick) -> Option<Decision> {
        if !self.open {
            return None;
        }

        let decision = match target {
            DialogClick::Content => return None,
            DialogClick::Backdrop | DialogClick::Cancel => Decision::Cancelled,
            DialogClick::Confirm => Decision::Confirmed,
        };
        self.open = false;
        Some(decision)
    }
}

/// Body text naming the brew about to be deleted.
#[must_use]
pub fn message(bean_type: &str) -> String {
    format!("Are you sure you want to delete your {bean_type} brew? This action cannot be undone.")
}
