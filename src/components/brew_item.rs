//! Interaction state of one brew entry in the list.
//!
//! Combines the swipe gesture with the delete confirmation. While a drag is
//! in progress the entry subscribes to outside presses on its own region so
//! that tapping elsewhere cancels the swipe.

use crate::components::confirm::{self, Decision, DeleteConfirmation, DialogClick};
use crate::components::outside_click::{PointerBus, Region, Subscription};
use crate::components::swipe::{SwipeGesture, SwipeRelease, SwipeStyle};

/// Input to a brew entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ItemEvent {
    SwipeStart(f64),
    SwipeMove(f64),
    SwipeEnd,
    /// The trash button on the card.
    TrashClicked,
    /// A click while the confirmation dialog is open.
    Dialog(DialogClick),
    /// A pointer-down outside the entry.
    OutsideClick,
}

/// What the owner should do after an entry event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOutcome {
    /// Local state changed (or not); nothing to forward.
    Updated(bool),
    /// The user confirmed deletion of the brew with this id.
    Delete(i64),
}

/// Per-entry state, keyed by brew id in the list.
#[derive(Debug)]
pub struct BrewItem {
    id: i64,
    bean_type: String,
    gesture: SwipeGesture,
    confirmation: DeleteConfirmation,
    bus: PointerBus,
    drag_subscription: Option<Subscription>,
}

impl BrewItem {
    #[must_use]
    pub fn new(id: i64, bean_type: impl Into<String>, bus: PointerBus) -> Self {
        Self {
            id,
            bean_type: bean_type.into(),
            gesture: SwipeGesture::new(),
            confirmation: DeleteConfirmation::new(),
            bus,
            drag_subscription: None,
        }
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// Refreshes the label used in the confirmation text.
    pub fn set_bean_type(&mut self, bean_type: &str) {
        if self.bean_type != bean_type {
            self.bean_type = bean_type.to_string();
        }
    }

    #[must_use]
    pub const fn style(&self) -> SwipeStyle {
        self.gesture.style()
    }

    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub const fn is_confirming(&self) -> bool {
        self.confirmation.is_open()
    }

    /// Confirmation body text, present only while the dialog is open.
    #[must_use]
    pub fn confirmation_message(&self) -> Option<String> {
        self.is_confirming().then(|| confirm::message(&self.bean_type))
    }

    /// Applies an event to the entry.
    pub fn handle(&mut self, event: ItemEvent) -> ItemOutcome {
        let _span = tracing::trace_span!("brew_item", id = self.id, ?event).entered();

        match event {
            ItemEvent::SwipeStart(x) => {
                self.gesture.start(x);
                if self.drag_subscription.is_none() {
                    self.drag_subscription = Some(self.bus.subscribe(Region::BrewItem(self.id)));
                }
                ItemOutcome::Updated(true)
            }
            ItemEvent::SwipeMove(x) => {
                let before = self.gesture.offset();
                self.gesture.move_to(x);
                ItemOutcome::Updated((self.gesture.offset() - before).abs() > f64::EPSILON)
            }
            ItemEvent::SwipeEnd => {
                self.drag_subscription = None;
                if self.gesture.end() == SwipeRelease::ConfirmDelete {
                    self.confirmation.open();
                }
                ItemOutcome::Updated(true)
            }
            ItemEvent::TrashClicked => {
                self.confirmation.open();
                ItemOutcome::Updated(true)
            }
            ItemEvent::Dialog(click) => match self.confirmation.click(click) {
                None => ItemOutcome::Updated(false),
                Some(decision) => {
                    self.gesture.reset();
                    match decision {
                        Decision::Confirmed => ItemOutcome::Delete(self.id),
                        Decision::Cancelled => ItemOutcome::Updated(true),
                    }
                }
            },
            ItemEvent::OutsideClick => {
                self.drag_subscription = None;
                ItemOutcome::Updated(self.gesture.interrupt())
            }
        }
    }
}
