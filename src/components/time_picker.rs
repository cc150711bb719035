//! Minutes/seconds picker for the brew time field.
//!
//! The picker is either closed or open. While open it holds a pointer
//! subscription for [`Region::TimePicker`] so that a press anywhere else
//! closes it; closing drops the subscription.

use crate::components::outside_click::{PointerBus, Region, Subscription};
use crate::domain::BrewTime;

/// Input to the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerEvent {
    /// The read-only time field was clicked.
    FieldClicked,
    /// The "Done" button was clicked.
    Done,
    SetMinute(u32),
    SetSecond(u32),
    /// A pointer-down landed outside the picker.
    OutsideClick,
}

/// Brew time picker state.
#[derive(Debug)]
pub struct TimePicker {
    value: BrewTime,
    bus: PointerBus,
    subscription: Option<Subscription>,
}

impl TimePicker {
    /// Creates a closed picker showing `00:00`.
    #[must_use]
    pub fn new(bus: PointerBus) -> Self {
        Self {
            value: BrewTime::default(),
            bus,
            subscription: None,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.subscription.is_some()
    }

    #[must_use]
    pub const fn value(&self) -> BrewTime {
        self.value
    }

    /// Text shown in the time field, always `MM:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        self.value.to_mm_ss()
    }

    /// Applies an event. Returns `true` if anything visible changed.
    pub fn handle(&mut self, event: PickerEvent) -> bool {
        match event {
            PickerEvent::FieldClicked => {
                if self.is_open() {
                    return false;
                }
                self.subscription = Some(self.bus.subscribe(Region::TimePicker));
                true
            }
            PickerEvent::Done | PickerEvent::OutsideClick => self.subscription.take().is_some(),
            PickerEvent::SetMinute(minute) => self.replace(self.value.with_minute(minute)),
            PickerEvent::SetSecond(second) => self.replace(self.value.with_second(second)),
        }
    }

    fn replace(&mut self, value: BrewTime) -> bool {
        let changed = value != self.value;
        self.value = value;
        changed
    }
}
