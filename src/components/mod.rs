//! Interactive components of the brew log.
//!
//! Each component is a plain state record driven by discrete events, so it can
//! be exercised without any rendering environment. Components that react to
//! presses outside their bounds receive a [`PointerBus`] handle when they are
//! created.
//!
//! # Modules
//!
//! - [`brew_list`]: visible brews keyed by id, empty state
//! - [`brew_item`]: one entry's swipe gesture and delete confirmation
//! - [`swipe`]: bounded drag offset and delete threshold
//! - [`confirm`]: delete confirmation modal
//! - [`form`]: add-brew form with validation
//! - [`time_picker`]: minutes/seconds picker
//! - [`search`]: query state and brew filtering
//! - [`outside_click`]: pointer subscriptions for outside-click detection

pub mod brew_item;
pub mod brew_list;
pub mod confirm;
pub mod form;
pub mod outside_click;
pub mod search;
pub mod swipe;
pub mod time_picker;

pub use brew_item::{BrewItem, ItemEvent, ItemOutcome};
pub use brew_list::BrewList;
pub use confirm::DialogClick;
pub use form::{AddBrewForm, FormEvent, FormField, FormOutcome};
pub use outside_click::{HitTarget, PointerBus, Region, Subscription};
pub use search::{SearchBar, SearchEvent};
pub use swipe::{SwipeGesture, SwipeStyle, Transition};
pub use time_picker::{PickerEvent, TimePicker};
