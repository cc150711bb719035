//! Visible brew list.
//!
//! Keeps one [`BrewItem`] per visible brew, keyed by id. Re-syncing with a new
//! set of brews keeps the state of entries whose id is still present and drops
//! the rest, so gesture state never carries over to a different brew.

use crate::components::brew_item::{BrewItem, ItemEvent, ItemOutcome};
use crate::components::outside_click::PointerBus;
use crate::domain::Brew;
use std::collections::HashMap;

/// Icon shown above the empty-state text.
pub const EMPTY_ICON: &str = "☕";

/// Text shown when no brews are visible.
pub const EMPTY_MESSAGE: &str = "No brews yet. Time to make some coffee!";

/// Ordered list of visible brews plus their interaction state.
#[derive(Debug)]
pub struct BrewList {
    brews: Vec<Brew>,
    items: HashMap<i64, BrewItem>,
    bus: PointerBus,
}

impl BrewList {
    #[must_use]
    pub fn new(bus: PointerBus) -> Self {
        Self {
            brews: Vec::new(),
            items: HashMap::new(),
            bus,
        }
    }

    /// Replaces the visible brews, keeping entry state by id.
    pub fn sync(&mut self, brews: Vec<Brew>) {
        let mut previous = std::mem::take(&mut self.items);
        for brew in &brews {
            let item = previous
                .remove(&brew.id)
                .map(|mut item| {
                    item.set_bean_type(&brew.bean_type);
                    item
                })
                .unwrap_or_else(|| BrewItem::new(brew.id, brew.bean_type.clone(), self.bus.clone()));
            self.items.insert(brew.id, item);
        }
        tracing::debug!(
            visible = brews.len(),
            dropped = previous.len(),
            "brew list synced"
        );
        self.brews = brews;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.brews.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.brews.len()
    }

    #[must_use]
    pub fn brews(&self) -> &[Brew] {
        &self.brews
    }

    #[must_use]
    pub fn item(&self, id: i64) -> Option<&BrewItem> {
        self.items.get(&id)
    }

    /// Visible brews paired with their entry state, in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&Brew, &BrewItem)> {
        self.brews
            .iter()
            .filter_map(|brew| self.items.get(&brew.id).map(|item| (brew, item)))
    }

    /// The entry whose confirmation dialog is open, if any.
    #[must_use]
    pub fn confirming(&self) -> Option<&BrewItem> {
        self.entries().map(|(_, item)| item).find(|item| item.is_confirming())
    }

    /// Routes an event to the entry with `id`.
    ///
    /// Returns `None` when no such entry is visible.
    pub fn handle(&mut self, id: i64, event: ItemEvent) -> Option<ItemOutcome> {
        self.items.get_mut(&id).map(|item| item.handle(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::brew::fixtures::brew;

    #[test]
    fn new_list_is_empty() {
        let list = BrewList::new(PointerBus::new());
        assert!(list.is_empty());
        assert_eq!(list.entries().count(), 0);
    }

    #[test]
    fn entries_follow_brew_order() {
        let mut list = BrewList::new(PointerBus::new());
        list.sync(vec![brew(3, "C"), brew(1, "A"), brew(2, "B")]);

        let ids: Vec<i64> = list.entries().map(|(_, item)| item.id()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn sync_keeps_state_for_surviving_ids() {
        let mut list = BrewList::new(PointerBus::new());
        list.sync(vec![brew(1, "A"), brew(2, "B")]);
        list.handle(1, ItemEvent::TrashClicked);

        list.sync(vec![brew(1, "A renamed")]);
        let item = list.item(1).unwrap();
        assert!(item.is_confirming());
        assert!(item.confirmation_message().unwrap().contains("A renamed"));
        assert!(list.item(2).is_none());
    }

    #[test]
    fn removed_entry_releases_its_subscription() {
        let bus = PointerBus::new();
        let mut list = BrewList::new(bus.clone());
        list.sync(vec![brew(1, "A")]);
        list.handle(1, ItemEvent::SwipeStart(200.0));
        assert_eq!(bus.subscription_count(), 1);

        list.sync(vec![]);
        assert_eq!(bus.subscription_count(), 0);
    }

    #[test]
    fn events_for_unknown_ids_are_dropped() {
        let mut list = BrewList::new(PointerBus::new());
        assert_eq!(list.handle(9, ItemEvent::TrashClicked), None);
    }

    #[test]
    fn confirming_finds_open_dialog() {
        let mut list = BrewList::new(PointerBus::new());
        list.sync(vec![brew(1, "A"), brew(2, "B")]);
        assert!(list.confirming().is_none());

        list.handle(2, ItemEvent::TrashClicked);
        assert_eq!(list.confirming().map(BrewItem::id), Some(2));
    }
}
