//! Pointer-down subscriptions for outside-click detection.
//!
//! Components that need to react to a press landing outside their own bounds
//! (the time picker closing, a swipe being interrupted) take a [`PointerBus`]
//! handle at construction and hold a [`Subscription`] while they are
//! interested. Dropping the subscription unregisters it, so a component that is
//! torn down can never receive another outside-click.
//!
//! The bus only answers "which subscribed regions did this press miss"; the
//! application layer routes the resulting notifications to the owning
//! components.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

/// A screen area owned by one component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// The list entry for the brew with this id.
    BrewItem(i64),
    /// The add form's time picker (field plus dropdown).
    TimePicker,
}

/// Where a pointer-down landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitTarget {
    /// Inside a known region.
    Inside(Region),
    /// Anywhere else on screen.
    Elsewhere,
}

impl HitTarget {
    fn is_inside(self, region: Region) -> bool {
        matches!(self, Self::Inside(hit) if hit == region)
    }
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    entries: BTreeSet<(Region, u64)>,
}

/// Shared handle to the pointer subscription registry.
///
/// Cloning is cheap and every clone sees the same registry. The registry is
/// single-threaded: all events are processed on one loop.
#[derive(Debug, Clone, Default)]
pub struct PointerBus {
    registry: Rc<RefCell<Registry>>,
}

impl PointerBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers interest in presses outside `region`.
    ///
    /// The returned guard unsubscribes when dropped.
    #[must_use]
    pub fn subscribe(&self, region: Region) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = registry.next_id;
        registry.entries.insert((region, id));
        tracing::trace!(?region, subscription_id = id, "pointer subscription added");

        Subscription {
            registry: Rc::clone(&self.registry),
            region,
            id,
        }
    }

    /// Returns the subscribed regions a press at `target` landed outside of.
    ///
    /// Each region is reported once even if it holds several subscriptions.
    #[must_use]
    pub fn outside_of(&self, target: HitTarget) -> Vec<Region> {
        let registry = self.registry.borrow();
        let mut missed: Vec<Region> = registry
            .entries
            .iter()
            .map(|(region, _)| *region)
            .filter(|region| !target.is_inside(*region))
            .collect();
        missed.dedup();
        missed
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.registry.borrow().entries.len()
    }
}

/// RAII guard for a pointer subscription.
#[derive(Debug)]
pub struct Subscription {
    registry: Rc<RefCell<Registry>>,
    region: Region,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        match self.registry.try_borrow_mut() {
            Ok(mut registry) => {
                registry.entries.remove(&(self.region, self.id));
                tracing::trace!(region = ?self.region, subscription_id = self.id, "pointer subscription dropped");
            }
            Err(_) => {
                tracing::warn!(
                    region = ?self.region,
                    subscription_id = self.id,
                    "pointer registry busy, subscription left registered"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_inside_region_is_not_outside() {
        let bus = PointerBus::new();
        let _sub = bus.subscribe(Region::BrewItem(1));

        assert!(bus
            .outside_of(HitTarget::Inside(Region::BrewItem(1)))
            .is_empty());
    }

    #[test]
    fn press_elsewhere_reports_every_region() {
        let bus = PointerBus::new();
        let _a = bus.subscribe(Region::BrewItem(1));
        let _b = bus.subscribe(Region::TimePicker);

        let missed = bus.outside_of(HitTarget::Elsewhere);
        assert_eq!(missed, vec![Region::BrewItem(1), Region::TimePicker]);
    }

    #[test]
    fn press_on_other_item_is_outside() {
        let bus = PointerBus::new();
        let _sub = bus.subscribe(Region::BrewItem(1));

        let missed = bus.outside_of(HitTarget::Inside(Region::BrewItem(2)));
        assert_eq!(missed, vec![Region::BrewItem(1)]);
    }

    #[test]
    fn dropping_guard_unsubscribes() {
        let bus = PointerBus::new();
        let sub = bus.subscribe(Region::TimePicker);
        assert_eq!(bus.subscription_count(), 1);

        drop(sub);
        assert_eq!(bus.subscription_count(), 0);
        assert!(bus.outside_of(HitTarget::Elsewhere).is_empty());
    }

    #[test]
    fn drop_during_registry_borrow_leaves_entry() {
        let bus = PointerBus::new();
        let sub = bus.subscribe(Region::BrewItem(4));

        let held = bus.registry.borrow();
        drop(sub);
        drop(held);

        assert_eq!(bus.subscription_count(), 1);
        assert_eq!(bus.outside_of(HitTarget::Elsewhere), vec![Region::BrewItem(4)]);
    }

    #[test]
    fn duplicate_subscriptions_report_region_once() {
        let bus = PointerBus::new();
        let _a = bus.subscribe(Region::TimePicker);
        let _b = bus.subscribe(Region::TimePicker);

        assert_eq!(bus.outside_of(HitTarget::Elsewhere), vec![Region::TimePicker]);
    }
}
