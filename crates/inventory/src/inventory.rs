//! Inventory driver: ages a caller-owned list of items one day at a time.

use crate::item::Item;

/// Driver bound to a caller's items.
///
/// The items are borrowed, not copied: once the driver is dropped (or released
/// with [`Inventory::into_inner`]) the caller sees every update in place.
#[derive(Debug)]
pub struct Inventory<'a> {
    items: &'a mut [Item],
}

impl<'a> Inventory<'a> {
    pub fn new(items: &'a mut [Item]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        self.items
    }

    pub fn into_inner(self) -> &'a mut [Item] {
        self.items
    }

    /// Age every item by one day, in order.
    ///
    /// The policy is selected afresh for each item on each call.
    pub fn advance_day(&mut self) {
        let _span = tracing::debug_span!("advance_day", items = self.items.len()).entered();

        for item in self.items.iter_mut() {
            let policy = item.policy();
            let before = (item.sell_in(), item.quality());
            policy.apply(item);
            tracing::trace!(
                name = item.name(),
                ?policy,
                sell_in_before = before.0,
                quality_before = before.1,
                sell_in = item.sell_in(),
                quality = item.quality(),
                "item aged"
            );
        }
    }

    /// Age every item by `days` days; same as calling [`advance_day`](Self::advance_day) `days` times.
    pub fn advance_days(&mut self, days: u32) {
        for _ in 0..days {
            self.advance_day();
        }
    }
}
