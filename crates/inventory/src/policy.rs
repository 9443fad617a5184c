//! Daily update policies and the name-based selector.

use gildedrose_core::ValueObject;

use crate::item::{Item, MAX_QUALITY};

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Below this many days left, an event ticket gains a second point per day.
const TICKET_SECOND_BONUS_BELOW: i32 = 11;
/// Below this many days left, an event ticket gains a third point per day.
const TICKET_THIRD_BONUS_BELOW: i32 = 6;

/// Rule that ages one item by one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// Loses 1 quality per day, 2 once past sell-by; floor at 0.
    Standard,
    /// Gains 1 quality per day, 2 once past sell-by; ceiling at 50.
    Appreciating,
    /// Never changes.
    Legendary,
    /// Gains 1/2/3 quality as the event nears, drops to 0 once it has passed.
    EventTicket,
}

impl ValueObject for Policy {}

impl Policy {
    /// Select the policy for an item name.
    ///
    /// Matching is exact and case-sensitive; anything unrecognised is `Standard`.
    pub fn for_name(name: &str) -> Self {
        match name {
            AGED_BRIE => Policy::Appreciating,
            SULFURAS => Policy::Legendary,
            BACKSTAGE_PASSES => Policy::EventTicket,
            _ => Policy::Standard,
        }
    }

    /// Apply one day's update to `item` in place.
    pub fn apply(self, item: &mut Item) {
        match self {
            Policy::Standard => age_standard(item),
            Policy::Appreciating => age_appreciating(item),
            Policy::Legendary => {}
            Policy::EventTicket => age_event_ticket(item),
        }
    }
}

fn age_standard(item: &mut Item) {
    item.lower_quality();
    item.tick_sell_in();
    if item.is_past_sell_by() {
        item.lower_quality();
    }
}

fn age_appreciating(item: &mut Item) {
    item.raise_quality();
    item.tick_sell_in();
    if item.is_past_sell_by() {
        item.raise_quality();
    }
}

fn age_event_ticket(item: &mut Item) {
    // Thresholds are read before today's sell_in tick.
    if item.quality() < MAX_QUALITY {
        item.raise_quality();
        if item.sell_in() < TICKET_SECOND_BONUS_BELOW {
            item.raise_quality();
        }
        if item.sell_in() < TICKET_THIRD_BONUS_BELOW {
            item.raise_quality();
        }
    }
    item.tick_sell_in();
    if item.is_past_sell_by() {
        item.expire_quality();
    }
}
