use gildedrose_core::{DomainError, DomainResult};

use crate::policy::Policy;

/// Lowest quality a non-legendary item can reach through daily updates.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can reach through daily updates.
pub const MAX_QUALITY: i32 = 50;

/// Quality carried by the legendary item in the reference fixture.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A stocked item.
///
/// `name` is fixed at construction and decides which [`Policy`] ages the item.
/// `sell_in` and `quality` are only ever changed by a policy, one day at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl Item {
    /// Build an item exactly as given.
    ///
    /// No range check is applied: an out-of-range quality is kept as-is and the
    /// daily rules will not repair it. Use [`Item::checked`] to reject such input.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// Build an item, rejecting a non-legendary quality outside
    /// `MIN_QUALITY..=MAX_QUALITY`.
    pub fn checked(name: impl Into<String>, sell_in: i32, quality: i32) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        if item.policy() != Policy::Legendary
            && !(MIN_QUALITY..=MAX_QUALITY).contains(&item.quality)
        {
            return Err(DomainError::validation(format!(
                "quality {} of '{}' is outside {MIN_QUALITY}..={MAX_QUALITY}",
                item.quality, item.name
            )));
        }
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// The policy governing this item, derived from its name on every call.
    pub fn policy(&self) -> Policy {
        Policy::for_name(&self.name)
    }

    pub(crate) fn raise_quality(&mut self) {
        if self.quality < MAX_QUALITY {
            self.quality += 1;
        }
    }

    pub(crate) fn lower_quality(&mut self) {
        if self.quality > MIN_QUALITY {
            self.quality -= 1;
        }
    }

    pub(crate) fn expire_quality(&mut self) {
        self.quality = MIN_QUALITY;
    }

    pub(crate) fn tick_sell_in(&mut self) {
        self.sell_in -= 1;
    }

    pub(crate) fn is_past_sell_by(&self) -> bool {
        self.sell_in < 0
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

impl From<(&str, i32, i32)> for Item {
    fn from((name, sell_in, quality): (&str, i32, i32)) -> Self {
        Self::new(name, sell_in, quality)
    }
}
