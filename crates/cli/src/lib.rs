//! Text fixture for the inventory rules: the reference stock listed day by day.

use std::fmt::Write as _;

use anyhow::Context;
use gildedrose_core::DomainResult;
use gildedrose_inventory::{AGED_BRIE, BACKSTAGE_PASSES, Inventory, Item, SULFURAS};

/// Environment variable holding the number of days to simulate.
pub const DAYS_ENV: &str = "GILDED_ROSE_DAYS";

/// Days simulated when neither an argument nor `GILDED_ROSE_DAYS` is given.
pub const DEFAULT_DAYS: u32 = 2;

/// The reference stock, in listing order.
pub fn fixture_items() -> DomainResult<Vec<Item>> {
    [
        ("+5 Dexterity Vest", 10, 20),
        (AGED_BRIE, 2, 0),
        ("Elixir of the Mongoose", 5, 7),
        (SULFURAS, 0, 80),
        (SULFURAS, -1, 80),
        (BACKSTAGE_PASSES, 15, 20),
        (BACKSTAGE_PASSES, 10, 49),
        (BACKSTAGE_PASSES, 5, 49),
        ("Conjured Mana Cake", 3, 6),
    ]
    .into_iter()
    .map(|(name, sell_in, quality)| Item::checked(name, sell_in, quality))
    .collect()
}

/// Resolve the day count: explicit argument first, then the environment, then the default.
pub fn resolve_days(arg: Option<&str>, env: Option<&str>) -> anyhow::Result<u32> {
    match (arg, env) {
        (Some(raw), _) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid day count argument '{raw}'")),
        (None, Some(raw)) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {DAYS_ENV} value '{raw}'")),
        (None, None) => Ok(DEFAULT_DAYS),
    }
}

/// Render `items` for days `0..=days`, ageing them after each listing.
pub fn render(items: &mut [Item], days: u32) -> String {
    let mut out = String::from("OMGHAI!\n");
    let mut inventory = Inventory::new(items);

    for day in 0..=days {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "-------- day {day} --------");
        out.push_str("name, sellIn, quality\n");
        for item in inventory.items() {
            let _ = writeln!(out, "{item}");
        }
        out.push('\n');
        inventory.advance_day();
    }

    out
}
