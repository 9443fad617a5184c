//! Inventory domain module.
//!
//! This crate contains the daily ageing rules for shop items, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod inventory;
pub mod item;
pub mod policy;

pub use inventory::Inventory;
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use policy::{AGED_BRIE, BACKSTAGE_PASSES, Policy, SULFURAS};
