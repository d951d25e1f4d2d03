//! Equipment and loot generation

pub mod item;
pub mod loot;

pub use item::{Equipment, ItemId, Rarity, EquipSlot, Affix};
pub use loot::{EquipmentForge, LootForge, generate_equipment, roll_rarity, next_item_id, reserve_item_ids_through};
