//! The standard shelf used by the simulator.

use gilded_core::types::{AGED_BRIE_NAME, BACKSTAGE_PASS_NAME, LEGENDARY_NAME};
use gilded_core::{Item, LEGENDARY_QUALITY};

/// One of each category, plus the backstage pass at every tier boundary.
pub fn fixture_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE_NAME, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(LEGENDARY_NAME, 0, LEGENDARY_QUALITY),
        Item::new(LEGENDARY_NAME, -1, LEGENDARY_QUALITY),
        Item::new(BACKSTAGE_PASS_NAME, 15, 20),
        Item::new(BACKSTAGE_PASS_NAME, 10, 49),
        Item::new(BACKSTAGE_PASS_NAME, 5, 49),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
