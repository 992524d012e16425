//! # Inventory
//!
//! The day driver: an ordered list of items plus the engine that ages them.
//!
//! ```rust
//! use gilded_core::{Inventory, Item};
//!
//! let mut inventory = Inventory::new(vec![
//!     Item::new("Aged Brie", 2, 0),
//!     Item::new("Elixir of the Mongoose", 5, 7),
//! ]);
//!
//! inventory.update_quality();
//!
//! assert_eq!(inventory.items()[0].to_string(), "Aged Brie, 1, 1");
//! assert_eq!(inventory.items()[1].to_string(), "Elixir of the Mongoose, 4, 6");
//! ```

use tracing::{debug, trace};

use crate::engine::ValuationEngine;
use crate::types::{Item, RuleSet};

/// Items on the shelf, aged together once per simulated day.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
    engine: ValuationEngine,
    days_elapsed: u64,
}

impl Inventory {
    /// Creates an inventory that ages items with the revised rules.
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_rule_set(items, RuleSet::default())
    }

    /// Creates an inventory that ages items with the given rule set.
    pub fn with_rule_set(items: Vec<Item>, rule_set: RuleSet) -> Self {
        Self {
            items,
            engine: ValuationEngine::new(rule_set),
            days_elapsed: 0,
        }
    }

    /// Advances every item by one day.
    ///
    /// Items do not interact, so the order of the list has no effect on the
    /// result.
    pub fn update_quality(&mut self) {
        for item in self.items.iter_mut() {
            let before = (item.sell_in, item.quality);
            self.engine.advance_one_day(item);
            trace!(
                name = %item.name,
                category = ?item.category,
                sell_in_before = before.0,
                quality_before = before.1,
                sell_in = item.sell_in,
                quality = item.quality,
                "Item advanced"
            );
        }

        self.days_elapsed += 1;
        debug!(
            day = self.days_elapsed,
            items = self.items.len(),
            rule_set = %self.engine.rule_set(),
            "Inventory advanced one day"
        );
    }

    /// Advances every item by `days` days.
    pub fn advance_days(&mut self, days: u64) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    /// Adds an item to the end of the shelf.
    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn rule_set(&self) -> RuleSet {
        self.engine.rule_set()
    }

    /// Number of days advanced since construction.
    pub fn days_elapsed(&self) -> u64 {
        self.days_elapsed
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn states(inventory: &Inventory) -> Vec<(i64, i64)> {
        inventory
            .items()
            .iter()
            .map(|item| (item.sell_in, item.quality))
            .collect()
    }

    #[test]
    fn test_item_name_correctly_set() {
        let mut inventory = Inventory::new(vec![Item::new("foo", 0, 0)]);
        inventory.update_quality();
        assert_eq!(inventory.items()[0].name, "foo");
    }

    #[test]
    fn test_one_day_decrease() {
        let mut inventory = Inventory::new(vec![
            Item::new("spam", 1, 3),
            Item::new("eggs", 8, 4),
            Item::new("cheese", 10, 1),
        ]);

        inventory.update_quality();
        assert_eq!(states(&inventory), vec![(0, 2), (7, 3), (9, 0)]);
    }

    #[test]
    fn test_two_day_decrease() {
        let mut inventory = Inventory::new(vec![
            Item::new("spam", 1, 3),
            Item::new("eggs", 8, 4),
            Item::new("cheese", 10, 1),
        ]);

        inventory.advance_days(2);
        assert_eq!(states(&inventory), vec![(-1, 0), (6, 2), (8, 0)]);
        assert_eq!(inventory.days_elapsed(), 2);
    }

    #[test]
    fn test_sell_in_consistent_after_negative() {
        let mut inventory = Inventory::new(vec![Item::new("foo", 2, 2)]);

        inventory.update_quality();
        assert_eq!(states(&inventory), vec![(1, 1)]);
        inventory.update_quality();
        assert_eq!(states(&inventory), vec![(0, 0)]);
        inventory.update_quality();
        assert_eq!(states(&inventory), vec![(-1, 0)]);
    }

    #[test]
    fn test_order_does_not_matter() {
        let items = vec![
            Item::new("Aged Brie", 2, 0),
            Item::new("Backstage passes to a TAFKAL80ETC concert", 5, 49),
            Item::new("Conjured Mana Cake", 3, 6),
            Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
        ];
        let mut reversed_items = items.clone();
        reversed_items.reverse();

        let mut forward = Inventory::new(items);
        let mut reversed = Inventory::new(reversed_items);
        forward.advance_days(7);
        reversed.advance_days(7);

        let mut backward = reversed.into_items();
        backward.reverse();
        assert_eq!(forward.into_items(), backward);
    }

    #[test]
    fn test_rule_set_selection() {
        let cake = || vec![Item::new("Conjured Mana Cake", 3, 6)];

        let mut revised = Inventory::new(cake());
        let mut legacy = Inventory::with_rule_set(cake(), RuleSet::Legacy);
        revised.update_quality();
        legacy.update_quality();

        assert_eq!(revised.rule_set(), RuleSet::Revised);
        assert_eq!(legacy.rule_set(), RuleSet::Legacy);
        assert_eq!(states(&revised), vec![(2, 4)]);
        assert_eq!(states(&legacy), vec![(2, 5)]);
    }

    #[test]
    fn test_empty_inventory() {
        let mut inventory = Inventory::from(Vec::new());
        assert!(inventory.is_empty());
        inventory.advance_days(3);
        assert_eq!(inventory.days_elapsed(), 3);

        inventory.push(Item::new("foo", 1, 1));
        assert_eq!(inventory.len(), 1);
    }
}
