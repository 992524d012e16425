//! # Domain Types
//!
//! Core domain types used throughout Gilded Rose.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Item       │   │    Category     │   │    RuleSet      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  Legendary      │   │  Revised        │       │
//! │  │  category ──────┼──►│  Aged           │   │  Legacy         │       │
//! │  │  sell_in (i64)  │   │  BackstagePass  │   └─────────────────┘       │
//! │  │  quality (i64)  │   │  Conjured       │                             │
//! │  └─────────────────┘   │  Ordinary       │                             │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Name vs. Category
//! The `name` is what a clerk reads. The `category` is what the engine
//! dispatches on. It is derived from the name once, at construction, and
//! never re-parsed afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::{validate_item_name, validate_quality};

// =============================================================================
// Sentinel Names
// =============================================================================

/// Name of the legendary item. Never ages, never changes value.
pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";

/// Name of the aged item. Gains quality as it ages.
pub const AGED_BRIE_NAME: &str = "Aged Brie";

/// Name of the backstage pass. Gains value in tiers, worthless after the concert.
pub const BACKSTAGE_PASS_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";

/// Prefix that marks a conjured item (prefix match, not exact).
pub const CONJURED_PREFIX: &str = "Conjured";

// =============================================================================
// Category
// =============================================================================

/// Closed set of item categories the valuation engine knows about.
///
/// ## Classification
/// ```text
/// "Sulfuras, Hand of Ragnaros"                   → Legendary
/// "Aged Brie"                                    → Aged
/// "Backstage passes to a TAFKAL80ETC concert"    → BackstagePass
/// "Conjured ..." (any other name with prefix)    → Conjured
/// anything else                                  → Ordinary
/// ```
///
/// Exact matches are checked first, so a name like `"Aged Brie (Conjured)"`
/// or `"Sulfuras"` is simply `Ordinary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Never sold, never decreases in quality.
    Legendary,
    /// Increases in quality the older it gets.
    Aged,
    /// Increases in quality as the concert approaches, drops to 0 after it.
    BackstagePass,
    /// Degrades twice as fast as ordinary items.
    Conjured,
    /// Everything else.
    Ordinary,
}

impl Category {
    /// Classifies an item name into a category.
    ///
    /// ## Example
    /// ```rust
    /// use gilded_core::Category;
    ///
    /// assert_eq!(Category::from_name("Aged Brie"), Category::Aged);
    /// assert_eq!(Category::from_name("Conjured Mana Cake"), Category::Conjured);
    /// assert_eq!(Category::from_name("Sulfuras"), Category::Ordinary);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            LEGENDARY_NAME => Category::Legendary,
            AGED_BRIE_NAME => Category::Aged,
            BACKSTAGE_PASS_NAME => Category::BackstagePass,
            other if other.starts_with(CONJURED_PREFIX) => Category::Conjured,
            _ => Category::Ordinary,
        }
    }

    /// Whether items of this category are exempt from every update.
    #[inline]
    pub const fn is_legendary(&self) -> bool {
        matches!(self, Category::Legendary)
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Ordinary
    }
}

// =============================================================================
// Rule Set
// =============================================================================

/// Which version of the aging rules to apply.
///
/// ## Differences
/// ```text
/// ┌───────────────────────┬──────────────────────────┬──────────────────────┐
/// │                       │ Revised (default)        │ Legacy               │
/// ├───────────────────────┼──────────────────────────┼──────────────────────┤
/// │ Expiry evaluated on   │ today's sell_in (<= 0)   │ tomorrow's (< 0)     │
/// │ Backstage tiers       │ +1 / +2 / +3             │ +1 / +2              │
/// │ Conjured items        │ degrade by 2 (4 expired) │ treated as ordinary  │
/// │ Clamping              │ after the fact, [0, 50]  │ pre-checked per step │
/// └───────────────────────┴──────────────────────────┴──────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum RuleSet {
    /// Current rules, including conjured items.
    Revised,
    /// Early rules, kept for backward-compatible replays.
    Legacy,
}

impl RuleSet {
    /// Stable lowercase identifier (matches the serde representation).
    pub const fn as_str(&self) -> &'static str {
        match self {
            RuleSet::Revised => "revised",
            RuleSet::Legacy => "legacy",
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::Revised
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleSet {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "revised" => Ok(RuleSet::Revised),
            "legacy" => Ok(RuleSet::Legacy),
            other => Err(CoreError::UnknownRuleSet(other.to_string())),
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// A stock item on the shelf.
///
/// `sell_in` and `quality` are the only fields the engine ever touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// Display name shown in listings.
    pub name: String,

    /// Category assigned at construction; drives every rule decision.
    pub category: Category,

    /// Days left to sell the item. Negative means expired that many days ago.
    #[ts(type = "number")]
    pub sell_in: i64,

    /// How valuable the item is.
    #[ts(type = "number")]
    pub quality: i64,
}

impl Item {
    /// Creates an item, classifying its category from the name.
    ///
    /// No validation happens here; any integer triple is accepted. Use
    /// [`Item::try_new`] when the input comes from outside the system.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        let name = name.into();
        let category = Category::from_name(&name);
        Self {
            name,
            category,
            sell_in,
            quality,
        }
    }

    /// Creates an item with an explicit category, bypassing name matching.
    pub fn with_category(
        name: impl Into<String>,
        category: Category,
        sell_in: i64,
        quality: i64,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            sell_in,
            quality,
        }
    }

    /// Creates an item after checking the name and the starting quality.
    ///
    /// ## Example
    /// ```rust
    /// use gilded_core::Item;
    ///
    /// assert!(Item::try_new("Aged Brie", 2, 0).is_ok());
    /// assert!(Item::try_new("Aged Brie", 2, 51).is_err());
    /// assert!(Item::try_new("   ", 2, 10).is_err());
    /// ```
    pub fn try_new(name: impl Into<String>, sell_in: i64, quality: i64) -> CoreResult<Self> {
        let item = Self::new(name, sell_in, quality);
        validate_item_name(&item.name)?;
        validate_quality(item.category, item.quality)?;
        Ok(item)
    }

    /// Whether the item counts as expired for a tick starting now.
    #[inline]
    pub const fn is_expired(&self) -> bool {
        self.sell_in <= 0
    }
}

/// Renders `"<name>, <sell_in>, <quality>"`, the format textual consumers parse.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_exact_names() {
        assert_eq!(Category::from_name(LEGENDARY_NAME), Category::Legendary);
        assert_eq!(Category::from_name(AGED_BRIE_NAME), Category::Aged);
        assert_eq!(
            Category::from_name(BACKSTAGE_PASS_NAME),
            Category::BackstagePass
        );
    }

    #[test]
    fn test_category_near_misses_are_ordinary() {
        assert_eq!(Category::from_name("Sulfuras"), Category::Ordinary);
        assert_eq!(Category::from_name("aged brie"), Category::Ordinary);
        assert_eq!(Category::from_name("Aged Brie "), Category::Ordinary);
        assert_eq!(
            Category::from_name("Backstage passes to a Metallica concert"),
            Category::Ordinary
        );
        assert_eq!(Category::from_name(""), Category::Ordinary);
    }

    #[test]
    fn test_category_conjured_prefix() {
        assert_eq!(Category::from_name("Conjured Mana Cake"), Category::Conjured);
        assert_eq!(Category::from_name("Conjured"), Category::Conjured);
        assert_eq!(Category::from_name("conjured bread"), Category::Ordinary);
        assert_eq!(Category::from_name("Not Conjured"), Category::Ordinary);
    }

    #[test]
    fn test_item_display() {
        assert_eq!(Item::new("spam", 1, 3).to_string(), "spam, 1, 3");
        assert_eq!(Item::new("eggs", 99, 100).to_string(), "eggs, 99, 100");
        assert_eq!(Item::new("foo", -4, 0).to_string(), "foo, -4, 0");
    }

    #[test]
    fn test_item_new_assigns_category() {
        let item = Item::new("Conjured Mana Cake", 3, 6);
        assert_eq!(item.category, Category::Conjured);
        assert_eq!(item.name, "Conjured Mana Cake");
    }

    #[test]
    fn test_with_category_overrides_name() {
        let item = Item::with_category("Mystery Box", Category::Aged, 5, 5);
        assert_eq!(item.category, Category::Aged);
    }

    #[test]
    fn test_try_new_rejects_bad_input() {
        assert!(Item::try_new("Sulfuras, Hand of Ragnaros", 0, 80).is_ok());
        assert!(Item::try_new("Sulfuras, Hand of Ragnaros", 0, 50).is_err());
        assert!(Item::try_new("foo", 0, -1).is_err());
        assert!(Item::try_new("", 0, 10).is_err());
    }

    #[test]
    fn test_rule_set_parse() {
        assert_eq!("revised".parse::<RuleSet>().unwrap(), RuleSet::Revised);
        assert_eq!(" Legacy ".parse::<RuleSet>().unwrap(), RuleSet::Legacy);
        assert!("classic".parse::<RuleSet>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(RuleSet::default(), RuleSet::Revised);
        assert_eq!(Category::default(), Category::Ordinary);
    }

    #[test]
    fn test_item_serializes_snake_case_category() {
        let json = serde_json::to_value(Item::new("Aged Brie", 2, 0)).unwrap();
        assert_eq!(json["category"], "aged");
        assert_eq!(json["sell_in"], 2);
    }
}
