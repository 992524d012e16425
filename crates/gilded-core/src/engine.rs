//! # Valuation Engine
//!
//! Advances a single item by one simulated day.
//!
//! ## Revised Rules (one tick)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  advance_one_day(item)                                                  │
//! │       │                                                                 │
//! │       ├── Legendary? ──────────────────────────────► return untouched   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  expired = sell_in <= 0      (today's value, before the decrement)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  delta = quality_delta(category, sell_in, quality)                      │
//! │       │     BackstagePass  +1 (>10)  +2 (6..=10)  +3 (1..=5)  -q (<=0)  │
//! │       │     Aged           +1, doubled when expired                     │
//! │       │     Conjured       -2, doubled when expired                     │
//! │       │     Ordinary       -1, doubled when expired                     │
//! │       ▼                                                                 │
//! │  quality = clamp(quality + delta, 0, 50)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  sell_in -= 1                (always last)                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The operation is total: every `i64` pair is a valid input, arithmetic
//! saturates instead of overflowing, and nothing here can panic.

use serde::{Deserialize, Serialize};

use crate::types::{Category, Item, RuleSet};
use crate::{BACKSTAGE_SECOND_TIER_DAYS, BACKSTAGE_THIRD_TIER_DAYS, MAX_QUALITY, MIN_QUALITY};

// =============================================================================
// Engine
// =============================================================================

/// Applies one rule set to items, one day at a time.
///
/// The engine is a plain `Copy` value; it holds no per-item state, so the
/// same engine can be shared by any number of inventories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationEngine {
    rule_set: RuleSet,
}

impl ValuationEngine {
    /// Creates an engine for the given rule set.
    #[inline]
    pub const fn new(rule_set: RuleSet) -> Self {
        Self { rule_set }
    }

    /// Returns the rule set this engine applies.
    #[inline]
    pub const fn rule_set(&self) -> RuleSet {
        self.rule_set
    }

    /// Advances `item` by exactly one day, in place.
    ///
    /// ## Example
    /// ```rust
    /// use gilded_core::{Item, RuleSet, ValuationEngine};
    ///
    /// let engine = ValuationEngine::new(RuleSet::Revised);
    /// let mut item = Item::new("foo", 1, 10);
    ///
    /// engine.advance_one_day(&mut item);
    /// assert_eq!((item.sell_in, item.quality), (0, 9));
    ///
    /// engine.advance_one_day(&mut item);
    /// assert_eq!((item.sell_in, item.quality), (-1, 7));
    /// ```
    pub fn advance_one_day(&self, item: &mut Item) {
        match self.rule_set {
            RuleSet::Revised => advance_revised(item),
            RuleSet::Legacy => advance_legacy(item),
        }
    }

    /// Returns a copy of `item` advanced by one day.
    pub fn advanced(&self, mut item: Item) -> Item {
        self.advance_one_day(&mut item);
        item
    }
}

/// Advances `item` by one day using the revised rules.
#[inline]
pub fn advance_one_day(item: &mut Item) {
    advance_revised(item);
}

// =============================================================================
// Revised Rules
// =============================================================================

fn advance_revised(item: &mut Item) {
    if item.category.is_legendary() {
        return;
    }

    let delta = quality_delta(item.category, item.sell_in, item.quality);
    item.quality = item
        .quality
        .saturating_add(delta)
        .clamp(MIN_QUALITY, MAX_QUALITY);
    item.sell_in = item.sell_in.saturating_sub(1);
}

/// Signed quality change for one tick, before clamping.
///
/// `sell_in` is today's value. Legendary items never reach this point, but
/// return 0 so the function stays total.
pub fn quality_delta(category: Category, sell_in: i64, quality: i64) -> i64 {
    let expired = sell_in <= 0;

    let base = match category {
        Category::Legendary => return 0,
        Category::BackstagePass => {
            return if expired {
                quality.saturating_neg()
            } else if sell_in <= BACKSTAGE_THIRD_TIER_DAYS {
                3
            } else if sell_in <= BACKSTAGE_SECOND_TIER_DAYS {
                2
            } else {
                1
            };
        }
        Category::Aged => 1,
        Category::Conjured => -2,
        Category::Ordinary => -1,
    };

    if expired {
        base * 2
    } else {
        base
    }
}

// =============================================================================
// Legacy Rules
// =============================================================================

// Early rule version: decrement first, judge expiry on the new value,
// and only ever step quality by one when it is already inside the bounds.
fn advance_legacy(item: &mut Item) {
    if item.category.is_legendary() {
        return;
    }

    item.sell_in = item.sell_in.saturating_sub(1);

    match item.category {
        Category::Aged | Category::BackstagePass => {
            raise_one(item);
            if item.category == Category::BackstagePass
                && item.sell_in <= BACKSTAGE_SECOND_TIER_DAYS
            {
                raise_one(item);
            }
        }
        _ => lower_one(item),
    }

    if item.sell_in >= 0 {
        return;
    }

    match item.category {
        Category::Aged => raise_one(item),
        Category::BackstagePass => item.quality = MIN_QUALITY,
        _ => lower_one(item),
    }
}

fn raise_one(item: &mut Item) {
    if item.quality < MAX_QUALITY {
        item.quality += 1;
    }
}

fn lower_one(item: &mut Item) {
    if item.quality > MIN_QUALITY {
        item.quality -= 1;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
