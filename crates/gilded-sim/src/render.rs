//! Snapshot rendering.
//!
//! ## Text Format
//! ```text
//! -------- day 0 --------
//! name, sellIn, quality
//! +5 Dexterity Vest, 10, 20
//! ...
//! <blank line>
//! ```
//!
//! The item lines are `Item`'s `Display` output, unchanged. Existing textual
//! consumers diff against this format byte for byte.

use std::fmt::Write as _;

use gilded_core::Item;
use serde::Serialize;

/// Items as they stood at the start of a day.
#[derive(Debug, Serialize)]
pub struct DaySnapshot<'a> {
    pub day: u64,
    pub items: &'a [Item],
}

impl<'a> DaySnapshot<'a> {
    pub fn new(day: u64, items: &'a [Item]) -> Self {
        Self { day, items }
    }

    /// Renders the text block for this day, trailing blank line included.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "-------- day {} --------", self.day);
        let _ = writeln!(out, "name, sellIn, quality");
        for item in self.items {
            let _ = writeln!(out, "{item}");
        }
        out.push('\n');
        out
    }

    /// Renders this day as a single-line JSON object.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_block() {
        let items = vec![Item::new("foo", 1, 10), Item::new("Aged Brie", -2, 7)];
        let text = DaySnapshot::new(3, &items).to_text();

        assert_eq!(
            text,
            "-------- day 3 --------\n\
             name, sellIn, quality\n\
             foo, 1, 10\n\
             Aged Brie, -2, 7\n\
             \n"
        );
    }

    #[test]
    fn test_text_block_empty_shelf() {
        let text = DaySnapshot::new(0, &[]).to_text();
        assert_eq!(text, "-------- day 0 --------\nname, sellIn, quality\n\n");
    }

    #[test]
    fn test_json_line() {
        let items = vec![Item::new("Conjured Mana Cake", 3, 6)];
        let json = DaySnapshot::new(1, &items).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["day"], 1);
        assert_eq!(value["items"][0]["name"], "Conjured Mana Cake");
        assert_eq!(value["items"][0]["category"], "conjured");
        assert_eq!(value["items"][0]["sell_in"], 3);
        assert_eq!(value["items"][0]["quality"], 6);
        assert!(!json.contains('\n'));
    }
}
