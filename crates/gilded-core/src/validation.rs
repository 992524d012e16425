//! # Validation Module
//!
//! Construction-time checks for items entering the inventory.
//!
//! The engine itself accepts anything: an item that starts at quality 80 is
//! clamped back to 50 on its first tick. These validators exist for callers
//! that would rather reject bad data at the door than have it quietly fixed.
//!
//! ## Usage
//! ```rust
//! use gilded_core::validation::{validate_item_name, validate_quality};
//! use gilded_core::Category;
//!
//! validate_item_name("Elixir of the Mongoose").unwrap();
//! validate_quality(Category::Ordinary, 7).unwrap();
//! assert!(validate_quality(Category::Legendary, 7).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Category;
use crate::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest item name accepted by [`validate_item_name`].
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a starting quality for the given category.
///
/// ## Rules
/// - Legendary: exactly 80
/// - Everything else: between 0 and 50 inclusive
pub fn validate_quality(category: Category, quality: i64) -> ValidationResult<()> {
    if category.is_legendary() {
        if quality != LEGENDARY_QUALITY {
            return Err(ValidationError::MustEqual {
                field: "quality".to_string(),
                expected: LEGENDARY_QUALITY,
                actual: quality,
            });
        }
        return Ok(());
    }

    if !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
        return Err(ValidationError::OutOfRange {
            field: "quality".to_string(),
            min: MIN_QUALITY,
            max: MAX_QUALITY,
            actual: quality,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
