//! # Error Types
//!
//! Domain-specific error types for gilded-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gilded-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  gilded-sim errors (binary crate)                                      │
//! │  └── ConfigError      - Bad environment variable or flag               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → anyhow (main) → stderr            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Note that advancing an item never fails. These errors only come from
//! the optional construction-time checks and from parsing names of things.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Rule set identifier is not one of the known versions.
    #[error("Unknown rule set: {0} (expected \"revised\" or \"legacy\")")]
    UnknownRuleSet(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised before an item enters the inventory, never during aging.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i64,
        max: i64,
        actual: i64,
    },

    /// Value must equal a fixed constant.
    #[error("{field} must be exactly {expected}, got {actual}")]
    MustEqual {
        field: String,
        expected: i64,
        actual: i64,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
