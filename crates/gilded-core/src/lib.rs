//! # gilded-core: Pure Valuation Logic for Gilded Rose
//!
//! This crate is the **heart** of the Gilded Rose inventory. It contains the
//! rules that age stock items, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Gilded Rose Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    gilded-sim (binary)                          │   │
//! │  │    env + flags ──► fixture items ──► day loop ──► text / JSON   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gilded-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  engine   │  │ inventory │  │ validation│  │   │
//! │  │   │   Item    │  │ Valuation │  │ day driver│  │   rules   │  │   │
//! │  │   │ Category  │  │  Engine   │  │           │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Category, RuleSet)
//! - [`engine`] - The per-item aging rules
//! - [`inventory`] - Advances a whole shelf once per day
//! - [`error`] - Domain error types
//! - [`validation`] - Optional construction-time checks
//!
//! ## Design Principles
//!
//! 1. **Total Functions**: Aging accepts every integer input and never panics
//! 2. **No I/O**: Logging goes through `tracing`; the subscriber is the caller's business
//! 3. **Closed Categories**: Names are classified once; rules dispatch on an enum
//! 4. **Explicit Errors**: Validation errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gilded_core::{advance_one_day, Item};
//!
//! let mut brie = Item::new("Aged Brie", 10, 49);
//! advance_one_day(&mut brie);
//!
//! // Quality never exceeds 50
//! assert_eq!(brie.to_string(), "Aged Brie, 9, 50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod inventory;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use engine::{advance_one_day, ValuationEngine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::Inventory;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest quality a non-legendary item can hold.
pub const MAX_QUALITY: i64 = 50;

/// Lowest quality a non-legendary item can hold.
pub const MIN_QUALITY: i64 = 0;

/// Quality every legendary item is stocked at.
pub const LEGENDARY_QUALITY: i64 = 80;

/// Backstage passes gain 2 per day from this many days out.
pub const BACKSTAGE_SECOND_TIER_DAYS: i64 = 10;

/// Backstage passes gain 3 per day from this many days out (revised rules only).
pub const BACKSTAGE_THIRD_TIER_DAYS: i64 = 5;
