//! # wandrobe-core: Pure Business Logic for the WanDrobe Storefront
//!
//! This crate is the **heart** of the WanDrobe storefront. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      WanDrobe Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (web UI)                     │   │
//! │  │    Home ──► Products ──► Cart ──► Checkout ──► Admin           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ store commands / queries               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     wandrobe-store                              │   │
//! │  │      Catalog, Cart, Session, OrderBook state containers         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ wandrobe-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   error   │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │StoreError │  │   rules   │  │   │
//! │  │   │   Order   │  │  (sen)    │  │AuthError  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, Identity, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in sen (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use wandrobe_core::Money` instead of
// `use wandrobe_core::money::Money`

pub use error::{AuthError, StoreError, StoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fixed administrator login email.
///
/// The storefront ships with exactly one administrator account; credentials
/// are compared in plaintext. There is no environment-based configuration
/// and no credential store.
pub const ADMIN_EMAIL: &str = "admin@wandrobe.com";

/// Fixed administrator login password. See [`ADMIN_EMAIL`].
pub const ADMIN_PASSWORD: &str = "admin123";

/// Maximum distinct lines allowed in a single cart.
///
/// ## Business Reason
/// Prevents runaway carts and ensures reasonable order sizes.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single line in the cart.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// How many products the "You Might Also Like" strip shows.
pub const RECOMMENDATION_LIMIT: usize = 2;

/// Image shown for products created without one.
pub const PLACEHOLDER_IMAGE_REF: &str =
    "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=400&h=400&fit=crop";
