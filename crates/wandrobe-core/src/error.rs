//! # Error Types
//!
//! Domain-specific error types for wandrobe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  StoreError          - Command failures (not found, caps, empty cart)  │
//! │  ├── Validation      - wraps ValidationError                           │
//! │  └── Auth            - wraps AuthError                                 │
//! │                                                                         │
//! │  ValidationError     - Input validation failures                       │
//! │  AuthError           - Login / session failures                        │
//! │                                                                         │
//! │  Every error is recoverable at the call site: commands return a        │
//! │  failure result and leave prior state untouched. The presentation      │
//! │  layer turns the message into an inline string or alert.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

use crate::types::{OrderId, ProductId};

// =============================================================================
// Store Error
// =============================================================================

/// Store command errors.
///
/// These represent business rule violations or failed lookups. They should
/// be caught by the presentation layer and shown as user-facing messages.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Product cannot be found in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Order cannot be found in the order book.
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// The product has no stock left; add-to-cart is disabled.
    #[error("{name} is out of stock")]
    OutOfStock { name: String },

    /// Cart has exceeded the maximum number of distinct lines.
    #[error("cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Line quantity exceeds the maximum allowed.
    #[error("quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Checkout requires a non-empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Authentication error (wraps AuthError).
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when form input doesn't meet requirements. Used for early
/// validation before any state is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a price that doesn't parse as a decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Auth Error
// =============================================================================

/// Login and session errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Email/password pair was rejected.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The command requires a signed-in identity.
    #[error("not authenticated")]
    NotAuthenticated,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
