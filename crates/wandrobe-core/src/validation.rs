//! # Validation Module
//!
//! Input validation utilities for the WanDrobe storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (form `required` attributes)                        │
//! │  ├── Basic format checks (empty fields)                                │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store command (Rust)                                         │
//! │  └── THIS MODULE: the authoritative checks                             │
//! │                                                                         │
//! │  The frontend layer is advisory; a command must never trust it.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wandrobe_core::validation::{parse_price, validate_quantity};
//!
//! // Parse an admin form price before creating a product
//! let price = parse_price("89.99").unwrap();
//! assert_eq!(price.sen(), 8999);
//!
//! // Validate quantity before a cart operation
//! validate_quantity(5).unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ShippingInfo;
use crate::MAX_ITEM_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a product description.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 2000 characters
pub fn validate_description(description: &str) -> ValidationResult<()> {
    let description = description.trim();

    if description.is_empty() {
        return Err(ValidationError::Required {
            field: "description".to_string(),
        });
    }

    if description.len() > 2000 {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: 2000,
        });
    }

    Ok(())
}

// =============================================================================
// Form Parsers
// =============================================================================

/// Parses a price string from the admin form into [`Money`].
///
/// ## Rules
/// - Must not be empty
/// - Must be a non-negative decimal with at most two decimal places
///   ("89.99", "65", "0.50")
///
/// ## Example
/// ```rust
/// use wandrobe_core::validation::parse_price;
///
/// assert_eq!(parse_price("89.99").unwrap().sen(), 8999);
/// assert_eq!(parse_price("65").unwrap().sen(), 6500);
/// assert!(parse_price("").is_err());
/// assert!(parse_price("-5").is_err());
/// assert!(parse_price("8.9.9").is_err());
/// ```
pub fn parse_price(input: &str) -> ValidationResult<Money> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: "price".to_string(),
        });
    }

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "price".to_string(),
        reason: reason.to_string(),
    };

    let (major, minor) = match input.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (input, ""),
    };

    if major.is_empty() || !major.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("not a non-negative decimal number"));
    }
    if minor.len() > 2 || !minor.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid("at most two decimal places allowed"));
    }

    let major: i64 = major
        .parse()
        .map_err(|_| invalid("amount too large"))?;
    // Pad "9" to 90 sen, leave "99" as-is, empty fraction is zero.
    let minor: i64 = if minor.is_empty() {
        0
    } else if minor.len() == 1 {
        minor.parse::<i64>().unwrap_or(0) * 10
    } else {
        minor.parse::<i64>().unwrap_or(0)
    };

    major
        .checked_mul(100)
        .and_then(|sen| sen.checked_add(minor))
        .map(Money::from_sen)
        .ok_or_else(|| invalid("amount too large"))
}

/// Parses a stock count string from the admin form.
///
/// Absent or unparseable input falls back to zero, matching the add-product
/// form's behavior.
pub fn parse_stock(input: &str) -> u32 {
    input.trim().parse().unwrap_or(0)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price value.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

// =============================================================================
// Checkout Validators
// =============================================================================

/// Validates the checkout shipping form.
///
/// ## Rules
/// - name, email, phone, address are all required
/// - email must look like an address (contains '@')
pub fn validate_shipping(shipping: &ShippingInfo) -> ValidationResult<()> {
    let required = |field: &str, value: &str| -> ValidationResult<()> {
        if value.trim().is_empty() {
            Err(ValidationError::Required {
                field: field.to_string(),
            })
        } else {
            Ok(())
        }
    };

    required("name", &shipping.name)?;
    required("email", &shipping.email)?;
    required("phone", &shipping.phone)?;
    required("address", &shipping.address)?;

    if !shipping.email.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be an email address".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
