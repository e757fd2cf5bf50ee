//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A cart total computed as price × quantity in floats drifts,           │
//! │  and RM 89.99 × 3 quietly becomes RM 269.96999999999997.               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Sen                                              │
//! │    8999 sen × 3 = 26997 sen = RM 269.97, exactly                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use wandrobe_core::money::Money;
//!
//! // Create from sen (preferred)
//! let price = Money::from_sen(8999); // RM 89.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                    // RM 179.98
//! let total = price + Money::from_sen(500);   // RM 94.99
//!
//! // NEVER do this:
//! // let bad = Money::from_float(89.99); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (sen for MYR).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds, adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// Every monetary value in the storefront flows through this type:
/// product prices, cart line totals, order totals, dashboard revenue.
/// Only the UI converts to ringgit for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from sen (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use wandrobe_core::money::Money;
    ///
    /// let price = Money::from_sen(8999); // Represents RM 89.99
    /// assert_eq!(price.sen(), 8999);
    /// ```
    #[inline]
    pub const fn from_sen(sen: i64) -> Self {
        Money(sen)
    }

    /// Creates a Money value from major and minor units (ringgit and sen).
    ///
    /// ## Example
    /// ```rust
    /// use wandrobe_core::money::Money;
    ///
    /// let price = Money::from_major_minor(89, 99); // RM 89.99
    /// assert_eq!(price.sen(), 8999);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = -RM 5.50, not -RM 4.50
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in sen (smallest currency unit).
    #[inline]
    pub const fn sen(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (ringgit) portion.
    #[inline]
    pub const fn ringgit(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (sen) portion (always 0-99).
    #[inline]
    pub const fn sen_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use wandrobe_core::money::Money;
    ///
    /// let unit_price = Money::from_sen(6599); // RM 65.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.sen(), 19797); // RM 197.97
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and the demo driver. The web frontend formats
/// currency itself (via `StoreConfig`) to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}RM {}.{:02}", sign, self.ringgit().abs(), self.sen_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over an iterator of Money values (cart totals, revenue).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
