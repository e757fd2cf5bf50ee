//! # Domain Types
//!
//! Core domain types used throughout the WanDrobe storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │    Identity     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id (monotonic) │   │  id (UUID)      │       │
//! │  │  price (Money)  │   │  lines (frozen) │   │  email          │       │
//! │  │  rating         │   │  total (Money)  │   │  role           │       │
//! │  │  stock          │   │  shipping       │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Rating       │   │  OrderStatus    │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  hundredths     │   │  Pending        │   │  CreditCard     │       │
//! │  │  480 = ★4.8     │   │                 │   │  DebitCard      │       │
//! │  └─────────────────┘   └─────────────────┘   │  OnlineBanking  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Order lines are value-copies of cart lines, which themselves freeze the
//! product's name/price/image at add-to-cart time. Later catalog edits
//! (or deletions) never reach into a cart or a placed order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Rating
// =============================================================================

/// Star rating represented in hundredths of a star.
///
/// ## Why Hundredths?
/// 1 hundredth = 0.01 star, so 480 = ★4.8.
/// Keeps aggregate ratings in integer math; the UI divides for display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Rating(u16);

/// Upper bound: five stars.
const MAX_RATING_HUNDREDTHS: u16 = 500;

impl Rating {
    /// Creates a rating from hundredths of a star, clamped to [0, 500].
    #[inline]
    pub fn from_hundredths(hundredths: u16) -> Self {
        Rating(hundredths.min(MAX_RATING_HUNDREDTHS))
    }

    /// Returns the rating in hundredths of a star.
    #[inline]
    pub const fn hundredths(&self) -> u16 {
        self.0
    }

    /// Returns the rating as fractional stars (for display only).
    #[inline]
    pub fn stars(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// A product with no reviews yet.
    #[inline]
    pub const fn zero() -> Self {
        Rating(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Rating::zero()
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}", self.stars())
    }
}

// =============================================================================
// Product
// =============================================================================

/// Product identifier.
///
/// Assigned by the catalog from a monotonic counter; unique and immutable
/// after creation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(pub u64);

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Product category shown as a storefront filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    #[default]
    Telekung,
    Accessories,
}

/// A product in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier, assigned at creation.
    pub id: ProductId,

    /// Display name shown on cards and in the cart.
    pub name: String,

    /// Price in sen.
    pub price: Money,

    /// Opaque image reference, resolved by the presentation layer.
    pub image_ref: String,

    /// Storefront category.
    pub category: Category,

    /// Longer description for the detail view.
    pub description: String,

    /// Units on hand. Zero disables add-to-cart.
    pub stock: u32,

    /// Average review rating. New products start at zero.
    pub rating: Rating,

    /// Number of reviews behind `rating`.
    pub review_count: u32,
}

impl Product {
    /// Checks whether the product can currently be added to a cart.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// Admin "add product" form payload.
///
/// `price` and `stock` arrive as raw form strings; the catalog parses them
/// (`price` must be a non-negative decimal, `stock` falls back to 0).
/// An empty `image_ref` gets the placeholder image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_ref: String,
    pub stock: String,
    pub category: Category,
}

/// Admin "update product" payload.
///
/// An explicit patch enumerating exactly the fields that may change:
/// absent fields are left untouched, unknown fields are unrepresentable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub description: Option<String>,
    pub image_ref: Option<String>,
    pub stock: Option<u32>,
    pub category: Option<Category>,
}

// =============================================================================
// Identity & Role
// =============================================================================

/// Access level derived from the session.
///
/// A stored identity is only ever `Customer` or `Admin`; `Anonymous` is
/// the derived role of an empty session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    #[default]
    Anonymous,
    Customer,
    Admin,
}

/// An authenticated principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Identity {
    #[ts(as = "String")]
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: Role,
}

impl Identity {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

// =============================================================================
// Orders
// =============================================================================

/// Order identifier, derived from the creation timestamp (millis) and
/// bumped past the previous id on collision, so ids are strictly monotonic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct OrderId(pub i64);

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The status of a placed order.
///
/// Orders are append-only in this core: nothing changes status after
/// creation, so `Pending` is the only state an order can be observed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OrderStatus {
    #[default]
    Pending,
}

/// How the customer chose to pay at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    OnlineBanking,
}

/// Shipping details collected on the checkout form. All fields required.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShippingInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// A line item in a placed order.
/// Uses the snapshot pattern to freeze cart data at checkout time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// Product the line originated from. The product may since have been
    /// edited or deleted; the snapshots below are authoritative.
    pub product_id: ProductId,
    /// Product name at checkout time (frozen).
    pub name: String,
    /// Unit price in sen at checkout time (frozen).
    pub unit_price: Money,
    /// Image reference at checkout time (frozen).
    pub image_ref: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Line total (unit_price × quantity), frozen.
    pub line_total: Money,
}

/// A placed order.
///
/// Owned by the order book, append-only: orders are never mutated or
/// deleted once placed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    pub id: OrderId,

    /// Identity that placed the order (scopes the customer's history view).
    #[ts(as = "String")]
    pub placed_by: Uuid,

    /// Value-copy of the cart contents at checkout.
    pub lines: Vec<OrderLine>,

    /// Order total at checkout, in sen.
    pub total: Money,

    pub shipping: ShippingInfo,
    pub payment_method: PaymentMethod,

    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,

    pub status: OrderStatus,
}

impl Order {
    /// Total quantity across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_clamps_to_five_stars() {
        assert_eq!(Rating::from_hundredths(480).hundredths(), 480);
        assert_eq!(Rating::from_hundredths(900).hundredths(), 500);
        assert!((Rating::from_hundredths(480).stars() - 4.8).abs() < 1e-9);
    }

    #[test]
    fn test_rating_display() {
        assert_eq!(Rating::from_hundredths(480).to_string(), "4.8");
        assert_eq!(Rating::zero().to_string(), "0.0");
    }

    #[test]
    fn test_rating_ordering() {
        assert!(Rating::from_hundredths(500) > Rating::from_hundredths(300));
        assert_eq!(Rating::from_hundredths(300), Rating::from_hundredths(300));
    }

    #[test]
    fn test_role_default_is_anonymous() {
        assert_eq!(Role::default(), Role::Anonymous);
    }

    #[test]
    fn test_order_status_default() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_payment_method_wire_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CreditCard).unwrap(),
            "\"credit_card\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::OnlineBanking).unwrap(),
            "\"online_banking\""
        );
    }

    #[test]
    fn test_order_item_count() {
        let line = |qty: i64| OrderLine {
            product_id: ProductId(1),
            name: "Telekung".to_string(),
            unit_price: Money::from_sen(8999),
            image_ref: String::new(),
            quantity: qty,
            line_total: Money::from_sen(8999).multiply_quantity(qty),
        };
        let order = Order {
            id: OrderId(1),
            placed_by: Uuid::new_v4(),
            lines: vec![line(2), line(3)],
            total: Money::from_sen(44995),
            shipping: ShippingInfo::default(),
            payment_method: PaymentMethod::CreditCard,
            placed_at: Utc::now(),
            status: OrderStatus::Pending,
        };
        assert_eq!(order.item_count(), 5);
    }
}
