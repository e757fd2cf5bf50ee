//! # Order Book State
//!
//! The append-only list of placed orders.
//!
//! Orders are only ever created by checkout and never mutated or deleted
//! afterwards; every other access is a read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use wandrobe_core::{
    Money, Order, OrderId, OrderLine, OrderStatus, PaymentMethod, ShippingInfo,
};

/// The order book.
///
/// ## Invariants
/// - Append-only: entries are never mutated or removed
/// - Ids are strictly monotonic, derived from the creation timestamp
///   (millis) and bumped past the previous id when two checkouts land in
///   the same millisecond
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    orders: Vec<Order>,
    last_id: i64,
}

impl OrderBook {
    /// Creates a new empty order book.
    pub fn new() -> Self {
        OrderBook {
            orders: Vec::new(),
            last_id: 0,
        }
    }

    /// Appends a new order and returns it.
    ///
    /// `placed_at` is passed in by the caller so checkout controls the
    /// clock (and tests can pin it).
    pub fn record(
        &mut self,
        placed_by: Uuid,
        lines: Vec<OrderLine>,
        total: Money,
        shipping: ShippingInfo,
        payment_method: PaymentMethod,
        placed_at: DateTime<Utc>,
    ) -> Order {
        let mut id = placed_at.timestamp_millis();
        if id <= self.last_id {
            id = self.last_id + 1;
        }
        self.last_id = id;

        let order = Order {
            id: OrderId(id),
            placed_by,
            lines,
            total,
            shipping,
            payment_method,
            placed_at,
            status: OrderStatus::Pending,
        };
        self.orders.push(order.clone());
        order
    }

    /// All orders in placement order (the admin view).
    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Looks up a single order by id (the order detail view).
    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// A single customer's orders (the profile view).
    pub fn for_customer(&self, customer: Uuid) -> Vec<&Order> {
        self.orders
            .iter()
            .filter(|o| o.placed_by == customer)
            .collect()
    }

    /// Number of placed orders.
    pub fn count(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Total revenue across all orders (the admin dashboard tile).
    pub fn revenue(&self) -> Money {
        self.orders.iter().map(|o| o.total).sum()
    }
}
