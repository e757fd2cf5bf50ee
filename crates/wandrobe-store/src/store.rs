//! # The Store
//!
//! The single application-state object the presentation layer drives.
//!
//! ## Command Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Command Flow                                │
//! │                                                                         │
//! │  Web Frontend                        Store (this module)                │
//! │  ────────────                        ───────────────────                │
//! │                                                                         │
//! │  Click "Add to Cart" ──────────────► add_to_cart(id, qty)               │
//! │                                        │ lookup ► stock check ► cart    │
//! │  Checkout form submit ─────────────► place_order(shipping, method)      │
//! │                                        │ auth ► cart ► validate ►       │
//! │                                        │ record order ► clear cart      │
//! │  Profile / admin orders tab ───────► order_history()                    │
//! │                                        │ role-scoped view               │
//! │                                                                         │
//! │  Every command runs synchronously to completion and leaves the         │
//! │  store fully consistent before returning; re-render is a pure read.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The `Store` is a plain owned value constructed by the composition root
//! and passed `&mut` into event handlers. It is not a singleton and holds
//! no locks: there is exactly one logical writer at a time.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use wandrobe_core::validation::validate_shipping;
use wandrobe_core::{
    AuthError, Identity, Money, NewProduct, Order, OrderId, OrderLine, PaymentMethod,
    Product, ProductId, ProductPatch, Role, ShippingInfo, StoreError, StoreResult,
    RECOMMENDATION_LIMIT,
};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::config::StoreConfig;
use crate::orders::OrderBook;
use crate::seed::seed_products;
use crate::session::Session;

/// Admin dashboard stat tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub revenue: Money,
    pub product_count: usize,
    pub order_count: usize,
}

/// The application state container: catalog, cart, session and order book,
/// plus display configuration.
///
/// Sub-stores are public so views can read state directly; mutations go
/// through the command methods below.
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub catalog: Catalog,
    pub cart: Cart,
    pub session: Session,
    pub orders: OrderBook,
    pub config: StoreConfig,
}

impl Store {
    /// Creates a store with an empty catalog.
    pub fn new() -> Self {
        Store {
            catalog: Catalog::new(),
            cart: Cart::new(),
            session: Session::new(),
            orders: OrderBook::new(),
            config: StoreConfig::default(),
        }
    }

    /// Creates a store seeded with the WanDrobe launch catalog.
    pub fn with_demo_catalog() -> Self {
        Store {
            catalog: Catalog::with_products(seed_products()),
            ..Store::new()
        }
    }

    // =========================================================================
    // Session Commands
    // =========================================================================

    /// Attempts a login; on success the identity is stored in the session.
    pub fn login(&mut self, email: &str, password: &str) -> StoreResult<Identity> {
        debug!(email = %email, "login command");
        let identity = self.session.login(email, password)?.clone();
        info!(email = %identity.email, role = ?identity.role, "signed in");
        Ok(identity)
    }

    /// Signs the current identity out.
    pub fn logout(&mut self) {
        debug!("logout command");
        self.session.logout();
    }

    /// The derived access role; views consult this for gating.
    pub fn current_role(&self) -> Role {
        self.session.current_role()
    }

    // =========================================================================
    // Catalog Commands & Queries
    // =========================================================================

    /// Current catalog in insertion order.
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Search box query over names and descriptions.
    pub fn search_products(&self, term: &str) -> Vec<&Product> {
        debug!(term = %term, "search_products query");
        self.catalog.search(term)
    }

    /// "You Might Also Like" strip for a product detail view.
    pub fn recommendations(&self, for_product: ProductId) -> Vec<&Product> {
        self.catalog.recommend(for_product, RECOMMENDATION_LIMIT)
    }

    /// Admin: add a product from the add-product form.
    pub fn add_product(&mut self, input: NewProduct) -> StoreResult<Product> {
        debug!(name = %input.name, "add_product command");
        let product = self.catalog.add_product(input)?;
        info!(id = %product.id, name = %product.name, "product added");
        Ok(product)
    }

    /// Admin: apply an edit patch to a product.
    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> StoreResult<()> {
        debug!(id = %id, "update_product command");
        self.catalog.update_product(id, patch)
    }

    /// Admin: remove a product. Cart lines and placed orders keep their
    /// snapshots.
    pub fn delete_product(&mut self, id: ProductId) {
        debug!(id = %id, "delete_product command");
        self.catalog.delete_product(id);
    }

    // =========================================================================
    // Cart Commands
    // =========================================================================

    /// Adds a product to the cart by id.
    ///
    /// ## Behavior
    /// - Unknown id: `ProductNotFound`
    /// - Product with zero stock: `OutOfStock` (the storefront disables the
    ///   button, the command enforces it)
    /// - Otherwise delegates to the cart, snapshotting the product
    pub fn add_to_cart(&mut self, product_id: ProductId, quantity: i64) -> StoreResult<()> {
        debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

        let product = self
            .catalog
            .get(product_id)
            .ok_or(StoreError::ProductNotFound(product_id))?;

        if !product.in_stock() {
            return Err(StoreError::OutOfStock {
                name: product.name.clone(),
            });
        }

        let product = product.clone();
        self.cart.add_item(&product, quantity)
    }

    /// Sets a cart line's quantity; zero or below removes the line.
    pub fn set_cart_quantity(&mut self, product_id: ProductId, quantity: i64) -> StoreResult<()> {
        debug!(product_id = %product_id, quantity = %quantity, "set_cart_quantity command");
        self.cart.set_quantity(product_id, quantity)
    }

    /// Removes a cart line unconditionally.
    pub fn remove_from_cart(&mut self, product_id: ProductId) {
        debug!(product_id = %product_id, "remove_from_cart command");
        self.cart.remove_item(product_id);
    }

    /// Empties the cart.
    pub fn clear_cart(&mut self) {
        debug!("clear_cart command");
        self.cart.clear();
    }

    // =========================================================================
    // Checkout & Orders
    // =========================================================================

    /// Places an order from the current cart.
    ///
    /// ## Preconditions
    /// - A signed-in identity (`NotAuthenticated` otherwise; the storefront
    ///   also redirects to login, this is the defensive invariant)
    /// - A non-empty cart
    /// - Complete shipping details
    ///
    /// ## Effects
    /// Appends an order with a fresh monotonic id, a value-copy of the cart
    /// lines and the computed total, then clears the cart.
    pub fn place_order(
        &mut self,
        shipping: ShippingInfo,
        payment_method: PaymentMethod,
    ) -> StoreResult<Order> {
        debug!(payment_method = ?payment_method, "place_order command");

        let placed_by = self
            .session
            .identity()
            .ok_or(StoreError::Auth(AuthError::NotAuthenticated))?
            .id;

        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        validate_shipping(&shipping)?;

        let lines: Vec<OrderLine> = self
            .cart
            .lines()
            .iter()
            .map(|l| OrderLine {
                product_id: l.product_id,
                name: l.name.clone(),
                unit_price: l.unit_price,
                image_ref: l.image_ref.clone(),
                quantity: l.quantity,
                line_total: l.line_total(),
            })
            .collect();
        let total = self.cart.total();

        let order = self.orders.record(
            placed_by,
            lines,
            total,
            shipping,
            payment_method,
            Utc::now(),
        );
        self.cart.clear();

        info!(order_id = %order.id, total = %order.total, items = order.lines.len(), "order placed");
        Ok(order)
    }

    /// Role-scoped order history.
    ///
    /// Admins see every order, customers see their own, anonymous visitors
    /// see none.
    pub fn order_history(&self) -> Vec<&Order> {
        match self.session.identity() {
            Some(identity) if identity.is_admin() => self.orders.all().iter().collect(),
            Some(identity) => self.orders.for_customer(identity.id),
            None => Vec::new(),
        }
    }

    /// Looks up a placed order for the order detail view.
    pub fn order(&self, id: OrderId) -> StoreResult<&Order> {
        self.orders.get(id).ok_or(StoreError::OrderNotFound(id))
    }

    /// Admin dashboard stat tiles.
    pub fn dashboard(&self) -> DashboardSummary {
        DashboardSummary {
            revenue: self.orders.revenue(),
            product_count: self.catalog.len(),
            order_count: self.orders.count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wandrobe_core::{Category, ValidationError};

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            name: "Aisyah".to_string(),
            email: "aisyah@example.com".to_string(),
            phone: "012-3456789".to_string(),
            address: "12 Jalan Melati, Kuala Lumpur".to_string(),
        }
    }

    fn signed_in_store() -> Store {
        let mut store = Store::with_demo_catalog();
        store.login("aisyah@example.com", "secret").unwrap();
        store
    }

    #[test]
    fn test_add_to_cart_snapshots_catalog_product() {
        let mut store = signed_in_store();
        store.add_to_cart(ProductId(1), 2).unwrap();

        let line = &store.cart.lines()[0];
        assert_eq!(line.name, "Elegant Lace Telekung");
        assert_eq!(line.unit_price.sen(), 8999);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_add_to_cart_unknown_product() {
        let mut store = signed_in_store();
        let err = store.add_to_cart(ProductId(99), 1).unwrap_err();
        assert!(matches!(err, StoreError::ProductNotFound(ProductId(99))));
    }

    #[test]
    fn test_add_to_cart_out_of_stock() {
        let mut store = signed_in_store();
        store
            .update_product(
                ProductId(3),
                ProductPatch {
                    stock: Some(0),
                    ..Default::default()
                },
            )
            .unwrap();

        let err = store.add_to_cart(ProductId(3), 1).unwrap_err();
        assert!(matches!(err, StoreError::OutOfStock { .. }));
        assert!(store.cart.is_empty());
    }

    #[test]
    fn test_place_order_happy_path() {
        let mut store = signed_in_store();
        store.add_to_cart(ProductId(1), 2).unwrap();
        store.add_to_cart(ProductId(2), 1).unwrap();

        let expected_total = store.cart.total();
        let orders_before = store.orders.count();

        let order = store
            .place_order(shipping(), PaymentMethod::CreditCard)
            .unwrap();

        // Cart cleared, exactly one more order, totals preserved.
        assert!(store.cart.is_empty());
        assert_eq!(store.orders.count(), orders_before + 1);
        assert_eq!(order.total, expected_total);
        assert_eq!(order.total.sen(), 8999 * 2 + 6599);
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.status, wandrobe_core::OrderStatus::Pending);
        assert_eq!(order.payment_method, PaymentMethod::CreditCard);
    }

    #[test]
    fn test_place_order_requires_authentication() {
        let mut store = Store::with_demo_catalog();
        // The cart can be filled anonymously; checkout cannot.
        store.add_to_cart(ProductId(1), 1).unwrap();

        let err = store
            .place_order(shipping(), PaymentMethod::DebitCard)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Auth(AuthError::NotAuthenticated)
        ));
        // Failed checkout leaves the cart untouched.
        assert_eq!(store.cart.item_count(), 1);
        assert!(store.orders.is_empty());
    }

    #[test]
    fn test_place_order_requires_non_empty_cart() {
        let mut store = signed_in_store();
        let err = store
            .place_order(shipping(), PaymentMethod::CreditCard)
            .unwrap_err();
        assert!(matches!(err, StoreError::EmptyCart));
    }

    #[test]
    fn test_place_order_validates_shipping() {
        let mut store = signed_in_store();
        store.add_to_cart(ProductId(1), 1).unwrap();

        let mut incomplete = shipping();
        incomplete.address = String::new();
        let err = store
            .place_order(incomplete, PaymentMethod::OnlineBanking)
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Required { .. })
        ));
        // Cart survives the failed attempt.
        assert_eq!(store.cart.item_count(), 1);
        assert!(store.orders.is_empty());
    }

    #[test]
    fn test_order_snapshots_survive_catalog_mutation() {
        let mut store = signed_in_store();
        store.add_to_cart(ProductId(1), 1).unwrap();
        let order = store
            .place_order(shipping(), PaymentMethod::CreditCard)
            .unwrap();

        // Edit and then delete the product behind the order.
        store
            .update_product(
                ProductId(1),
                ProductPatch {
                    price: Some(Money::from_sen(1)),
                    ..Default::default()
                },
            )
            .unwrap();
        store.delete_product(ProductId(1));

        let recorded = &store.orders.all()[0];
        assert_eq!(recorded.id, order.id);
        assert_eq!(recorded.lines[0].unit_price.sen(), 8999);
        assert_eq!(recorded.lines[0].name, "Elegant Lace Telekung");
        assert_eq!(recorded.total.sen(), 8999);
    }

    #[test]
    fn test_delete_product_leaves_cart_line_intact() {
        let mut store = signed_in_store();
        store.add_to_cart(ProductId(2), 3).unwrap();

        store.delete_product(ProductId(2));

        // The listing no longer has the product...
        assert!(store.products().iter().all(|p| p.id != ProductId(2)));
        // ...but the cart still shows the frozen snapshot.
        assert_eq!(store.cart.line_count(), 1);
        assert_eq!(store.cart.lines()[0].name, "Classic White Telekung");
        assert_eq!(store.cart.total().sen(), 6599 * 3);
        // Re-adding the deleted product now fails.
        assert!(matches!(
            store.add_to_cart(ProductId(2), 1),
            Err(StoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_order_history_is_role_scoped() {
        let mut store = Store::with_demo_catalog();

        // Anonymous: nothing.
        assert!(store.order_history().is_empty());

        // First customer places an order.
        store.login("aisyah@example.com", "secret").unwrap();
        store.add_to_cart(ProductId(1), 1).unwrap();
        store
            .place_order(shipping(), PaymentMethod::CreditCard)
            .unwrap();
        assert_eq!(store.order_history().len(), 1);

        // A different customer sees an empty history.
        store.login("farah@example.com", "secret").unwrap();
        assert!(store.order_history().is_empty());
        store.add_to_cart(ProductId(2), 1).unwrap();
        store
            .place_order(shipping(), PaymentMethod::DebitCard)
            .unwrap();
        assert_eq!(store.order_history().len(), 1);

        // The admin sees everything.
        store.login("admin@wandrobe.com", "admin123").unwrap();
        assert_eq!(store.order_history().len(), 2);

        // Logging out hides it all again.
        store.logout();
        assert!(store.order_history().is_empty());
    }

    #[test]
    fn test_order_lookup() {
        let mut store = signed_in_store();
        store.add_to_cart(ProductId(1), 1).unwrap();
        let placed = store
            .place_order(shipping(), PaymentMethod::CreditCard)
            .unwrap();

        let found = store.order(placed.id).unwrap();
        assert_eq!(found.total, placed.total);

        let err = store.order(OrderId(0)).unwrap_err();
        assert!(matches!(err, StoreError::OrderNotFound(OrderId(0))));
    }

    #[test]
    fn test_dashboard_summary() {
        let mut store = signed_in_store();
        let empty = store.dashboard();
        assert!(empty.revenue.is_zero());
        assert_eq!(empty.product_count, 3);
        assert_eq!(empty.order_count, 0);

        store.add_to_cart(ProductId(1), 2).unwrap();
        store
            .place_order(shipping(), PaymentMethod::OnlineBanking)
            .unwrap();

        let summary = store.dashboard();
        assert_eq!(summary.revenue.sen(), 8999 * 2);
        assert_eq!(summary.order_count, 1);
    }

    #[test]
    fn test_admin_catalog_management_end_to_end() {
        let mut store = Store::with_demo_catalog();
        store.login("admin@wandrobe.com", "admin123").unwrap();
        assert_eq!(store.current_role(), Role::Admin);

        let added = store
            .add_product(NewProduct {
                name: "Prayer Mat".to_string(),
                price: "39.90".to_string(),
                description: "Soft travel prayer mat".to_string(),
                image_ref: String::new(),
                stock: "12".to_string(),
                category: Category::Accessories,
            })
            .unwrap();
        assert_eq!(added.id, ProductId(4));
        assert_eq!(store.products().len(), 4);

        store
            .update_product(
                added.id,
                ProductPatch {
                    price: Some(Money::from_sen(3490)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(store.catalog.get(added.id).unwrap().price.sen(), 3490);

        store.delete_product(added.id);
        assert_eq!(store.products().len(), 3);
    }

    #[test]
    fn test_recommendations_passthrough_uses_default_limit() {
        let store = Store::with_demo_catalog();
        let recs = store.recommendations(ProductId(1));

        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|p| p.id != ProductId(1)));
        // Seed ratings: silk 4.9 > white 4.6 once lace (4.8) is excluded.
        assert_eq!(recs[0].id, ProductId(3));
        assert_eq!(recs[1].id, ProductId(2));
    }

    #[test]
    fn test_search_passthrough() {
        let store = Store::with_demo_catalog();
        assert_eq!(store.search_products("silk").len(), 1);
        assert_eq!(store.search_products("").len(), 3);
    }
}
