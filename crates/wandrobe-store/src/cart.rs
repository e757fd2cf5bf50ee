//! # Cart State
//!
//! Manages the current shopping cart state.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Store Command           Cart State Change     │
//! │  ───────────────          ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add_item() ──────────► lines.push(line)     │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity() ──────► lines[i].qty = n     │
//! │                                                                         │
//! │  Click Remove ───────────► remove_item() ───────► lines.remove(i)      │
//! │                                                                         │
//! │  Order Placed ───────────► clear() ─────────────► lines.clear()        │
//! │                                                                         │
//! │  Header Badge ───────────► item_count() ────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use wandrobe_core::validation::validate_quantity;
use wandrobe_core::{
    Money, Product, ProductId, StoreError, StoreResult, MAX_CART_ITEMS, MAX_ITEM_QUANTITY,
};

/// A line in the shopping cart.
///
/// ## Design Notes
/// - `product_id`: Reference to the product (for catalog lookup)
/// - `name`/`unit_price`/`image_ref`: Frozen copies of product data at the
///   time of adding. This ensures the cart displays consistent data even if
///   the product is edited or deleted in the catalog afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// Product the line refers to.
    pub product_id: ProductId,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Price in sen at time of adding (frozen).
    /// This is critical: we lock in the price when added to cart.
    pub unit_price: Money,

    /// Image reference at time of adding (frozen).
    pub image_ref: String,

    /// Quantity in cart.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a new cart line from a product and quantity.
    ///
    /// ## Price Freezing
    /// The price is captured at this moment. If the product price changes
    /// in the catalog, this cart line retains the original price.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            image_ref: product.image_ref.clone(),
            quantity,
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `product_id` (adding the same product again
///   increases quantity)
/// - Quantity is always positive (setting qty to 0 or below removes the line)
/// - Maximum distinct lines: `MAX_CART_ITEMS`
/// - Maximum quantity per line: `MAX_ITEM_QUANTITY`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Returns the cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// ## Behavior
    /// - If product already in cart: increases quantity
    /// - If product not in cart: adds a new snapshot line
    /// - Quantity must be positive; zero or negative input is rejected
    pub fn add_item(&mut self, product: &Product, quantity: i64) -> StoreResult<()> {
        validate_quantity(quantity)?;

        // Check if product already in cart
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(StoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            line.quantity = new_qty;
            return Ok(());
        }

        // Check max lines
        if self.lines.len() >= MAX_CART_ITEMS {
            return Err(StoreError::CartTooLarge {
                max: MAX_CART_ITEMS,
            });
        }

        // Add new line
        self.lines.push(CartLine::from_product(product, quantity));
        Ok(())
    }

    /// Sets the quantity of a line in the cart.
    ///
    /// ## Behavior
    /// - Quantity ≤ 0: removes the line
    /// - Line not present: no-op
    pub fn set_quantity(&mut self, product_id: ProductId, quantity: i64) -> StoreResult<()> {
        if quantity <= 0 {
            self.remove_item(product_id);
            return Ok(());
        }

        if quantity > MAX_ITEM_QUANTITY {
            return Err(StoreError::QuantityTooLarge {
                requested: quantity,
                max: MAX_ITEM_QUANTITY,
            });
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
        Ok(())
    }

    /// Removes a line from the cart by product id. No-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Clears all lines from the cart (used after checkout).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity of all lines (header badge).
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Calculates the cart total from the frozen line snapshots.
    pub fn total(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wandrobe_core::{Category, Rating, ValidationError};

    fn test_product(id: u64, price_sen: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {}", id),
            price: Money::from_sen(price_sen),
            image_ref: format!("jpeg/product{}.jpg", id),
            category: Category::Telekung,
            description: format!("Description {}", id),
            stock: 10,
            rating: Rating::zero(),
            review_count: 0,
        }
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        let product = test_product(1, 999); // RM 9.99

        cart.add_item(&product, 2).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().sen(), 1998); // RM 19.98
    }

    #[test]
    fn test_add_same_product_merges_into_one_line() {
        let mut cart = Cart::new();
        let product = test_product(1, 999);

        cart.add_item(&product, 2).unwrap();
        cart.add_item(&product, 3).unwrap();

        assert_eq!(cart.line_count(), 1); // Still one distinct line
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_lines_unique_by_product_id() {
        let mut cart = Cart::new();
        let a = test_product(1, 1000);
        let b = test_product(2, 500);

        // A messy sequence of operations must never produce duplicate lines.
        cart.add_item(&a, 1).unwrap();
        cart.add_item(&b, 2).unwrap();
        cart.add_item(&a, 4).unwrap();
        cart.set_quantity(a.id, 3).unwrap();
        cart.remove_item(b.id);
        cart.add_item(&b, 1).unwrap();
        cart.add_item(&b, 1).unwrap();

        let mut ids: Vec<ProductId> = cart.lines().iter().map(|l| l.product_id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), cart.line_count());
    }

    #[test]
    fn test_total_matches_independent_recomputation() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 8999), 2).unwrap();
        cart.add_item(&test_product(2, 6599), 1).unwrap();
        cart.add_item(&test_product(3, 14999), 3).unwrap();

        let expected: i64 = cart
            .lines()
            .iter()
            .map(|l| l.unit_price.sen() * l.quantity)
            .sum();
        assert_eq!(cart.total().sen(), expected);
    }

    #[test]
    fn test_checkout_scenario_totals() {
        // Product A (RM 10.00) qty 2, product B (RM 5.00) qty 1 → RM 25.00.
        let mut cart = Cart::new();
        let a = test_product(1, 1000);
        let b = test_product(2, 500);

        cart.add_item(&a, 2).unwrap();
        cart.add_item(&b, 1).unwrap();
        assert_eq!(cart.total().sen(), 2500);

        // Setting A's quantity to zero leaves only B.
        cart.set_quantity(a.id, 0).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product_id, b.id);
        assert_eq!(cart.total().sen(), 500);
    }

    #[test]
    fn test_set_quantity_on_absent_line_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 1000), 1).unwrap();

        cart.set_quantity(ProductId(99), 5).unwrap();
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        let product = test_product(1, 1000);

        let err = cart.add_item(&product, 0).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        let err = cart.add_item(&product, -2).unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::MustBePositive { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_caps() {
        let mut cart = Cart::new();
        let product = test_product(1, 1000);

        cart.add_item(&product, 999).unwrap();
        let err = cart.add_item(&product, 1).unwrap_err();
        assert!(matches!(err, StoreError::QuantityTooLarge { .. }));
        assert_eq!(cart.item_count(), 999);

        let err = cart.set_quantity(product.id, 1000).unwrap_err();
        assert!(matches!(err, StoreError::QuantityTooLarge { .. }));
        assert_eq!(cart.item_count(), 999);
    }

    #[test]
    fn test_snapshot_survives_product_changes() {
        let mut cart = Cart::new();
        let mut product = test_product(1, 8999);
        cart.add_item(&product, 1).unwrap();

        // Catalog-side edits after the add must not leak into the cart.
        product.price = Money::from_sen(1);
        product.name = "Renamed".to_string();

        assert_eq!(cart.lines()[0].unit_price.sen(), 8999);
        assert_eq!(cart.lines()[0].name, "Product 1");
        assert_eq!(cart.total().sen(), 8999);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product(1, 999), 2).unwrap();
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total().sen(), 0);
    }
}
