//! # Catalog State
//!
//! The mutable list of products and the operations the storefront and the
//! admin dashboard perform on it.
//!
//! ## Ordering
//! Products are kept in insertion order; that order is the storefront's
//! default display order, and recommendation ties fall back to it.

use serde::{Deserialize, Serialize};
use wandrobe_core::validation::{
    parse_price, parse_stock, validate_description, validate_price, validate_product_name,
};
use wandrobe_core::{
    NewProduct, Product, ProductId, ProductPatch, Rating, StoreError, StoreResult,
    PLACEHOLDER_IMAGE_REF,
};

/// The product catalog.
///
/// ## Invariants
/// - Product ids are unique and never reused, even after deletions
/// - Insertion order is preserved (stable display order)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    products: Vec<Product>,
    next_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::new()
    }
}

impl Catalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Catalog {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a catalog pre-populated with the given products.
    ///
    /// The id counter continues after the highest existing id, so admin
    /// additions never collide with seeded products.
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        Catalog { products, next_id }
    }

    /// Returns the catalog in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Adds a product from the admin "add product" form.
    ///
    /// ## Behavior
    /// - name, price and description are required; price must parse as a
    ///   non-negative decimal
    /// - stock falls back to 0 when absent or unparseable
    /// - an empty image reference gets the placeholder image
    /// - the new product gets a fresh unique id and starts unrated
    pub fn add_product(&mut self, input: NewProduct) -> StoreResult<Product> {
        validate_product_name(&input.name)?;
        validate_description(&input.description)?;
        let price = parse_price(&input.price)?;
        let stock = parse_stock(&input.stock);

        let image_ref = if input.image_ref.trim().is_empty() {
            PLACEHOLDER_IMAGE_REF.to_string()
        } else {
            input.image_ref
        };

        let product = Product {
            id: ProductId(self.next_id),
            name: input.name,
            price,
            image_ref,
            category: input.category,
            description: input.description,
            stock,
            rating: Rating::zero(),
            review_count: 0,
        };
        self.next_id += 1;

        self.products.push(product.clone());
        Ok(product)
    }

    /// Applies an admin edit to a product.
    ///
    /// Present patch fields are validated up front and then merged in place;
    /// a failed validation leaves the product untouched.
    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> StoreResult<()> {
        if let Some(name) = &patch.name {
            validate_product_name(name)?;
        }
        if let Some(description) = &patch.description {
            validate_description(description)?;
        }
        if let Some(price) = patch.price {
            validate_price(price)?;
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(image_ref) = patch.image_ref {
            product.image_ref = image_ref;
        }
        if let Some(stock) = patch.stock {
            product.stock = stock;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }

        Ok(())
    }

    /// Removes a product from the catalog. No-op if absent.
    ///
    /// Cart lines and placed orders keep their own snapshots, so nothing
    /// else needs to be touched here.
    pub fn delete_product(&mut self, id: ProductId) {
        self.products.retain(|p| p.id != id);
    }

    /// Returns up to `limit` other products for the "You Might Also Like"
    /// strip, sorted by descending rating.
    ///
    /// The sort is stable, so rating ties keep their catalog insertion
    /// order and the strip renders deterministically. The product being
    /// viewed is never recommended to itself.
    pub fn recommend(&self, for_product: ProductId, limit: usize) -> Vec<&Product> {
        let mut candidates: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.id != for_product)
            .collect();
        candidates.sort_by(|a, b| b.rating.cmp(&a.rating));
        candidates.truncate(limit);
        candidates
    }

    /// Case-insensitive substring search over names and descriptions.
    ///
    /// An empty (or whitespace) term matches everything, so the search box
    /// doubles as the unfiltered product listing.
    pub fn search(&self, term: &str) -> Vec<&Product> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
