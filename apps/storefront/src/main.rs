//! # WanDrobe Storefront Demo Driver
//!
//! The composition root: owns the Store and drives it the way the web
//! frontend does, one synchronous command per user action.
//!
//! ## Scripted Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Browse the catalog and a product's recommendations                  │
//! │  2. Try to check out anonymously (blocked, as the UI would be)          │
//! │  3. Sign in as a customer, fill the cart, place the order               │
//! │  4. Review the customer's order history                                 │
//! │  5. Sign in as the admin: dashboard tiles, add a product                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wandrobe_core::{Category, NewProduct, PaymentMethod, ProductId, ShippingInfo};
use wandrobe_store::Store;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("storefront demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting WanDrobe storefront demo");

    // The composition root owns the store; handlers borrow it.
    let mut store = Store::with_demo_catalog();
    info!(store = %store.config.store_name, products = store.products().len(), "store ready");

    // -- Browse ---------------------------------------------------------------
    for product in store.products() {
        info!(
            id = %product.id,
            name = %product.name,
            price = %store.config.format_currency(product.price),
            rating = %product.rating,
            stock = product.stock,
            "catalog"
        );
    }

    let featured = ProductId(1);
    for rec in store.recommendations(featured) {
        info!(for_product = %featured, recommended = %rec.name, rating = %rec.rating, "you might also like");
    }

    // -- Anonymous checkout is blocked ---------------------------------------
    store.add_to_cart(featured, 1)?;
    match store.place_order(demo_shipping(), PaymentMethod::CreditCard) {
        Ok(_) => unreachable!("checkout must require a signed-in identity"),
        Err(err) => warn!(%err, "checkout blocked, redirecting to login"),
    }

    // -- Customer session -----------------------------------------------------
    store.login("aisyah@example.com", "secret")?;
    store.add_to_cart(featured, 1)?; // second unit merges into the line
    store.add_to_cart(ProductId(2), 1)?;
    info!(
        items = store.cart.item_count(),
        total = %store.config.format_currency(store.cart.total()),
        "cart ready for checkout"
    );

    let order = store.place_order(demo_shipping(), PaymentMethod::OnlineBanking)?;
    println!("{}", serde_json::to_string_pretty(&order)?);

    info!(orders = store.order_history().len(), "customer order history");

    // -- Admin session --------------------------------------------------------
    store.login("admin@wandrobe.com", "admin123")?;
    let summary = store.dashboard();
    info!(
        revenue = %store.config.format_currency(summary.revenue),
        products = summary.product_count,
        orders = summary.order_count,
        "admin dashboard"
    );

    let added = store.add_product(NewProduct {
        name: "Travel Prayer Mat".to_string(),
        price: "39.90".to_string(),
        description: "Foldable lightweight prayer mat with carry pouch.".to_string(),
        image_ref: String::new(),
        stock: "30".to_string(),
        category: Category::Accessories,
    })?;
    info!(id = %added.id, name = %added.name, "admin added product");
    info!(products = store.products().len(), "catalog after admin edit");

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show per-command debug messages
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wandrobe_store=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn demo_shipping() -> ShippingInfo {
    ShippingInfo {
        name: "Aisyah Rahman".to_string(),
        email: "aisyah@example.com".to_string(),
        phone: "+60 12-345 6789".to_string(),
        address: "12 Jalan Melati, 53100 Kuala Lumpur".to_string(),
    }
}
