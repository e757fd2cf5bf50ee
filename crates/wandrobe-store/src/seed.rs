//! # Seed Data
//!
//! The WanDrobe launch catalog, used by the demo driver and tests.

use wandrobe_core::{Category, Money, Product, ProductId, Rating};

/// Returns the three products the shop launches with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(1),
            name: "Elegant Lace Telekung".to_string(),
            price: Money::from_sen(8999),
            image_ref: "jpeg/elegantlacetelekung.jpg".to_string(),
            category: Category::Telekung,
            description: "Beautiful lace-detailed telekung perfect for daily prayers. \
                          Made from premium cotton blend."
                .to_string(),
            stock: 15,
            rating: Rating::from_hundredths(480),
            review_count: 24,
        },
        Product {
            id: ProductId(2),
            name: "Classic White Telekung".to_string(),
            price: Money::from_sen(6599),
            image_ref: "jpeg/classicwhitetelekung.jpg".to_string(),
            category: Category::Telekung,
            description: "Simple and elegant white telekung with comfortable fit. \
                          Perfect for beginners."
                .to_string(),
            stock: 22,
            rating: Rating::from_hundredths(460),
            review_count: 18,
        },
        Product {
            id: ProductId(3),
            name: "Premium Silk Telekung".to_string(),
            price: Money::from_sen(14999),
            image_ref: "jpeg/premiumsilktelekung.jpg".to_string(),
            category: Category::Telekung,
            description: "Luxurious silk telekung with intricate embroidery. \
                          Premium quality for special occasions."
                .to_string(),
            stock: 8,
            rating: Rating::from_hundredths(490),
            review_count: 31,
        },
    ]
}
