//! Static product catalog.
//!
//! The catalog is an ordered, read-only list of products loaded once at
//! startup and shared by reference. "Featured" ordering in the query
//! pipeline is simply this catalog order.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mercato_core::{Category, ColorId, Price, ProductId};

/// A selectable color variant on a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    pub id: ColorId,
    pub name: String,
}

/// A catalog product record. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    /// Default listing image; the image layer may override it per product id.
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
    /// Long-form details shown on the product page, when present.
    #[serde(default)]
    pub details: Option<String>,
    /// Listing date backing the `newest` sort.
    pub created_at: NaiveDate,
}

/// The store's product catalog.
///
/// Cheaply cloneable; the product list is behind an `Arc` and never mutated
/// after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Build a catalog from an ordered product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// The built-in product set.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(seed_products())
    }

    /// All products, in catalog (featured) order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn product(
    id: i32,
    name: &str,
    category: Category,
    price: u32,
    created_at: NaiveDate,
    description: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category,
        price: Price::from_units(price),
        image: format!("/images/products/{id}.jpg"),
        description: description.to_owned(),
        colors: Vec::new(),
        details: None,
        created_at,
    }
}

/// The hard-coded catalog, in featured order.
fn seed_products() -> Vec<Product> {
    let mut products = vec![
        product(
            1,
            "Herbal Wellness Tea",
            Category::HealthWellness,
            450,
            date(2024, 9, 2),
            "A calming blend of chamomile, mint, and local herbs.",
        ),
        product(
            2,
            "Shea Butter Body Cream",
            Category::BeautyPersonalCare,
            680,
            date(2024, 9, 18),
            "Rich moisturizer with unrefined shea butter and vitamin E.",
        ),
        product(
            3,
            "Wireless Earbuds Pro",
            Category::ElectronicsGadgets,
            3200,
            date(2024, 10, 1),
            "Noise-isolating earbuds with a 24-hour charging case.",
        ),
        product(
            4,
            "Woven Basket Set",
            Category::HomeLiving,
            1250,
            date(2024, 10, 9),
            "Three handwoven storage baskets in graduated sizes.",
        ),
        product(
            5,
            "Vitamin C Serum",
            Category::BeautyPersonalCare,
            890,
            date(2024, 10, 21),
            "Brightening facial serum with 15% vitamin C.",
        ),
        product(
            6,
            "Smart Fitness Band",
            Category::HealthWellness,
            2400,
            date(2024, 11, 3),
            "Tracks steps, sleep, and heart rate with a week-long battery.",
        ),
        product(
            7,
            "Portable Power Bank",
            Category::ElectronicsGadgets,
            1800,
            date(2024, 11, 15),
            "20,000 mAh fast-charging power bank with dual USB ports.",
        ),
        product(
            8,
            "Ceramic Coffee Set",
            Category::HomeLiving,
            1600,
            date(2024, 11, 28),
            "Hand-glazed jebena-style coffee set for six.",
        ),
        product(
            9,
            "Aloe Face Cleanser",
            Category::BeautyPersonalCare,
            520,
            date(2024, 12, 10),
            "Gentle daily cleanser with aloe vera and green tea.",
        ),
        product(
            10,
            "Bluetooth Speaker Mini",
            Category::ElectronicsGadgets,
            2100,
            date(2025, 1, 6),
            "Pocket-sized speaker with surprisingly deep bass.",
        ),
        product(
            11,
            "Cotton Throw Blanket",
            Category::HomeLiving,
            980,
            date(2025, 1, 20),
            "Soft handloomed cotton throw with tasseled edges.",
        ),
        product(
            12,
            "Yoga Mat Plus",
            Category::HealthWellness,
            1150,
            date(2025, 2, 2),
            "Extra-thick non-slip mat with a carry strap.",
        ),
    ];

    // Variant and detail extras for a few showcase products
    if let Some(earbuds) = products.iter_mut().find(|p| p.id == ProductId::new(3)) {
        earbuds.colors = vec![
            ColorVariant {
                id: ColorId::new(1),
                name: "Black".to_owned(),
            },
            ColorVariant {
                id: ColorId::new(2),
                name: "White".to_owned(),
            },
        ];
        earbuds.details = Some(
            "Bluetooth 5.3, IPX5 splash resistance, touch controls, and a \
             USB-C charging case rated for three full recharges."
                .to_owned(),
        );
    }
    if let Some(blanket) = products.iter_mut().find(|p| p.id == ProductId::new(11)) {
        blanket.colors = vec![
            ColorVariant {
                id: ColorId::new(1),
                name: "Natural".to_owned(),
            },
            ColorVariant {
                id: ColorId::new(2),
                name: "Terracotta".to_owned(),
            },
            ColorVariant {
                id: ColorId::new(3),
                name: "Indigo".to_owned(),
            },
        ];
    }

    products
}
