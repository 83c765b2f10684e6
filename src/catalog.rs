//! Read-only mock catalog.
//!
//! Products are built once into a static table and never mutated. Screens
//! and the assistant only ever hold clones of catalog entries.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

const FRUIT_AND_VEG: &str = "Frutas y Verduras";

// =============================================================================
// PRODUCT
// =============================================================================

/// A discounted listing shown to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub original_price: f64,
    pub image: String,
    pub stock: u32,
    /// Human-readable label, e.g. "Vence en 18 horas".
    pub expiry_label: String,
    pub shop_name: String,
    pub shop_hours: String,
}

impl Product {
    /// Whole-percent discount off the original price, 0 when there is none.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn discount_percent(&self) -> u32 {
        if self.original_price <= 0.0 || self.price >= self.original_price {
            return 0;
        }
        let ratio = 1.0 - self.price / self.original_price;
        (ratio * 100.0).round() as u32
    }

    /// Stock unit wording used on the consumer feed.
    #[must_use]
    pub fn unit_label(&self) -> &'static str {
        if self.stock == 1 {
            "unidad"
        } else if self.category == FRUIT_AND_VEG {
            "manojos disponibles"
        } else {
            "unidades"
        }
    }
}

// =============================================================================
// VENDOR ALERTS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertStatus {
    ExpiringSoon,
    Expired,
}

/// An entry on the vendor's expiry dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct VendorAlert {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub status: AlertStatus,
    pub status_label: &'static str,
}

// =============================================================================
// TABLES
// =============================================================================

struct Row {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: &'static str,
    price: f64,
    original_price: f64,
    image: &'static str,
    stock: u32,
    expiry_label: &'static str,
    shop_name: &'static str,
    shop_hours: &'static str,
}

const PRODUCT_ROWS: [Row; 4] = [
    Row {
        id: "1",
        name: "Yogurt Griego Natural",
        description: "Yogurt griego natural, rico en proteínas. Ideal para el desayuno.",
        category: "Lácteos y Huevos",
        price: 2.00,
        original_price: 4.50,
        image: "https://images.unsplash.com/photo-1488477181946-6428a0291777?q=80&w=600&auto=format&fit=crop",
        stock: 8,
        expiry_label: "Vence en 18 horas",
        shop_name: "Supermercado Central",
        shop_hours: "Hoy, 09:00 - 21:00",
    },
    Row {
        id: "2",
        name: "Plátanos Orgánicos",
        description: "Plátanos maduros perfectos para repostería o batidos.",
        category: FRUIT_AND_VEG,
        price: 1.50,
        original_price: 3.00,
        image: "https://images.unsplash.com/photo-1528825871115-3581a5387919?q=80&w=600&auto=format&fit=crop",
        stock: 3,
        expiry_label: "Vence en 1 día",
        shop_name: "Frutería Manolo",
        shop_hours: "Hoy, 08:00 - 20:00",
    },
    Row {
        id: "3",
        name: "Pan de Molde Integral",
        description: "Pan de molde 100% integral, horneado esta mañana.",
        category: "Panadería",
        price: 1.00,
        original_price: 2.50,
        image: "https://images.unsplash.com/photo-1509440159596-0249088772ff?q=80&w=600&auto=format&fit=crop",
        stock: 1,
        expiry_label: "Vence en 2 días",
        shop_name: "Panadería La Espiga",
        shop_hours: "Hoy, 07:00 - 19:00",
    },
    Row {
        id: "4",
        name: "Pan Artesanal de Masa Madre",
        description: "Hogaza recién horneada, perfecta para tostadas o sándwiches. Elaborada con ingredientes \
                      orgánicos y un proceso de fermentación lenta.",
        category: "Panadería",
        price: 2.50,
        original_price: 5.00,
        image: "https://images.unsplash.com/photo-1585476290138-0c6e94560d06?q=80&w=600&auto=format&fit=crop",
        stock: 3,
        expiry_label: "25 Oct 2024, 20:00h",
        shop_name: "Frutería Manolo",
        shop_hours: "Hoy, 18:00 - 19:00",
    },
];

static VENDOR_ALERTS: [VendorAlert; 3] = [
    VendorAlert {
        id: "101",
        name: "Croissants de Mantequilla",
        category: "Panadería",
        image: "https://images.unsplash.com/photo-1555507036-ab1f4038808a?q=80&w=200&auto=format&fit=crop",
        status: AlertStatus::ExpiringSoon,
        status_label: "Vence en 3 días",
    },
    VendorAlert {
        id: "102",
        name: "Yogur Griego Natural",
        category: "Lácteos y Huevos",
        image: "https://images.unsplash.com/photo-1488477181946-6428a0291777?q=80&w=200&auto=format&fit=crop",
        status: AlertStatus::ExpiringSoon,
        status_label: "Vence en 5 días",
    },
    VendorAlert {
        id: "201",
        name: "Ensalada César con Pollo",
        category: "Comidas Preparadas",
        image: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?q=80&w=200&auto=format&fit=crop",
        status: AlertStatus::Expired,
        status_label: "Venció ayer",
    },
];

// =============================================================================
// LOOKUPS
// =============================================================================

/// Every product on the consumer feed, in display order.
#[must_use]
pub fn products() -> &'static [Product] {
    static PRODUCTS: OnceLock<Vec<Product>> = OnceLock::new();
    PRODUCTS.get_or_init(|| {
        PRODUCT_ROWS
            .iter()
            .map(|row| Product {
                id: row.id.into(),
                name: row.name.into(),
                description: row.description.into(),
                category: row.category.into(),
                price: row.price,
                original_price: row.original_price,
                image: row.image.into(),
                stock: row.stock,
                expiry_label: row.expiry_label.into(),
                shop_name: row.shop_name.into(),
                shop_hours: row.shop_hours.into(),
            })
            .collect()
    })
}

#[must_use]
pub fn find_product(id: &str) -> Option<&'static Product> {
    products().iter().find(|p| p.id == id)
}

/// Vendor dashboard entries with the given status.
pub fn vendor_alerts(status: AlertStatus) -> impl Iterator<Item = &'static VendorAlert> {
    VENDOR_ALERTS.iter().filter(move |a| a.status == status)
}
