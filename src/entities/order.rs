//! Order history entries for the review-form page.

use crate::entities::product::{ProductId, format_cents};

pub type OrderId = u64;

/// A past order as shown on the order-history page. Each entry carries a
/// collapsible review form; the open/closed flag lives in app state.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: OrderId,
    pub product: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub total_cents: u64,
    pub placed_on: String,
}

impl Order {
    pub fn total_label(&self) -> String {
        format_cents(self.total_cents)
    }

    /// Demo order history shown when the app starts fresh.
    pub fn demo_history() -> Vec<Order> {
        vec![
            Order {
                id: 101,
                product: 1,
                product_name: "Trail Runner X".to_string(),
                quantity: 1,
                total_cents: 8999,
                placed_on: "2026-07-30".to_string(),
            },
            Order {
                id: 102,
                product: 4,
                product_name: "Thermos Flask 750".to_string(),
                quantity: 2,
                total_cents: 5750,
                placed_on: "2026-08-11".to_string(),
            },
        ]
    }
}
