//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use serde_json::{json, Value};

use crate::domain::entities::{Item, Receipt};

/// Create an item
pub fn item(short_description: &str, price: &str) -> Item {
    Item {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

/// A valid receipt that earns only the retailer points
///
/// Even day, morning purchase, odd cents, one pair of non-qualifying items.
pub fn test_receipt() -> Receipt {
    Receipt {
        retailer: "Walgreens".to_string(),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "08:13".to_string(),
        items: vec![item("Pepsi - 12-oz", "1.25"), item("Coke", "1.40")],
        total: "2.65".to_string(),
    }
}

/// Reference receipt worth 28 points
pub fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

/// Reference receipt worth 109 points
pub fn m_and_m_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

/// Wire form of a receipt, as a client would submit it
pub fn receipt_json(receipt: &Receipt) -> Value {
    let items: Vec<Value> = receipt
        .items
        .iter()
        .map(|i| json!({ "shortDescription": i.short_description, "price": i.price }))
        .collect();

    json!({
        "retailer": receipt.retailer,
        "purchaseDate": receipt.purchase_date,
        "purchaseTime": receipt.purchase_time,
        "items": items,
        "total": receipt.total,
    })
}
