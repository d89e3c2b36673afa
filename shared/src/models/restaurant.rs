//! Restaurant POS Model (餐厅点单)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::Timestamp;

/// Menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Price in currency unit
    pub price: f64,
    #[serde(default = "default_true")]
    pub available: bool,
}

fn default_true() -> bool {
    true
}

/// Per-item kitchen preparation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PrepStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Served,
}

/// Overall order status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Active,
    Billed,
    Paid,
    Cancelled,
}

impl PrepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Served => "served",
        }
    }

    /// Next kitchen step, `None` once served
    pub fn next(&self) -> Option<PrepStatus> {
        match self {
            Self::Pending => Some(Self::Preparing),
            Self::Preparing => Some(Self::Ready),
            Self::Ready => Some(Self::Served),
            Self::Served => None,
        }
    }
}

impl fmt::Display for PrepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Billed => "billed",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Line id, unique within the order
    pub id: String,
    /// Menu item reference
    pub menu_item_id: String,
    /// Name snapshot
    pub name: String,
    /// Unit price snapshot
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub status: PrepStatus,
    pub note: Option<String>,
}

/// Restaurant order
///
/// `subtotal`, `tax` and `total` are derived from `items` and recomputed on
/// every item change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantOrder {
    pub id: String,
    /// Table label (dine-in)
    pub table: Option<String>,
    /// Room number when the order is charged to a guest folio
    pub room_number: Option<String>,
    /// Kitchen order ticket number
    pub kot_number: u32,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub total: f64,
    /// Tax rate in percent applied to the subtotal
    pub tax_rate: f64,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: Timestamp,
}

/// Open order payload
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderOpen {
    pub table: Option<String>,
    pub room_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_available_by_default() {
        let item: MenuItem = serde_json::from_str(
            r#"{"id":"m1","name":"Paella","category":"Mains","price":18.5}"#,
        )
        .unwrap();
        assert!(item.available);
    }

    #[test]
    fn test_prep_status_steps_in_order() {
        assert_eq!(PrepStatus::Pending.next(), Some(PrepStatus::Preparing));
        assert_eq!(PrepStatus::Ready.next(), Some(PrepStatus::Served));
        assert_eq!(PrepStatus::Served.next(), None);
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&PrepStatus::Preparing).unwrap(),
            "\"preparing\""
        );
        assert_eq!(
            serde_json::to_string(&OrderStatus::Billed).unwrap(),
            "\"billed\""
        );
    }
}
