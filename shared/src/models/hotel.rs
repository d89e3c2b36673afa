//! Hotel / Room Type / Rate Plan Model

use serde::{Deserialize, Serialize};

/// Rate plan (价格方案), owned by its room type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomPlan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Price per room per night before discount
    pub original_price: f64,
    /// Price per room per night after discount, if any
    pub discounted_price: Option<f64>,
    /// Taxes per room per night
    #[serde(default)]
    pub taxes: f64,
    /// Free cancellation allowed
    #[serde(default)]
    pub free_cancellation: bool,
}

impl RoomPlan {
    /// Nightly price actually charged (discounted if present)
    pub fn nightly_price(&self) -> f64 {
        self.discounted_price.unwrap_or(self.original_price)
    }
}

/// Room type (房型)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: String,
    pub name: String,
    /// Size in square meters
    pub size: Option<f64>,
    pub view: Option<String>,
    pub bed_type: Option<String>,
    #[serde(default = "default_one")]
    pub bed_count: u32,
    #[serde(default = "default_one")]
    pub bathrooms: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Ordered price tiers
    #[serde(default)]
    pub plans: Vec<RoomPlan>,
    /// Number of sellable rooms of this type (used for availability)
    #[serde(default)]
    pub total_rooms: u32,
}

impl RoomType {
    pub fn plan(&self, plan_id: &str) -> Option<&RoomPlan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }
}

fn default_one() -> u32 {
    1
}

/// Hotel entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub location: String,
    /// Category / star rating label
    pub category: String,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
}

impl Hotel {
    pub fn room_type(&self, room_type_id: &str) -> Option<&RoomType> {
        self.room_types.iter().find(|rt| rt.id == room_type_id)
    }
}
