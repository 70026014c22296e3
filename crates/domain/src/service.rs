use crate::booking::ServiceType;
use crate::shared::entity::{Entity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceUnit {
    Fixed,
    PerHour,
    PerSqft,
    PerRoom,
    Custom,
}

impl PriceUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::PerHour => "per_hour",
            Self::PerSqft => "per_sqft",
            Self::PerRoom => "per_room",
            Self::Custom => "custom",
        }
    }
}

/// An offering in the service catalog that customers can book.
/// Not to be confused with a `Booking`, which is a customer's request
/// for one of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CleaningService {
    pub id: ID,
    pub name: String,
    pub category: ServiceType,
    pub short_description: String,
    pub full_description: String,
    pub base_price: f64,
    pub price_unit: PriceUnit,
    pub duration_minutes: i32,
    pub is_active: bool,
    pub is_featured: bool,
    pub sort_order: i32,
    pub created: i64,
    pub updated: i64,
}

impl CleaningService {
    pub fn new(name: String, category: ServiceType, now: i64) -> Self {
        Self {
            id: Default::default(),
            name,
            category,
            short_description: String::new(),
            full_description: String::new(),
            base_price: 0.0,
            price_unit: PriceUnit::Fixed,
            duration_minutes: 60,
            is_active: true,
            is_featured: false,
            sort_order: 0,
            created: now,
            updated: now,
        }
    }
}

impl Entity<ID> for CleaningService {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
