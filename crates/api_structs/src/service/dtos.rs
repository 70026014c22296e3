use sparkle_domain::{CleaningService, PriceUnit, ServiceType, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDTO {
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

impl ServiceDTO {
    pub fn new(service: CleaningService) -> Self {
        Self {
            id: service.id.clone(),
            name: service.name,
            category: service.category,
            short_description: service.short_description,
            full_description: service.full_description,
            base_price: service.base_price,
            price_unit: service.price_unit,
            duration_minutes: service.duration_minutes,
            is_active: service.is_active,
            is_featured: service.is_featured,
            sort_order: service.sort_order,
            created: service.created,
            updated: service.updated,
        }
    }
}
