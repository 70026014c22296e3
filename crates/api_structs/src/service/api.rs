use crate::dtos::ServiceDTO;
use crate::Pagination;
use sparkle_domain::{CleaningService, PriceUnit, ServiceType, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponse {
    pub service: ServiceDTO,
}

impl ServiceResponse {
    pub fn new(service: CleaningService) -> Self {
        Self {
            service: ServiceDTO::new(service),
        }
    }
}

pub mod get_services {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub category: Option<ServiceType>,
        pub featured: Option<bool>,
        pub page: Option<usize>,
        pub limit: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub services: Vec<ServiceDTO>,
        pub pagination: Pagination,
    }

    impl APIResponse {
        pub fn new(services: Vec<CleaningService>, pagination: Pagination) -> Self {
            Self {
                services: services.into_iter().map(ServiceDTO::new).collect(),
                pagination,
            }
        }
    }
}

pub mod get_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    pub type APIResponse = ServiceResponse;
}

pub mod create_service {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub category: ServiceType,
        pub short_description: String,
        pub full_description: String,
        pub base_price: f64,
        pub price_unit: PriceUnit,
        pub duration_minutes: i32,
        pub is_featured: Option<bool>,
        pub sort_order: Option<i32>,
    }

    pub type APIResponse = ServiceResponse;
}

pub mod update_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: Option<String>,
        pub category: Option<ServiceType>,
        pub short_description: Option<String>,
        pub full_description: Option<String>,
        pub base_price: Option<f64>,
        pub price_unit: Option<PriceUnit>,
        pub duration_minutes: Option<i32>,
        pub is_active: Option<bool>,
        pub is_featured: Option<bool>,
        pub sort_order: Option<i32>,
    }

    pub type APIResponse = ServiceResponse;
}

pub mod delete_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    pub type APIResponse = ServiceResponse;
}
