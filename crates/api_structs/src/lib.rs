mod booking;
mod contact;
mod service;
mod status;
mod testimonial;

use serde::{Deserialize, Serialize};

pub mod dtos {
    pub use crate::booking::dtos::*;
    pub use crate::contact::dtos::*;
    pub use crate::service::dtos::*;
    pub use crate::testimonial::dtos::*;
}

pub use crate::booking::api::*;
pub use crate::contact::api::*;
pub use crate::service::api::*;
pub use crate::status::api::*;
pub use crate::testimonial::api::*;

/// Paging metadata returned next to every list response
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: i64,
}
