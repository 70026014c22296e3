use crate::dtos::{BookingDTO, BookingDisplayDTO};
use crate::Pagination;
use chrono::NaiveDate;
use sparkle_domain::{Booking, BookingStatus, PreferredTime, ServiceType, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking: BookingDTO,
}

impl BookingResponse {
    pub fn new(booking: Booking) -> Self {
        Self {
            booking: BookingDTO::new(booking),
        }
    }
}

pub mod create_booking {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub contact_name: String,
        pub contact_email: String,
        pub contact_phone: String,
        pub service_type: ServiceType,
        pub package_type: Option<String>,
        pub address: String,
        pub preferred_date: NaiveDate,
        pub preferred_time: PreferredTime,
        pub notes: Option<String>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        pub booking: BookingDisplayDTO,
    }

    impl APIResponse {
        pub fn new(booking: Booking) -> Self {
            Self {
                message: format!(
                    "Booking received. Your booking number is {}.",
                    booking.booking_number
                ),
                booking: BookingDisplayDTO::new(booking),
            }
        }
    }
}

pub mod get_bookings {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub status: Option<BookingStatus>,
        pub service_type: Option<ServiceType>,
        pub from_date: Option<NaiveDate>,
        pub to_date: Option<NaiveDate>,
        pub page: Option<usize>,
        pub limit: Option<usize>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub bookings: Vec<BookingDTO>,
        pub pagination: Pagination,
    }

    impl APIResponse {
        pub fn new(bookings: Vec<Booking>, pagination: Pagination) -> Self {
            Self {
                bookings: bookings.into_iter().map(BookingDTO::new).collect(),
                pagination,
            }
        }
    }
}

pub mod get_booking {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}

pub mod update_booking {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub status: Option<BookingStatus>,
        pub admin_notes: Option<String>,
    }

    pub type APIResponse = BookingResponse;
}

pub mod cancel_booking {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}

pub mod delete_booking {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub booking_id: ID,
    }

    pub type APIResponse = BookingResponse;
}
