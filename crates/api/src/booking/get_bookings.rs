use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
        DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::NaiveDate;
use sparkle_api_structs::get_bookings::*;
use sparkle_api_structs::Pagination;
use sparkle_domain::{Booking, BookingStatus, ServiceType};
use sparkle_infra::{BookingQuery, SparkleContext};

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn get_bookings_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let params = query_params.0;
    let usecase = GetBookingsUseCase {
        status: params.status,
        service_type: params.service_type,
        from_date: params.from_date,
        to_date: params.to_date,
        page: params.page.unwrap_or(1).max(1),
        limit: params
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.bookings, res.pagination)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetBookingsUseCase {
    pub status: Option<BookingStatus>,
    pub service_type: Option<ServiceType>,
    pub from_date: Option<NaiveDate>,
    pub to_date: Option<NaiveDate>,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub bookings: Vec<Booking>,
    pub pagination: Pagination,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetBookingsUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let query = BookingQuery {
            status: self.status,
            service_type: self.service_type,
            from_date: self.from_date,
            to_date: self.to_date,
            skip: (self.page - 1) * self.limit,
            limit: self.limit,
        };

        let total = ctx
            .repos
            .bookings
            .count_by_query(query.clone())
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let bookings = ctx
            .repos
            .bookings
            .find_by_query(query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(UseCaseResponse {
            bookings,
            pagination: Pagination {
                page: self.page,
                limit: self.limit,
                total,
            },
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sparkle_domain::PreferredTime;

    fn booking(status: BookingStatus, date: NaiveDate) -> Booking {
        Booking {
            id: Default::default(),
            booking_number: format!("BK-{}", uuid()),
            contact_name: "Dana".to_string(),
            contact_email: "dana@example.com".to_string(),
            contact_phone: "+15552230001".to_string(),
            service_type: ServiceType::Residential,
            package_type: None,
            address: "12 Main St".to_string(),
            preferred_date: date,
            preferred_time: PreferredTime::Morning,
            notes: None,
            status,
            admin_notes: None,
            email_sent: Default::default(),
            sms_sent: Default::default(),
            submitted_at: 0,
        }
    }

    fn uuid() -> String {
        sparkle_domain::ID::default().to_string()
    }

    #[tokio::test]
    async fn filters_by_status_and_date_window() {
        let ctx = SparkleContext::create_inmemory();
        let day = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2026, 9, 20).unwrap();
        for b in [
            booking(BookingStatus::Pending, day),
            booking(BookingStatus::Confirmed, day),
            booking(BookingStatus::Pending, later),
        ] {
            ctx.repos.bookings.insert(&b).await.unwrap();
        }

        let usecase = GetBookingsUseCase {
            status: Some(BookingStatus::Pending),
            service_type: None,
            from_date: None,
            to_date: Some(NaiveDate::from_ymd_opt(2026, 9, 10).unwrap()),
            page: 1,
            limit: 20,
        };
        let res = execute(usecase, &ctx).await.unwrap();

        assert_eq!(res.bookings.len(), 1);
        assert_eq!(res.pagination.total, 1);
        assert_eq!(res.bookings[0].status, BookingStatus::Pending);
    }

    #[tokio::test]
    async fn paginates_with_total_count() {
        let ctx = SparkleContext::create_inmemory();
        let day = NaiveDate::from_ymd_opt(2026, 9, 1).unwrap();
        for _ in 0..5 {
            ctx.repos
                .bookings
                .insert(&booking(BookingStatus::Pending, day))
                .await
                .unwrap();
        }

        let usecase = GetBookingsUseCase {
            status: None,
            service_type: None,
            from_date: None,
            to_date: None,
            page: 2,
            limit: 2,
        };
        let res = execute(usecase, &ctx).await.unwrap();

        assert_eq!(res.bookings.len(), 2);
        assert_eq!(res.pagination.total, 5);
        assert_eq!(res.pagination.page, 2);
    }
}
