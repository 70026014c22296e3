use crate::{
    error::SparkleError,
    shared::{
        dispatch::{booking_dispatch_plan, dispatch},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use sparkle_api_structs::create_booking::*;
use sparkle_domain::{
    format_booking_number, format_phone_number, validate_phone_number, Booking, BookingStatus,
    PreferredTime, ServiceType, BOOKING_SEQUENCE_PREFIX,
};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::InvalidPhoneNumber(phone) => SparkleError::BadClientData(format!(
            "The phone number: {} is not a valid phone number.",
            phone
        )),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn create_booking_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    let body = body.0;
    let usecase = CreateBookingUseCase {
        contact_name: body.contact_name,
        contact_email: body.contact_email,
        contact_phone: body.contact_phone,
        service_type: body.service_type,
        package_type: body.package_type,
        address: body.address,
        preferred_date: body.preferred_date,
        preferred_time: body.preferred_time,
        notes: body.notes,
    };

    execute(usecase, &ctx)
        .await
        .map(|booking| HttpResponse::Created().json(APIResponse::new(booking)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateBookingUseCase {
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

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidPhoneNumber(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateBookingUseCase {
    type Response = Booking;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        if !validate_phone_number(&self.contact_phone) {
            return Err(UseCaseErrors::InvalidPhoneNumber(self.contact_phone.clone()));
        }

        let day = ctx.sys.today();
        let seq = ctx
            .repos
            .sequences
            .next(BOOKING_SEQUENCE_PREFIX, day)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let mut booking = Booking {
            id: Default::default(),
            booking_number: format_booking_number(day, seq),
            contact_name: self.contact_name.clone(),
            contact_email: self.contact_email.clone(),
            contact_phone: format_phone_number(&self.contact_phone),
            service_type: self.service_type,
            package_type: self.package_type.clone(),
            address: self.address.clone(),
            preferred_date: self.preferred_date,
            preferred_time: self.preferred_time,
            notes: self.notes.clone(),
            status: BookingStatus::Pending,
            admin_notes: None,
            email_sent: Default::default(),
            sms_sent: Default::default(),
            submitted_at: ctx.sys.get_timestamp_millis(),
        };

        ctx.repos
            .bookings
            .insert(&booking)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        // Delivery is best effort. Whatever subset of channels went
        // through is recorded in one flag write, the booking itself was
        // already accepted.
        let outcome = dispatch(booking_dispatch_plan(&booking, ctx), ctx).await;
        booking.email_sent = outcome.email_sent;
        booking.sms_sent = outcome.sms_sent;
        ctx.repos
            .bookings
            .update_notification_flags(&booking.id, outcome.email_sent, outcome.sms_sent)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(booking)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sparkle_infra::{FrozenSys, StubEmailTransport, StubSmsTransport};
    use std::sync::Arc;

    fn usecase(phone: &str, service_type: ServiceType) -> CreateBookingUseCase {
        CreateBookingUseCase {
            contact_name: "Dana".to_string(),
            contact_email: "dana@example.com".to_string(),
            contact_phone: phone.to_string(),
            service_type,
            package_type: None,
            address: "12 Main St".to_string(),
            preferred_date: NaiveDate::from_ymd_opt(2026, 9, 4).unwrap(),
            preferred_time: PreferredTime::Morning,
            notes: None,
        }
    }

    fn test_ctx() -> (SparkleContext, Arc<StubSmsTransport>, Arc<StubEmailTransport>) {
        let sms = Arc::new(StubSmsTransport::new());
        let email = Arc::new(StubEmailTransport::new());
        let mut ctx =
            SparkleContext::create_inmemory_with_transports(sms.clone(), email.clone());
        ctx.config.admin_phone = Some("+15550000000".to_string());
        ctx.config.admin_email = Some("admin@example.com".to_string());
        ctx.sys = Arc::new(FrozenSys {
            timestamp_millis: 1_788_000_000_000,
            date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        });
        (ctx, sms, email)
    }

    #[tokio::test]
    async fn allocates_sequential_booking_numbers() {
        let (ctx, _sms, _email) = test_ctx();

        let first = execute(usecase("5552230001", ServiceType::Residential), &ctx)
            .await
            .unwrap();
        let second = execute(usecase("5552230002", ServiceType::Residential), &ctx)
            .await
            .unwrap();

        assert_eq!(first.booking_number, "BK2608300001");
        assert_eq!(second.booking_number, "BK2608300002");
    }

    #[tokio::test]
    async fn normalizes_phone_and_persists_booking() {
        let (ctx, _sms, _email) = test_ctx();

        let booking = execute(usecase("(555) 223-0001", ServiceType::Airbnb), &ctx)
            .await
            .unwrap();

        assert_eq!(booking.contact_phone, "+15552230001");
        assert_eq!(booking.status, BookingStatus::Pending);
        let stored = ctx.repos.bookings.find(&booking.id).await.unwrap();
        assert_eq!(stored.booking_number, booking.booking_number);
    }

    #[tokio::test]
    async fn rejects_invalid_phone_number() {
        let (ctx, _sms, _email) = test_ctx();

        let res = execute(usecase("12", ServiceType::Residential), &ctx).await;
        assert!(matches!(res, Err(UseCaseErrors::InvalidPhoneNumber(_))));
    }

    #[tokio::test]
    async fn delivery_flags_are_persisted_with_the_booking() {
        let (ctx, sms, _email) = test_ctx();
        sms.fail_for("+15550000000");

        let booking = execute(usecase("5552230001", ServiceType::Commercial), &ctx)
            .await
            .unwrap();

        assert!(!booking.sms_sent.admin);
        assert!(booking.sms_sent.customer);
        assert!(booking.email_sent.admin);
        let stored = ctx.repos.bookings.find(&booking.id).await.unwrap();
        assert!(!stored.sms_sent.admin);
        assert!(stored.sms_sent.customer);
    }
}
