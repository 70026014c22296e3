use crate::{
    error::SparkleError,
    shared::{
        dispatch::{contact_dispatch_plan, dispatch},
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use sparkle_api_structs::submit_contact::*;
use sparkle_domain::{
    format_contact_number, format_phone_number, validate_phone_number, ConcernType, Contact,
    ContactStatus, PreferredContact, Priority, CONTACT_SEQUENCE_PREFIX,
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

pub async fn submit_contact_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    let body = body.0;
    let usecase = SubmitContactUseCase {
        name: body.name,
        email: body.email,
        phone: body.phone,
        concern_type: body.concern_type,
        subject: body.subject,
        message: body.message,
        preferred_contact: body.preferred_contact,
        service_date: body.service_date,
        service_location: body.service_location,
        reference_number: body.reference_number,
        priority: body.priority,
    };

    execute(usecase, &ctx)
        .await
        .map(|contact| HttpResponse::Created().json(APIResponse::new(contact)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct SubmitContactUseCase {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub concern_type: ConcernType,
    pub subject: String,
    pub message: String,
    pub preferred_contact: Option<PreferredContact>,
    pub service_date: Option<NaiveDate>,
    pub service_location: Option<String>,
    pub reference_number: Option<String>,
    pub priority: Option<Priority>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    InvalidPhoneNumber(String),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubmitContactUseCase {
    type Response = Contact;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        if !validate_phone_number(&self.phone) {
            return Err(UseCaseErrors::InvalidPhoneNumber(self.phone.clone()));
        }

        let day = ctx.sys.today();
        let seq = ctx
            .repos
            .sequences
            .next(CONTACT_SEQUENCE_PREFIX, day)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let mut contact = Contact {
            id: Default::default(),
            contact_number: format_contact_number(day, seq),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: format_phone_number(&self.phone),
            concern_type: self.concern_type,
            subject: self.subject.clone(),
            message: self.message.clone(),
            preferred_contact: self.preferred_contact.unwrap_or(PreferredContact::Email),
            service_date: self.service_date,
            service_location: self.service_location.clone(),
            reference_number: self.reference_number.clone(),
            status: ContactStatus::New,
            priority: self
                .priority
                .unwrap_or_else(|| self.concern_type.default_priority()),
            notes: Vec::new(),
            sms_sent: Default::default(),
            submitted_at: ctx.sys.get_timestamp_millis(),
            responded_at: None,
        };

        ctx.repos
            .contacts
            .insert(&contact)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        let outcome = dispatch(contact_dispatch_plan(&contact, ctx), ctx).await;
        contact.sms_sent = outcome.sms_sent;
        ctx.repos
            .contacts
            .update_notification_flags(&contact.id, outcome.sms_sent)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(contact)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sparkle_infra::{FrozenSys, StubEmailTransport, StubSmsTransport};
    use std::sync::Arc;

    fn usecase(concern_type: ConcernType) -> SubmitContactUseCase {
        SubmitContactUseCase {
            name: "Robin Lee".to_string(),
            email: "robin@example.com".to_string(),
            phone: "2025550188".to_string(),
            concern_type,
            subject: "Missed corner".to_string(),
            message: "The hallway was skipped on the last visit.".to_string(),
            preferred_contact: None,
            service_date: None,
            service_location: None,
            reference_number: None,
            priority: None,
        }
    }

    fn test_ctx() -> (SparkleContext, Arc<StubSmsTransport>) {
        let sms = Arc::new(StubSmsTransport::new());
        let email = Arc::new(StubEmailTransport::new());
        let mut ctx = SparkleContext::create_inmemory_with_transports(sms.clone(), email);
        ctx.config.admin_phone = Some("+15550000000".to_string());
        ctx.sys = Arc::new(FrozenSys {
            timestamp_millis: 1_788_000_000_000,
            date: NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        });
        (ctx, sms)
    }

    #[tokio::test]
    async fn allocates_contact_numbers_in_their_own_sequence() {
        let (ctx, _sms) = test_ctx();

        let first = execute(usecase(ConcernType::General), &ctx).await.unwrap();
        let second = execute(usecase(ConcernType::General), &ctx).await.unwrap();

        assert_eq!(first.contact_number, "CT-20260830-001");
        assert_eq!(second.contact_number, "CT-20260830-002");
    }

    #[tokio::test]
    async fn priority_defaults_from_concern_type() {
        let (ctx, _sms) = test_ctx();

        let complaint = execute(usecase(ConcernType::Complaint), &ctx).await.unwrap();
        let feedback = execute(usecase(ConcernType::Feedback), &ctx).await.unwrap();

        assert_eq!(complaint.priority, Priority::High);
        assert_eq!(feedback.priority, Priority::Medium);
    }

    #[tokio::test]
    async fn admin_is_always_texted_customer_only_when_it_applies() {
        let (ctx, sms) = test_ctx();

        let general = execute(usecase(ConcernType::General), &ctx).await.unwrap();
        assert!(general.sms_sent.admin);
        assert!(!general.sms_sent.customer);

        let complaint = execute(usecase(ConcernType::Complaint), &ctx).await.unwrap();
        assert!(complaint.sms_sent.admin);
        assert!(complaint.sms_sent.customer);

        assert_eq!(sms.sent_to("+15550000000").len(), 2);
        assert_eq!(sms.sent_to("+12025550188").len(), 1);
    }

    #[tokio::test]
    async fn phone_preference_triggers_customer_sms() {
        let (ctx, sms) = test_ctx();

        let mut u = usecase(ConcernType::General);
        u.preferred_contact = Some(PreferredContact::Phone);
        let contact = execute(u, &ctx).await.unwrap();

        assert!(contact.sms_sent.customer);
        assert_eq!(sms.sent_to("+12025550188").len(), 1);
    }
}
