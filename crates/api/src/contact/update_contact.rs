use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::update_contact::*;
use sparkle_domain::{Contact, ContactNote, ContactStatus, Priority, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(contact_id) => SparkleError::NotFound(format!(
            "The contact with id: {}, was not found.",
            contact_id
        )),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn update_contact_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = UpdateContactUseCase {
        contact_id: path_params.contact_id.clone(),
        status: body.0.status,
        priority: body.0.priority,
        note: body.0.note,
    };

    execute(usecase, &ctx)
        .await
        .map(|contact| HttpResponse::Ok().json(APIResponse::new(contact)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateContactUseCase {
    pub contact_id: ID,
    pub status: Option<ContactStatus>,
    pub priority: Option<Priority>,
    pub note: Option<String>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateContactUseCase {
    type Response = Contact;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let mut contact = ctx
            .repos
            .contacts
            .find(&self.contact_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.contact_id.clone()))?;

        if let Some(status) = self.status {
            contact.status = status;
            // The first move into a responded status stamps the response
            // time, later transitions keep the original timestamp.
            if status.is_responded() && contact.responded_at.is_none() {
                contact.responded_at = Some(ctx.sys.get_timestamp_millis());
            }
        }
        if let Some(priority) = self.priority {
            contact.priority = priority;
        }
        if let Some(note) = &self.note {
            contact.notes.push(ContactNote {
                content: note.clone(),
                added_at: ctx.sys.get_timestamp_millis(),
            });
        }

        ctx.repos
            .contacts
            .save(&contact)
            .await
            .map(|_| contact)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sparkle_domain::{ConcernType, PreferredContact};
    use sparkle_infra::FrozenSys;
    use std::sync::Arc;

    fn contact() -> Contact {
        Contact {
            id: Default::default(),
            contact_number: "CT-20260830-001".to_string(),
            name: "Robin Lee".to_string(),
            email: "robin@example.com".to_string(),
            phone: "+12025550188".to_string(),
            concern_type: ConcernType::General,
            subject: "Question".to_string(),
            message: "Do you clean garages?".to_string(),
            preferred_contact: PreferredContact::Email,
            service_date: None,
            service_location: None,
            reference_number: None,
            status: ContactStatus::New,
            priority: Priority::Low,
            notes: Vec::new(),
            sms_sent: Default::default(),
            submitted_at: 0,
            responded_at: None,
        }
    }

    fn frozen_ctx(millis: i64) -> SparkleContext {
        let mut ctx = SparkleContext::create_inmemory();
        ctx.sys = Arc::new(FrozenSys {
            timestamp_millis: millis,
            date: chrono::NaiveDate::from_ymd_opt(2026, 8, 30).unwrap(),
        });
        ctx
    }

    #[tokio::test]
    async fn first_responded_transition_stamps_responded_at() {
        let ctx = frozen_ctx(1000);
        let c = contact();
        ctx.repos.contacts.insert(&c).await.unwrap();

        let updated = execute(
            UpdateContactUseCase {
                contact_id: c.id.clone(),
                status: Some(ContactStatus::InProgress),
                priority: None,
                note: None,
            },
            &ctx,
        )
        .await
        .unwrap();
        assert_eq!(updated.responded_at, Some(1000));

        // A later transition must not move the stamp
        let ctx2 = frozen_ctx(2000);
        ctx2.repos.contacts.insert(&updated).await.unwrap();
        let resolved = execute(
            UpdateContactUseCase {
                contact_id: updated.id.clone(),
                status: Some(ContactStatus::Resolved),
                priority: None,
                note: None,
            },
            &ctx2,
        )
        .await
        .unwrap();
        assert_eq!(resolved.responded_at, Some(1000));
    }

    #[tokio::test]
    async fn notes_accumulate_with_timestamps() {
        let ctx = frozen_ctx(500);
        let c = contact();
        ctx.repos.contacts.insert(&c).await.unwrap();

        let updated = execute(
            UpdateContactUseCase {
                contact_id: c.id.clone(),
                status: None,
                priority: Some(Priority::High),
                note: Some("Called the customer".to_string()),
            },
            &ctx,
        )
        .await
        .unwrap();

        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.notes.len(), 1);
        assert_eq!(updated.notes[0].content, "Called the customer");
        assert_eq!(updated.notes[0].added_at, 500);
    }
}
