use crate::{
    error::SparkleError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use sparkle_api_structs::submit_testimonial::*;
use sparkle_domain::{
    InvalidTestimonialError, ServiceType, Testimonial, TestimonialSource,
};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::Invalid(e) => SparkleError::BadClientData(e.to_string()),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn submit_testimonial_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    let body = body.0;
    let usecase = SubmitTestimonialUseCase {
        name: body.name,
        rating: body.rating,
        text: body.text,
        location: body.location,
        service_type: body.service_type,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| {
            HttpResponse::Created().json(APIResponse {
                message: "Thank you for your review! It will appear on our site once approved."
                    .to_string(),
            })
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct SubmitTestimonialUseCase {
    pub name: String,
    pub rating: i32,
    pub text: String,
    pub location: Option<String>,
    pub service_type: Option<ServiceType>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    Invalid(InvalidTestimonialError),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SubmitTestimonialUseCase {
    type Response = Testimonial;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let now = ctx.sys.get_timestamp_millis();
        // Website submissions always wait for moderation before they can
        // appear anywhere public.
        let testimonial = Testimonial {
            id: Default::default(),
            name: self.name.clone(),
            rating: self.rating,
            text: self.text.clone(),
            location: self.location.clone().unwrap_or_default(),
            service_type: self.service_type.unwrap_or(ServiceType::Residential),
            source: TestimonialSource::Website,
            is_active: false,
            is_approved: false,
            is_featured: false,
            sort_order: 0,
            created: now,
            updated: now,
        };
        testimonial.validate().map_err(UseCaseErrors::Invalid)?;

        ctx.repos
            .testimonials
            .insert(&testimonial)
            .await
            .map(|_| testimonial)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sparkle_infra::TestimonialQuery;

    fn usecase(rating: i32) -> SubmitTestimonialUseCase {
        SubmitTestimonialUseCase {
            name: "Sam".to_string(),
            rating,
            text: "Spotless result, friendly crew.".to_string(),
            location: Some("Riverside".to_string()),
            service_type: None,
        }
    }

    #[tokio::test]
    async fn public_submissions_await_moderation() {
        let ctx = SparkleContext::create_inmemory();

        let t = execute(usecase(5), &ctx).await.unwrap();
        assert!(!t.is_approved);
        assert!(!t.is_active);

        let published = ctx
            .repos
            .testimonials
            .find_by_query(TestimonialQuery {
                published_only: true,
                limit: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(published.is_empty());
    }

    #[tokio::test]
    async fn out_of_range_rating_is_rejected() {
        let ctx = SparkleContext::create_inmemory();
        assert!(matches!(
            execute(usecase(0), &ctx).await,
            Err(UseCaseErrors::Invalid(
                InvalidTestimonialError::RatingOutOfRange(0)
            ))
        ));
        assert!(matches!(
            execute(usecase(6), &ctx).await,
            Err(UseCaseErrors::Invalid(
                InvalidTestimonialError::RatingOutOfRange(6)
            ))
        ));
    }
}
