use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::approve_testimonial::*;
use sparkle_domain::{Testimonial, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(testimonial_id) => SparkleError::NotFound(format!(
            "The testimonial with id: {}, was not found.",
            testimonial_id
        )),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn approve_testimonial_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let usecase = ApproveTestimonialUseCase {
        testimonial_id: path_params.testimonial_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|testimonial| HttpResponse::Ok().json(APIResponse::new(testimonial)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct ApproveTestimonialUseCase {
    pub testimonial_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for ApproveTestimonialUseCase {
    type Response = Testimonial;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let mut testimonial = ctx
            .repos
            .testimonials
            .find(&self.testimonial_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.testimonial_id.clone()))?;

        testimonial.is_approved = true;
        testimonial.is_active = true;
        testimonial.updated = ctx.sys.get_timestamp_millis();

        ctx.repos
            .testimonials
            .save(&testimonial)
            .await
            .map(|_| testimonial)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sparkle_domain::{ServiceType, TestimonialSource};
    use sparkle_infra::TestimonialQuery;

    #[tokio::test]
    async fn approval_publishes_a_pending_submission() {
        let ctx = SparkleContext::create_inmemory();
        let pending = Testimonial {
            id: Default::default(),
            name: "Sam".to_string(),
            rating: 5,
            text: "Great service".to_string(),
            location: "Riverside".to_string(),
            service_type: ServiceType::Residential,
            source: TestimonialSource::Website,
            is_active: false,
            is_approved: false,
            is_featured: false,
            sort_order: 0,
            created: 0,
            updated: 0,
        };
        ctx.repos.testimonials.insert(&pending).await.unwrap();

        let approved = execute(
            ApproveTestimonialUseCase {
                testimonial_id: pending.id.clone(),
            },
            &ctx,
        )
        .await
        .unwrap();
        assert!(approved.is_published());

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
        assert_eq!(published.len(), 1);
    }
}
