use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::update_testimonial::*;
use sparkle_domain::{InvalidTestimonialError, ServiceType, Testimonial, ID};
use sparkle_infra::SparkleContext;

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::NotFound(testimonial_id) => SparkleError::NotFound(format!(
            "The testimonial with id: {}, was not found.",
            testimonial_id
        )),
        UseCaseErrors::Invalid(e) => SparkleError::BadClientData(e.to_string()),
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn update_testimonial_controller(
    http_req: HttpRequest,
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let body = body.0;
    let usecase = UpdateTestimonialUseCase {
        testimonial_id: path_params.testimonial_id.clone(),
        name: body.name,
        rating: body.rating,
        text: body.text,
        location: body.location,
        service_type: body.service_type,
        is_active: body.is_active,
        sort_order: body.sort_order,
    };

    execute(usecase, &ctx)
        .await
        .map(|testimonial| HttpResponse::Ok().json(APIResponse::new(testimonial)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateTestimonialUseCase {
    pub testimonial_id: ID,
    pub name: Option<String>,
    pub rating: Option<i32>,
    pub text: Option<String>,
    pub location: Option<String>,
    pub service_type: Option<ServiceType>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    Invalid(InvalidTestimonialError),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateTestimonialUseCase {
    type Response = Testimonial;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let mut testimonial = ctx
            .repos
            .testimonials
            .find(&self.testimonial_id)
            .await
            .ok_or_else(|| UseCaseErrors::NotFound(self.testimonial_id.clone()))?;

        if let Some(name) = &self.name {
            testimonial.name = name.clone();
        }
        if let Some(rating) = self.rating {
            testimonial.rating = rating;
        }
        if let Some(text) = &self.text {
            testimonial.text = text.clone();
        }
        if let Some(location) = &self.location {
            testimonial.location = location.clone();
        }
        if let Some(service_type) = self.service_type {
            testimonial.service_type = service_type;
        }
        if let Some(is_active) = self.is_active {
            testimonial.is_active = is_active;
        }
        if let Some(sort_order) = self.sort_order {
            testimonial.sort_order = sort_order;
        }
        testimonial.updated = ctx.sys.get_timestamp_millis();
        testimonial.validate().map_err(UseCaseErrors::Invalid)?;

        ctx.repos
            .testimonials
            .save(&testimonial)
            .await
            .map(|_| testimonial)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
