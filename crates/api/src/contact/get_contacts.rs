use crate::{
    error::SparkleError,
    shared::{
        auth::protect_admin_route,
        usecase::{execute, UseCase},
        DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
    },
};
use actix_web::{web, HttpRequest, HttpResponse};
use sparkle_api_structs::get_contacts::*;
use sparkle_api_structs::Pagination;
use sparkle_domain::{ConcernType, Contact, ContactStatus, Priority};
use sparkle_infra::{ContactQuery, SparkleContext};

fn handle_error(e: UseCaseErrors) -> SparkleError {
    match e {
        UseCaseErrors::StorageError => SparkleError::InternalError,
    }
}

pub async fn get_contacts_controller(
    http_req: HttpRequest,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<SparkleContext>,
) -> Result<HttpResponse, SparkleError> {
    protect_admin_route(&http_req, &ctx)?;

    let params = query_params.0;
    let usecase = GetContactsUseCase {
        status: params.status,
        concern_type: params.concern_type,
        priority: params.priority,
        page: params.page.unwrap_or(1).max(1),
        limit: params
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE),
    };

    execute(usecase, &ctx)
        .await
        .map(|res| HttpResponse::Ok().json(APIResponse::new(res.contacts, res.pagination)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetContactsUseCase {
    pub status: Option<ContactStatus>,
    pub concern_type: Option<ConcernType>,
    pub priority: Option<Priority>,
    pub page: usize,
    pub limit: usize,
}

#[derive(Debug)]
pub struct UseCaseResponse {
    pub contacts: Vec<Contact>,
    pub pagination: Pagination,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetContactsUseCase {
    type Response = UseCaseResponse;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &SparkleContext) -> Result<Self::Response, Self::Errors> {
        let query = ContactQuery {
            status: self.status,
            concern_type: self.concern_type,
            priority: self.priority,
            skip: (self.page - 1) * self.limit,
            limit: self.limit,
        };

        let total = ctx
            .repos
            .contacts
            .count_by_query(query.clone())
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        let contacts = ctx
            .repos
            .contacts
            .find_by_query(query)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        Ok(UseCaseResponse {
            contacts,
            pagination: Pagination {
                page: self.page,
                limit: self.limit,
                total,
            },
        })
    }
}
