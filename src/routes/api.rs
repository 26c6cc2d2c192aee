use actix_web::{HttpResponse, Responder, get, web};
use serde::{Deserialize, Serialize};

use crate::repository::InMemoryRepository;
use crate::services::ServiceError;
use crate::services::search::{TalkFilter, search_talks as search_talks_service};
use crate::services::speakers::list_speakers as list_speakers_service;
use crate::services::talks::list_talks as list_talks_service;

/// Query parameters accepted by the `api_search` endpoint.
#[derive(Deserialize, Debug)]
pub struct SearchQueryParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

#[derive(Serialize)]
struct ApiError<'a> {
    error: &'a str,
}

#[get("/talks")]
pub async fn api_talks(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match list_talks_service(repo.get_ref()) {
        Ok(talks) => HttpResponse::Ok().json(talks),
        Err(err) => {
            log::error!("Failed to list talks: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/speakers")]
pub async fn api_speakers(repo: web::Data<InMemoryRepository>) -> impl Responder {
    match list_speakers_service(repo.get_ref()) {
        Ok(speakers) => HttpResponse::Ok().json(speakers),
        Err(err) => {
            log::error!("Failed to list speakers: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/search")]
pub async fn api_search(
    params: web::Query<SearchQueryParams>,
    repo: web::Data<InMemoryRepository>,
) -> impl Responder {
    let filter = match TalkFilter::parse(params.q.as_deref(), params.category.as_deref()) {
        Ok(filter) => filter,
        Err(ServiceError::InvalidParameter(message)) => {
            return HttpResponse::BadRequest().json(ApiError { error: &message });
        }
        Err(err) => {
            log::error!("Failed to parse search parameters: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match search_talks_service(&filter, repo.get_ref()) {
        Ok(talks) => HttpResponse::Ok().json(talks),
        Err(err) => {
            log::error!("Failed to search talks: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
