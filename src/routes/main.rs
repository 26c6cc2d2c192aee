use actix_web::{HttpResponse, Responder, get, web};
use tera::{Context, Tera};

use crate::repository::InMemoryRepository;
use crate::routes::render_template;
use crate::services::main::show_index as show_index_service;

#[get("/")]
pub async fn index(
    repo: web::Data<InMemoryRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_index_service(repo.get_ref()) {
        Ok((conference, talks)) => {
            let mut context = Context::new();
            context.insert("conference", &conference);
            context.insert("talks", &talks);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render index page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
