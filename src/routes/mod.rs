use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

pub mod api;
pub mod main;

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    HttpResponse::Ok().body(tera.render(template, context).unwrap_or_else(|e| {
        log::error!("Failed to render template '{template}': {e}");
        String::new()
    }))
}

/// Mount every route the application serves.
///
/// Shared between the binary and the HTTP integration tests so both run the
/// same routing table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(main::index).service(
        web::scope("/api")
            .service(api::api_talks)
            .service(api::api_speakers)
            .service(api::api_search),
    );
}
