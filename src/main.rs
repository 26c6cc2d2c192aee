use actix_files::Files;
use actix_web::{App, HttpServer, web};
use tera::Tera;

use techsummit::models::config::ServerConfig;
use techsummit::repository::seed;
use techsummit::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::load().map_err(std::io::Error::other)?;
    let repo = seed::summit_2026().map_err(std::io::Error::other)?;
    let tera = Tera::new("templates/**/*.html").map_err(std::io::Error::other)?;

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(tera.clone()))
            .configure(routes::configure)
            .service(Files::new("/static", "./static"))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
