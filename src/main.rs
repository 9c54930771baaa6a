mod config;
mod errors;
mod handlers;
mod models;
mod store;
mod utils;

use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::info;
use std::time::Duration;

use config::Settings;
use errors::AppError;
use store::ResourceStore;

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "message": "Hello Restful!" }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let settings = web::Data::new(Settings::from_env());
    let store = web::Data::new(ResourceStore::seeded());
    let upstream = web::Data::new(
        reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build the upstream HTTP client"),
    );

    let bind_addr = settings.bind_addr.clone();
    info!("Starting server at {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(settings.clone())
            .app_data(store.clone())
            .app_data(upstream.clone())
            // malformed bodies and path parameters surface as unprocessable-entity
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                AppError::InvalidArgument(err.to_string()).into()
            }))
            .app_data(web::PathConfig::default().error_handler(|err, _req| {
                AppError::InvalidArgument(err.to_string()).into()
            }))
            .service(web::resource("/").route(web::get().to(root)))
            .service(
                web::resource("/healthz")
                    .route(web::get().to(handlers::healthz::get_healthz)),
            )
            .service(
                web::resource("/headers")
                    .route(web::get().to(handlers::inspection::get_headers)),
            )
            .service(
                web::resource("/ip")
                    .route(web::get().to(handlers::inspection::get_ip)),
            )
            .service(
                web::resource("/istio/envoy")
                    .route(web::get().to(handlers::istio::get_envoy_metadata)),
            )
            .service(
                web::resource("/status/{code}")
                    .route(web::get().to(handlers::status::return_status))
                    .route(web::post().to(handlers::status::return_status))
                    .route(web::put().to(handlers::status::return_status))
                    .route(web::patch().to(handlers::status::return_status))
                    .route(web::delete().to(handlers::status::return_status)),
            )
            .service(
                web::resource("/resource")
                    .route(web::get().to(handlers::resource::get_resources))
                    .route(web::post().to(handlers::resource::create_resource)),
            )
            .service(
                web::resource("/resource/{userid}")
                    .route(web::get().to(handlers::resource::get_resource_userid))
                    .route(web::put().to(handlers::resource::put_resource_userid))
                    .route(web::patch().to(handlers::resource::patch_resource_userid))
                    .route(web::delete().to(handlers::resource::delete_resource_userid)),
            )
    })
    .bind(&bind_addr)?
    .run()
    .await
}
