mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use mongodb::bson::Document;
use std::io;
use std::sync::Arc;

use crate::config::Config;
use crate::services::user_service::{MongoUserStore, UserStore};

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    log::info!("🚀 Starting User Store Service...");
    log::info!(
        "📊 Database: {} / {}.{}",
        config.mongodb_uri,
        config.database,
        config.collection
    );

    let db = database::MongoDB::from_config(&config)
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string()))?;
    log::info!("✅ MongoDB connected successfully");

    let store = MongoUserStore::new(db.collection::<Document>(&config.collection))
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    let store: Arc<dyn UserStore> = Arc::new(store);

    let db_data = web::Data::new(db);
    let store_data = web::Data::from(store);

    log::info!("🌐 Server starting on {}", config.bind_addr());
    log::info!(
        "📄 OpenAPI spec at: http://{}/api-docs/openapi.json",
        config.bind_addr()
    );

    // Runs until the server receives a shutdown signal
    HttpServer::new(move || {
        App::new()
            .app_data(db_data.clone())
            .app_data(store_data.clone())
            .wrap(Logger::default())
            .route("/health", web::get().to(api::health::health_check))
            .route("/api-docs/openapi.json", web::get().to(api::swagger::openapi_json))
            .configure(api::users::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
