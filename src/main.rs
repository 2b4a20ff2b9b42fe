use std::env;
use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::info;
use sqlx::mysql::MySqlPoolOptions;

mod auth;
mod email;
mod models;
mod routes;

use email::{ConsoleEmailProvider, EmailProvider};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = MySqlPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to create pool");

    let mailer: Arc<dyn EmailProvider> = Arc::new(ConsoleEmailProvider);

    let server_address = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    info!("Server running at http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::from(mailer.clone()))
            .route("/", web::get().to(|| async { HttpResponse::Ok().body("Hello, world!") }))
            .configure(routes::routes::login_configure)
            .configure(routes::routes::groups_configure)
            .configure(routes::routes::invites_configure)
            .configure(routes::routes::ledger_configure)
    })
    .bind(server_address)?
    .run()
    .await
}
