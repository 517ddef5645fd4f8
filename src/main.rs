mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod slots;
mod upstream;

use actix_web::{App, HttpServer, web};
use dotenv::dotenv;

use crate::config::Config;
use crate::upstream::client::SlotServiceClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let config = Config::from_env()?;
    let client = web::Data::new(SlotServiceClient::new(config.slot_service_base_url));

    tracing::info!("Listening on {}", config.bind_addr);

    HttpServer::new(move || App::new().app_data(client.clone()).configure(routes::init))
        .bind(config.bind_addr.as_str())?
        .run()
        .await?;

    Ok(())
}
