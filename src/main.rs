use std::net::TcpListener;

use anyhow::Context;
use env_logger::Env;
use placerank::{
    configuration::get_configuration,
    services::{PlaceCrawler, SearchAdClient},
    startup::run,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().context("Failed to read configuration.")?;

    // Missing Search-Ad credentials block startup; they are never a
    // per-request failure.
    let search_ad = &configuration.search_ad;
    anyhow::ensure!(
        !search_ad.customer_id.is_empty(),
        "Search-Ad customer id is not configured"
    );
    anyhow::ensure!(
        !search_ad.api_key.is_empty(),
        "Search-Ad api key is not configured"
    );
    anyhow::ensure!(
        !search_ad.secret_key.is_empty(),
        "Search-Ad secret key is not configured"
    );

    let search_ad_client = SearchAdClient::new(configuration.search_ad.clone());
    let place_crawler = PlaceCrawler::new();

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    log::info!("Listening on {}", address);
    let listener = TcpListener::bind(address)?;

    run(listener, search_ad_client, place_crawler)?.await?;

    Ok(())
}
