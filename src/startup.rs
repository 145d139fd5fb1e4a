use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};

use crate::{
    routes::{analyze_route, default_route},
    services::{PlaceCrawler, SearchAdClient},
};

pub fn run(
    listener: TcpListener,
    search_ad_client: SearchAdClient,
    place_crawler: PlaceCrawler,
) -> Result<Server, std::io::Error> {
    let search_ad_client = web::Data::new(search_ad_client);
    let place_crawler = web::Data::new(place_crawler);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::health_check)
            .service(analyze_route::analyze_keyword)
            .service(analyze_route::test_search_ad)
            .app_data(search_ad_client.clone())
            .app_data(place_crawler.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
