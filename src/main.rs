use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::io;
use tracing::info;
use userdept::config::AppConfig;
use userdept::http;
use userdept::lifecycle::{setup_tracing, UserDeptSystem};
use userdept::seed::Seed;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = AppConfig::parse();
    setup_tracing(config.log_json);

    let seed = match &config.seed_file {
        Some(path) => {
            info!(path = %path.display(), "Loading seed file");
            Seed::load(path).map_err(io::Error::other)?
        }
        None => Seed::builtin(),
    };

    let system =
        UserDeptSystem::with_seed(config.channel_capacity, seed).map_err(io::Error::other)?;
    let resource = web::Data::new(system.resource(config.strict_department_refs));

    info!(bind = %config.bind, strict = config.strict_department_refs, "Starting HTTP server");
    let server = HttpServer::new(move || {
        App::new()
            .app_data(resource.clone())
            .configure(http::configure)
    })
    .bind(config.bind)?
    .run();
    server.await?;

    system.shutdown().await.map_err(io::Error::other)
}
