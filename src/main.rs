use actix_web::{App, HttpServer, middleware, web};

use slides_web::app;
use slides_web::config::ServerConfig;
use slides_web::sync::ConnectionRegistry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // A missing .env is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("{e}");
        std::io::Error::other(e.to_string())
    })?;

    let store = web::Data::new(app::initial_store(&config));
    let registry = web::Data::new(ConnectionRegistry::new());
    let snapshot = store.current();
    log::info!(
        "Deck v{} ready with {} slides",
        snapshot.version,
        snapshot.deck.total
    );

    if !config.static_dir.is_dir() {
        log::warn!(
            "Static directory {} not found, UI is disabled",
            config.static_dir.display()
        );
    }

    let (host, port) = config.bind_addr();
    log::info!("Starting server at http://{host}:{port}");

    let config = web::Data::new(config);
    HttpServer::new(move || {
        let static_dir = config.static_dir.clone();
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(registry.clone())
            .app_data(config.clone())
            .app_data(app::json_config(config.max_payload))
            .configure(app::configure)
            .configure(|cfg| app::configure_static(cfg, &static_dir))
    })
    .bind((host, port))?
    .run()
    .await
}
