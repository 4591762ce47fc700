/// Blog Service - main entry point
use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use blog_service::{routes, Config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    tracing::info!("starting blog-service on {}:{}", config.host, config.port);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    tracing::info!("database connection pool initialized");

    sqlx::migrate!().run(&pool).await?;

    tracing::info!("migrations applied");

    let bind_addr = (config.host.clone(), config.port);
    let app_config = web::Data::new(config);
    let app_pool = web::Data::new(pool);

    HttpServer::new(move || {
        App::new()
            .app_data(app_pool.clone())
            .app_data(app_config.clone())
            .app_data(routes::path_config())
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .configure(routes::configure)
            .route("/health", web::get().to(health))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}

/// Health check endpoint backed by a live database round trip.
async fn health(pool: web::Data<PgPool>) -> HttpResponse {
    match sqlx::query("SELECT 1").fetch_one(pool.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ok",
            "service": "blog-service",
            "version": env!("CARGO_PKG_VERSION"),
        })),
        Err(err) => HttpResponse::ServiceUnavailable().json(serde_json::json!({
            "status": "unhealthy",
            "error": err.to_string(),
        })),
    }
}
