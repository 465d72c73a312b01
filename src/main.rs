use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::EnvFilter;

use blog_api::{
    db::SqlitePostStore,
    route::{persisted_router, stub_router},
    sample::SamplePosts,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blog_api=info,tower_http=info".into()),
        )
        .init();

    let samples = Arc::new(SamplePosts::seed());

    let app = match std::env::var("BLOG_VARIANT").as_deref() {
        Ok("persisted") => {
            let database_url =
                std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite::memory:".to_owned());
            let store = SqlitePostStore::connect(&database_url).await?;

            tracing::info!("serving persisted variant ({database_url})");
            persisted_router(Arc::new(AppState {
                samples,
                store: Arc::new(store),
            }))
        }
        _ => {
            tracing::info!("serving stub variant");
            stub_router(samples)
        }
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = app.layer(cors).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = "0.0.0.0:8000".parse()?;
    tracing::info!("listening on {addr}");

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
