// src/main.rs
use axum::http::{header, HeaderValue, Method};
use axum::serve;
use smartpark_api::{
    db,
    state::{AppState, AuthConfig},
    web,
};
use std::{env, net::SocketAddr};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Development frontend origins allowed to call the API.
const ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:5173",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "smartpark_api=debug,tower_http=info,sqlx=warn".into()
        }))
        .with(fmt::layer())
        .init();

    tracing::info!("Starting SmartPark car repair management API...");

    // Database connectivity is a startup precondition; there is no retry.
    let db_pool = match db::create_db_pool().await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to initialize the database: {}", e);
            return Err(anyhow::anyhow!("database initialization failed: {}", e));
        }
    };

    let auth = AuthConfig::from_env()
        .map_err(|e| anyhow::anyhow!("auth configuration failed: {}", e))?;

    let app_state = AppState { db_pool, auth };

    let origins = ALLOWED_ORIGINS
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let app = web::routes::create_router(app_state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    );

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    if let Err(e) = serve(listener, app.into_make_service()).await {
        tracing::error!("Fatal server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
