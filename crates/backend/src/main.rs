#![allow(clippy::too_many_arguments)]

pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod shared;
pub mod usecases;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use axum::middleware::{self, Next};
    use axum::response::Response;
    use axum::{
        routing::{get, post},
        Router,
    };
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| {
                // Keep application logs, silence per-statement SQL noise
                "info,sqlx=warn,sea_orm=warn".into()
            }),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    // Request logging: one line per request with duration, body size and status
    async fn request_logger(req: Request<Body>, next: Next) -> Response {
        use axum::body::to_bytes;
        use chrono::Utc;

        use crate::shared::format::format_number;

        let start = std::time::Instant::now();
        let method = req.method().clone();
        let uri = req.uri().clone();

        let response = next.run(req).await;

        let (parts, body) = response.into_parts();

        let bytes = match to_bytes(body, usize::MAX).await {
            Ok(b) => b,
            Err(_) => {
                let duration = start.elapsed();
                println!(
                    "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                    Utc::now().format("%H:%M:%S"),
                    duration.as_millis(),
                    "error",
                    parts.status.as_u16(),
                    method,
                    uri.path()
                );
                return Response::from_parts(parts, Body::default());
            }
        };

        let size = bytes.len();
        let duration = start.elapsed();
        let color_code = if parts.status.as_u16() == 200 {
            "36"
        } else {
            "33"
        };

        println!(
            "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
            color_code,
            Utc::now().format("%H:%M:%S"),
            duration.as_millis(),
            format_number(size),
            parts.status.as_u16(),
            method,
            uri.path()
        );

        Response::from_parts(parts, Body::from(bytes))
    }

    let config = shared::config::load_config()?;
    let db_path = shared::config::get_database_path(&config)?;

    shared::data::db::initialize_database(db_path.to_str())
        .await
        .map_err(|e| anyhow::anyhow!("db init failed: {e}"))?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // A001 Client handlers
        .route(
            "/api/client",
            get(handlers::a001_client::list_all).post(handlers::a001_client::upsert),
        )
        .route(
            "/api/client/:id",
            get(handlers::a001_client::get_by_id).delete(handlers::a001_client::delete),
        )
        // A002 Quote handlers
        .route(
            "/api/quote",
            get(handlers::a002_quote::list_all).post(handlers::a002_quote::upsert),
        )
        .route(
            "/api/quote/:id",
            get(handlers::a002_quote::get_by_id).delete(handlers::a002_quote::delete),
        )
        // A003 Event handlers
        .route("/api/event/calendar", get(handlers::a003_event::calendar))
        .route(
            "/api/event",
            get(handlers::a003_event::list_all).post(handlers::a003_event::upsert),
        )
        .route(
            "/api/event/:id",
            get(handlers::a003_event::get_by_id).delete(handlers::a003_event::delete),
        )
        .route("/api/event/:id/balance", get(handlers::a003_event::balance))
        // A004 Payment handlers
        .route(
            "/api/payment",
            get(handlers::a004_payment::list_all).post(handlers::a004_payment::upsert),
        )
        .route(
            "/api/payment/:id",
            get(handlers::a004_payment::get_by_id).delete(handlers::a004_payment::delete),
        )
        // A005 Expense handlers
        .route(
            "/api/expense",
            get(handlers::a005_expense::list_all).post(handlers::a005_expense::upsert),
        )
        .route(
            "/api/expense/:id",
            get(handlers::a005_expense::get_by_id).delete(handlers::a005_expense::delete),
        )
        // A006 Ingredient handlers
        .route(
            "/api/ingredient",
            get(handlers::a006_ingredient::list_all).post(handlers::a006_ingredient::upsert),
        )
        .route(
            "/api/ingredient/:id",
            get(handlers::a006_ingredient::get_by_id).delete(handlers::a006_ingredient::delete),
        )
        // A007 Cocktail handlers
        .route(
            "/api/cocktail",
            get(handlers::a007_cocktail::list_all).post(handlers::a007_cocktail::upsert),
        )
        .route(
            "/api/cocktail/:id",
            get(handlers::a007_cocktail::get_by_id).delete(handlers::a007_cocktail::delete),
        )
        // A008 Task handlers
        .route(
            "/api/task",
            get(handlers::a008_task::list_all).post(handlers::a008_task::upsert),
        )
        .route(
            "/api/task/:id",
            get(handlers::a008_task::get_by_id).delete(handlers::a008_task::delete),
        )
        .route("/api/task/:id/toggle", post(handlers::a008_task::toggle))
        // A009 Document handlers
        .route(
            "/api/document",
            get(handlers::a009_document::list_all).post(handlers::a009_document::upsert),
        )
        .route(
            "/api/document/:id",
            get(handlers::a009_document::get_by_id).delete(handlers::a009_document::delete),
        )
        // U501 Convert quote
        .route(
            "/api/u501/convert-quote",
            post(handlers::usecases::convert_quote),
        )
        // U502 Shopping list
        .route(
            "/api/u502/shopping-list",
            post(handlers::usecases::shopping_list),
        )
        .route(
            "/api/u502/shopping-list/export",
            post(handlers::usecases::shopping_list_export),
        )
        // D400 Finance summary
        .route(
            "/api/d400/finance-summary",
            get(handlers::d400_finance_summary::finance_summary),
        )
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
