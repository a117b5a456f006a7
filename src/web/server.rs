use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::catalog::Catalog;
use crate::relay::PositionsClient;

use super::api::positions as positions_handlers;
use super::api::scene as scene_handlers;
use super::api_doc::ApiDoc;
use super::config::Config;
use super::ui::handlers as ui_handlers;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Catalog>,
    pub positions: PositionsClient,
}

pub async fn run_server(config: Config) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();

    let catalog = match Catalog::from_file(&config.catalog.path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::warn!("Failed to load satellite catalog: {}", e);
            Catalog::default()
        }
    };

    let observer = config.observer().unwrap_or_default();
    let positions = PositionsClient::new(
        config.upstream.base_url.clone(),
        config.upstream.api_key.clone(),
        observer,
        config.upstream.window_seconds,
    );

    if config.upstream.api_key.is_empty() {
        log::warn!("No upstream API key configured; position fetches will be rejected upstream");
    }

    let state = AppState {
        config: Arc::new(config),
        catalog: Arc::new(catalog),
        positions,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Dashboard
        .route("/", get(ui_handlers::index))
        // Relay endpoint
        .route("/satellites", post(positions_handlers::fetch_satellites))
        // Scene helpers for thin clients
        .route("/api/orbit", get(scene_handlers::orbit_path))
        .route("/api/cities", get(scene_handlers::list_cities))
        // Static files
        .nest_service("/static", ServeDir::new("src/web/static"))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
