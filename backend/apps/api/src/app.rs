//! Router assembly
//!
//! Mounts the domain routers and the OpenAPI document under `/api` and wraps
//! everything in the tracing and CORS layers. When a static directory is
//! configured, every non-API path falls through to the frontend bundle.

use crate::config::ApiConfig;
use age::{AgeApiDoc, age_router};
use axum::{
    Json, Router,
    http::{Method, header},
    routing::get,
};
use kernel::clock::Clock;
use kernel::error::app_error::AppError;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use weather::{WeatherApiDoc, weather_router};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Age & Weather API",
        description = "Age and life-expectancy estimate plus a mock weather forecast"
    ),
    servers((url = "/api"))
)]
struct ApiDoc;

/// OpenAPI document covering every `/api` route.
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(AgeApiDoc::openapi());
    doc.merge(WeatherApiDoc::openapi());
    doc
}

pub fn build_router<C>(clock: C, config: &ApiConfig) -> Router
where
    C: Clock + Clone,
{
    let doc = openapi();
    let api = Router::new()
        .merge(age_router(clock.clone()))
        .merge(weather_router(clock))
        .route("/openapi.json", get(move || async move { Json(doc) }))
        .fallback(not_found);

    let app = Router::new().nest("/api", api);

    let app = match &config.static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "Serving frontend bundle");
            // client-side routes resolve to the SPA entry point
            let spa = ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")));
            app.fallback_service(spa)
        }
        None => app.fallback(not_found),
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(config)),
    )
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(config.frontend_origins.clone())
        .allow_methods(AllowMethods::list([Method::GET, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
}

async fn not_found() -> AppError {
    AppError::not_found("Not found")
}
