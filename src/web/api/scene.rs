use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::scene::{generate_orbit_points, surface_point, Point3, SCENE_EARTH_RADIUS};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

// Guards against a query asking for an absurd path.
const MAX_ORBIT_SAMPLES: usize = 10_000;

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrbitQuery {
    /// Right ascension, degrees.
    pub ra: f64,
    /// Declination, degrees.
    pub dec: f64,
    /// Elevation, km above the surface.
    pub elevation: f64,
    #[serde(default)]
    pub samples: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrbitResponse {
    pub points: Vec<Point3>,
}

#[utoipa::path(
    get,
    path = "/api/orbit",
    tag = "scene",
    params(
        ("ra" = f64, Query, description = "Right ascension (degrees)"),
        ("dec" = f64, Query, description = "Declination (degrees)"),
        ("elevation" = f64, Query, description = "Elevation above the surface (km)"),
        ("samples" = Option<usize>, Query, description = "Point count; defaults to the configured orbit sample count")
    ),
    responses(
        (status = 200, description = "Closed orbit path in scene coordinates", body = OrbitResponse),
        (status = 400, description = "Invalid sample count", body = ErrorResponse)
    )
)]
pub async fn orbit_path(
    State(state): State<AppState>,
    Query(query): Query<OrbitQuery>,
) -> ApiResult<impl IntoResponse> {
    let samples = query.samples.unwrap_or(state.config.scene.orbit_samples);
    if samples == 0 || samples > MAX_ORBIT_SAMPLES {
        return Err(ApiError::Validation(format!(
            "samples must be between 1 and {}",
            MAX_ORBIT_SAMPLES
        )));
    }

    let points = generate_orbit_points(
        query.ra,
        query.dec,
        query.elevation,
        state.config.scene.altitude_scale,
        samples,
    );

    Ok((StatusCode::OK, Json(OrbitResponse { points })))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CityMarker {
    pub name: String,
    pub position: Point3,
}

#[utoipa::path(
    get,
    path = "/api/cities",
    tag = "scene",
    responses(
        (status = 200, description = "Configured city markers on the globe surface", body = Vec<CityMarker>)
    )
)]
pub async fn list_cities(State(state): State<AppState>) -> Json<Vec<CityMarker>> {
    let markers = state
        .config
        .cities
        .iter()
        .map(|city| CityMarker {
            name: city.name.clone(),
            position: surface_point(city.latitude_deg, city.longitude_deg, SCENE_EARTH_RADIUS),
        })
        .collect();
    Json(markers)
}
