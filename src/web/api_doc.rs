use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::positions::SatellitesRequest;
use super::api::scene::{CityMarker, OrbitQuery, OrbitResponse};
use crate::relay::{PositionReport, PositionSample, SatelliteInfo, Selection, TaggedReport};
use crate::scene::Point3;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::positions::fetch_satellites,
        super::api::scene::orbit_path,
        super::api::scene::list_cities,
    ),
    components(
        schemas(
            SatellitesRequest,
            Selection,
            TaggedReport,
            PositionReport,
            PositionSample,
            SatelliteInfo,
            OrbitQuery,
            OrbitResponse,
            CityMarker,
            Point3,
            ErrorResponse,
        )
    ),
    info(
        title = "Orbitarium Relay API",
        description = "Relay for satellite position lookups plus scene helpers for the globe view",
        version = "0.1.0"
    ),
    tags(
        (name = "relay", description = "Satellite position relay"),
        (name = "scene", description = "Precomputed scene geometry")
    )
)]
pub struct ApiDoc;
