use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::relay::{Selection, TaggedReport};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SatellitesRequest {
    #[serde(default)]
    pub satellites: Vec<Selection>,
}

#[utoipa::path(
    post,
    path = "/satellites",
    tag = "relay",
    request_body = SatellitesRequest,
    responses(
        (status = 200, description = "Position reports, one per selection, in request order", body = Vec<TaggedReport>),
        (status = 400, description = "Empty or missing satellite list", body = ErrorResponse),
        (status = 502, description = "Upstream positions API failure", body = ErrorResponse)
    )
)]
pub async fn fetch_satellites(
    State(state): State<AppState>,
    Json(request): Json<SatellitesRequest>,
) -> ApiResult<impl IntoResponse> {
    // Rejected before any outbound call is made.
    if request.satellites.is_empty() {
        return Err(ApiError::Validation("no satellites provided".into()));
    }

    for selection in &request.satellites {
        if state.catalog.find(selection.id).is_none() {
            log::debug!("Selection {} is not in the catalog", selection.id);
        }
    }

    let reports = state.positions.fetch_batch(&request.satellites).await?;
    log::info!("Relayed {} position reports", reports.len());

    Ok((StatusCode::OK, Json(reports)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_satellites_field_deserializes_to_empty() {
        let request: SatellitesRequest = serde_json::from_str("{}").unwrap();
        assert!(request.satellites.is_empty());
    }

    #[test]
    fn request_body_shape() {
        let request: SatellitesRequest = serde_json::from_str(
            r##"{ "satellites": [ { "id": 25544, "color": "#ff8800" }, { "id": 20580, "color": "#00ffcc" } ] }"##,
        )
        .unwrap();
        assert_eq!(request.satellites.len(), 2);
        assert_eq!(request.satellites[0].id, 25544);
        assert_eq!(request.satellites[1].color, "#00ffcc");
    }
}
