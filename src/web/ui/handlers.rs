use axum::{extract::State, response::IntoResponse};

use crate::web::server::AppState;

use super::templates::IndexTemplate;

pub async fn index(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        station_name: state
            .config
            .station
            .name
            .clone()
            .unwrap_or_else(|| "Orbitarium".to_string()),
        satellites: state.catalog.entries().to_vec(),
    }
}
