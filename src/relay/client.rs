use reqwest::Client;

use super::error::RelayError;
use super::types::{Observer, PositionReport, Selection, TaggedReport};

/// Thin client for the upstream satellite-positions API. The observer location
/// and request window are fixed at construction; per-request input is just the
/// NORAD id.
#[derive(Clone)]
pub struct PositionsClient {
    http: Client,
    base_url: String,
    api_key: String,
    observer: Observer,
    window_seconds: u32,
}

impl PositionsClient {
    pub fn new(base_url: String, api_key: String, observer: Observer, window_seconds: u32) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
            observer,
            window_seconds,
        }
    }

    // The provider appends the key with `&apiKey` after the final path
    // segment, not as a regular query string.
    fn position_url(&self, norad_id: u32) -> String {
        format!(
            "{}/positions/{}/{}/{}/{}/{}&apiKey={}",
            self.base_url,
            norad_id,
            self.observer.latitude_deg,
            self.observer.longitude_deg,
            self.observer.altitude_m,
            self.window_seconds,
            self.api_key
        )
    }

    pub async fn fetch(&self, norad_id: u32) -> Result<PositionReport, RelayError> {
        let url = self.position_url(norad_id);
        log::debug!("Fetching positions for satellite {}", norad_id);

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(RelayError::UpstreamStatus(response.status()));
        }

        let report: PositionReport = response
            .json()
            .await
            .map_err(|e| RelayError::Malformed(e.to_string()))?;

        if report.positions.is_empty() {
            return Err(RelayError::Malformed(format!(
                "no positions for satellite {}",
                norad_id
            )));
        }

        Ok(report)
    }

    /// One concurrent request per selection, awaited in submission order. Any
    /// failure fails the whole batch; there is no retry and no partial result.
    pub async fn fetch_batch(
        &self,
        selections: &[Selection],
    ) -> Result<Vec<TaggedReport>, RelayError> {
        if selections.is_empty() {
            return Err(RelayError::EmptySelection);
        }

        let mut handles = Vec::with_capacity(selections.len());
        for selection in selections {
            let client = self.clone();
            let id = selection.id;
            handles.push((
                tokio::spawn(async move { client.fetch(id).await }),
                selection.color.clone(),
            ));
        }

        let mut results = Vec::with_capacity(handles.len());
        for (handle, color) in handles {
            let data = handle.await??;
            results.push(TaggedReport { data, color });
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, routing::get, Json, Router};

    fn test_client(base_url: String) -> PositionsClient {
        let observer = Observer::from_coordinates("45.6793, -111.0373", None).unwrap();
        PositionsClient::new(base_url, "TESTKEY".to_string(), observer, 2)
    }

    // Serves a canned report for any id; the id is echoed back so tests can
    // check request/response pairing.
    async fn spawn_mock_upstream() -> String {
        async fn positions(
            Path((id, _lat, _lon, _alt, _window)): Path<(u32, f64, f64, f64, String)>,
        ) -> Json<serde_json::Value> {
            Json(serde_json::json!({
                "info": { "satid": id, "satname": format!("SAT-{}", id) },
                "positions": [{
                    "satlatitude": 10.0, "satlongitude": 20.0, "sataltitude": 400.0,
                    "azimuth": 0.0, "elevation": 35.0,
                    "ra": 100.0, "dec": -5.0, "timestamp": 1733766112
                }]
            }))
        }

        let app = Router::new().route(
            "/positions/{id}/{lat}/{lon}/{alt}/{window}",
            get(positions),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn selections(ids: &[u32]) -> Vec<Selection> {
        ids.iter()
            .map(|id| Selection {
                id: *id,
                color: format!("#{:06x}", id),
            })
            .collect()
    }

    #[test]
    fn position_url_matches_provider_contract() {
        let client = test_client("https://api.example.com/rest/v1/satellite".to_string());
        assert_eq!(
            client.position_url(25544),
            "https://api.example.com/rest/v1/satellite/positions/25544/45.6793/-111.0373/0/2&apiKey=TESTKEY"
        );
    }

    #[tokio::test]
    async fn empty_batch_is_rejected() {
        let client = test_client("http://127.0.0.1:1".to_string());
        let err = client.fetch_batch(&[]).await.unwrap_err();
        assert!(matches!(err, RelayError::EmptySelection));
    }

    #[tokio::test]
    async fn batch_preserves_order_and_length() {
        let base = spawn_mock_upstream().await;
        let client = test_client(base);

        let input = selections(&[25544, 20580, 33591]);
        let reports = client.fetch_batch(&input).await.unwrap();

        assert_eq!(reports.len(), input.len());
        for (report, selection) in reports.iter().zip(&input) {
            assert_eq!(report.data.info.satid, selection.id);
            assert_eq!(report.color, selection.color);
        }
    }

    #[tokio::test]
    async fn unreachable_upstream_fails_whole_batch() {
        // Nothing listens on port 1.
        let client = test_client("http://127.0.0.1:1".to_string());
        let result = client.fetch_batch(&selections(&[25544, 20580])).await;
        assert!(matches!(result, Err(RelayError::Upstream(_))));
    }
}
