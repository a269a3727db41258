/*
[INPUT]:  Game data versions and localization bundle ids
[OUTPUT]: Enums, events, game data, localization bundles, metadata
[POS]:    HTTP layer - game data endpoints
[UPDATE]: When adding new data endpoints or changing payload shapes
[UPDATE]: 2026-10-15 Typed metadata response
*/

use serde_json::{Value, json};

use crate::http::{ComlinkClient, Result};
use crate::types::{GameDataRequest, LocalizationRequest, MetaData, RequestEnvelope};

impl ComlinkClient {
    /// Game enum definitions
    ///
    /// GET /enums
    pub async fn get_enums(&self) -> Result<Value> {
        self.get_json("/enums").await
    }

    /// Current and scheduled game events
    ///
    /// POST /getEvents
    pub async fn get_events(&self) -> Result<Value> {
        self.post_json("/getEvents", Some(&json!({}))).await
    }

    /// Game data for a version (or one segment of it)
    ///
    /// POST /data
    pub async fn get_game_data(&self, req: GameDataRequest) -> Result<Value> {
        self.post_json("/data", Some(&RequestEnvelope::new(req))).await
    }

    /// Localization bundle by id; `unzip` asks the service to return it expanded
    ///
    /// POST /localization
    pub async fn get_localization_bundle(&self, id: &str, unzip: bool) -> Result<Value> {
        let body = RequestEnvelope {
            unzip: Some(unzip),
            payload: LocalizationRequest { id: id.to_string() },
        };
        self.post_json("/localization", Some(&body)).await
    }

    /// Latest game data and localization versions
    ///
    /// POST /metadata
    pub async fn get_meta_data(&self) -> Result<MetaData> {
        self.post_json("/metadata", Some(&json!({}))).await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::http::ComlinkClient;
    use crate::types::GameDataRequest;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ComlinkClient {
        let config = ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        };
        ComlinkClient::with_config(config).expect("client init")
    }

    #[tokio::test]
    async fn test_get_events() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/getEvents"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "gameEvent": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_events()
            .await
            .expect("get_events failed");
        assert_eq!(response, json!({ "gameEvent": [] }));
    }

    #[tokio::test]
    async fn test_get_game_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/data"))
            .and(body_json(json!({
                "payload": { "version": "0.34.1", "includePveUnits": false, "requestSegment": 2 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "units": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let req = GameDataRequest::new("0.34.1")
            .include_pve_units(false)
            .request_segment(2);
        let response = client_for(&server)
            .get_game_data(req)
            .await
            .expect("get_game_data failed");
        assert_eq!(response, json!({ "units": [] }));
    }

    #[tokio::test]
    async fn test_get_localization_bundle() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/localization"))
            .and(body_json(json!({ "unzip": true, "payload": { "id": "loc-1" } })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Loc_ENG_US.txt": "" })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_localization_bundle("loc-1", true)
            .await
            .expect("get_localization_bundle failed");
        assert_eq!(response, json!({ "Loc_ENG_US.txt": "" }));
    }

    #[tokio::test]
    async fn test_get_meta_data() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/metadata"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "latestGamedataVersion": "0.34.1:abc",
                "latestLocalizationBundleVersion": "loc-xyz"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let meta = client_for(&server)
            .get_meta_data()
            .await
            .expect("get_meta_data failed");
        assert_eq!(meta.latest_gamedata_version.as_deref(), Some("0.34.1:abc"));
        assert_eq!(meta.latest_localization_bundle_version.as_deref(), Some("loc-xyz"));
    }
}
