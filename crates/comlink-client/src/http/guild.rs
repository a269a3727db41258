/*
[INPUT]:  Guild ids, names and search criteria
[OUTPUT]: Guild profiles and guild search results
[POS]:    HTTP layer - guild endpoints
[UPDATE]: When adding new guild endpoints or search filters
*/

use serde_json::Value;

use crate::http::{ComlinkClient, Result};
use crate::types::{
    GuildRequest, GuildSearchCriteria, GuildsByCriteriaRequest, GuildsByNameRequest,
    RequestEnvelope,
};

impl ComlinkClient {
    /// Guild profile
    ///
    /// POST /guild
    pub async fn get_guild(
        &self,
        guild_id: &str,
        include_recent_guild_activity_info: bool,
    ) -> Result<Value> {
        let body = RequestEnvelope::new(GuildRequest {
            guild_id: guild_id.to_string(),
            include_recent_guild_activity_info,
        });
        self.post_json("/guild", Some(&body)).await
    }

    /// Search guilds by name
    ///
    /// POST /getGuilds (filterType 4)
    pub async fn get_guilds_by_name(
        &self,
        name: &str,
        start_index: u32,
        count: u32,
    ) -> Result<Value> {
        let body = RequestEnvelope::new(GuildsByNameRequest::new(name, start_index, count));
        self.post_json("/getGuilds", Some(&body)).await
    }

    /// Search guilds by criteria
    ///
    /// POST /getGuilds (filterType 5)
    pub async fn get_guilds_by_criteria(
        &self,
        search_criteria: GuildSearchCriteria,
        start_index: u32,
        count: u32,
    ) -> Result<Value> {
        let body = RequestEnvelope::new(GuildsByCriteriaRequest::new(
            search_criteria,
            start_index,
            count,
        ));
        self.post_json("/getGuilds", Some(&body)).await
    }
}

#[cfg(test)]
mod tests {
    use crate::config::ClientConfig;
    use crate::http::ComlinkClient;
    use crate::types::GuildSearchCriteria;
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
    async fn test_get_guild() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/guild"))
            .and(body_json(json!({
                "payload": { "guildId": "g-1", "includeRecentGuildActivityInfo": true }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "guild": {} })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_guild("g-1", true)
            .await
            .expect("get_guild failed");
        assert_eq!(response, json!({ "guild": {} }));
    }

    #[tokio::test]
    async fn test_get_guilds_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/getGuilds"))
            .and(body_json(json!({
                "payload": { "filterType": 4, "name": "Rebels", "startIndex": 0, "count": 10 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "guild": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_guilds_by_name("Rebels", 0, 10)
            .await
            .expect("get_guilds_by_name failed");
        assert_eq!(response, json!({ "guild": [] }));
    }

    #[tokio::test]
    async fn test_get_guilds_by_criteria() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/getGuilds"))
            .and(body_json(json!({
                "payload": {
                    "filterType": 5,
                    "searchCriteria": { "includeInviteOnly": true, "maxMemberCount": 50 },
                    "startIndex": 5,
                    "count": 25
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "guild": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let criteria = GuildSearchCriteria {
            include_invite_only: Some(true),
            max_member_count: Some(50),
            ..GuildSearchCriteria::default()
        };
        let response = client_for(&server)
            .get_guilds_by_criteria(criteria, 5, 25)
            .await
            .expect("get_guilds_by_criteria failed");
        assert_eq!(response, json!({ "guild": [] }));
    }
}
