/*
[INPUT]:  Ally code or player id
[OUTPUT]: Player profiles and arena profiles
[POS]:    HTTP layer - player endpoints
[UPDATE]: When adding new player endpoints or changing identifier rules
*/

use serde_json::Value;

use crate::http::{ComlinkClient, Result};
use crate::types::{PlayerArenaRequest, PlayerRequest, RequestEnvelope};

impl ComlinkClient {
    /// Full player profile
    ///
    /// POST /player
    /// A non-empty `ally_code` wins; `player_id` is only sent without one.
    pub async fn get_player(
        &self,
        ally_code: Option<&str>,
        player_id: Option<&str>,
    ) -> Result<Value> {
        let body = RequestEnvelope::new(PlayerRequest::new(ally_code, player_id));
        self.post_json("/player", Some(&body)).await
    }

    /// Player arena profile
    ///
    /// POST /playerArena
    pub async fn get_player_arena_profile(
        &self,
        ally_code: Option<&str>,
        player_id: Option<&str>,
        player_details_only: bool,
    ) -> Result<Value> {
        let body = RequestEnvelope::new(PlayerArenaRequest::new(
            ally_code,
            player_id,
            player_details_only,
        ));
        self.post_json("/playerArena", Some(&body)).await
    }
}
