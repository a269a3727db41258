/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// `filterType` for guild search by name
pub const GUILD_FILTER_BY_NAME: u8 = 4;
/// `filterType` for guild search by criteria
pub const GUILD_FILTER_BY_CRITERIA: u8 = 5;

/// Outer request body: `{unzip?, payload}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unzip: Option<bool>,
    pub payload: T,
}

impl<T> RequestEnvelope<T> {
    pub fn new(payload: T) -> Self {
        Self {
            unzip: None,
            payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDataRequest {
    pub version: String,
    pub include_pve_units: bool,
    pub request_segment: u32,
}

impl GameDataRequest {
    /// Full game data for `version`, PvE units included
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            include_pve_units: true,
            request_segment: 0,
        }
    }

    pub fn include_pve_units(mut self, include: bool) -> Self {
        self.include_pve_units = include;
        self
    }

    pub fn request_segment(mut self, segment: u32) -> Self {
        self.request_segment = segment;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalizationRequest {
    pub id: String,
}

/// Player lookup; at most one identifier is ever sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ally_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
}

impl PlayerRequest {
    /// A non-empty ally code wins; `player_id` is used only without one.
    pub fn new(ally_code: Option<&str>, player_id: Option<&str>) -> Self {
        match ally_code.filter(|code| !code.is_empty()) {
            Some(code) => Self {
                ally_code: Some(code.to_string()),
                player_id: None,
            },
            None => Self {
                ally_code: None,
                player_id: player_id.filter(|id| !id.is_empty()).map(str::to_string),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerArenaRequest {
    pub player_details_only: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ally_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<String>,
}

impl PlayerArenaRequest {
    pub fn new(
        ally_code: Option<&str>,
        player_id: Option<&str>,
        player_details_only: bool,
    ) -> Self {
        let player = PlayerRequest::new(ally_code, player_id);
        Self {
            player_details_only,
            ally_code: player.ally_code,
            player_id: player.player_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildRequest {
    pub guild_id: String,
    pub include_recent_guild_activity_info: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildsByNameRequest {
    pub filter_type: u8,
    pub name: String,
    pub start_index: u32,
    pub count: u32,
}

impl GuildsByNameRequest {
    pub fn new(name: impl Into<String>, start_index: u32, count: u32) -> Self {
        Self {
            filter_type: GUILD_FILTER_BY_NAME,
            name: name.into(),
            start_index,
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildsByCriteriaRequest {
    pub filter_type: u8,
    pub search_criteria: GuildSearchCriteria,
    pub start_index: u32,
    pub count: u32,
}

impl GuildsByCriteriaRequest {
    pub fn new(search_criteria: GuildSearchCriteria, start_index: u32, count: u32) -> Self {
        Self {
            filter_type: GUILD_FILTER_BY_CRITERIA,
            search_criteria,
            start_index,
            count,
        }
    }
}

/// Guild search filters; unset fields are left out of the request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildSearchCriteria {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_member_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_member_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_invite_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_guild_galactic_power: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_guild_galactic_power: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_tb_participated_in: Vec<String>,
}
