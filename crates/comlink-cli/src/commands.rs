/*
[INPUT]:  Parsed subcommand and a configured client
[OUTPUT]: JSON response from the matching catalog operation
[POS]:    CLI command layer
[UPDATE]: When catalog operations are added or their parameters change
*/

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use serde_json::Value;

use comlink_client::{ComlinkClient, GameDataRequest};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Game enum definitions
    Enums,
    /// Current and scheduled events
    Events,
    /// Latest game data and localization versions
    Metadata,
    /// Game data for a version
    GameData {
        version: String,
        #[arg(long, default_value_t = 0)]
        segment: u32,
        #[arg(long = "no-pve-units")]
        no_pve_units: bool,
    },
    /// Localization bundle
    Localization {
        id: String,
        #[arg(long)]
        unzip: bool,
    },
    /// Player profile; --ally-code wins over --player-id
    Player {
        #[arg(long = "ally-code")]
        ally_code: Option<String>,
        #[arg(long = "player-id")]
        player_id: Option<String>,
    },
    /// Player arena profile
    Arena {
        #[arg(long = "ally-code")]
        ally_code: Option<String>,
        #[arg(long = "player-id")]
        player_id: Option<String>,
        #[arg(long = "details-only")]
        details_only: bool,
    },
    /// Guild profile
    Guild {
        guild_id: String,
        #[arg(long = "recent-activity")]
        recent_activity: bool,
    },
    /// Search guilds by name
    GuildsByName {
        name: String,
        #[arg(long = "start-index", default_value_t = 0)]
        start_index: u32,
        #[arg(long, default_value_t = 10)]
        count: u32,
    },
    /// Unit stats for a roster read from a JSON file
    UnitStats {
        #[arg(long, value_name = "PATH")]
        payload: PathBuf,
        #[arg(long, value_delimiter = ',')]
        flags: Vec<String>,
        #[arg(long)]
        language: Option<String>,
    },
}

impl Command {
    pub async fn run(self, client: &ComlinkClient) -> Result<Value> {
        let response = match self {
            Command::Enums => client.get_enums().await?,
            Command::Events => client.get_events().await?,
            Command::Metadata => {
                serde_json::to_value(client.get_meta_data().await?).context("render metadata")?
            }
            Command::GameData {
                version,
                segment,
                no_pve_units,
            } => {
                let req = GameDataRequest::new(version)
                    .include_pve_units(!no_pve_units)
                    .request_segment(segment);
                client.get_game_data(req).await?
            }
            Command::Localization { id, unzip } => {
                client.get_localization_bundle(&id, unzip).await?
            }
            Command::Player {
                ally_code,
                player_id,
            } => {
                client
                    .get_player(ally_code.as_deref(), player_id.as_deref())
                    .await?
            }
            Command::Arena {
                ally_code,
                player_id,
                details_only,
            } => {
                client
                    .get_player_arena_profile(
                        ally_code.as_deref(),
                        player_id.as_deref(),
                        details_only,
                    )
                    .await?
            }
            Command::Guild {
                guild_id,
                recent_activity,
            } => client.get_guild(&guild_id, recent_activity).await?,
            Command::GuildsByName {
                name,
                start_index,
                count,
            } => client.get_guilds_by_name(&name, start_index, count).await?,
            Command::UnitStats {
                payload,
                flags,
                language,
            } => {
                let content = std::fs::read_to_string(&payload)
                    .with_context(|| format!("read {}", payload.display()))?;
                let roster: Value =
                    serde_json::from_str(&content).context("parse unit stats payload")?;
                let flags: Vec<&str> = flags.iter().map(String::as_str).collect();
                client
                    .get_unit_stats(&roster, &flags, language.as_deref())
                    .await?
            }
        };
        Ok(response)
    }
}
