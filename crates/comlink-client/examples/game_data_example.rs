/*
[INPUT]:  COMLINK_* environment variables, optional ally code argument
[OUTPUT]: Metadata, a slice of game data and a player profile
[POS]:    Examples - read-only game data queries
[UPDATE]: When adding new data endpoints
*/

use comlink_client::*;

/// Example: query metadata, then game data for the latest version.
///
/// Reads the host and keys from COMLINK_URL / COMLINK_ACCESS_KEY /
/// COMLINK_SECRET_KEY; without keys requests go out unsigned.
#[tokio::main]
async fn main() {
    println!("=== Comlink Game Data Example ===\n");

    let config = match ClientConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read configuration: {}", e);
            return;
        }
    };
    let client = match ComlinkClient::with_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!(
        "✓ HTTP client created for {} (signing {})\n",
        client.base_url(),
        if client.is_signing_enabled() { "on" } else { "off" }
    );

    println!("Querying metadata...");
    let version = match client.get_meta_data().await {
        Ok(meta) => {
            println!("✓ Latest game data version: {:?}", meta.latest_gamedata_version);
            meta.latest_gamedata_version
        }
        Err(e) => {
            println!("✗ Error: {}", e);
            None
        }
    };

    if let Some(version) = version {
        println!("\nQuerying game data segment 1 for {}...", version);
        let req = GameDataRequest::new(version).request_segment(1);
        match client.get_game_data(req).await {
            Ok(data) => println!("✓ Game data keys: {:?}", data.as_object().map(|o| o.len())),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    if let Some(ally_code) = std::env::args().nth(1) {
        println!("\nQuerying player {}...", ally_code);
        match client.get_player(Some(&ally_code), None).await {
            Ok(player) => println!("✓ Player name: {}", player["name"]),
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Game data example complete");
}
