/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Response from `/metadata`. Fields this crate does not model land in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    pub asset_version: Option<i64>,
    pub latest_gamedata_version: Option<String>,
    pub latest_localization_bundle_version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_metadata_keeps_unknown_fields() {
        let meta: MetaData = serde_json::from_value(json!({
            "assetVersion": 3467,
            "latestGamedataVersion": "0.34.1:abc",
            "latestLocalizationBundleVersion": "loc-xyz",
            "serverVersion": "srv"
        }))
        .unwrap();

        assert_eq!(meta.asset_version, Some(3467));
        assert_eq!(meta.latest_gamedata_version.as_deref(), Some("0.34.1:abc"));
        assert_eq!(meta.latest_localization_bundle_version.as_deref(), Some("loc-xyz"));
        assert_eq!(meta.extra.get("serverVersion"), Some(&json!("srv")));
    }

    #[test]
    fn test_metadata_tolerates_missing_fields() {
        let meta: MetaData = serde_json::from_value(json!({})).unwrap();
        assert!(meta.latest_gamedata_version.is_none());
        assert!(meta.extra.is_empty());
    }
}
