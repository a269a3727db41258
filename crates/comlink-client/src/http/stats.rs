/*
[INPUT]:  Unit roster payload, stat flags, language
[OUTPUT]: Calculated unit stats from the stats service
[POS]:    HTTP layer - stats host endpoint (unsigned, errors not normalized)
[UPDATE]: When the stats service path or query parameters change
*/

use serde::Serialize;
use serde_json::Value;

use crate::http::{ComlinkClient, Result};

impl ComlinkClient {
    /// Calculate unit stats
    ///
    /// POST {stats_base_url}/api?flags={a,b}&language={lang}
    pub async fn get_unit_stats<P>(
        &self,
        payload: &P,
        flags: &[&str],
        lang: Option<&str>,
    ) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.post_stats("/api", payload, flags, lang).await
    }
}
