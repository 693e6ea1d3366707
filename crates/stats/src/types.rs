// Copyright 2026 Thunderbolt Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Wire types for the statistics and address API responses.

use serde::{Deserialize, Serialize};

/// Common `{ success, message, data }` envelope of the statistics service.
///
/// `success` defaults to `false` so an absent flag is treated the same as an
/// explicit failure.
#[derive(Debug, Deserialize)]
pub struct StatsEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    /// Optional server-supplied diagnostic, forwarded into error messages.
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Payload of the active-user stats endpoint: one count per interval.
#[derive(Debug, Deserialize)]
pub struct ActiveStats {
    pub counts: Vec<u64>,
}

/// One ranked leaderboard entry.
///
/// Position in the response array is the rank; there is no explicit rank field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedEntry {
    pub btc_address: String,
    /// Server fields we do not interpret (speeds, sample counts, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payload of the per-address transactions endpoint.
#[derive(Debug, Deserialize)]
pub struct AddressTransactions {
    pub total: u64,
}

/// Envelope of the per-address transactions endpoint. Unlike the statistics
/// service, this API carries no `success` flag.
#[derive(Debug, Deserialize)]
pub struct AddressEnvelope {
    pub data: Option<AddressTransactions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_entry_keeps_unknown_fields() {
        let entry: SpeedEntry = serde_json::from_str(
            r#"{ "btcAddress": "bc1qexample", "avgSpeed": 12.5, "txCount": 40 }"#,
        )
        .unwrap();
        assert_eq!(entry.btc_address, "bc1qexample");
        assert_eq!(entry.extra.len(), 2);
        assert_eq!(entry.extra["txCount"], serde_json::json!(40));
    }

    #[test]
    fn missing_success_flag_reads_as_false() {
        let envelope: StatsEnvelope<ActiveStats> =
            serde_json::from_str(r#"{ "data": { "counts": [1] } }"#).unwrap();
        assert!(!envelope.success);
    }
}
