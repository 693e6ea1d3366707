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

//! HTTP clients for the statistics service and the per-address transaction API.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    error::StatsError,
    time_range::{format_api_timestamp, TimeRange, Window},
    types::{ActiveStats, AddressEnvelope, SpeedEntry, StatsEnvelope},
};

/// Default public endpoint of the statistics service.
pub const DEFAULT_STATS_URL: &str = "https://stats.thunderbolt.lt";
/// Default public endpoint of the per-address transaction API.
pub const DEFAULT_ADDRESS_API_URL: &str = "https://api.thunderbolt.lt";

/// Bucket size and bucket count of the active-user stats query: seven daily
/// intervals. These are fixed by the API contract.
const ACTIVE_STATS_INTERVAL: &str = "1d";
const ACTIVE_STATS_EPOCH: u32 = 7;

const USER_AGENT: &str = concat!("thunderbolt-stats/", env!("CARGO_PKG_VERSION"));

fn build_http_client(timeout: Duration) -> Result<Client, StatsError> {
    Ok(Client::builder().timeout(timeout).user_agent(USER_AGENT).build()?)
}

/// Client for the Thunderbolt statistics service.
#[derive(Clone, Debug)]
pub struct StatsClient {
    client: Client,
    base_url: Url,
}

impl StatsClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, StatsError> {
        Ok(Self { client: build_http_client(timeout)?, base_url })
    }

    /// Total number of addresses active over the trailing window starting at
    /// `from`. The endpoint returns one count per daily interval; the total is
    /// their sum.
    pub async fn active_participant_count(
        &self,
        from: DateTime<Utc>,
    ) -> Result<u64, StatsError> {
        let mut url = self.base_url.join("api/v1/statistic/users/active/stats")?;
        url.query_pairs_mut()
            .append_pair("interval", ACTIVE_STATS_INTERVAL)
            .append_pair("epoch", &ACTIVE_STATS_EPOCH.to_string())
            .append_pair("from", &format_api_timestamp(from));

        tracing::debug!("Fetching active user stats from {url}");
        let envelope: StatsEnvelope<ActiveStats> = self.get_envelope(url).await?;
        let stats = envelope.data.ok_or_else(|| {
            StatsError::Malformed("active user stats response is missing `data.counts`".into())
        })?;
        Ok(stats.counts.iter().sum())
    }

    /// Ranked transaction-speed entries for `range`, sized by `count`.
    ///
    /// The response array comes back in rank order (rank 1 first) and is
    /// returned untouched. `count` is the value produced by
    /// [`active_participant_count`](Self::active_participant_count); a missing
    /// count is an input error and makes no network call. `window` is used for
    /// diagnostics only.
    pub async fn transaction_speed(
        &self,
        range: &TimeRange,
        count: Option<u64>,
        window: Window,
    ) -> Result<Vec<SpeedEntry>, StatsError> {
        let Some(count) = count else {
            tracing::error!("No sizing count available for the {window} transaction speed query");
            return Err(StatsError::InvalidCount);
        };

        let mut url = self.base_url.join("api/v1/statistic/transactions/speed")?;
        url.query_pairs_mut()
            .append_pair("from", &format_api_timestamp(range.from))
            .append_pair("to", &format_api_timestamp(range.to))
            .append_pair("count", &count.to_string());

        tracing::debug!("Fetching {window} transaction speed data from {url}");
        let envelope: StatsEnvelope<Vec<SpeedEntry>> = self.get_envelope(url).await?;
        let entries = envelope.data.ok_or_else(|| {
            StatsError::Malformed(format!("{window} speed response `data` is not an array"))
        })?;
        tracing::debug!("Fetched {} ranked addresses for the {window} window", entries.len());
        Ok(entries)
    }

    /// GET `url` and decode the common statistics envelope, enforcing HTTP
    /// status, JSON shape, and the `success` flag.
    async fn get_envelope<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<StatsEnvelope<T>, StatsError> {
        let url_str = url.to_string();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::Status { status, url: url_str });
        }

        let body = response.text().await?;
        let envelope: StatsEnvelope<T> = serde_json::from_str(&body)
            .map_err(|err| StatsError::Malformed(err.to_string()))?;
        if !envelope.success {
            return Err(StatsError::Unsuccessful(
                envelope.message.unwrap_or_else(|| "no message from server".into()),
            ));
        }
        Ok(envelope)
    }
}

/// Client for the per-address transaction API (a separate host from the
/// statistics service).
#[derive(Clone, Debug)]
pub struct AddressClient {
    client: Client,
    base_url: Url,
}

impl AddressClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, StatsError> {
        Ok(Self { client: build_http_client(timeout)?, base_url })
    }

    /// All-time transaction total for `address`.
    pub async fn total_transactions(&self, address: &str) -> Result<u64, StatsError> {
        let url = self.base_url.join(&format!("api/v1/addresses/{address}/transactions"))?;
        let url_str = url.to_string();

        tracing::debug!("Fetching total transactions from {url_str}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            // Surface the server's error body in the logs when there is one.
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("Address API error {status} from {url_str}: {detail}");
            return Err(StatsError::Status { status, url: url_str });
        }

        let body = response.text().await?;
        let envelope: AddressEnvelope = serde_json::from_str(&body)
            .map_err(|err| StatsError::Malformed(err.to_string()))?;
        let data = envelope.data.ok_or_else(|| {
            StatsError::Malformed("`data.total` not found in the transactions response".into())
        })?;
        Ok(data.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use httpmock::prelude::*;
    use serde_json::json;

    fn stats_client(server: &MockServer) -> StatsClient {
        StatsClient::new(server.base_url().parse().unwrap(), Duration::from_secs(5)).unwrap()
    }

    fn address_client(server: &MockServer) -> AddressClient {
        AddressClient::new(server.base_url().parse().unwrap(), Duration::from_secs(5)).unwrap()
    }

    fn sample_range() -> TimeRange {
        let now = Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap();
        TimeRange::ending_at(now, Window::Daily)
    }

    #[tokio::test]
    async fn active_count_sums_interval_counts() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/statistic/users/active/stats")
                .query_param("interval", "1d")
                .query_param("epoch", "7")
                .query_param("from", "2024-02-29 12:00:00");
            then.status(200).json_body(json!({
                "success": true,
                "data": { "counts": [10, 20, 5, 0, 7] }
            }));
        });

        let from = Utc.with_ymd_and_hms(2024, 2, 29, 12, 0, 0).unwrap();
        let count = stats_client(&server).active_participant_count(from).await.unwrap();

        mock.assert();
        assert_eq!(count, 42);
    }

    #[tokio::test]
    async fn active_count_forwards_server_message_on_failure_flag() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/statistic/users/active/stats");
            then.status(200)
                .json_body(json!({ "success": false, "message": "rate limited" }));
        });

        let result = stats_client(&server).active_participant_count(Utc::now()).await;
        match result {
            Err(StatsError::Unsuccessful(message)) => assert!(message.contains("rate limited")),
            other => panic!("expected Unsuccessful, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn active_count_rejects_missing_counts() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/statistic/users/active/stats");
            then.status(200).json_body(json!({ "success": true, "data": {} }));
        });

        let result = stats_client(&server).active_participant_count(Utc::now()).await;
        assert!(matches!(result, Err(StatsError::Malformed(_))));
    }

    #[tokio::test]
    async fn active_count_rejects_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/statistic/users/active/stats");
            then.status(503);
        });

        let result = stats_client(&server).active_participant_count(Utc::now()).await;
        assert!(matches!(result, Err(StatsError::Status { status, .. }) if status == 503));
    }

    #[tokio::test]
    async fn transaction_speed_preserves_server_order() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v1/statistic/transactions/speed")
                .query_param("count", "42")
                .query_param_exists("from")
                .query_param_exists("to");
            then.status(200).json_body(json!({
                "success": true,
                "data": [
                    { "btcAddress": "bc1fastest", "avgSpeed": 1.2 },
                    { "btcAddress": "bc1second", "avgSpeed": 3.4 }
                ]
            }));
        });

        let entries = stats_client(&server)
            .transaction_speed(&sample_range(), Some(42), Window::Daily)
            .await
            .unwrap();

        mock.assert();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].btc_address, "bc1fastest");
        assert_eq!(entries[1].btc_address, "bc1second");
    }

    #[tokio::test]
    async fn transaction_speed_rejects_missing_count_without_network_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/v1/statistic/transactions/speed");
            then.status(200).json_body(json!({ "success": true, "data": [] }));
        });

        let result = stats_client(&server)
            .transaction_speed(&sample_range(), None, Window::Weekly)
            .await;

        assert!(matches!(result, Err(StatsError::InvalidCount)));
        mock.assert_hits(0);
    }

    #[tokio::test]
    async fn transaction_speed_rejects_non_array_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/statistic/transactions/speed");
            then.status(200)
                .json_body(json!({ "success": true, "data": { "unexpected": true } }));
        });

        let result = stats_client(&server)
            .transaction_speed(&sample_range(), Some(3), Window::Daily)
            .await;
        assert!(matches!(result, Err(StatsError::Malformed(_))));
    }

    #[tokio::test]
    async fn total_transactions_reads_nested_total() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/v1/addresses/bc1qexample/transactions");
            then.status(200).json_body(json!({ "data": { "total": 12345 } }));
        });

        let total = address_client(&server).total_transactions("bc1qexample").await.unwrap();

        mock.assert();
        assert_eq!(total, 12345);
    }

    #[tokio::test]
    async fn total_transactions_rejects_http_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/addresses/unknown/transactions");
            then.status(404).body("no such address");
        });

        let result = address_client(&server).total_transactions("unknown").await;
        assert!(matches!(result, Err(StatsError::Status { status, .. }) if status == 404));
    }

    #[tokio::test]
    async fn total_transactions_rejects_missing_total() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/v1/addresses/bc1qexample/transactions");
            then.status(200).json_body(json!({ "data": {} }));
        });

        let result = address_client(&server).total_transactions("bc1qexample").await;
        assert!(matches!(result, Err(StatsError::Malformed(_))));
    }
}
