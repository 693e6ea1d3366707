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

//! One search, end to end: validation, refresh, rank resolution, tiers.

use thunderbolt_stats::{AddressClient, StatsClient, StatsError, Window};

use crate::{
    errors::SearchError,
    rank::RankInfo,
    report::StatusSink,
    session::LookupSession,
    tiers::{evaluate_rewards, RewardEvaluation, REWARD_TIERS},
};

/// Everything one search produced. The weekly prize is derived from `weekly`
/// at render time.
#[derive(Debug)]
pub struct SearchReport {
    pub address: String,
    pub daily: RankInfo,
    pub weekly: RankInfo,
    /// Standing against the reward tiers, or the error that kept the optional
    /// rewards sub-fetch from completing.
    pub rewards: Result<RewardEvaluation, StatsError>,
}

/// Accepts the mainnet BTC address shapes by prefix and length alone (`bc1`,
/// `1`, or `3`; more than 25 and fewer than 65 characters). Anything deeper is
/// the remote API's concern.
pub fn is_btc_address(term: &str) -> bool {
    let lower = term.to_lowercase();
    (lower.starts_with("bc1") || lower.starts_with('1') || lower.starts_with('3'))
        && term.len() > 25
        && term.len() < 65
}

/// Runs one search for `term`.
///
/// Invalid input is rejected before any network activity. A failed refresh is
/// terminal; a failed rewards sub-fetch is not, and is carried inside the
/// report so only that block degrades.
pub async fn run_search(
    session: &LookupSession,
    stats: &StatsClient,
    addresses: &AddressClient,
    sink: &dyn StatusSink,
    term: &str,
) -> Result<SearchReport, SearchError> {
    let term = term.trim();
    if !is_btc_address(term) {
        return Err(SearchError::InvalidAddress(term.to_string()));
    }

    if !session.refresh(stats, sink).await {
        return Err(SearchError::RefreshFailed);
    }

    let daily = session.rank_of(term, Window::Daily);
    let weekly = session.rank_of(term, Window::Weekly);

    sink.status("Fetching your transaction rewards...");
    let rewards = match addresses.total_transactions(term).await {
        Ok(total) => Ok(evaluate_rewards(total, REWARD_TIERS)),
        Err(err) => {
            tracing::error!("Error fetching total transactions for rewards: {err}");
            Err(err)
        }
    };

    Ok(SearchReport { address: term.to_string(), daily, weekly, rewards })
}
