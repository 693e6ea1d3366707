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

use serde::Serialize;
use thunderbolt_stats::SpeedEntry;

/// Where an address landed within one leaderboard snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankInfo {
    /// 1-based position, or `None` when the address is not on the board.
    pub rank: Option<u64>,
    /// Number of entries in the snapshot the rank was resolved against.
    pub total_records: usize,
}

impl RankInfo {
    pub const NOT_RANKED: RankInfo = RankInfo { rank: None, total_records: 0 };
}

impl std::fmt::Display for RankInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rank {
            Some(rank) => write!(f, "{rank}"),
            None => write!(f, "Not Ranked"),
        }
    }
}

/// First-match linear scan over a snapshot.
///
/// The scan is ordered because the server's array order *is* the ranking;
/// duplicate addresses resolve to the earliest occurrence. Matching is
/// case-insensitive. A missing snapshot resolves to not-ranked over zero
/// records.
pub fn resolve_rank(address: &str, snapshot: Option<&[SpeedEntry]>) -> RankInfo {
    let Some(entries) = snapshot else {
        return RankInfo::NOT_RANKED;
    };
    let needle = address.to_lowercase();
    let rank = entries
        .iter()
        .position(|entry| entry.btc_address.to_lowercase() == needle)
        .map(|idx| idx as u64 + 1);
    RankInfo { rank, total_records: entries.len() }
}
