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

//! Address lookup against the Thunderbolt transaction-speed leaderboards.
//!
//! One search validates the address, refreshes the daily and weekly
//! leaderboard snapshots through a guarded, strictly sequential fetch pipeline
//! ([`session`]), resolves the address's rank in each snapshot ([`rank`]),
//! evaluates reward and prize tiers ([`tiers`]), and renders a plain-text
//! report ([`report`]).

pub mod errors;
pub mod rank;
pub mod report;
pub mod search;
pub mod session;
pub mod tiers;

pub use errors::{CodedError, SearchError};
pub use rank::{resolve_rank, RankInfo};
pub use search::{is_btc_address, run_search, SearchReport};
pub use session::LookupSession;
