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

//! Client library for the Thunderbolt statistics and address APIs.
//!
//! The statistics service exposes an active-user count endpoint and a ranked
//! transaction-speed endpoint; a second host serves per-address transaction
//! totals. Both speak JSON over HTTP GET. Leaderboard responses are already
//! ordered by rank, so this crate never re-sorts them.

pub mod client;
pub mod error;
pub mod time_range;
pub mod types;

pub use client::{AddressClient, StatsClient, DEFAULT_ADDRESS_API_URL, DEFAULT_STATS_URL};
pub use error::StatsError;
pub use time_range::{format_api_timestamp, TimeRange, Window};
pub use types::{ActiveStats, SpeedEntry, StatsEnvelope};
