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

//! Timestamp formatting and trailing-window derivation for the statistics API.

use chrono::{DateTime, Duration, Utc};

/// Timestamp layout the statistics API expects in `from`/`to` query parameters.
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats an instant as `YYYY-MM-DD HH:MM:SS` in UTC, zero-padded.
pub fn format_api_timestamp(instant: DateTime<Utc>) -> String {
    instant.format(API_TIMESTAMP_FORMAT).to_string()
}

/// Leaderboard aggregation window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Daily,
    Weekly,
}

impl Window {
    /// Length of the trailing window.
    pub fn duration(&self) -> Duration {
        match self {
            Window::Daily => Duration::hours(24),
            Window::Weekly => Duration::days(7),
        }
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Window::Daily => write!(f, "daily"),
            Window::Weekly => write!(f, "weekly"),
        }
    }
}

/// A concrete `[from, to]` query range in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl TimeRange {
    /// Trailing range for `window`, ending at `now`.
    ///
    /// Callers deriving both the daily and the weekly range for one run should
    /// capture `now` once and pass the same instant twice, so the two ranges
    /// cannot drift apart.
    pub fn ending_at(now: DateTime<Utc>, window: Window) -> Self {
        Self { from: now - window.duration(), to: now }
    }
}
