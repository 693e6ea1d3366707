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

use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes of the statistics and address API clients.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The request never produced a usable HTTP response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status} from {url}")]
    Status { status: StatusCode, url: String },

    /// The server answered but flagged the request as unsuccessful.
    #[error("API request was not successful: {0}")]
    Unsuccessful(String),

    /// The response body did not match the documented shape.
    #[error("unexpected response shape: {0}")]
    Malformed(String),

    /// A leaderboard query was attempted without a sizing count. Raised before
    /// any network call is made.
    #[error("invalid count from active user stats; cannot fetch transaction data")]
    InvalidCount,

    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}
