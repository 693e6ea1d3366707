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

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use thunderbolt_lookup::{
    report::{render_report, ConsoleSink},
    run_search, LookupSession,
};
use thunderbolt_stats::{AddressClient, StatsClient, DEFAULT_ADDRESS_API_URL, DEFAULT_STATS_URL};
use url::Url;

/// Look up a BTC address on the Thunderbolt transaction-speed leaderboards.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct MainArgs {
    /// BTC address to look up.
    address: String,
    /// Base URL of the statistics service.
    #[clap(long, env = "THUNDERBOLT_STATS_URL", default_value = DEFAULT_STATS_URL)]
    stats_url: Url,
    /// Base URL of the per-address transaction API.
    #[clap(long, env = "THUNDERBOLT_ADDRESS_API_URL", default_value = DEFAULT_ADDRESS_API_URL)]
    address_api_url: Url,
    /// HTTP request timeout in seconds.
    #[clap(long, default_value = "30")]
    timeout: u64,
    /// Whether to log in JSON format.
    #[clap(long, env, default_value_t = false)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = MainArgs::parse();

    if args.log_json {
        tracing_subscriber::fmt()
            .with_ansi(false)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let timeout = Duration::from_secs(args.timeout);
    let stats =
        StatsClient::new(args.stats_url, timeout).context("Failed to build stats client")?;
    let addresses = AddressClient::new(args.address_api_url, timeout)
        .context("Failed to build address API client")?;

    let session = LookupSession::new();
    let report = run_search(&session, &stats, &addresses, &ConsoleSink, &args.address).await?;

    println!();
    print!("{}", render_report(&report));
    Ok(())
}
