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

//! Plain-text rendering of search results, and the progress-message sink.

use std::fmt::Write;

use crate::{
    rank::RankInfo,
    search::SearchReport,
    tiers::{prize_for_rank, TierStatus, WEEKLY_RANK_PRIZES},
};

/// Consumer of progress messages emitted while a search runs.
pub trait StatusSink: Send + Sync {
    fn status(&self, message: &str);
}

/// Sink that writes progress lines to stdout.
pub struct ConsoleSink;

impl StatusSink for ConsoleSink {
    fn status(&self, message: &str) {
        println!("{message}");
    }
}

/// Renders the full result: address header, the two rank blocks, the reward
/// block (or its inline fetch error), and the weekly prize block.
pub fn render_report(report: &SearchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Address: {}", report.address);
    out.push('\n');
    out.push_str(&render_rank_block("Daily Rank", &report.daily));
    out.push('\n');
    out.push_str(&render_rank_block("Weekly Rank", &report.weekly));
    out.push('\n');
    out.push_str(&render_rewards_block(report));
    out.push('\n');
    out.push_str(&render_prize_block(&report.weekly));
    out
}

fn render_rank_block(title: &str, info: &RankInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    match info.rank {
        Some(rank) => {
            let _ = writeln!(out, "  {rank} out of {} active addresses", info.total_records);
        }
        None => {
            let _ = writeln!(out, "  Not Ranked (total addresses: {})", info.total_records);
        }
    }
    out
}

fn render_rewards_block(report: &SearchReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Transaction Rewards");

    let eval = match &report.rewards {
        Ok(eval) => eval,
        Err(err) => {
            // The rewards sub-fetch degrades on its own; the rank blocks above
            // are untouched by this failure.
            let _ = writeln!(out, "  Could not load transaction rewards: {err}");
            return out;
        }
    };

    let _ = writeln!(out, "  Your total transactions: {}", eval.total);
    for standing in &eval.standings {
        match standing.status {
            TierStatus::Achieved => {
                let _ = writeln!(
                    out,
                    "  [unlocked] {} (unlocked at {} transactions)",
                    standing.tier.name, standing.tier.threshold
                );
            }
            TierStatus::Pending { needed } => {
                let _ = writeln!(
                    out,
                    "  [locked]   {} (requires {} transactions, {} more needed)",
                    standing.tier.name, standing.tier.threshold, needed
                );
            }
        }
    }
    match eval.highest_achieved {
        Some(name) => {
            let _ = writeln!(out, "  Highest unlocked transaction role: {name}");
        }
        None => {
            let _ = writeln!(
                out,
                "  Keep transacting to unlock your first Discord role based on total transactions!"
            );
        }
    }
    out
}

fn render_prize_block(weekly: &RankInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Weekly Rank Prizes");

    let Some(rank) = weekly.rank.filter(|&r| r > 0) else {
        let _ = writeln!(
            out,
            "  You are not currently ranked this week, or your rank is not eligible for prizes."
        );
        if weekly.total_records > 0 {
            let _ = writeln!(out, "  (Current weekly participants: {})", weekly.total_records);
        }
        return out;
    };

    let earned = prize_for_rank(Some(rank), WEEKLY_RANK_PRIZES);
    let _ = writeln!(out, "  Your weekly rank: {rank} out of {}", weekly.total_records);
    match earned {
        Some(tier) => {
            let _ = writeln!(out, "  Congratulations! You've earned: {}", tier.reward);
        }
        None => {
            let top = WEEKLY_RANK_PRIZES.last().map(|t| t.condition.upper_bound()).unwrap_or(0);
            let _ = writeln!(
                out,
                "  You are ranked, but not within the prize tiers for this week. Aim for the top {top}!"
            );
        }
    }

    let _ = writeln!(out, "  All weekly prize tiers:");
    for tier in WEEKLY_RANK_PRIZES {
        let marker = if earned == Some(tier) { '>' } else { '-' };
        let _ = writeln!(out, "  {marker} {}: {}", tier.condition, tier.reward);
    }
    out
}
