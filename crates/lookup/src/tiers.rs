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

//! Static reward and prize tier tables, and their evaluation rules.

use serde::Serialize;

/// A cumulative total-transaction reward threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RewardTier {
    pub threshold: u64,
    pub name: &'static str,
}

/// Discord-role rewards for all-time transaction totals, ascending by
/// threshold. Tiers are nested: every tier at or below the user's total is
/// achieved, not just the highest one.
pub const REWARD_TIERS: &[RewardTier] = &[
    RewardTier { threshold: 1_000, name: "@Spark role on Discord" },
    RewardTier { threshold: 10_000, name: "@Pulse role on Discord" },
    RewardTier { threshold: 100_000, name: "@Storm role on Discord" },
];

/// Standing of one reward tier against a user's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TierStatus {
    Achieved,
    /// Short of the threshold by this many transactions.
    Pending { needed: u64 },
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RewardStanding {
    pub tier: RewardTier,
    pub status: TierStatus,
}

/// Evaluation of every reward tier against one total.
#[derive(Debug, Clone, Serialize)]
pub struct RewardEvaluation {
    pub total: u64,
    pub standings: Vec<RewardStanding>,
    /// Name of the greatest achieved threshold, if any.
    pub highest_achieved: Option<&'static str>,
}

/// Classifies `total` against `tiers`, which must be in ascending threshold
/// order.
pub fn evaluate_rewards(total: u64, tiers: &[RewardTier]) -> RewardEvaluation {
    let mut standings = Vec::with_capacity(tiers.len());
    let mut highest_achieved = None;
    for tier in tiers {
        let status = if total >= tier.threshold {
            highest_achieved = Some(tier.name);
            TierStatus::Achieved
        } else {
            TierStatus::Pending { needed: tier.threshold - total }
        };
        standings.push(RewardStanding { tier: *tier, status });
    }
    RewardEvaluation { total, standings, highest_achieved }
}

/// How a prize tier matches a weekly rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PrizeCondition {
    /// Exactly this rank.
    Exact(u64),
    /// Any rank in `min..=max`.
    Range { min: u64, max: u64 },
}

impl PrizeCondition {
    fn matches(&self, rank: u64) -> bool {
        match *self {
            PrizeCondition::Exact(want) => rank == want,
            PrizeCondition::Range { min, max } => (min..=max).contains(&rank),
        }
    }

    /// Worst rank this condition still covers.
    pub fn upper_bound(&self) -> u64 {
        match *self {
            PrizeCondition::Exact(rank) => rank,
            PrizeCondition::Range { max, .. } => max,
        }
    }
}

impl std::fmt::Display for PrizeCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            PrizeCondition::Exact(rank) => write!(f, "Rank {rank}"),
            PrizeCondition::Range { min, max } => write!(f, "Ranks {min} - {max}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PrizeTier {
    pub condition: PrizeCondition,
    pub reward: &'static str,
}

/// Weekly rank prizes, checked in declaration order; the first matching tier
/// wins, which is the tie-break if ranges ever overlap. Ranks beyond the last
/// tier earn nothing.
pub const WEEKLY_RANK_PRIZES: &[PrizeTier] = &[
    PrizeTier { condition: PrizeCondition::Exact(1), reward: "🥇 $50 + @Speed Master role" },
    PrizeTier { condition: PrizeCondition::Exact(2), reward: "🥈 $25" },
    PrizeTier { condition: PrizeCondition::Exact(3), reward: "🥉 $10" },
    PrizeTier { condition: PrizeCondition::Range { min: 4, max: 10 }, reward: "$3 each" },
];

/// Prize for a resolved weekly rank, if any. Unranked and zero ranks never
/// match.
pub fn prize_for_rank(rank: Option<u64>, prizes: &[PrizeTier]) -> Option<&PrizeTier> {
    let rank = rank.filter(|&r| r > 0)?;
    prizes.iter().find(|tier| tier.condition.matches(rank))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewards_are_cumulative() {
        let eval = evaluate_rewards(10_000, REWARD_TIERS);

        assert_eq!(eval.standings[0].status, TierStatus::Achieved);
        assert_eq!(eval.standings[1].status, TierStatus::Achieved);
        assert_eq!(eval.standings[2].status, TierStatus::Pending { needed: 90_000 });
        assert_eq!(eval.highest_achieved, Some("@Pulse role on Discord"));
    }

    #[test]
    fn no_tier_achieved_below_first_threshold() {
        let eval = evaluate_rewards(999, REWARD_TIERS);
        assert!(eval.standings.iter().all(|s| matches!(s.status, TierStatus::Pending { .. })));
        assert_eq!(eval.highest_achieved, None);
        assert_eq!(eval.standings[0].status, TierStatus::Pending { needed: 1 });
    }

    #[test]
    fn all_tiers_achieved_at_top() {
        let eval = evaluate_rewards(250_000, REWARD_TIERS);
        assert!(eval.standings.iter().all(|s| s.status == TierStatus::Achieved));
        assert_eq!(eval.highest_achieved, Some("@Storm role on Discord"));
    }

    #[test]
    fn exact_ranks_win_their_prize() {
        let prize = prize_for_rank(Some(1), WEEKLY_RANK_PRIZES).unwrap();
        assert_eq!(prize.reward, "🥇 $50 + @Speed Master role");
    }

    #[test]
    fn range_tier_covers_middle_ranks() {
        let prize = prize_for_rank(Some(5), WEEKLY_RANK_PRIZES).unwrap();
        assert_eq!(prize.reward, "$3 each");
    }

    #[test]
    fn ranks_outside_all_tiers_earn_nothing() {
        assert!(prize_for_rank(Some(11), WEEKLY_RANK_PRIZES).is_none());
        assert!(prize_for_rank(None, WEEKLY_RANK_PRIZES).is_none());
        assert!(prize_for_rank(Some(0), WEEKLY_RANK_PRIZES).is_none());
    }

    #[test]
    fn declaration_order_breaks_overlaps() {
        let overlapping = [
            PrizeTier { condition: PrizeCondition::Range { min: 1, max: 5 }, reward: "first" },
            PrizeTier { condition: PrizeCondition::Range { min: 3, max: 10 }, reward: "second" },
        ];
        assert_eq!(prize_for_rank(Some(4), &overlapping).unwrap().reward, "first");
        assert_eq!(prize_for_rank(Some(8), &overlapping).unwrap().reward, "second");
    }

    #[test]
    fn condition_labels() {
        assert_eq!(PrizeCondition::Exact(2).to_string(), "Rank 2");
        assert_eq!(PrizeCondition::Range { min: 4, max: 10 }.to_string(), "Ranks 4 - 10");
        assert_eq!(PrizeCondition::Range { min: 4, max: 10 }.upper_bound(), 10);
    }
}
