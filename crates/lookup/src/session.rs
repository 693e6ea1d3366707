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

//! Shared lookup state and the sequential fetch pipeline that fills it.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    RwLock,
};

use chrono::Utc;
use thunderbolt_stats::{SpeedEntry, StatsClient, StatsError, TimeRange, Window};

use crate::{
    rank::{resolve_rank, RankInfo},
    report::StatusSink,
};

/// Single-slot re-entrancy guard. A second concurrent acquire is rejected, not
/// queued.
struct FlagGuard<'a>(&'a AtomicBool);

impl<'a> FlagGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self(flag))
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Per-search state: the two leaderboard snapshots and the in-flight guards.
///
/// Snapshots are all-or-nothing: either the full ordered list one query
/// returned, or `None` when no fetch has succeeded. They are cleared at the
/// start of every refresh and again on any mid-flight failure, so a reader can
/// never observe a half-filled pair.
#[derive(Default)]
pub struct LookupSession {
    daily: RwLock<Option<Vec<SpeedEntry>>>,
    weekly: RwLock<Option<Vec<SpeedEntry>>>,
    refreshing: AtomicBool,
    counting: AtomicBool,
}

impl LookupSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, window: Window) -> &RwLock<Option<Vec<SpeedEntry>>> {
        match window {
            Window::Daily => &self.daily,
            Window::Weekly => &self.weekly,
        }
    }

    fn store(&self, window: Window, value: Option<Vec<SpeedEntry>>) {
        if let Ok(mut guard) = self.cell(window).write() {
            *guard = value;
        }
    }

    fn clear_snapshots(&self) {
        self.store(Window::Daily, None);
        self.store(Window::Weekly, None);
    }

    /// Resolves `address` against a window's current snapshot. A poisoned or
    /// never-filled snapshot resolves to not-ranked over zero records.
    pub fn rank_of(&self, address: &str, window: Window) -> RankInfo {
        match self.cell(window).read() {
            Ok(guard) => resolve_rank(address, guard.as_deref()),
            Err(_) => resolve_rank(address, None),
        }
    }

    /// Fetches the active-participant count for the trailing week,
    /// deduplicating concurrent calls.
    ///
    /// Returns `Ok(None)` when another count fetch is already in flight; that
    /// caller is expected to give up rather than wait. The guard is released
    /// on every path.
    pub async fn active_participant_count(
        &self,
        client: &StatsClient,
    ) -> Result<Option<u64>, StatsError> {
        let Some(_guard) = FlagGuard::acquire(&self.counting) else {
            tracing::debug!("Already fetching active user count, skipping");
            return Ok(None);
        };
        let from = Utc::now() - Window::Weekly.duration();
        let count = client.active_participant_count(from).await?;
        tracing::debug!("Total active user count for transaction data: {count}");
        Ok(Some(count))
    }

    /// One full refresh of both snapshots: participant count, then the daily
    /// leaderboard, then the weekly one, strictly in that order.
    ///
    /// A refresh already in progress rejects this call immediately, leaving
    /// state and the network untouched. Returns `false` on rejection or any
    /// failure; in every failure case both snapshots are left cleared.
    pub async fn refresh(&self, client: &StatsClient, sink: &dyn StatusSink) -> bool {
        let Some(_guard) = FlagGuard::acquire(&self.refreshing) else {
            sink.status("Data fetch already in progress...");
            return false;
        };
        self.clear_snapshots();

        sink.status("Fetching data for address lookup (this may take a moment)...");
        let count = match self.active_participant_count(client).await {
            Ok(Some(count)) => count,
            Ok(None) => {
                sink.status("Failed to get active user count. Cannot perform lookup.");
                return false;
            }
            Err(err) => {
                tracing::error!("Error fetching active user stats count: {err}");
                sink.status(&format!("Error during data fetching: {err}"));
                return false;
            }
        };

        // One clock reading for both windows, so the ranges cannot drift.
        let now = Utc::now();
        for window in [Window::Daily, Window::Weekly] {
            sink.status(&format!("Fetching {window} transaction data..."));
            let range = TimeRange::ending_at(now, window);
            match client.transaction_speed(&range, Some(count), window).await {
                Ok(entries) => self.store(window, Some(entries)),
                Err(err) => {
                    tracing::error!("Error fetching {window} transaction speed data: {err}");
                    sink.status(&format!("Error during data fetching: {err}"));
                    self.clear_snapshots();
                    return false;
                }
            }
        }
        true
    }
}
