//! Per-account processing: load the stored table, merge in fresh stats,
//! persist, and fold the result into the cross-account totals.

use crate::analysis::reconcile::{accumulate, changes, reconcile, HeroChange};
use crate::error::AppError;
use crate::store::{HeroTimeStore, HeroTimes};

#[derive(Debug)]
pub enum AccountStatus {
    /// Fetched and merged. `saved` is false on a dry run.
    Updated { changes: Vec<HeroChange>, saved: bool },
    /// Merged but the file could not be written.
    SaveFailed { changes: Vec<HeroChange>, error: String },
    /// No fresh stats; the stored table is used as-is.
    FetchFailed { error: String },
    /// Stored table unreadable; the account is left untouched.
    LoadFailed { error: String },
}

#[derive(Debug)]
pub struct AccountRun {
    pub tag: String,
    pub status: AccountStatus,
    /// What this account contributes to the totals.
    pub table: HeroTimes,
}

pub struct Tracker {
    store: HeroTimeStore,
    dry_run: bool,
}

impl Tracker {
    pub fn new(store: HeroTimeStore, dry_run: bool) -> Self {
        Tracker { store, dry_run }
    }

    pub fn store(&self) -> &HeroTimeStore {
        &self.store
    }

    pub fn process_account<F>(&self, tag: &str, fetch: F) -> AccountRun
    where
        F: FnOnce(&str) -> Result<HeroTimes, AppError>,
    {
        let previous = match self.store.load(tag) {
            Ok(table) => table,
            Err(e) => {
                log::info!("skipping {}: {}", tag, e);
                return AccountRun {
                    tag: tag.to_string(),
                    status: AccountStatus::LoadFailed { error: e.to_string() },
                    table: HeroTimes::new(),
                };
            }
        };

        let current = match fetch(tag) {
            Ok(current) => current,
            Err(e) => {
                log::info!("no fresh stats for {}: {}", tag, e);
                return AccountRun {
                    tag: tag.to_string(),
                    status: AccountStatus::FetchFailed { error: e.to_string() },
                    table: previous,
                };
            }
        };

        let updated = reconcile(&previous, &current);
        let changes = changes(&previous, &updated);

        let status = if self.dry_run {
            AccountStatus::Updated { changes, saved: false }
        } else {
            match self.store.save(tag, &updated) {
                Ok(()) => AccountStatus::Updated { changes, saved: true },
                Err(e) => {
                    log::info!("could not save {}: {}", tag, e);
                    AccountStatus::SaveFailed { changes, error: e.to_string() }
                }
            }
        };

        AccountRun {
            tag: tag.to_string(),
            status,
            table: updated,
        }
    }

    /// Processes accounts in order, threading the totals through each step.
    pub fn track_accounts<S, F>(&self, tags: &[S], fetch: F) -> (Vec<AccountRun>, HeroTimes)
    where
        S: AsRef<str>,
        F: FnMut(&str) -> Result<HeroTimes, AppError>,
    {
        self.track_accounts_with(tags, fetch, |_| {})
    }

    /// Like [`Tracker::track_accounts`], calling `on_run` once per account
    /// whatever its outcome.
    pub fn track_accounts_with<S, F, P>(
        &self,
        tags: &[S],
        mut fetch: F,
        mut on_run: P,
    ) -> (Vec<AccountRun>, HeroTimes)
    where
        S: AsRef<str>,
        F: FnMut(&str) -> Result<HeroTimes, AppError>,
        P: FnMut(&AccountRun),
    {
        tags.iter().fold(
            (Vec::with_capacity(tags.len()), HeroTimes::new()),
            |(mut runs, totals), tag| {
                let run = self.process_account(tag.as_ref(), &mut fetch);
                on_run(&run);
                let totals = accumulate(totals, &run.table);
                runs.push(run);
                (runs, totals)
            },
        )
    }
}
