use crate::playtime::Minutes;
use crate::store::HeroTimes;

/// A hero whose stored time grew during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroChange {
    pub hero: String,
    pub previous: Option<Minutes>,
    pub current: Minutes,
}

impl HeroChange {
    pub fn gained(&self) -> Minutes {
        self.current.saturating_sub(self.previous.unwrap_or(0))
    }
}

/// Merges freshly fetched totals into the stored table. A hero's value only
/// moves up; heroes missing from `current` keep their stored value.
pub fn reconcile(previous: &HeroTimes, current: &HeroTimes) -> HeroTimes {
    let mut updated = previous.clone();

    for (hero, &current_minutes) in current {
        let prev_minutes = previous.get(hero).copied().unwrap_or(0);
        if current_minutes > prev_minutes {
            updated.insert(hero.clone(), current_minutes);
        }
    }

    updated
}

/// Heroes whose value differs between `previous` and `updated`, by name.
pub fn changes(previous: &HeroTimes, updated: &HeroTimes) -> Vec<HeroChange> {
    updated
        .iter()
        .filter_map(|(hero, &current)| {
            let prev = previous.get(hero).copied();
            (prev != Some(current)).then(|| HeroChange {
                hero: hero.clone(),
                previous: prev,
                current,
            })
        })
        .collect()
}

/// Adds one account's table into the cross-account totals.
pub fn accumulate(mut totals: HeroTimes, table: &HeroTimes) -> HeroTimes {
    for (hero, &minutes) in table {
        let total = totals.entry(hero.clone()).or_insert(0);
        *total = total.saturating_add(minutes);
    }
    totals
}
