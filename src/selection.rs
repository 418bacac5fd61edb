use chrono::NaiveDate;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::history::ShownHistory;
use crate::models::TipRecord;

/// Whole weeks elapsed since the semester started. Dates before the start
/// give negative weeks, which no timeline window contains.
pub fn current_week(semester_start: NaiveDate, today: NaiveDate) -> i64 {
    (today - semester_start).num_days().div_euclid(7)
}

/// Tips whose window contains `week`, in catalog order.
pub fn filter_eligible(catalog: &[TipRecord], week: i64) -> Vec<&TipRecord> {
    catalog
        .iter()
        .filter(|tip| tip.window.contains(week))
        .collect()
}

/// Picks one eligible tip that has not been shown yet, uniformly at random.
/// `None` means every eligible tip has already been used.
pub fn select_tip<'a, R>(
    eligible: &[&'a TipRecord],
    shown: &ShownHistory,
    rng: &mut R,
) -> Option<&'a TipRecord>
where
    R: Rng + ?Sized,
{
    let candidates: Vec<&'a TipRecord> = eligible
        .iter()
        .copied()
        .filter(|tip| !shown.contains(&tip.id))
        .collect();

    candidates.choose(rng).copied()
}
