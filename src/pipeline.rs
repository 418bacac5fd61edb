use std::path::PathBuf;

use chrono::NaiveDate;
use rand::Rng;
use tracing::{debug, info};

use crate::catalog;
use crate::history::ShownHistory;
use crate::models::TipRecord;
use crate::render;
use crate::selection;

#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog: PathBuf,
    pub history: PathBuf,
    pub out: PathBuf,
    pub semester_start: NaiveDate,
}

#[derive(Debug)]
pub enum PickOutcome {
    Published { week: i64, tip: TipRecord },
    Exhausted { week: i64, eligible: usize },
}

impl PickOutcome {
    pub fn summary(&self) -> String {
        match self {
            PickOutcome::Published { week, tip } => format!(
                "Tip JSON updated for week {week} with: {} ({})",
                tip.title, tip.category
            ),
            PickOutcome::Exhausted { week, eligible: 0 } => {
                format!("No tips scheduled for week {week}. Output left unchanged.")
            }
            PickOutcome::Exhausted { week, eligible } => format!(
                "No new tips for week {week} ({eligible} eligible, all already shown). Output left unchanged."
            ),
        }
    }
}

/// Runs one selection cycle.
///
/// The output artifact is written before the history is saved, so a failed
/// write never marks a tip as shown. Concurrent runs against the same history
/// file are not guarded against; the last writer wins.
pub fn pick<R>(settings: &Settings, today: NaiveDate, rng: &mut R) -> anyhow::Result<PickOutcome>
where
    R: Rng + ?Sized,
{
    let mut shown = ShownHistory::load(&settings.history)?;
    let tips = catalog::load_catalog(&settings.catalog)?;
    let week = selection::current_week(settings.semester_start, today);
    let eligible = selection::filter_eligible(&tips, week);
    info!(week, catalog = tips.len(), eligible = eligible.len(), shown = shown.len(), "selecting tip");

    let Some(tip) = selection::select_tip(&eligible, &shown, rng) else {
        return Ok(PickOutcome::Exhausted {
            week,
            eligible: eligible.len(),
        });
    };

    let document = render::build_document(tip);
    render::write_document(&document, &settings.out)?;
    debug!(out = %settings.out.display(), "tip document written");

    shown.record(&tip.id);
    shown.save(&settings.history)?;
    info!(id = %tip.id, "tip recorded as shown");

    Ok(PickOutcome::Published {
        week,
        tip: tip.clone(),
    })
}

#[derive(Debug)]
pub struct EligibleTip {
    pub tip: TipRecord,
    pub shown: bool,
}

/// Tips eligible in `week`, flagged with whether they were already shown.
pub fn eligible(settings: &Settings, week: i64) -> anyhow::Result<Vec<EligibleTip>> {
    let shown = ShownHistory::load(&settings.history)?;
    let tips = catalog::load_catalog(&settings.catalog)?;

    Ok(selection::filter_eligible(&tips, week)
        .into_iter()
        .map(|tip| EligibleTip {
            shown: shown.contains(&tip.id),
            tip: tip.clone(),
        })
        .collect())
}

/// Returns how many ids were cleared.
pub fn reset_history(settings: &Settings) -> anyhow::Result<usize> {
    let previous = ShownHistory::load(&settings.history)?;
    if previous.is_empty() {
        debug!(path = %settings.history.display(), "history already empty");
    }
    ShownHistory::default().save(&settings.history)?;
    info!(cleared = previous.len(), "history reset");
    Ok(previous.len())
}
