use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::models::{TipRecord, TipRow};
use crate::timeline;

pub fn load_catalog(csv_path: &Path) -> anyhow::Result<Vec<TipRecord>> {
    let reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open tip catalog {}", csv_path.display()))?;
    let tips = read_catalog(reader)
        .with_context(|| format!("failed to read tip catalog {}", csv_path.display()))?;
    debug!(count = tips.len(), path = %csv_path.display(), "catalog loaded");
    Ok(tips)
}

/// Reads every row, keeping only those with a parseable timeline.
pub fn read_catalog<R: Read>(mut reader: csv::Reader<R>) -> anyhow::Result<Vec<TipRecord>> {
    let mut tips = Vec::new();

    for result in reader.deserialize::<TipRow>() {
        let row = result?;
        let Some(window) = timeline::parse_timeline(&row.timeline) else {
            debug!(id = %row.id, timeline = %row.timeline, "dropping tip with unparseable timeline");
            continue;
        };

        tips.push(TipRecord {
            id: row.id,
            category: row.category,
            title: row.title,
            description: row.description,
            link: row.link,
            window,
        });
    }

    Ok(tips)
}
