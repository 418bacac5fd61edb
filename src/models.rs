use serde::Deserialize;

/// Inclusive range of semester weeks a tip may be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineWindow {
    pub start_week: u32,
    pub end_week: u32,
}

impl TimelineWindow {
    /// Returns `None` when `start_week > end_week`.
    pub fn new(start_week: u32, end_week: u32) -> Option<Self> {
        (start_week <= end_week).then_some(Self {
            start_week,
            end_week,
        })
    }

    pub fn contains(&self, week: i64) -> bool {
        i64::from(self.start_week) <= week && week <= i64::from(self.end_week)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipRecord {
    pub id: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub link: String,
    pub window: TimelineWindow,
}

/// One raw catalog row as it appears in the CSV file.
#[derive(Debug, Deserialize)]
pub struct TipRow {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Category", default)]
    pub category: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Link", default)]
    pub link: String,
    #[serde(rename = "Timeline", default)]
    pub timeline: String,
}
