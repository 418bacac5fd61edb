use std::sync::OnceLock;

use regex::Regex;

use crate::models::TimelineWindow;

/// Sentinel upper bound for "Any Time" tips. Stands in for "the whole
/// semester" and is not derived from any calendar.
pub const ANY_TIME_LAST_WEEK: u32 = 100;

const ANY_TIME_PHRASE: &str = "Any Time";

fn week_range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^Week\s*([0-9]+)\s*[-\x{2013}\x{2014}]\s*([0-9]+)$")
            .expect("week range pattern is valid")
    })
}

fn single_week_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^Week\s*([0-9]+)$").expect("single week pattern is valid"))
}

/// Parses the free-text Timeline column. Rules are tried in order and the
/// first match wins; `None` means the row must be dropped from the catalog.
/// Week patterns must cover the whole trimmed text. A range may be separated
/// by a hyphen, en dash or em dash.
pub fn parse_timeline(text: &str) -> Option<TimelineWindow> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if text.contains(ANY_TIME_PHRASE) {
        return TimelineWindow::new(0, ANY_TIME_LAST_WEEK);
    }

    if let Some(caps) = week_range_pattern().captures(text) {
        let start = caps[1].parse().ok()?;
        let end = caps[2].parse().ok()?;
        return TimelineWindow::new(start, end);
    }

    if let Some(caps) = single_week_pattern().captures(text) {
        let week = caps[1].parse().ok()?;
        return TimelineWindow::new(week, week);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(start: u32, end: u32) -> Option<TimelineWindow> {
        TimelineWindow::new(start, end)
    }

    #[test]
    fn blank_timelines_are_rejected() {
        assert_eq!(parse_timeline(""), None);
        assert_eq!(parse_timeline("   \t "), None);
    }

    #[test]
    fn any_time_maps_to_sentinel_window() {
        assert_eq!(parse_timeline("Any Time"), window(0, 100));
        assert_eq!(parse_timeline("Any Time (Week 3 - 5)"), window(0, 100));
        assert_eq!(parse_timeline("Week 7, or Any Time"), window(0, 100));
    }

    #[test]
    fn week_ranges_parse_both_bounds() {
        assert_eq!(parse_timeline("Week 2 - 4"), window(2, 4));
        assert_eq!(parse_timeline("Week 10-12"), window(10, 12));
        assert_eq!(parse_timeline("  Week 0 -  1 "), window(0, 1));
    }

    #[test]
    fn dash_variants_keep_the_full_range() {
        assert_eq!(parse_timeline("Week 2 \u{2013} 4"), window(2, 4));
        assert_eq!(parse_timeline("Week 2\u{2014}4"), window(2, 4));
    }

    #[test]
    fn week_text_with_extra_content_is_rejected() {
        assert_eq!(parse_timeline("Week 3, Week 5 - 6"), None);
        assert_eq!(parse_timeline("Week 13 (finals)"), None);
        assert_eq!(parse_timeline("Week 2 ~ 4"), None);
    }

    #[test]
    fn only_ascii_digits_count_as_week_numbers() {
        assert_eq!(parse_timeline("Week \u{0664}"), None);
        assert_eq!(parse_timeline("Week \u{0662} - \u{0664}"), None);
    }

    #[test]
    fn single_week_is_a_one_week_window() {
        assert_eq!(parse_timeline("Week 5"), window(5, 5));
        assert_eq!(parse_timeline("Week13"), window(13, 13));
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        assert_eq!(parse_timeline("Week 6 - 2"), None);
    }

    #[test]
    fn unrecognized_text_is_rejected() {
        assert_eq!(parse_timeline("Midterms"), None);
        assert_eq!(parse_timeline("any time"), None);
        assert_eq!(parse_timeline("Week"), None);
        assert_eq!(parse_timeline("Week 99999999999"), None);
    }
}
