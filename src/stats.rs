//! Chart Data Reshaping
//!
//! Pure helpers that turn the backend's daily aggregates into chart-ready
//! series and weekday buckets. Kept browser-free so the bucketing math is
//! unit-testable.

use chrono::{Datelike, NaiveDate};

use crate::model::DailyStat;

/// Weekday labels, Monday-start.
pub const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Hour-of-day volume per weekday: `[weekday][hour]`.
pub type HeatmapGrid = [[u32; 24]; 7];

/// Monday-start weekday index (Mon=0 .. Sun=6) for a `YYYY-MM-DD` date.
pub fn weekday_index(date: &str) -> Option<usize> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(|d| d.weekday().num_days_from_monday() as usize)
}

/// Total served customers per weekday, for the peak-day bar chart.
/// Days with unparseable dates are skipped.
pub fn peak_day_totals(daily: &[DailyStat]) -> [u32; 7] {
    let mut totals = [0u32; 7];
    for day in daily {
        if let Some(idx) = weekday_index(&day.date) {
            totals[idx] += day.served;
        }
    }
    totals
}

/// Hour-of-day volume summed per weekday: `[weekday][hour]`.
pub fn aggregate_heatmap(daily: &[DailyStat]) -> HeatmapGrid {
    let mut heatmap = [[0u32; 24]; 7];
    for day in daily {
        let Some(idx) = weekday_index(&day.date) else {
            continue;
        };
        for (hour, count) in day.hourly.iter().take(24).enumerate() {
            heatmap[idx][hour] += count;
        }
    }
    heatmap
}

/// `MM-DD` labels for trend charts.
pub fn short_labels(daily: &[DailyStat]) -> Vec<String> {
    daily
        .iter()
        .map(|d| d.date.get(5..).unwrap_or(&d.date).to_string())
        .collect()
}

pub fn served_series(daily: &[DailyStat]) -> Vec<f64> {
    daily.iter().map(|d| d.served as f64).collect()
}

pub fn left_series(daily: &[DailyStat]) -> Vec<f64> {
    daily.iter().map(|d| d.left as f64).collect()
}

pub fn wait_series(daily: &[DailyStat]) -> Vec<f64> {
    daily.iter().map(|d| d.avg_wait_minutes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, served: u32) -> DailyStat {
        DailyStat {
            date: date.to_string(),
            served,
            left: 0,
            avg_wait_minutes: 0.0,
            hourly: vec![],
        }
    }

    #[test]
    fn monday_start_indexing() {
        // 2025-03-03 is a Monday, 2025-03-09 a Sunday.
        assert_eq!(weekday_index("2025-03-03"), Some(0));
        assert_eq!(weekday_index("2025-03-08"), Some(5));
        assert_eq!(weekday_index("2025-03-09"), Some(6));
        assert_eq!(weekday_index("not-a-date"), None);
    }

    #[test]
    fn sunday_lands_in_sunday_bucket() {
        // A Sunday entry must map to "Sun", not "Sat".
        let totals = peak_day_totals(&[day("2025-03-09", 12)]);
        assert_eq!(totals[6], 12);
        assert_eq!(totals[5], 0);
        assert_eq!(DAY_NAMES[6], "Sun");
    }

    #[test]
    fn full_week_buckets_correctly() {
        let daily: Vec<DailyStat> = (3..10)
            .map(|d| day(&format!("2025-03-{d:02}"), d as u32))
            .collect();
        let totals = peak_day_totals(&daily);
        // Mon 2025-03-03 served 3 ... Sun 2025-03-09 served 9
        assert_eq!(totals, [3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn heatmap_sums_same_weekday() {
        let mut monday_a = day("2025-03-03", 0);
        monday_a.hourly = vec![0; 24];
        monday_a.hourly[9] = 4;
        let mut monday_b = day("2025-03-10", 0);
        monday_b.hourly = vec![0; 24];
        monday_b.hourly[9] = 2;
        monday_b.hourly[18] = 7;

        let heatmap = aggregate_heatmap(&[monday_a, monday_b]);
        assert_eq!(heatmap[0][9], 6);
        assert_eq!(heatmap[0][18], 7);
        assert_eq!(heatmap[1][9], 0);
    }

    #[test]
    fn heatmap_tolerates_short_hourly_arrays() {
        let mut d = day("2025-03-03", 0);
        d.hourly = vec![1, 2, 3];
        let heatmap = aggregate_heatmap(&[d]);
        assert_eq!(heatmap[0][2], 3);
        assert_eq!(heatmap[0][3], 0);
    }

    #[test]
    fn labels_drop_the_year() {
        let labels = short_labels(&[day("2025-03-09", 0)]);
        assert_eq!(labels, vec!["03-09".to_string()]);
    }
}
