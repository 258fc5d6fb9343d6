use std::collections::HashMap;

use itertools::Itertools;

use crate::wod::{radar_order, Category, WodConfig};

/// One answered workout feeding the aggregate chart
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryEntry {
    pub wod_name: String,
    pub percentile: f64,
}

/// Rounded simple mean of the entered percentiles; None when nothing was
/// answered
pub fn average_percentile(entries: &[SummaryEntry]) -> Option<u32> {
    if entries.is_empty() {
        return None;
    }
    let total: f64 = entries.iter().map(|e| e.percentile).sum();
    Some((total / entries.len() as f64).round() as u32)
}

/// Subtitle under the radar chart
pub fn subtitle(entries: &[SummaryEntry]) -> String {
    match average_percentile(entries) {
        Some(avg) => format!("Your average performance is in the {avg}th percentile."),
        None => "Enter a score to see your percentile rank.".to_string(),
    }
}

/// One radar series per visual category. `values` is parallel to the axis
/// labels; an unanswered or out-of-category axis is None, never zero, so the
/// chart shows a gap instead of interpolating.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySeries {
    pub category: Category,
    pub values: Vec<Option<f64>>,
}

/// Axis labels and per-category series of the radar chart, in the fixed
/// display-category order
pub fn radar_series(entries: &[SummaryEntry]) -> (Vec<&'static str>, Vec<CategorySeries>) {
    let axes: Vec<&'static WodConfig> = radar_order();
    let labels: Vec<&'static str> = axes.iter().map(|w| w.name).collect();

    let by_name: HashMap<&str, f64> = entries
        .iter()
        .map(|e| (e.wod_name.as_str(), e.percentile))
        .collect();

    let series = Category::DISPLAY_ORDER
        .iter()
        .map(|&category| CategorySeries {
            category,
            values: axes
                .iter()
                .map(|wod| {
                    if wod.category.display() == category {
                        by_name.get(wod.name).copied()
                    } else {
                        None
                    }
                })
                .collect(),
        })
        .collect();

    (labels, series)
}

/// Per-category entry counts for the summary legend, in display order
pub fn answered_per_category(entries: &[SummaryEntry]) -> Vec<(Category, usize)> {
    let axes = radar_order();
    let answered: Vec<Category> = axes
        .iter()
        .filter(|w| entries.iter().any(|e| e.wod_name == w.name))
        .map(|w| w.category.display())
        .collect();

    let counts = answered.iter().copied().counts();
    Category::DISPLAY_ORDER
        .iter()
        .map(|&category| (category, counts.get(&category).copied().unwrap_or(0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, percentile: f64) -> SummaryEntry {
        SummaryEntry {
            wod_name: name.to_string(),
            percentile,
        }
    }

    #[test]
    fn average_is_rounded_simple_mean() {
        let entries = [entry("Fran", 50.0), entry("Helen", 70.0), entry("Grace", 90.0)];
        assert_eq!(average_percentile(&entries), Some(70));
        assert_eq!(average_percentile(&[]), None);
        assert_eq!(
            average_percentile(&[entry("Fran", 33.0), entry("Helen", 34.0)]),
            Some(34)
        );
    }

    #[test]
    fn subtitle_reports_average_or_prompt() {
        let entries = [entry("Fran", 50.0), entry("Helen", 70.0), entry("Grace", 90.0)];
        assert_eq!(
            subtitle(&entries),
            "Your average performance is in the 70th percentile."
        );
        assert_eq!(subtitle(&[]), "Enter a score to see your percentile rank.");
    }

    #[test]
    fn one_series_per_display_category() {
        let (labels, series) = radar_series(&[]);
        assert_eq!(labels.len(), 11);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].category, Category::Strength);
        for s in &series {
            assert_eq!(s.values.len(), labels.len());
        }
    }

    #[test]
    fn answered_workout_lands_in_its_display_category() {
        let (labels, series) = radar_series(&[entry("Snatch", 64.0)]);
        let axis = labels.iter().position(|l| *l == "Snatch").unwrap();

        let strength = &series[0];
        assert_eq!(strength.values[axis], Some(64.0));
        // all other categories keep a gap on that axis
        assert_eq!(series[1].values[axis], None);
        assert_eq!(series[2].values[axis], None);
    }

    #[test]
    fn unanswered_workout_is_a_gap_not_zero() {
        let (labels, series) = radar_series(&[entry("Fran", 82.0)]);
        let helen = labels.iter().position(|l| *l == "Helen").unwrap();
        let benchmarks = series
            .iter()
            .find(|s| s.category == Category::Benchmarks)
            .unwrap();
        assert_eq!(benchmarks.values[helen], None);

        let fran = labels.iter().position(|l| *l == "Fran").unwrap();
        assert_eq!(benchmarks.values[fran], Some(82.0));
    }

    #[test]
    fn answered_counts_follow_display_merge() {
        let entries = [
            entry("Snatch", 64.0),
            entry("Deadlift", 71.0),
            entry("5k Run", 40.0),
        ];
        let counts = answered_per_category(&entries);
        assert_eq!(counts[0], (Category::Strength, 2));
        assert_eq!(counts[1], (Category::Running, 1));
        assert_eq!(counts[2], (Category::Benchmarks, 0));
    }
}
