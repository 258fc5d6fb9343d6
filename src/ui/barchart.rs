use ratatui::style::Color;

use crate::analysis::WodReport;

/// Unmatched buckets share a neutral blue, matching the category accent only
/// on the bucket that holds the user's score
pub const NEUTRAL_BAR: Color = Color::Rgb(54, 162, 235);

/// One color per histogram bucket; the user's bucket takes the workout's
/// category color
pub fn bar_colors(report: &WodReport) -> Vec<Color> {
    let accent = report.wod.category.color();
    (0..report.response.chart_labels.len())
        .map(|idx| {
            if report.highlight == Some(idx) {
                accent
            } else {
                NEUTRAL_BAR
            }
        })
        .collect()
}

/// Short tick under each bar: the bucket's lower bound
pub fn bucket_tick(label: &str) -> &str {
    label.split(" - ").next().unwrap_or(label).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{PercentileResponse, WodSnapshot};
    use crate::wod::{find_wod, Category, ScoreType};

    fn report(user_score: f64) -> WodReport {
        let fran = find_wod("fran").unwrap();
        WodReport::new(
            fran,
            PercentileResponse {
                config: WodSnapshot {
                    name: "Fran".to_string(),
                    category: Category::Benchmarks,
                    score_type: ScoreType::Time,
                    unit: "s".to_string(),
                },
                user_score,
                percentile: 82.0,
                chart_labels: vec![
                    "1:40 - 2:30".to_string(),
                    "2:30 - 3:20".to_string(),
                    "3:20 - 4:10".to_string(),
                ],
                chart_data: vec![12, 40, 25],
            },
        )
    }

    #[test]
    fn only_matching_bucket_gets_the_accent() {
        let report = report(150.0); // lands in "2:30 - 3:20" (half-open)
        let colors = bar_colors(&report);
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], NEUTRAL_BAR);
        assert_eq!(colors[1], Category::Benchmarks.color());
        assert_eq!(colors[2], NEUTRAL_BAR);
    }

    #[test]
    fn out_of_range_score_leaves_all_bars_neutral() {
        let report = report(1000.0);
        assert!(bar_colors(&report).iter().all(|c| *c == NEUTRAL_BAR));
    }

    #[test]
    fn tick_is_the_bucket_lower_bound() {
        assert_eq!(bucket_tick("1:40 - 2:30"), "1:40");
        assert_eq!(bucket_tick("100 - 130"), "100");
        assert_eq!(bucket_tick("oddball"), "oddball");
    }
}
