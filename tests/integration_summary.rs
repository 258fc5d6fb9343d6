use wodrank::summary::{average_percentile, radar_series, subtitle, SummaryEntry};
use wodrank::wod::{radar_order, Category};

fn entry(name: &str, percentile: f64) -> SummaryEntry {
    SummaryEntry {
        wod_name: name.to_string(),
        percentile,
    }
}

#[test]
fn average_of_three_entries() {
    let entries = [
        entry("Fran", 50.0),
        entry("Helen", 70.0),
        entry("Grace", 90.0),
    ];
    assert_eq!(average_percentile(&entries), Some(70));
    assert_eq!(
        subtitle(&entries),
        "Your average performance is in the 70th percentile."
    );
}

#[test]
fn radar_axes_cover_the_whole_table_in_category_order() {
    let (labels, series) = radar_series(&[]);
    assert_eq!(labels.len(), radar_order().len());
    assert_eq!(series.len(), Category::DISPLAY_ORDER.len());

    // Strength axes (incl. the olympic lifts) come first
    assert_eq!(labels[0], "Clean & Jerk");
    assert!(labels.contains(&"5k Run"));
    assert!(labels.contains(&"Fight Gone Bad"));
}

#[test]
fn answered_and_unanswered_axes() {
    let entries = [entry("Deadlift", 71.0), entry("Fran", 82.0)];
    let (labels, series) = radar_series(&entries);

    let strength = &series[0];
    let benchmarks = series
        .iter()
        .find(|s| s.category == Category::Benchmarks)
        .unwrap();

    let deadlift = labels.iter().position(|l| *l == "Deadlift").unwrap();
    let backsq = labels.iter().position(|l| *l == "Back Squat").unwrap();
    let fran = labels.iter().position(|l| *l == "Fran").unwrap();

    assert_eq!(strength.values[deadlift], Some(71.0));
    // entered but different category: a gap on the strength series
    assert_eq!(strength.values[fran], None);
    assert_eq!(benchmarks.values[fran], Some(82.0));
    // not entered at all: a gap, never zero
    assert_eq!(strength.values[backsq], None);
}

#[test]
fn summary_entries_from_mixed_outcomes() {
    use wodrank::analysis::{Analysis, AnalysisEvent, ScoreRequest, WodOutcome, WodReport};
    use wodrank::api::{PercentileResponse, WodSnapshot};
    use wodrank::wod::{find_wod, ScoreType};

    let deadlift = find_wod("deadlift").unwrap();
    let fran = find_wod("fran").unwrap();
    let mut analysis = Analysis::new(
        7,
        &[
            ScoreRequest {
                wod: deadlift,
                score: 405,
            },
            ScoreRequest {
                wod: fran,
                score: 125,
            },
        ],
    );

    analysis.record(&AnalysisEvent {
        generation: 7,
        key: "deadlift",
        outcome: WodOutcome::Ok(WodReport::new(
            deadlift,
            PercentileResponse {
                config: WodSnapshot {
                    name: "Deadlift".to_string(),
                    category: Category::Strength,
                    score_type: ScoreType::Weight,
                    unit: "lbs".to_string(),
                },
                user_score: 405.0,
                percentile: 88.0,
                chart_labels: vec!["150 - 300".to_string(), "300 - 450".to_string()],
                chart_data: vec![100, 40],
            },
        )),
    });
    analysis.record(&AnalysisEvent {
        generation: 7,
        key: "fran",
        outcome: WodOutcome::Failed,
    });
    assert!(analysis.is_settled());

    let entries = analysis.summary();
    assert_eq!(average_percentile(&entries), Some(88));

    let (labels, series) = radar_series(&entries);
    let deadlift_axis = labels.iter().position(|l| *l == "Deadlift").unwrap();
    let fran_axis = labels.iter().position(|l| *l == "Fran").unwrap();
    assert_eq!(series[0].values[deadlift_axis], Some(88.0));
    // the failed request leaves a gap on its own category's series
    let benchmarks = series
        .iter()
        .find(|s| s.category == Category::Benchmarks)
        .unwrap();
    assert_eq!(benchmarks.values[fran_axis], None);
}
