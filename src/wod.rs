use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// How a workout is scored on the wire (`config.type` in the service response)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreType {
    /// time to complete, scored in seconds (lower is better)
    Time,
    /// total repetitions
    Reps,
    /// load in pounds
    Weight,
}

impl ScoreType {
    pub fn is_time(self) -> bool {
        matches!(self, ScoreType::Time)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display)]
pub enum Category {
    #[serde(rename = "Olympic Lifting")]
    #[strum(serialize = "Olympic Lifting")]
    OlympicLifting,
    Strength,
    Running,
    Benchmarks,
}

impl Category {
    /// The three visual categories: Olympic Lifting folds into Strength
    pub fn display(self) -> Category {
        match self {
            Category::OlympicLifting => Category::Strength,
            other => other,
        }
    }

    /// Fixed ordering of the visual categories on the summary chart
    pub const DISPLAY_ORDER: [Category; 3] =
        [Category::Strength, Category::Running, Category::Benchmarks];

    /// Accent color used for result text, bucket highlights and radar series
    pub fn color(self) -> Color {
        match self.display() {
            Category::Strength => Color::Green,
            Category::Running => Color::Blue,
            _ => Color::Rgb(245, 130, 49),
        }
    }

    fn display_rank(self) -> usize {
        Self::DISPLAY_ORDER
            .iter()
            .position(|c| *c == self.display())
            .unwrap_or(Self::DISPLAY_ORDER.len())
    }
}

/// Static descriptor for one benchmark workout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WodConfig {
    /// path segment of the percentile endpoint
    pub key: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub score_type: ScoreType,
    pub unit: &'static str,
}

/// The benchmark table served by the percentile service
pub const WOD_TABLE: [WodConfig; 11] = [
    WodConfig {
        key: "fran",
        name: "Fran",
        category: Category::Benchmarks,
        score_type: ScoreType::Time,
        unit: "s",
    },
    WodConfig {
        key: "helen",
        name: "Helen",
        category: Category::Benchmarks,
        score_type: ScoreType::Time,
        unit: "s",
    },
    WodConfig {
        key: "grace",
        name: "Grace",
        category: Category::Benchmarks,
        score_type: ScoreType::Time,
        unit: "s",
    },
    WodConfig {
        key: "filthy50",
        name: "Filthy Fifty",
        category: Category::Benchmarks,
        score_type: ScoreType::Time,
        unit: "s",
    },
    WodConfig {
        key: "fgonebad",
        name: "Fight Gone Bad",
        category: Category::Benchmarks,
        score_type: ScoreType::Reps,
        unit: "reps",
    },
    WodConfig {
        key: "run400",
        name: "400m Run",
        category: Category::Running,
        score_type: ScoreType::Time,
        unit: "s",
    },
    WodConfig {
        key: "run5k",
        name: "5k Run",
        category: Category::Running,
        score_type: ScoreType::Time,
        unit: "s",
    },
    WodConfig {
        key: "candj",
        name: "Clean & Jerk",
        category: Category::OlympicLifting,
        score_type: ScoreType::Weight,
        unit: "lbs",
    },
    WodConfig {
        key: "snatch",
        name: "Snatch",
        category: Category::OlympicLifting,
        score_type: ScoreType::Weight,
        unit: "lbs",
    },
    WodConfig {
        key: "deadlift",
        name: "Deadlift",
        category: Category::Strength,
        score_type: ScoreType::Weight,
        unit: "lbs",
    },
    WodConfig {
        key: "backsq",
        name: "Back Squat",
        category: Category::Strength,
        score_type: ScoreType::Weight,
        unit: "lbs",
    },
];

pub fn find_wod(key: &str) -> Option<&'static WodConfig> {
    WOD_TABLE.iter().find(|w| w.key == key)
}

/// All workouts in radar-axis order: stably sorted by visual category
pub fn radar_order() -> Vec<&'static WodConfig> {
    let mut wods: Vec<&'static WodConfig> = WOD_TABLE.iter().collect();
    wods.sort_by_key(|w| w.category.display_rank());
    wods
}

/// Population filter forwarded to the percentile service
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Gender {
    #[default]
    Everyone,
    Men,
    Women,
}

impl Gender {
    pub fn next(self) -> Gender {
        match self {
            Gender::Everyone => Gender::Men,
            Gender::Men => Gender::Women,
            Gender::Women => Gender::Everyone,
        }
    }
}
