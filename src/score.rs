use crate::wod::{WodConfig, ScoreType, WOD_TABLE};

/// User-entered score for one workout, straight from the form fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreInput {
    Time { minutes: u32, seconds: u32 },
    Plain(u32),
}

impl ScoreInput {
    /// Total score as sent to the service; time inputs collapse to seconds
    pub fn total(self) -> u32 {
        match self {
            ScoreInput::Time { minutes, seconds } => minutes * 60 + seconds,
            ScoreInput::Plain(n) => n,
        }
    }

    /// Blank or zero entries issue no request
    pub fn is_entered(self) -> bool {
        self.total() > 0
    }
}

/// Which form field is being edited
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Field {
    #[default]
    Minutes,
    Seconds,
    Score,
}

/// One editable form row. Time workouts expose minutes/seconds fields,
/// everything else a single score field; the digits are kept as entered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WodEntry {
    pub wod: &'static WodConfig,
    pub minutes: String,
    pub seconds: String,
    pub score: String,
}

impl WodEntry {
    pub fn new(wod: &'static WodConfig) -> Self {
        Self {
            wod,
            minutes: String::new(),
            seconds: String::new(),
            score: String::new(),
        }
    }

    /// One row per workout in the static table
    pub fn form() -> Vec<WodEntry> {
        WOD_TABLE.iter().map(WodEntry::new).collect()
    }

    /// The field the cursor lands on when the row is selected
    pub fn first_field(&self) -> Field {
        if self.wod.score_type.is_time() {
            Field::Minutes
        } else {
            Field::Score
        }
    }

    /// Tab order within the row, None when the row has a single field
    pub fn next_field(&self, field: Field) -> Field {
        match (self.wod.score_type.is_time(), field) {
            (true, Field::Minutes) => Field::Seconds,
            (true, _) => Field::Minutes,
            (false, _) => Field::Score,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Minutes => &mut self.minutes,
            Field::Seconds => &mut self.seconds,
            Field::Score => &mut self.score,
        }
    }

    pub fn push_digit(&mut self, field: Field, digit: char) {
        if !digit.is_ascii_digit() {
            return;
        }
        let max_len = match field {
            Field::Minutes => 3,
            Field::Seconds => 2,
            Field::Score => 4,
        };
        let slot = self.field_mut(field);
        if slot.len() < max_len {
            slot.push(digit);
        }
    }

    pub fn pop_digit(&mut self, field: Field) {
        self.field_mut(field).pop();
    }

    pub fn clear(&mut self) {
        self.minutes.clear();
        self.seconds.clear();
        self.score.clear();
    }

    /// Unparsable or blank fields read as zero, like the original form
    pub fn score_input(&self) -> ScoreInput {
        if self.wod.score_type.is_time() {
            ScoreInput::Time {
                minutes: self.minutes.parse().unwrap_or(0),
                seconds: self.seconds.parse().unwrap_or(0),
            }
        } else {
            ScoreInput::Plain(self.score.parse().unwrap_or(0))
        }
    }
}

/// "M:SS" with zero-padded seconds (125 -> "2:05", 59 -> "0:59")
pub fn format_seconds(total: u32) -> String {
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a score for display: time as M:SS, everything else as "N unit"
pub fn format_score(value: f64, score_type: ScoreType, unit: &str) -> String {
    if score_type.is_time() {
        format_seconds(value.round() as u32)
    } else {
        format!("{} {}", value.round() as i64, unit)
    }
}

/// Parse one end of a histogram bucket label: "M:SS" for time buckets,
/// a plain number otherwise
pub fn parse_point(s: &str, score_type: ScoreType) -> Option<f64> {
    let s = s.trim();
    if score_type.is_time() {
        let (min, sec) = s.split_once(':')?;
        let min: f64 = min.trim().parse().ok()?;
        let sec: f64 = sec.trim().parse().ok()?;
        Some(min * 60.0 + sec)
    } else {
        s.parse().ok()
    }
}

/// Parse a "start - end" bucket label into its numeric range
pub fn parse_bucket(label: &str, score_type: ScoreType) -> Option<(f64, f64)> {
    let (start, end) = label.split_once(" - ")?;
    Some((
        parse_point(start, score_type)?,
        parse_point(end, score_type)?,
    ))
}

/// Index of the bucket containing `score`. Every bucket is half-open
/// [start, end) except the last, which includes its upper bound.
pub fn matching_bucket(labels: &[String], score_type: ScoreType, score: f64) -> Option<usize> {
    let last = labels.len().checked_sub(1)?;
    labels.iter().enumerate().position(|(idx, label)| {
        match parse_bucket(label, score_type) {
            Some((start, end)) if idx == last => score >= start && score <= end,
            Some((start, end)) => score >= start && score < end,
            None => false,
        }
    })
}
