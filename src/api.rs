use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::wod::{Category, Gender, ScoreType};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Logical error reported by the service in the response body
    #[error("{0}")]
    Server(String),
}

/// Workout descriptor echoed back by the service. The echo also carries the
/// histogram min/max, which the client has no use for and ignores.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct WodSnapshot {
    pub name: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub score_type: ScoreType,
    pub unit: String,
}

/// Successful percentile response for one workout
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PercentileResponse {
    pub config: WodSnapshot,
    pub user_score: f64,
    /// rank against the reference population, 0-100
    pub percentile: f64,
    /// "start - end" bucket labels, M:SS pairs for time workouts
    pub chart_labels: Vec<String>,
    /// athlete count per bucket
    pub chart_data: Vec<u64>,
}

#[derive(Serialize)]
struct ScoreBody {
    score: u32,
    gender: Gender,
}

// Error bodies carry only an `error` field, success bodies never do, so the
// success variant must be tried first.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiReply {
    Ok(PercentileResponse),
    Err { error: String },
}

/// Blocking client for the percentile-scoring service
#[derive(Clone, Debug)]
pub struct PercentileClient {
    http: reqwest::blocking::Client,
    base_url: String,
    gender: Gender,
}

impl PercentileClient {
    pub fn new(base_url: &str, gender: Gender, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            gender,
        })
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// POST the score and decode either a percentile payload or a
    /// server-reported error. The body is parsed regardless of HTTP status;
    /// the service uses 4xx/5xx for logical errors with an `error` body.
    pub fn percentile(&self, wod_key: &str, score: u32) -> Result<PercentileResponse, ApiError> {
        let url = format!("{}/api/wod/{}/percentile", self.base_url, wod_key);
        let reply: ApiReply = self
            .http
            .post(url)
            .json(&ScoreBody {
                score,
                gender: self.gender,
            })
            .send()?
            .json()?;

        match reply {
            ApiReply::Ok(response) => Ok(response),
            ApiReply::Err { error } => Err(ApiError::Server(error)),
        }
    }
}
