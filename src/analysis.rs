use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use crate::api::{ApiError, PercentileClient, PercentileResponse};
use crate::runtime::AppEvent;
use crate::score::{format_score, matching_bucket, ScoreInput, WodEntry};
use crate::summary::SummaryEntry;
use crate::wod::WodConfig;

/// One outbound percentile request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreRequest {
    pub wod: &'static WodConfig,
    pub score: u32,
}

/// Map the form entries to the batch of requests to issue: one per workout
/// with a score greater than zero.
pub fn pending_requests(entries: &[(&'static WodConfig, ScoreInput)]) -> Vec<ScoreRequest> {
    entries
        .iter()
        .filter(|(_, input)| input.is_entered())
        .map(|&(wod, input)| ScoreRequest {
            wod,
            score: input.total(),
        })
        .collect()
}

/// Same mapping straight off the form rows
pub fn form_requests(form: &[WodEntry]) -> Vec<ScoreRequest> {
    let entries: Vec<(&'static WodConfig, ScoreInput)> =
        form.iter().map(|e| (e.wod, e.score_input())).collect();
    pending_requests(&entries)
}

/// A percentile response decorated with the fields the results screen needs
#[derive(Clone, Debug, PartialEq)]
pub struct WodReport {
    pub wod: &'static WodConfig,
    pub response: PercentileResponse,
    pub score_display: String,
    /// bucket containing the user's score, None if no label matched
    pub highlight: Option<usize>,
}

impl WodReport {
    pub fn new(wod: &'static WodConfig, response: PercentileResponse) -> Self {
        let score_display = format_score(
            response.user_score,
            response.config.score_type,
            &response.config.unit,
        );
        let highlight = matching_bucket(
            &response.chart_labels,
            response.config.score_type,
            response.user_score,
        );
        Self {
            wod,
            response,
            score_display,
            highlight,
        }
    }

    pub fn percentile(&self) -> u32 {
        self.response.percentile.round().max(0.0) as u32
    }
}

/// How a single workout's request ended
#[derive(Clone, Debug, PartialEq)]
pub enum WodOutcome {
    Ok(WodReport),
    /// logical error from the service, shown inline in place of results
    ServerError(String),
    /// transport or decode failure: logged, result area left unpopulated
    Failed,
}

/// Result of one worker, tagged with the batch it belongs to
#[derive(Clone, Debug)]
pub struct AnalysisEvent {
    pub generation: u64,
    pub key: &'static str,
    pub outcome: WodOutcome,
}

/// Launch one worker thread per request. Workers post concurrently and feed
/// the app event channel; a worker whose batch has been superseded (the live
/// generation moved on) drops its result instead of sending it.
pub fn spawn_batch(
    client: &Arc<PercentileClient>,
    requests: &[ScoreRequest],
    generation: u64,
    live: &Arc<AtomicU64>,
    tx: &Sender<AppEvent>,
) {
    for request in requests {
        let client = Arc::clone(client);
        let live = Arc::clone(live);
        let tx = tx.clone();
        let wod = request.wod;
        let score = request.score;

        thread::spawn(move || {
            let outcome = match client.percentile(wod.key, score) {
                Ok(response) => WodOutcome::Ok(WodReport::new(wod, response)),
                Err(ApiError::Server(error)) => WodOutcome::ServerError(error),
                Err(err) => {
                    tracing::warn!(wod = wod.key, %err, "percentile request failed");
                    WodOutcome::Failed
                }
            };

            if live.load(Ordering::SeqCst) != generation {
                return;
            }
            let _ = tx.send(AppEvent::Analysis(AnalysisEvent {
                generation,
                key: wod.key,
                outcome,
            }));
        });
    }
}

/// Collector for one analyze action. Keeps outcomes in request order and
/// acts as the join-all barrier: the summary only exists once every request
/// has settled, success or failure.
#[derive(Clone, Debug)]
pub struct Analysis {
    generation: u64,
    slots: Vec<(&'static WodConfig, Option<WodOutcome>)>,
}

impl Analysis {
    pub fn new(generation: u64, requests: &[ScoreRequest]) -> Self {
        Self {
            generation,
            slots: requests.iter().map(|r| (r.wod, None)).collect(),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record a worker result. Stale-generation and unknown-workout events
    /// are ignored; returns whether the event was accepted.
    pub fn record(&mut self, event: &AnalysisEvent) -> bool {
        if event.generation != self.generation {
            return false;
        }
        match self.slots.iter_mut().find(|(wod, _)| wod.key == event.key) {
            Some((_, slot)) => {
                *slot = Some(event.outcome.clone());
                true
            }
            None => false,
        }
    }

    pub fn total(&self) -> usize {
        self.slots.len()
    }

    pub fn settled_count(&self) -> usize {
        self.slots.iter().filter(|(_, o)| o.is_some()).count()
    }

    pub fn is_settled(&self) -> bool {
        self.slots.iter().all(|(_, o)| o.is_some())
    }

    /// Settled outcomes in request order
    pub fn outcomes(&self) -> impl Iterator<Item = (&'static WodConfig, &WodOutcome)> {
        self.slots
            .iter()
            .filter_map(|(wod, o)| o.as_ref().map(|o| (*wod, o)))
    }

    /// Outcomes with something to show: successes and inline server errors.
    /// Failed requests leave no row behind (degraded display).
    pub fn display_rows(&self) -> Vec<(&'static WodConfig, &WodOutcome)> {
        self.outcomes()
            .filter(|(_, o)| !matches!(o, WodOutcome::Failed))
            .collect()
    }

    /// Successful reports only, the rows of the results screen
    pub fn reports(&self) -> Vec<&WodReport> {
        self.outcomes()
            .filter_map(|(_, o)| match o {
                WodOutcome::Ok(report) => Some(report),
                _ => None,
            })
            .collect()
    }

    /// Summary entries for the radar chart: successful outcomes only; server
    /// errors and failed requests never reach the average.
    pub fn summary(&self) -> Vec<SummaryEntry> {
        self.reports()
            .into_iter()
            .map(|report| SummaryEntry {
                wod_name: report.response.config.name.clone(),
                percentile: report.response.percentile,
            })
            .collect()
    }
}
