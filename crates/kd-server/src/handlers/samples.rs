//! Samples API endpoints.
//!
//! A missing topic or language is a 404 with a JSON body; the page renders
//! without that tab.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use kd_renderer::{language_label, render_sample_tabs, render_sample_tabs_for};
use kd_site::{LookupMiss, SampleSet};
use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::state::AppState;

/// Response for GET /api/samples.
#[derive(Serialize)]
pub(crate) struct SamplesResponse {
    topics: Vec<TopicSummary>,
}

#[derive(Serialize)]
struct TopicSummary {
    topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    languages: Vec<String>,
}

impl From<&SampleSet> for TopicSummary {
    fn from(set: &SampleSet) -> Self {
        Self {
            topic: set.topic().to_owned(),
            group: set.group().map(str::to_owned),
            languages: set.languages().map(str::to_owned).collect(),
        }
    }
}

/// Query for GET /api/samples/{topic}.
#[derive(Deserialize)]
pub(crate) struct TopicQuery {
    /// Comma-separated language ids; tabs follow this order.
    languages: Option<String>,
}

/// Response for GET /api/samples/{topic}.
#[derive(Serialize)]
pub(crate) struct TopicResponse {
    #[serde(flatten)]
    summary: TopicSummary,
    /// Tabbed HTML with one panel per language.
    html: String,
}

/// Response for GET /api/samples/{topic}/{language}.
#[derive(Serialize)]
pub(crate) struct SnippetResponse {
    topic: String,
    language: String,
    label: String,
    code: String,
}

/// Handle GET /api/samples.
pub(crate) async fn list_samples(State(state): State<Arc<AppState>>) -> Json<SamplesResponse> {
    let topics = state
        .content
        .samples()
        .iter()
        .map(TopicSummary::from)
        .collect();
    Json(SamplesResponse { topics })
}

/// Handle GET /api/samples/{topic}.
///
/// With `?languages=python,ruby` only those tabs are rendered, in that order.
pub(crate) async fn get_topic(
    Path(topic): Path<String>,
    Query(query): Query<TopicQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<TopicResponse>, ServerError> {
    let Some(set) = state.content.samples().topic(&topic) else {
        return Err(miss(&state, LookupMiss::UnknownTopic(topic)));
    };

    let html = match query.languages.as_deref() {
        Some(list) => {
            let languages: Vec<&str> = list
                .split(',')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            render_sample_tabs_for(set, &languages, 0)
        }
        None => render_sample_tabs(set, 0),
    };

    Ok(Json(TopicResponse {
        summary: TopicSummary::from(set),
        html,
    }))
}

/// Handle GET /api/samples/{topic}/{language}.
pub(crate) async fn get_snippet(
    Path((topic, language)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SnippetResponse>, ServerError> {
    let code = state
        .content
        .samples()
        .lookup(&topic, &language)
        .map_err(|e| miss(&state, e))?
        .to_owned();

    Ok(Json(SnippetResponse {
        label: language_label(&language).to_owned(),
        topic,
        language,
        code,
    }))
}

fn miss(state: &AppState, reason: LookupMiss) -> ServerError {
    if state.verbose {
        tracing::warn!(reason = %reason, "Sample lookup miss");
    }
    ServerError::Sample(reason)
}
