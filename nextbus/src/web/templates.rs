//! Askama templates for the web frontend.

use askama::Template;

use super::dto::{NextBusResponse, OutcomeKind};

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the lookup form.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Result of one lookup.
#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultTemplate {
    pub route: String,
    pub stop: String,
    pub direction: String,
    pub view: ResultView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Lookup result view model for templates.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// Main line: the wait, or what went wrong
    pub headline: String,

    /// Secondary line, empty when there is nothing to add
    pub detail: String,

    /// Matching records to pick from after an ambiguous match
    pub candidates: Vec<String>,

    /// Whether the lookup failed
    pub is_failure: bool,
}

impl ResultView {
    pub fn from_response(response: &NextBusResponse) -> Self {
        let mut view = Self {
            headline: response.result.clone(),
            detail: String::new(),
            candidates: Vec::new(),
            is_failure: true,
        };

        match response.outcome {
            OutcomeKind::Arriving => {
                view.is_failure = false;
                if let Some(text) = &response.departure_text {
                    let source = if response.actual == Some(true) {
                        "Real-time"
                    } else {
                        "Scheduled"
                    };
                    view.detail = format!("{source}: {text}");
                }
                if let Some(destination) = &response.destination {
                    view.detail.push_str(&format!(" to {destination}"));
                }
                if let Some(terminal) = &response.terminal {
                    view.detail.push_str(&format!(" ({terminal})"));
                }
            }
            OutcomeKind::NoFurtherService => {
                view.is_failure = false;
                view.headline = "No further departures listed for this stop".to_string();
            }
            OutcomeKind::Ambiguous => {
                if let Some(stage) = response.stage {
                    let stage = stage.to_string();
                    view.headline = format!("MULTIPLE MATCHES ON {stage}");
                    view.detail = format!("Narrow the {} pattern to one of:", stage.to_lowercase());
                }
                view.candidates = response.candidates.clone().unwrap_or_default();
            }
            OutcomeKind::NoMatch | OutcomeKind::NetworkError | OutcomeKind::UnknownError => {}
        }

        view
    }
}
