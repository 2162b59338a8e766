//! The widget state machine.
//!
//! All state lives in [`WidgetState`] and is only ever changed by
//! [`reduce`], a pure function over [`Action`]s. Side effects (the one
//! outbound fetch) are described by the returned [`Effect`] and executed
//! by the driver, which feeds the outcome back in as another action.
//!
//! Each dispatched fetch carries a generation number; a completion whose
//! generation no longer matches the state's is stale (the user resubmitted
//! while it was in flight) and is dropped, so the displayed result always
//! belongs to the most recent submission.

use tracing::warn;

use crate::{
    message::{condition_message, location_message, temperature_message},
    model::WeatherReport,
    provider::{ProviderError, WeatherProvider},
};

/// Shown when the query is empty or whitespace-only. Never reaches the
/// network.
pub const VALIDATION_MESSAGE: &str = "please Enter a valid location.";

/// Shown for every fetch failure. HTTP error status, transport failure and
/// malformed body are deliberately indistinguishable to the user.
pub const FETCH_FAILED_MESSAGE: &str = "City not found. please try again";

/// Outcome of the last settled submission. Exactly one variant holds at any
/// time; it is overwritten wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WeatherResult {
    #[default]
    Empty,
    Failed {
        message: String,
    },
    Loaded(WeatherReport),
}

impl WeatherResult {
    fn failed(message: &str) -> Self {
        Self::Failed { message: message.to_string() }
    }
}

/// Everything the renderer needs.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    /// Raw query as typed; persists across submissions.
    pub query: String,
    pub result: WeatherResult,
    /// True only while a fetch for the current generation is outstanding.
    pub busy: bool,
    generation: u64,
}

impl WidgetState {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub enum Action {
    EditQuery(String),
    Submit,
    FetchSettled { generation: u64, outcome: Result<WeatherReport, ProviderError> },
}

/// Side effect requested by the reducer, to be executed by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch { query: String, generation: u64 },
}

/// Apply one action to the state.
pub fn reduce(state: &mut WidgetState, action: Action) -> Option<Effect> {
    match action {
        Action::EditQuery(text) => {
            state.query = text;
            None
        }
        Action::Submit => {
            let trimmed = state.query.trim();
            if trimmed.is_empty() {
                state.result = WeatherResult::failed(VALIDATION_MESSAGE);
                return None;
            }

            state.busy = true;
            state.generation += 1;

            // A previous failure is cleared while fetching; a previous
            // successful report stays visible until the new one settles.
            if matches!(state.result, WeatherResult::Failed { .. }) {
                state.result = WeatherResult::Empty;
            }

            Some(Effect::Fetch { query: trimmed.to_string(), generation: state.generation })
        }
        Action::FetchSettled { generation, outcome } => {
            if generation != state.generation {
                // Stale completion from an overwritten submission.
                return None;
            }

            state.result = match outcome {
                Ok(report) => WeatherResult::Loaded(report),
                Err(_) => WeatherResult::failed(FETCH_FAILED_MESSAGE),
            };
            state.busy = false;

            None
        }
    }
}

/// Owns the state and the provider; drives the submit cycle to completion.
#[derive(Debug)]
pub struct WeatherWidget {
    state: WidgetState,
    provider: Box<dyn WeatherProvider>,
}

impl WeatherWidget {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { state: WidgetState::default(), provider }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn edit_query(&mut self, text: impl Into<String>) {
        reduce(&mut self.state, Action::EditQuery(text.into()));
    }

    /// Validate the current query and, if it passes, run one fetch and
    /// settle the result. The busy flag is false again by the time this
    /// returns, whatever the outcome.
    pub async fn submit(&mut self) {
        let Some(Effect::Fetch { query, generation }) = reduce(&mut self.state, Action::Submit)
        else {
            return;
        };

        let outcome = self.provider.current(&query).await;
        if let Err(error) = &outcome {
            warn!(%error, query, "weather fetch failed");
        }

        reduce(&mut self.state, Action::FetchSettled { generation, outcome });
    }

    /// Display lines for the current result: nothing while `Empty`, the
    /// stored message for `Failed`, the three formatted messages for
    /// `Loaded`.
    pub fn display_lines(&self) -> Vec<String> {
        match &self.state.result {
            WeatherResult::Empty => Vec::new(),
            WeatherResult::Failed { message } => vec![message.clone()],
            WeatherResult::Loaded(report) => vec![
                temperature_message(report.temperature_c, &report.unit),
                condition_message(&report.condition),
                location_message(&report.location_name),
            ],
        }
    }
}
