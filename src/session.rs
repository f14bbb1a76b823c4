//! Per-feature request state for front-ends. Not used by the server or CLI;
//! clients driving the AI features hold one session per panel.
//!
//! A feature panel (the meal planner form, the projection form, the search
//! box) owns one [`FeatureSession`]. Starting a call hands out a [`Ticket`];
//! only the ticket of the newest generation may write a result back, so a
//! slow reply can never overwrite a fresher one. Calls cannot be cancelled,
//! they are simply ignored once stale.

use serde::Serialize;

use crate::error::Result;
use crate::gateway::Feature;

/// Proof that a call was started for a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    feature: Feature,
    generation: u64,
}

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    /// Inline error text for the triggering form.
    Failed(String),
}

#[derive(Debug)]
pub struct FeatureSession<T> {
    feature: Feature,
    generation: u64,
    in_flight: bool,
    state: ViewState<T>,
}

impl<T> FeatureSession<T> {
    pub fn new(feature: Feature) -> Self {
        Self {
            feature,
            generation: 0,
            in_flight: false,
            state: ViewState::Idle,
        }
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    /// True while the triggering control should stay disabled.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Start a new call. Returns `None` while a call is already in flight.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.in_flight {
            return None;
        }
        self.generation += 1;
        self.in_flight = true;
        self.state = ViewState::Loading;
        Some(Ticket {
            feature: self.feature,
            generation: self.generation,
        })
    }

    /// Store the outcome of the call identified by `ticket`.
    ///
    /// Returns `false` and drops the outcome when the ticket is stale or
    /// belongs to another feature.
    pub fn resolve(&mut self, ticket: Ticket, outcome: Result<T>) -> bool {
        if ticket.feature != self.feature || ticket.generation != self.generation {
            return false;
        }
        self.in_flight = false;
        self.state = match outcome {
            Ok(value) => ViewState::Ready(value),
            Err(e) => ViewState::Failed(e.user_message()),
        };
        true
    }

    /// Close the view: forget the result and orphan any call in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.in_flight = false;
        self.state = ViewState::Idle;
    }
}
