//! Errors related to state transitions in the bridge attempt machine.

use thiserror::Error;

use crate::{events::AttemptEvent, state::AttemptState};

/// Result type for attempt machine transitions.
pub type TransitionResult<T> = Result<T, TransitionErr>;

/// Errors that can occur while processing an attempt event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionErr {
    /// An event was received that does not apply to the current state.
    ///
    /// This type of error indicates a bug in the driver sequencing.
    #[error("received invalid event {event} in state {state}; reason: {reason:?}")]
    InvalidEvent {
        /// The state in which the event was received.
        state: Box<AttemptState>,
        /// The invalid event that was received.
        event: Box<AttemptEvent>,
        /// The reason for the invalidity.
        reason: Option<String>, // sometimes the reason is obvious from context
    },

    /// A duplicate event was received in the current state.
    #[error("received a duplicate event {event} in state {state}")]
    Duplicate {
        /// The state in which the duplicate event was received.
        state: Box<AttemptState>,
        /// The duplicate event that was received.
        event: Box<AttemptEvent>,
    },

    /// An event was rejected in the current state.
    ///
    /// This can happen, for example, when an event belongs to the other bridge direction.
    #[error("event {event} rejected in state {state}; reason: {reason}")]
    Rejected {
        /// The state in which the event was rejected.
        state: Box<AttemptState>,
        /// The reason for the rejection.
        reason: String, // rejection reason is a must
        /// The rejected event.
        event: Box<AttemptEvent>,
    },
}

impl TransitionErr {
    pub(crate) fn invalid_event(
        state: AttemptState,
        event: AttemptEvent,
        reason: Option<String>,
    ) -> Self {
        TransitionErr::InvalidEvent {
            state: Box::new(state),
            event: Box::new(event),
            reason,
        }
    }

    pub(crate) fn duplicate(state: AttemptState, event: AttemptEvent) -> Self {
        TransitionErr::Duplicate {
            state: Box::new(state),
            event: Box::new(event),
        }
    }

    pub(crate) fn rejected(
        state: AttemptState,
        event: AttemptEvent,
        reason: impl Into<String>,
    ) -> Self {
        TransitionErr::Rejected {
            state: Box::new(state),
            reason: reason.into(),
            event: Box::new(event),
        }
    }
}
