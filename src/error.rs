use thiserror::Error;

use crate::State;

/// Errors raised by the mutating operations of an automaton.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum AutomatonError {
    /// An endpoint of a transition is not a state of the automaton, either because it was never
    /// added or because it belongs to another automaton.
    #[error("state {state} does not belong to this automaton")]
    NoSuchState { state: State },

    /// The transition to relabel is not stored in the automaton.
    #[error("transition does not belong to this automaton")]
    NoSuchTransition,
}

pub type Result<T> = std::result::Result<T, AutomatonError>;
