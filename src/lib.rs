//! Finite automata over arbitrary labels, with the operators of the algebra of rational languages.
//!
//! An [`Automaton`] owns its states, its transitions and its alphabet. States are handles created
//! by the automaton through its [`StateFactory`], which also chooses the container used for every
//! set of states the automaton hands out. Transitions are immutable; only the automaton relabels
//! them, keeping its alphabet and indexes consistent.
//!
//! ```
//! use rationals::Automaton;
//! use rationals::transformations::{BinaryTransformation, Union};
//!
//! let union = Union.transform(&Automaton::word_automaton(&['a', 'b']), &Automaton::word_automaton(&['c']));
//! assert!(union.accept(&['a', 'b']));
//! assert!(union.accept(&['c']));
//! assert!(!union.accept(&['a']));
//! ```

use std::{
    fmt::Debug,
    hash::Hash,
};

#[macro_use]
pub mod util;
mod automaton;
mod error;
mod state;
mod transition;
pub mod properties;
pub mod toolbox;
pub mod transformations;

/// A label of a transition.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<L: Clone + Eq + Hash + Debug> Label for L {}

pub use crate::automaton::Automaton;
pub use crate::error::{AutomatonError, Result};
pub use crate::state::{DefaultStateFactory, IndexedStateFactory, OrderedStateFactory, State, StateFactory, StateSet};
pub use crate::transition::Transition;
