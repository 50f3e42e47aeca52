//! Tests of language properties of automata.

use crate::{
    Automaton,
    Label,
    StateFactory,
};

mod comparison;
mod contains_epsilon;
mod determinism;
mod emptiness;

pub use comparison::{Equivalence, Inclusion};
pub use contains_epsilon::ContainsEpsilon;
pub use determinism::IsDeterministic;
pub use emptiness::IsEmpty;

/// A property of one automaton.
pub trait UnaryTest<L: Label, F: StateFactory> {
    /// Check if the automaton has the property.
    fn test(&self, automaton: &Automaton<L, F>) -> bool;
}

/// A relation between two automata.
pub trait BinaryTest<L: Label, F: StateFactory> {
    /// Check if the automata are related.
    fn test(&self, left: &Automaton<L, F>, right: &Automaton<L, F>) -> bool;
}
