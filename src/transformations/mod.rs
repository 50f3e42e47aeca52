//! Transformations building new automata from existing ones, each implementing an operator of the
//! algebra of rational languages.
//!
//! A transformation never modifies its operands. The result is a fresh automaton whose states are
//! created by a factory spawned from the factory of the (first) operand.

use crate::{
    Automaton,
    Label,
    StateFactory,
};

mod concatenation;
mod determinize;
mod intersection;
mod pruner;
mod reverse;
mod star;
mod union;

pub use concatenation::Concatenation;
pub use determinize::Determinize;
pub use intersection::Intersection;
pub use pruner::Pruner;
pub use reverse::Reverse;
pub use star::Star;
pub use union::Union;

/// A transformation of one automaton.
pub trait UnaryTransformation<L: Label, F: StateFactory> {
    /// Build the transformed automaton.
    fn transform(&self, automaton: &Automaton<L, F>) -> Automaton<L, F>;
}

/// A transformation of two automata.
pub trait BinaryTransformation<L: Label, F: StateFactory> {
    /// Build the transformed automaton.
    fn transform(&self, left: &Automaton<L, F>, right: &Automaton<L, F>) -> Automaton<L, F>;
}
