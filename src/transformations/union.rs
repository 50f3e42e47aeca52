use tracing::debug;

use crate::{
    Automaton,
    Label,
    StateFactory,
    StateSet,
    toolbox,
    transformations::BinaryTransformation,
};

/// The union of two automata.
///
/// The result holds a copy of each operand side by side: its states, initial states, terminal states
/// and transitions are the unions of those of the copies.
#[derive(Clone, Copy, Debug, Default)]
pub struct Union;

impl<L: Label, F: StateFactory> BinaryTransformation<L, F> for Union {
    fn transform(&self, left: &Automaton<L, F>, right: &Automaton<L, F>) -> Automaton<L, F> {
        let mut union = left.clone();
        let states = toolbox::replay_states(&mut union, right, |state| (state.is_initial(), state.is_terminal()));
        toolbox::replay_transitions(&mut union, right, &states);
        debug!(states = union.states().len(), transitions = union.transition_count(), "union");
        union
    }
}
