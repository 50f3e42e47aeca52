use std::collections::HashMap as Map;
use tracing::debug;

use crate::{
    Automaton,
    Label,
    State,
    StateFactory,
    StateSet,
    toolbox,
    transformations::UnaryTransformation,
};

/// Keep only the states lying on some path from an initial state to a terminal state, and the
/// transitions between them.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pruner;

impl<L: Label, F: StateFactory> UnaryTransformation<L, F> for Pruner {
    fn transform(&self, automaton: &Automaton<L, F>) -> Automaton<L, F> {
        let mut pruned = Automaton::with_factory(automaton.factory().spawn());
        let states: Map<State, State> = automaton.accessible_and_co_accessible_states().iter().map(|state| (state, pruned.add_state(state.is_initial(), state.is_terminal()))).collect();
        toolbox::replay_transitions(&mut pruned, automaton, &states);
        debug!(states = pruned.states().len(), transitions = pruned.transition_count(), "pruner");
        pruned
    }
}
