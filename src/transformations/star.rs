use tracing::debug;

use crate::{
    Automaton,
    Label,
    StateFactory,
    StateSet,
    Transition,
    toolbox,
    transformations::UnaryTransformation,
};

/// The Kleene star of an automaton: any number of words of its language, one after another.
///
/// A new initial and terminal state enters the copy through epsilon moves to its initial states,
/// and every terminal state of the copy returns to it through an epsilon move.
#[derive(Clone, Copy, Debug, Default)]
pub struct Star;

impl<L: Label, F: StateFactory> UnaryTransformation<L, F> for Star {
    fn transform(&self, automaton: &Automaton<L, F>) -> Automaton<L, F> {
        let mut star = Automaton::with_factory(automaton.factory().spawn());
        let hub = star.add_state(true, true);
        let states = toolbox::replay_states(&mut star, automaton, |state| (false, state.is_terminal()));
        toolbox::replay_transitions(&mut star, automaton, &states);
        let entries = automaton.initials().iter().filter_map(|state| states.get(&state)).map(|&state| Transition::epsilon(hub, state));
        let exits = automaton.terminals().iter().filter_map(|state| states.get(&state)).map(|&state| Transition::epsilon(state, hub));
        for transition in entries.chain(exits) {
            if let Err(error) = star.add_transition(transition) {
                debug!(%error, "dropped transition");
            }
        }
        debug!(states = star.states().len(), transitions = star.transition_count(), "star");
        star
    }
}
