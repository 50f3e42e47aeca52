use tracing::debug;

use crate::{
    Automaton,
    Label,
    StateFactory,
    StateSet,
    Transition,
    toolbox,
    transformations::BinaryTransformation,
};

/// The concatenation of two automata: words of the left language followed by words of the right
/// language.
///
/// The terminal states of the left copy are linked to the initial states of the right copy by
/// epsilon moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Concatenation;

impl<L: Label, F: StateFactory> BinaryTransformation<L, F> for Concatenation {
    fn transform(&self, left: &Automaton<L, F>, right: &Automaton<L, F>) -> Automaton<L, F> {
        let mut concatenation = Automaton::with_factory(left.factory().spawn());
        let lefts = toolbox::replay_states(&mut concatenation, left, |state| (state.is_initial(), false));
        toolbox::replay_transitions(&mut concatenation, left, &lefts);
        let rights = toolbox::replay_states(&mut concatenation, right, |state| (false, state.is_terminal()));
        toolbox::replay_transitions(&mut concatenation, right, &rights);
        for terminal in left.terminals().iter() {
            for initial in right.initials().iter() {
                if let (Some(&start), Some(&end)) = (lefts.get(&terminal), rights.get(&initial)) {
                    if let Err(error) = concatenation.add_transition(Transition::epsilon(start, end)) {
                        debug!(%error, "dropped transition");
                    }
                }
            }
        }
        debug!(states = concatenation.states().len(), transitions = concatenation.transition_count(), "concatenation");
        concatenation
    }
}
