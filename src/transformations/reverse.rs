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

/// The reverse of an automaton, recognizing the mirror image of every word.
///
/// Initial and terminal states trade places and every transition runs backwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse;

impl<L: Label, F: StateFactory> UnaryTransformation<L, F> for Reverse {
    fn transform(&self, automaton: &Automaton<L, F>) -> Automaton<L, F> {
        let mut reverse = Automaton::with_factory(automaton.factory().spawn());
        let states = toolbox::replay_states(&mut reverse, automaton, |state| (state.is_terminal(), state.is_initial()));
        for transition in automaton.delta() {
            if let (Some(&start), Some(&end)) = (states.get(&transition.end()), states.get(&transition.start())) {
                if let Err(error) = reverse.add_transition(Transition::new(start, transition.label().cloned(), end)) {
                    debug!(%error, "dropped transition");
                }
            }
        }
        debug!(states = reverse.states().len(), transitions = reverse.transition_count(), "reverse");
        reverse
    }
}

#[cfg(test)]
mod tests {
    use crate::{Automaton, Transition};
    use crate::transformations::{Reverse, UnaryTransformation};

    #[test]
    fn test_reverse() {
        let reverse = Reverse.transform(&Automaton::word_automaton(&['a', 'b', 'c']));
        assert!(reverse.accept(&['c', 'b', 'a']));
        assert!(!reverse.accept(&['a', 'b', 'c']));
    }

    #[test]
    fn test_reverse_with_epsilon() {
        let mut automaton = Automaton::new();
        let s0 = automaton.add_state(true, false);
        let s1 = automaton.add_state(false, false);
        let s2 = automaton.add_state(false, true);
        automaton.add_transition(Transition::labelled(s0, 'a', s1)).unwrap();
        automaton.add_transition(Transition::epsilon(s1, s2)).unwrap();
        automaton.add_transition(Transition::labelled(s2, 'b', s2)).unwrap();
        let reverse = Reverse.transform(&automaton);
        assert!(reverse.accept(&['a']));
        assert!(reverse.accept(&['b', 'b', 'a']));
        assert!(!reverse.accept(&['a', 'b']));
        assert_eq!(automaton.transition_count(), reverse.transition_count());
    }
}
