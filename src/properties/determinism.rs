use crate::{
    Automaton,
    Label,
    StateFactory,
    StateSet,
    properties::UnaryTest,
};

/// Check if an automaton is deterministic: at most one initial state, no epsilon moves and at most
/// one transition per state and label.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsDeterministic;

impl<L: Label, F: StateFactory> UnaryTest<L, F> for IsDeterministic {
    fn test(&self, automaton: &Automaton<L, F>) -> bool {
        automaton.initials().len() <= 1 && automaton.states().iter().all(|state| {
            automaton.delta_on(state, None).is_empty() && automaton.alphabet().iter().all(|label| automaton.delta_on(state, Some(label)).len() <= 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Automaton, Transition};
    use crate::properties::{IsDeterministic, UnaryTest};
    use crate::transformations::{BinaryTransformation, Union};

    #[test]
    fn test_is_deterministic() {
        assert!(IsDeterministic.test(&Automaton::word_automaton(&['a', 'b'])));
        assert!(IsDeterministic.test(&Automaton::<char>::new()));
        assert!(!IsDeterministic.test(&Union.transform(&Automaton::label_automaton('a'), &Automaton::label_automaton('b'))));
    }

    #[test]
    fn test_is_deterministic_epsilon() {
        let mut automaton = Automaton::<char>::new();
        let s0 = automaton.add_state(true, false);
        let s1 = automaton.add_state(false, true);
        automaton.add_transition(Transition::epsilon(s0, s1)).unwrap();
        assert!(!IsDeterministic.test(&automaton));
    }
}
