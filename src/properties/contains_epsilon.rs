use crate::{
    Automaton,
    Label,
    StateFactory,
    StateSet,
    properties::UnaryTest,
    toolbox,
};

/// Check if an automaton accepts the empty word.
///
/// The whole initial set is epsilon-closed at once, so terminal states hidden behind any chain of
/// epsilon moves are found.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContainsEpsilon;

impl<L: Label, F: StateFactory> UnaryTest<L, F> for ContainsEpsilon {
    fn test(&self, automaton: &Automaton<L, F>) -> bool {
        if automaton.initials().iter().any(|state| state.is_terminal()) {
            return true;
        }
        toolbox::contains_a_terminal_state(&toolbox::epsilon_closure(automaton.initials(), automaton))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Automaton, Transition};
    use crate::properties::{ContainsEpsilon, UnaryTest};

    #[test]
    fn test_contains_epsilon() {
        assert!(ContainsEpsilon.test(&Automaton::<char>::epsilon_automaton()));
        assert!(!ContainsEpsilon.test(&Automaton::label_automaton('a')));
        assert!(ContainsEpsilon.test(&Automaton::<char>::word_automaton(&[])));
        assert!(!ContainsEpsilon.test(&Automaton::<char>::new()));
    }

    #[test]
    fn test_contains_epsilon_deep() {
        let mut automaton = Automaton::new();
        let s0 = automaton.add_state(true, false);
        let s1 = automaton.add_state(false, false);
        let s2 = automaton.add_state(false, false);
        let s3 = automaton.add_state(false, true);
        automaton.add_transition(Transition::epsilon(s0, s1)).unwrap();
        automaton.add_transition(Transition::labelled(s0, 'a', s3)).unwrap();
        automaton.add_transition(Transition::epsilon(s1, s2)).unwrap();
        assert!(!ContainsEpsilon.test(&automaton));
        automaton.add_transition(Transition::epsilon(s2, s3)).unwrap();
        assert!(ContainsEpsilon.test(&automaton));
    }
}
