use crate::{
    Automaton,
    Label,
    StateFactory,
    StateSet,
    properties::UnaryTest,
};

/// Check if an automaton recognizes the empty language: no terminal state is accessible.
#[derive(Clone, Copy, Debug, Default)]
pub struct IsEmpty;

impl<L: Label, F: StateFactory> UnaryTest<L, F> for IsEmpty {
    fn test(&self, automaton: &Automaton<L, F>) -> bool {
        !automaton.accessible_states().intersects(automaton.terminals())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Automaton, Transition};
    use crate::properties::{IsEmpty, UnaryTest};
    use crate::transformations::{BinaryTransformation, Intersection};

    #[test]
    fn test_is_empty() {
        assert!(IsEmpty.test(&Automaton::<char>::new()));
        assert!(!IsEmpty.test(&Automaton::<char>::epsilon_automaton()));
        assert!(!IsEmpty.test(&Automaton::label_automaton('a')));
        let intersection = Intersection.transform(&Automaton::label_automaton('a'), &Automaton::label_automaton('b'));
        assert!(IsEmpty.test(&intersection));
    }

    #[test]
    fn test_is_empty_unreachable_terminal() {
        let mut automaton = Automaton::new();
        let s0 = automaton.add_state(true, false);
        let s1 = automaton.add_state(false, true);
        automaton.add_transition(Transition::labelled(s1, 'a', s0)).unwrap();
        assert!(IsEmpty.test(&automaton));
        automaton.add_transition(Transition::epsilon(s0, s1)).unwrap();
        assert!(!IsEmpty.test(&automaton));
    }
}
