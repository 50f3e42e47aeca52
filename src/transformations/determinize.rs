use std::collections::HashMap as Map;
use tracing::debug;

use crate::{
    Automaton,
    Label,
    State,
    StateFactory,
    StateSet,
    Transition,
    toolbox,
    transformations::UnaryTransformation,
};

/// Determinization by subset construction.
///
/// Each state of the result stands for the epsilon-closed set of states reached by reading some
/// word. The result has at most one initial state, no epsilon moves and at most one transition per
/// state and label. Sets of states reached by no word are not built.
#[derive(Clone, Copy, Debug, Default)]
pub struct Determinize;

impl<L: Label, F: StateFactory> UnaryTransformation<L, F> for Determinize {
    fn transform(&self, automaton: &Automaton<L, F>) -> Automaton<L, F> {
        let mut dfa = Automaton::with_factory(automaton.factory().spawn());
        let initial = toolbox::epsilon_closure(automaton.initials(), automaton);
        if initial.is_empty() {
            return dfa;
        }
        let mut subsets: Map<Vec<State>, State> = Map::new();
        let start = dfa.add_state(true, initial.intersects(automaton.terminals()));
        subsets.insert(subset_key(&initial), start);
        let mut stack = vec![(initial, start)];
        while let Some((subset, source)) = stack.pop() {
            for label in automaton.alphabet() {
                let next = toolbox::epsilon_closure(&automaton.step(&subset, label), automaton);
                if next.is_empty() {
                    continue;
                }
                let key = subset_key(&next);
                let target = if let Some(&target) = subsets.get(&key) {
                    target
                } else {
                    let target = dfa.add_state(false, next.intersects(automaton.terminals()));
                    subsets.insert(key, target);
                    stack.push((next, target));
                    target
                };
                if let Err(error) = dfa.add_transition(Transition::labelled(source, label.clone(), target)) {
                    debug!(%error, "dropped transition");
                }
            }
        }
        debug!(subsets = subsets.len(), transitions = dfa.transition_count(), "determinize");
        dfa
    }
}

/// A canonical representation of a set of states, usable as a map key whatever the container.
fn subset_key<S: StateSet>(states: &S) -> Vec<State> {
    let mut key: Vec<State> = states.iter().collect();
    key.sort();
    key
}

#[cfg(test)]
mod tests {
    use crate::{Automaton, Transition};
    use crate::properties::{IsDeterministic, UnaryTest};
    use crate::transformations::{Determinize, Star, UnaryTransformation, Union, BinaryTransformation};

    #[test]
    fn test_determinize() {
        let mut nfa = Automaton::new();
        let s0 = nfa.add_state(true, false);
        let s1 = nfa.add_state(false, false);
        let s2 = nfa.add_state(false, false);
        let s3 = nfa.add_state(false, true);
        nfa.add_transition(Transition::labelled(s0, 'a', s1)).unwrap();
        nfa.add_transition(Transition::labelled(s0, 'a', s2)).unwrap();
        nfa.add_transition(Transition::labelled(s1, 'b', s3)).unwrap();
        nfa.add_transition(Transition::labelled(s2, 'b', s3)).unwrap();
        let dfa = Determinize.transform(&nfa);
        assert!(!IsDeterministic.test(&nfa));
        assert!(IsDeterministic.test(&dfa));
        assert_eq!(3, dfa.states().len());
        assert!(dfa.accept(&['a', 'b']));
        assert!(!dfa.accept(&['a']));
    }

    #[test]
    fn test_determinize_epsilon() {
        let nfa = Star.transform(&Union.transform(&Automaton::word_automaton(&['a', 'b']), &Automaton::label_automaton('c')));
        let dfa = Determinize.transform(&nfa);
        assert!(IsDeterministic.test(&dfa));
        for word in [vec![], vec!['a', 'b'], vec!['c', 'a', 'b', 'c'], vec!['a'], vec!['b', 'a'], vec!['c', 'a']] {
            assert_eq!(nfa.accept(&word), dfa.accept(&word));
        }
    }

    #[test]
    fn test_determinize_empty() {
        let dfa = Determinize.transform(&Automaton::<char>::new());
        assert!(dfa.states().is_empty());
    }
}
