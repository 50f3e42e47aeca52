use std::collections::HashSet;

use rationals::{word, Automaton, State, StateSet, Transition};
use rationals::properties::{ContainsEpsilon, Equivalence, IsEmpty, UnaryTest, BinaryTest};
use rationals::transformations::{BinaryTransformation, Determinize, Pruner, Union, UnaryTransformation};

fn states_of<S: StateSet>(states: &S) -> HashSet<State> {
    states.iter().collect()
}

#[test]
fn test_word_automata() {
    let ab = Automaton::word_automaton(&word!["a", "b"]);
    assert!(ab.accept(&word!["a", "b"]));
    for rejected in [word!["a"], word!["b"], word![], word!["a", "b", "c"]] {
        assert!(!ab.accept(&rejected));
    }
    let c = Automaton::word_automaton(&word!["c"]);
    assert!(c.accept(&word!["c"]));
    assert!(!c.accept(&word!["c", "c"]));
}

#[test]
fn test_union() {
    let ab = Automaton::word_automaton(&word!["a", "b"]);
    let c = Automaton::word_automaton(&word!["c"]);
    let ab_states = states_of(ab.states());
    let ab_delta = ab.delta();
    let union = Union.transform(&ab, &c);
    assert!(union.accept(&word!["a", "b"]));
    assert!(union.accept(&word!["c"]));
    assert!(!union.accept(&word!["a"]));
    assert!(!union.accept(&word![]));
    for candidate in [word![], word!["a"], word!["a", "b"], word!["c"], word!["a", "c"], word!["c", "b"]] {
        assert_eq!(ab.accept(&candidate) || c.accept(&candidate), union.accept(&candidate));
    }
    assert_eq!(ab_states, states_of(ab.states()));
    assert_eq!(ab_delta, ab.delta());
}

#[test]
fn test_contains_epsilon() {
    assert!(ContainsEpsilon.test(&Automaton::<&str>::epsilon_automaton()));
    assert!(!ContainsEpsilon.test(&Automaton::label_automaton("a")));
}

#[test]
fn test_enumerate() {
    let ab = Automaton::word_automaton(&word!["a", "b"]);
    let expected: HashSet<Vec<&str>> = [word![], word!["a"], word!["a", "b"]].into_iter().collect();
    assert_eq!(expected, ab.enumerate(2));
}

#[test]
fn test_clone_isolation() {
    let union = Union.transform(&Automaton::word_automaton(&word!['a', 'b']), &Automaton::label_automaton('c'));
    let clone = union.clone();
    assert!(states_of(union.states()).is_disjoint(&states_of(clone.states())));
    assert_eq!(union.transition_count(), clone.transition_count());
    for candidate in [word![], word!['a'], word!['a', 'b'], word!['c'], word!['b', 'c']] {
        assert_eq!(union.accept(&candidate), clone.accept(&candidate));
    }
    assert!(Equivalence.test(&union, &clone));
}

#[test]
fn test_project_on_preserves_connectivity() {
    let mut automaton = Automaton::word_automaton(&word!['a', 'b', 'c', 'b']);
    let kept: HashSet<char> = ['a', 'c'].into_iter().collect();
    automaton.project_on(&kept);
    assert_eq!(&kept, automaton.alphabet());
    assert_eq!(4, automaton.transition_count());
    assert!(automaton.accept(&word!['a', 'c']));
    assert!(!automaton.accept(&word!['a', 'b', 'c']));
}

#[test]
fn test_relabel_leaves_no_stale_key() {
    let mut automaton = Automaton::new();
    let s0 = automaton.add_state(true, false);
    let s1 = automaton.add_state(false, true);
    let old = Transition::labelled(s0, 'a', s1);
    automaton.add_transition(old.clone()).unwrap();
    let new = automaton.update_transition_with(&old, Some('b')).unwrap();
    assert!(automaton.delta_on(s0, Some(&'a')).is_empty());
    assert!(automaton.delta_minus_one_on(s1, Some(&'a')).is_empty());
    assert!(automaton.delta_on(s0, Some(&'b')).contains(&new));
    assert!(!automaton.delta().contains(&old));
    assert!(automaton.accept(&['b']));
    assert!(!automaton.accept(&['a']));
    assert!(automaton.update_transition_with(&old, Some('c')).is_err());
}

#[test]
fn test_pruned_determinized_union() {
    let union = Union.transform(&Automaton::word_automaton(&word!['a', 'b']), &Automaton::word_automaton(&word!['a', 'c']));
    let dfa = Pruner.transform(&Determinize.transform(&union));
    assert!(Equivalence.test(&union, &dfa));
    assert_eq!(4, dfa.states().len());
    assert!(!IsEmpty.test(&dfa));
}
