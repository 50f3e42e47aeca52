use std::collections::{
    HashSet as Set,
    VecDeque,
};

use crate::{
    Automaton,
    Label,
    State,
    StateFactory,
    StateSet,
    properties::BinaryTest,
    transformations::{
        Determinize,
        UnaryTransformation,
    },
};

/// Check if every word accepted by the left automaton is accepted by the right automaton.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inclusion;

impl<L: Label, F: StateFactory> BinaryTest<L, F> for Inclusion {
    fn test(&self, left: &Automaton<L, F>, right: &Automaton<L, F>) -> bool {
        agree(left, right, |left, right| !left || right)
    }
}

/// Check if two automata accept the same words.
#[derive(Clone, Copy, Debug, Default)]
pub struct Equivalence;

impl<L: Label, F: StateFactory> BinaryTest<L, F> for Equivalence {
    fn test(&self, left: &Automaton<L, F>, right: &Automaton<L, F>) -> bool {
        agree(left, right, |left, right| left == right)
    }
}

/// Read every word in both determinized automata at once, and check that `accepts` holds for the
/// acceptance of each word by the left and right automaton. A missing state stands for the sink.
fn agree<L: Label, F: StateFactory>(left: &Automaton<L, F>, right: &Automaton<L, F>, accepts: impl Fn(bool, bool) -> bool) -> bool {
    let left = Determinize.transform(left);
    let right = Determinize.transform(right);
    let labels: Set<&L> = left.alphabet().union(right.alphabet()).collect();
    let start = (left.initials().iter().next(), right.initials().iter().next());
    let mut visited = Set::new();
    visited.insert(start);
    let mut queue = VecDeque::new();
    queue.push_back(start);
    while let Some((l, r)) = queue.pop_front() {
        let terminal = |automaton: &Automaton<L, F>, state: Option<State>| state.map_or(false, |state| automaton.terminals().contains(&state));
        if !accepts(terminal(&left, l), terminal(&right, r)) {
            return false;
        }
        for label in &labels {
            let next = (l.and_then(|state| successor(&left, state, label)), r.and_then(|state| successor(&right, state, label)));
            if next != (None, None) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    true
}

fn successor<L: Label, F: StateFactory>(automaton: &Automaton<L, F>, state: State, label: &L) -> Option<State> {
    automaton.delta_on(state, Some(label)).into_iter().next().map(|transition| transition.end())
}
