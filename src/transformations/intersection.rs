use std::collections::{
    HashMap as Map,
    VecDeque,
};
use tracing::debug;

use crate::{
    Automaton,
    Label,
    State,
    StateFactory,
    StateSet,
    Transition,
    toolbox,
    transformations::BinaryTransformation,
};

/// The intersection of two automata, built as their product.
///
/// Each state of the result stands for a pair of states, one from each operand, reached by reading
/// the same word. The product has no epsilon moves: both operands are epsilon-closed at every step.
#[derive(Clone, Copy, Debug, Default)]
pub struct Intersection;

impl<L: Label, F: StateFactory> BinaryTransformation<L, F> for Intersection {
    fn transform(&self, left: &Automaton<L, F>, right: &Automaton<L, F>) -> Automaton<L, F> {
        let mut product = Automaton::with_factory(left.factory().spawn());
        let mut pairs: Map<(State, State), State> = Map::new();
        let mut queue = VecDeque::new();
        let terminal = |(l, r): (State, State)| left.terminals().contains(&l) && right.terminals().contains(&r);
        let lefts = toolbox::epsilon_closure(left.initials(), left);
        let rights = toolbox::epsilon_closure(right.initials(), right);
        for l in lefts.iter() {
            for r in rights.iter() {
                pairs.insert((l, r), product.add_state(true, terminal((l, r))));
                queue.push_back((l, r));
            }
        }
        let labels: Vec<&L> = left.alphabet().iter().filter(|label| right.alphabet().contains(*label)).collect();
        while let Some(pair) = queue.pop_front() {
            let start = match pairs.get(&pair) {
                Some(&start) => start,
                None => continue,
            };
            let (l, r) = pair;
            for &label in &labels {
                let lefts = toolbox::epsilon_closure(&left.step(&singleton(left, l), label), left);
                let rights = toolbox::epsilon_closure(&right.step(&singleton(right, r), label), right);
                for l in lefts.iter() {
                    for r in rights.iter() {
                        let end = match pairs.get(&(l, r)) {
                            Some(&end) => end,
                            None => {
                                let end = product.add_state(false, terminal((l, r)));
                                pairs.insert((l, r), end);
                                queue.push_back((l, r));
                                end
                            }
                        };
                        if let Err(error) = product.add_transition(Transition::labelled(start, label.clone(), end)) {
                            debug!(%error, "dropped transition");
                        }
                    }
                }
            }
        }
        debug!(states = product.states().len(), transitions = product.transition_count(), "intersection");
        product
    }
}

fn singleton<L: Label, F: StateFactory>(automaton: &Automaton<L, F>, state: State) -> F::States {
    let mut states = automaton.state_set();
    states.insert(state);
    states
}
