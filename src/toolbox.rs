//! Helpers shared by the automaton algorithms and the transformations.

use std::collections::HashMap as Map;
use tracing::debug;

use crate::{
    Automaton,
    Label,
    State,
    StateFactory,
    StateSet,
    Transition,
};

/// Compute the epsilon closure of `states`: the smallest superset closed under epsilon moves.
pub fn epsilon_closure<L: Label, F: StateFactory>(states: &F::States, automaton: &Automaton<L, F>) -> F::States {
    let mut closure = states.clone();
    let mut stack: Vec<State> = states.iter().collect();
    while let Some(state) = stack.pop() {
        for transition in automaton.delta_on(state, None) {
            if closure.insert(transition.end()) {
                stack.push(transition.end());
            }
        }
    }
    closure
}

/// Check if one of the states was created terminal.
pub fn contains_a_terminal_state<S: StateSet>(states: &S) -> bool {
    states.iter().any(|state| state.is_terminal())
}

/// Add a fresh state to `target` for every state of `source`, and return the map from the states of
/// `source` to their copies. `flags` gives the initial and terminal flags of each copy.
pub fn replay_states<L, F, G>(target: &mut Automaton<L, F>, source: &Automaton<L, G>, flags: impl Fn(State) -> (bool, bool)) -> Map<State, State>
where
    L: Label,
    F: StateFactory,
    G: StateFactory,
{
    source.states().iter().map(|state| {
        let (initial, terminal) = flags(state);
        (state, target.add_state(initial, terminal))
    }).collect()
}

/// Add every transition of `source` to `target` with endpoints mapped through `states`.
///
/// A transition whose endpoint has no image is dropped. Returns the number of transitions added.
pub fn replay_transitions<L, F, G>(target: &mut Automaton<L, F>, source: &Automaton<L, G>, states: &Map<State, State>) -> usize
where
    L: Label,
    F: StateFactory,
    G: StateFactory,
{
    let mut replayed = 0;
    for transition in source.delta() {
        let replay = match (states.get(&transition.start()), states.get(&transition.end())) {
            (Some(&start), Some(&end)) => target.add_transition(Transition::new(start, transition.label().cloned(), end)),
            _ => {
                debug!(start = %transition.start(), end = %transition.end(), "dropped transition without mapped endpoints");
                continue;
            }
        };
        match replay {
            Ok(()) => replayed += 1,
            Err(error) => debug!(%error, "dropped transition"),
        }
    }
    replayed
}
