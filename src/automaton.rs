use std::{
    collections::{
        HashMap as Map,
        HashSet as Set,
        VecDeque,
    },
    iter,
};
use tracing::{
    debug,
    trace,
};

use crate::{
    AutomatonError,
    DefaultStateFactory,
    Label,
    Result,
    State,
    StateFactory,
    StateSet,
    Transition,
    toolbox,
};

/// A state and a label, used to index transitions.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct Key<L> {
    state: State,
    label: Option<L>,
}

impl<L> Key<L> {
    fn new(state: State, label: Option<L>) -> Key<L> {
        Key { state, label }
    }
}

type Index<L> = Map<Key<L>, Set<Transition<L>>>;

/// A finite automaton `(X, Q, I, T, D)` over labels of type `L`.
///
/// `X` is the alphabet, `Q` the states, `I` and `T` the initial and terminal states and `D` the
/// transitions. A transition labelled `None` reads the empty word. States are created by the
/// automaton and may only be used with the automaton that created them.
#[derive(Debug)]
pub struct Automaton<L, F: StateFactory = DefaultStateFactory> {
    factory: F,
    alphabet: Set<L>,
    states: F::States,
    initials: F::States,
    terminals: F::States,
    transitions: Index<L>,
    reverse: Index<L>,
}

impl<L: Label> Automaton<L> {
    /// Create a new empty automaton, recognizing the empty language.
    pub fn new() -> Automaton<L> {
        Automaton::with_factory(DefaultStateFactory::new())
    }

    /// Create an automaton recognizing only the empty word.
    pub fn epsilon_automaton() -> Automaton<L> {
        let mut automaton = Automaton::new();
        automaton.add_state(true, true);
        automaton
    }

    /// Create an automaton recognizing only the single-label word `label`.
    pub fn label_automaton(label: L) -> Automaton<L> {
        let mut automaton = Automaton::new();
        let start = automaton.add_state(true, false);
        let end = automaton.add_state(false, true);
        automaton.connect(Transition::labelled(start, label, end));
        automaton
    }

    /// Create an automaton recognizing only `word`.
    pub fn word_automaton(word: &[L]) -> Automaton<L> {
        let mut automaton = Automaton::new();
        if word.is_empty() {
            automaton.add_state(true, true);
            return automaton;
        }
        let mut start = automaton.add_state(true, false);
        for (position, label) in word.iter().enumerate() {
            let end = automaton.add_state(false, position + 1 == word.len());
            automaton.connect(Transition::labelled(start, label.clone(), end));
            start = end;
        }
        automaton
    }
}

impl<L: Label> Default for Automaton<L> {
    fn default() -> Automaton<L> {
        Automaton::new()
    }
}

impl<L: Label, F: StateFactory> Automaton<L, F> {
    /// Create a new empty automaton whose states are created by `factory`.
    pub fn with_factory(factory: F) -> Automaton<L, F> {
        Automaton {
            alphabet: Set::new(),
            states: factory.state_set(),
            initials: factory.state_set(),
            terminals: factory.state_set(),
            transitions: Map::new(),
            reverse: Map::new(),
            factory,
        }
    }

    /// Get the state factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Create an empty state set of the container type used by this automaton.
    pub fn state_set(&self) -> F::States {
        self.factory.state_set()
    }

    /// Insert a new state and return it.
    pub fn add_state(&mut self, initial: bool, terminal: bool) -> State {
        let state = self.factory.create(initial, terminal);
        if initial {
            self.initials.insert(state);
        }
        if terminal {
            self.terminals.insert(state);
        }
        self.states.insert(state);
        state
    }

    /// Get the alphabet: every label of a non-epsilon transition.
    pub fn alphabet(&self) -> &Set<L> {
        &self.alphabet
    }

    /// Get all the states.
    pub fn states(&self) -> &F::States {
        &self.states
    }

    /// Get the initial states.
    pub fn initials(&self) -> &F::States {
        &self.initials
    }

    /// Get the terminal states.
    pub fn terminals(&self) -> &F::States {
        &self.terminals
    }

    /// Get the number of transitions.
    pub fn transition_count(&self) -> usize {
        self.transitions.values().map(|transitions| transitions.len()).sum()
    }

    /// Insert the transition.
    ///
    /// Fails with [`AutomatonError::NoSuchState`] if either endpoint is not a state of this
    /// automaton. Inserting a transition already present has no effect.
    pub fn add_transition(&mut self, transition: Transition<L>) -> Result<()> {
        for state in [transition.start(), transition.end()] {
            if !self.states.contains(&state) {
                return Err(AutomatonError::NoSuchState { state });
            }
        }
        self.connect(transition);
        Ok(())
    }

    /// Insert the transition whose endpoints are known to belong to this automaton.
    fn connect(&mut self, transition: Transition<L>) {
        if let Some(label) = transition.label() {
            if !self.alphabet.contains(label) {
                self.alphabet.insert(label.clone());
            }
        }
        trace!(start = %transition.start(), label = ?transition.label(), end = %transition.end(), "insert transition");
        Self::insert_into(&mut self.reverse, transition.reversed());
        Self::insert_into(&mut self.transitions, transition);
    }

    fn insert_into(index: &mut Index<L>, transition: Transition<L>) {
        index.entry(Key::new(transition.start(), transition.label().cloned())).or_insert_with(Set::new).insert(transition);
    }

    fn remove_from(index: &mut Index<L>, transition: &Transition<L>) -> bool {
        let key = Key::new(transition.start(), transition.label().cloned());
        let removed = index.get_mut(&key).map_or(false, |transitions| transitions.remove(transition));
        if index.get(&key).map_or(false, |transitions| transitions.is_empty()) {
            index.remove(&key);
        }
        removed
    }

    fn bucket<'a>(index: &'a Index<L>, state: State, label: Option<&L>) -> Option<&'a Set<Transition<L>>> {
        index.get(&Key::new(state, label.cloned()))
    }

    /// All labels a transition may carry here, epsilon first.
    fn labels<'a>(&'a self) -> Box<dyn Iterator<Item = Option<&'a L>> + 'a> {
        Box::new(iter::once(None).chain(self.alphabet.iter().map(Some)))
    }

    /// Get all the transitions.
    pub fn delta(&self) -> Set<Transition<L>> {
        self.transitions.values().flatten().cloned().collect()
    }

    /// Get the transitions leaving `state` reading `label` (`None` for epsilon moves).
    pub fn delta_on(&self, state: State, label: Option<&L>) -> Set<Transition<L>> {
        Self::bucket(&self.transitions, state, label).cloned().unwrap_or_default()
    }

    /// Get the transitions leaving `state`, epsilon moves included.
    pub fn delta_state(&self, state: State) -> Set<Transition<L>> {
        self.labels().filter_map(|label| Self::bucket(&self.transitions, state, label)).flatten().cloned().collect()
    }

    /// Get the transitions leaving any of the states.
    pub fn delta_states(&self, states: impl IntoIterator<Item = State>) -> Set<Transition<L>> {
        states.into_iter().flat_map(|state| self.delta_state(state)).collect()
    }

    /// Get the transitions from `from` to `to`.
    pub fn delta_from(&self, from: State, to: State) -> Set<Transition<L>> {
        let mut transitions = self.delta_state(from);
        transitions.retain(|transition| transition.end() == to);
        transitions
    }

    /// Get the transitions of the reverse automaton leaving `state` reading `label`.
    ///
    /// These are the transitions entering `state` in this automaton, with their endpoints swapped.
    pub fn delta_minus_one_on(&self, state: State, label: Option<&L>) -> Set<Transition<L>> {
        Self::bucket(&self.reverse, state, label).cloned().unwrap_or_default()
    }

    /// Get the transitions of the reverse automaton leaving `state`, epsilon moves included.
    pub fn delta_minus_one(&self, state: State) -> Set<Transition<L>> {
        self.labels().filter_map(|label| Self::bucket(&self.reverse, state, label)).flatten().cloned().collect()
    }

    /// Group the transitions by their `(start, end)` pair.
    pub fn couples(&self) -> Map<(State, State), Set<Transition<L>>> {
        let mut couples: Map<(State, State), Set<Transition<L>>> = Map::new();
        for transition in self.transitions.values().flatten() {
            couples.entry((transition.start(), transition.end())).or_insert_with(Set::new).insert(transition.clone());
        }
        couples
    }

    /// Compute every state reachable from `start` through transitions of `index`.
    fn access(&self, start: &F::States, index: &Index<L>) -> F::States {
        let mut reached = start.clone();
        let mut stack: Vec<State> = start.iter().collect();
        while let Some(state) = stack.pop() {
            for transitions in self.labels().filter_map(|label| Self::bucket(index, state, label)) {
                for transition in transitions {
                    if reached.insert(transition.end()) {
                        stack.push(transition.end());
                    }
                }
            }
        }
        reached
    }

    /// Get the states reachable from an initial state.
    pub fn accessible_states(&self) -> F::States {
        self.access(&self.initials, &self.transitions)
    }

    /// Get the states reachable from any of `states`, which are included.
    pub fn accessible_states_from(&self, states: &F::States) -> F::States {
        self.access(states, &self.transitions)
    }

    /// Get the states reachable from `state`, which is included.
    pub fn accessible_states_of(&self, state: State) -> F::States {
        self.access(&self.singleton(state), &self.transitions)
    }

    /// Get the states from which a terminal state is reachable.
    pub fn co_accessible_states(&self) -> F::States {
        self.access(&self.terminals, &self.reverse)
    }

    /// Get the states from which any of `states` is reachable; `states` are included.
    pub fn co_accessible_states_from(&self, states: &F::States) -> F::States {
        self.access(states, &self.reverse)
    }

    /// Get the states lying on some path from an initial state to a terminal state.
    pub fn accessible_and_co_accessible_states(&self) -> F::States {
        let co_accessible = self.co_accessible_states();
        let mut states = self.accessible_states();
        states.retain(|state| co_accessible.contains(state));
        states
    }

    fn singleton(&self, state: State) -> F::States {
        let mut states = self.state_set();
        states.insert(state);
        states
    }

    /// Replace every transition whose label is not in `alphabet` by an epsilon move between the same
    /// states, and restrict the alphabet to `alphabet`.
    pub fn project_on(&mut self, alphabet: &Set<L>) {
        let keep = |key: &Key<L>| key.label.as_ref().map_or(true, |label| alphabet.contains(label));
        let projected: Vec<Transition<L>> = self.transitions.iter().filter(|&(key, _)| !keep(key)).flat_map(|(_, transitions)| transitions.iter().map(|transition| transition.relabelled(None))).collect();
        self.transitions.retain(|key, _| keep(key));
        self.reverse.retain(|key, _| keep(key));
        self.alphabet.retain(|label| alphabet.contains(label));
        debug!(projected = projected.len(), alphabet = self.alphabet.len(), "projected automaton");
        for transition in projected {
            self.connect(transition);
        }
    }

    /// Replace `transition` by the same transition reading `label`, and return the replacement.
    ///
    /// Both indexes are updated, and the old label leaves the alphabet once no transition reads it.
    /// Fails with [`AutomatonError::NoSuchTransition`] if `transition` is not in this automaton.
    pub fn update_transition_with(&mut self, transition: &Transition<L>, label: Option<L>) -> Result<Transition<L>> {
        if !Self::remove_from(&mut self.transitions, transition) {
            return Err(AutomatonError::NoSuchTransition);
        }
        Self::remove_from(&mut self.reverse, &transition.reversed());
        if let Some(old) = transition.label() {
            if !self.transitions.keys().any(|key| key.label.as_ref() == Some(old)) {
                self.alphabet.remove(old);
            }
        }
        let relabelled = transition.relabelled(label);
        trace!(start = %transition.start(), from = ?transition.label(), to = ?relabelled.label(), end = %transition.end(), "relabel transition");
        self.connect(relabelled.clone());
        Ok(relabelled)
    }

    /// Get the states reached from `states` by reading `label`.
    ///
    /// `states` are epsilon-closed first; the reached states are not.
    pub fn step(&self, states: &F::States, label: &L) -> F::States {
        let mut reached = self.state_set();
        for state in toolbox::epsilon_closure(states, self).iter() {
            if let Some(transitions) = Self::bucket(&self.transitions, state, Some(label)) {
                reached.extend(transitions.iter().map(|transition| transition.end()));
            }
        }
        reached
    }

    /// Get the states reached from `states` by reading `word`.
    pub fn steps_from(&self, states: &F::States, word: &[L]) -> F::States {
        let mut current = states.clone();
        for label in word {
            current = self.step(&current, label);
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// Get the states reached from `state` by reading `word`.
    pub fn steps_from_state(&self, state: State, word: &[L]) -> F::States {
        self.steps_from(&self.singleton(state), word)
    }

    /// Get the states reached from the initial states by reading `word`.
    pub fn steps(&self, word: &[L]) -> F::States {
        self.steps_from(&toolbox::epsilon_closure(&self.initials, self), word)
    }

    /// Like [`Automaton::steps`], but labels outside the alphabet are skipped instead of rejected.
    pub fn steps_project(&self, word: &[L]) -> F::States {
        let mut current = self.initials.clone();
        for label in word.iter().filter(|label| self.alphabet.contains(*label)) {
            current = self.step(&current, label);
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// Check if `word`, with labels outside the alphabet deleted, leads somewhere from an initial
    /// state.
    pub fn prefix_projection(&self, word: &[L]) -> bool {
        !self.steps_project(word).is_empty()
    }

    /// Check if the automaton accepts `word`.
    pub fn accept(&self, word: &[L]) -> bool {
        toolbox::epsilon_closure(&self.steps(word), self).intersects(&self.terminals)
    }

    /// Check if some path reading `word` leaves `state`. The path need not end in a terminal state.
    pub fn accept_from(&self, state: State, word: &[L]) -> bool {
        !self.steps_from_state(state, word).is_empty()
    }

    /// Get the states reached after each label of `word` read from `start`, or from the initial
    /// states if `start` is `None`.
    ///
    /// Labels outside the alphabet are skipped. Returns `None` if no state is reached at some point.
    pub fn trace_states(&self, word: &[L], start: Option<State>) -> Option<Vec<F::States>> {
        let mut current = match start {
            Some(state) => self.singleton(state),
            None => self.initials.clone(),
        };
        let mut trace = Vec::new();
        for label in word.iter().filter(|label| self.alphabet.contains(*label)) {
            current = self.step(&current, label);
            if current.is_empty() {
                return None;
            }
            trace.push(current.clone());
        }
        Some(trace)
    }

    /// Get the length of the longest prefix of `word` leading somewhere from the initial states.
    ///
    /// Labels outside the alphabet always count towards the prefix.
    pub fn longest_prefix_with_projection(&self, word: &[L]) -> usize {
        let mut length = 0;
        let mut current = self.initials.clone();
        for label in word {
            if self.alphabet.contains(label) {
                current = self.step(&current, label);
                if current.is_empty() {
                    break;
                }
            }
            length += 1;
        }
        length
    }

    /// Get every word of at most `length` labels that can be read from an initial state.
    ///
    /// These are reachable prefixes, not accepted words: the empty word is included as soon as there
    /// is an initial state. See [`Automaton::enumerate_accepted`] for the accepted words only.
    pub fn enumerate(&self, length: usize) -> Set<Vec<L>> {
        let mut words = Set::new();
        if self.initials.is_empty() {
            return words;
        }
        words.insert(Vec::new());
        let mut queue: VecDeque<(State, Vec<L>)> = self.initials.iter().map(|state| (state, Vec::new())).collect();
        let mut visited: Set<(State, Vec<L>)> = queue.iter().cloned().collect();
        while let Some((state, word)) = queue.pop_front() {
            if word.len() >= length {
                continue;
            }
            for source in toolbox::epsilon_closure(&self.singleton(state), self).iter() {
                for label in &self.alphabet {
                    for transition in Self::bucket(&self.transitions, source, Some(label)).into_iter().flatten() {
                        let mut next = word.clone();
                        next.push(label.clone());
                        words.insert(next.clone());
                        if visited.insert((transition.end(), next.clone())) {
                            queue.push_back((transition.end(), next));
                        }
                    }
                }
            }
        }
        words
    }

    /// Get every accepted word of at most `length` labels.
    pub fn enumerate_accepted(&self, length: usize) -> Set<Vec<L>> {
        self.enumerate(length).into_iter().filter(|word| self.accept(word)).collect()
    }
}

impl<L: Label, F: StateFactory> Clone for Automaton<L, F> {
    /// Copy the automaton with fresh states and transitions. The copy has the same shape but shares
    /// no state with this automaton.
    fn clone(&self) -> Automaton<L, F> {
        let mut automaton = Automaton::with_factory(self.factory.spawn());
        let states = toolbox::replay_states(&mut automaton, self, |state| (state.is_initial(), state.is_terminal()));
        toolbox::replay_transitions(&mut automaton, self, &states);
        automaton
    }
}
