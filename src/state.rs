use std::{
    cmp::Ordering,
    collections::{
        BTreeSet,
        HashSet,
    },
    fmt,
    hash::{
        Hash,
        Hasher,
    },
    marker::PhantomData,
    sync::atomic::{
        AtomicU64,
        Ordering as AtomicOrdering,
    },
};
use indexmap::IndexSet;

static NEXT_OWNER: AtomicU64 = AtomicU64::new(0);

/// Allocate an owner identifier never handed out before.
fn next_owner() -> u64 {
    NEXT_OWNER.fetch_add(1, AtomicOrdering::Relaxed)
}

/// A handle to a state of a finite automaton.
///
/// Identity is the handle: two states are equal only if they were returned by the same call to
/// [`StateFactory::create`]. The initial and terminal flags are carried for convenience and take no
/// part in equality, hashing or ordering.
#[derive(Clone, Copy, Debug)]
pub struct State {
    owner: u64,
    index: u64,
    initial: bool,
    terminal: bool,
}

impl State {
    /// Get the index of the state within its automaton.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Check if the state was created initial.
    pub fn is_initial(&self) -> bool {
        self.initial
    }

    /// Check if the state was created terminal.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
}

impl PartialEq for State {
    fn eq(&self, other: &State) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.owner.hash(hasher);
        self.index.hash(hasher);
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &State) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &State) -> Ordering {
        (self.owner, self.index).cmp(&(other.owner, other.index))
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.index)
    }
}

/// A container of states.
///
/// The concrete container is chosen by the [`StateFactory`] of an automaton, so every state set the
/// automaton hands out has the same representation.
pub trait StateSet: Clone + Default + fmt::Debug + PartialEq + Extend<State> + FromIterator<State> + IntoIterator<Item = State> {
    /// Insert the state, returning whether it was absent.
    fn insert(&mut self, state: State) -> bool;

    /// Remove the state, returning whether it was present.
    fn remove(&mut self, state: &State) -> bool;

    /// Check if the state is in the set.
    fn contains(&self, state: &State) -> bool;

    /// Get the number of states in the set.
    fn len(&self) -> usize;

    /// Check if the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all the states in the set.
    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = State> + 'a>;

    /// Keep only the states satisfying the predicate.
    fn retain<P: FnMut(&State) -> bool>(&mut self, predicate: P);

    /// Check if the two sets share a state.
    fn intersects(&self, other: &Self) -> bool {
        self.iter().any(|state| other.contains(&state))
    }
}

impl StateSet for HashSet<State> {
    fn insert(&mut self, state: State) -> bool {
        HashSet::insert(self, state)
    }

    fn remove(&mut self, state: &State) -> bool {
        HashSet::remove(self, state)
    }

    fn contains(&self, state: &State) -> bool {
        HashSet::contains(self, state)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = State> + 'a> {
        Box::new(HashSet::iter(self).copied())
    }

    fn retain<P: FnMut(&State) -> bool>(&mut self, predicate: P) {
        HashSet::retain(self, predicate)
    }
}

impl StateSet for BTreeSet<State> {
    fn insert(&mut self, state: State) -> bool {
        BTreeSet::insert(self, state)
    }

    fn remove(&mut self, state: &State) -> bool {
        BTreeSet::remove(self, state)
    }

    fn contains(&self, state: &State) -> bool {
        BTreeSet::contains(self, state)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = State> + 'a> {
        Box::new(BTreeSet::iter(self).copied())
    }

    fn retain<P: FnMut(&State) -> bool>(&mut self, predicate: P) {
        BTreeSet::retain(self, predicate)
    }
}

impl StateSet for IndexSet<State> {
    fn insert(&mut self, state: State) -> bool {
        IndexSet::insert(self, state)
    }

    fn remove(&mut self, state: &State) -> bool {
        IndexSet::shift_remove(self, state)
    }

    fn contains(&self, state: &State) -> bool {
        IndexSet::contains(self, state)
    }

    fn len(&self) -> usize {
        IndexSet::len(self)
    }

    fn iter<'a>(&'a self) -> Box<dyn Iterator<Item = State> + 'a> {
        Box::new(IndexSet::iter(self).copied())
    }

    fn retain<P: FnMut(&State) -> bool>(&mut self, mut predicate: P) {
        IndexSet::retain(self, |state| predicate(state))
    }
}

/// Creates the states of one automaton and chooses the container used for its state sets.
pub trait StateFactory: fmt::Debug {
    /// The container used for every state set of the automaton.
    type States: StateSet;

    /// Create a fresh state. No two calls ever return equal states.
    fn create(&mut self, initial: bool, terminal: bool) -> State;

    /// Create an empty state set.
    fn state_set(&self) -> Self::States {
        Self::States::default()
    }

    /// Create a factory of the same kind for a different automaton.
    fn spawn(&self) -> Self
    where
        Self: Sized;
}

/// A state factory numbering states consecutively and storing them in a `C`.
#[derive(Debug)]
pub struct DefaultStateFactory<C = HashSet<State>> {
    owner: u64,
    next_index: u64,
    container: PhantomData<C>,
}

/// A state factory whose state sets iterate in state order.
pub type OrderedStateFactory = DefaultStateFactory<BTreeSet<State>>;

/// A state factory whose state sets iterate in insertion order.
pub type IndexedStateFactory = DefaultStateFactory<IndexSet<State>>;

impl<C> DefaultStateFactory<C> {
    /// Create a new state factory with an unused owner.
    pub fn new() -> DefaultStateFactory<C> {
        DefaultStateFactory {
            owner: next_owner(),
            next_index: 0,
            container: PhantomData,
        }
    }
}

impl<C> Default for DefaultStateFactory<C> {
    fn default() -> DefaultStateFactory<C> {
        DefaultStateFactory::new()
    }
}

impl<C: StateSet> StateFactory for DefaultStateFactory<C> {
    type States = C;

    fn create(&mut self, initial: bool, terminal: bool) -> State {
        let index = self.next_index;
        self.next_index += 1;
        State {
            owner: self.owner,
            index,
            initial,
            terminal,
        }
    }

    fn spawn(&self) -> DefaultStateFactory<C> {
        DefaultStateFactory::new()
    }
}
