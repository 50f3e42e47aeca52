use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{
        Hash,
        Hasher,
    },
};

use crate::State;

/// A transition `(start, label, end)` of a finite automaton.
///
/// A label of `None` is an epsilon move. Transitions are immutable, so the hash computed at
/// construction never goes stale.
#[derive(Clone, Debug)]
pub struct Transition<L> {
    start: State,
    label: Option<L>,
    end: State,
    hash: u64,
}

impl<L: Hash> Transition<L> {
    /// Create a new transition from `start` to `end` reading `label`.
    pub fn new(start: State, label: Option<L>, end: State) -> Transition<L> {
        let mut hasher = DefaultHasher::new();
        start.hash(&mut hasher);
        label.hash(&mut hasher);
        end.hash(&mut hasher);
        Transition {
            start,
            label,
            end,
            hash: hasher.finish(),
        }
    }

    /// Create a new transition reading `label`.
    pub fn labelled(start: State, label: L, end: State) -> Transition<L> {
        Transition::new(start, Some(label), end)
    }

    /// Create a new epsilon transition.
    pub fn epsilon(start: State, end: State) -> Transition<L> {
        Transition::new(start, None, end)
    }

    /// Create the same transition reading `label` instead.
    ///
    /// Only the automaton may relabel a transition, since the alphabet and both indexes must be
    /// updated in the same step.
    pub(crate) fn relabelled(&self, label: Option<L>) -> Transition<L> {
        Transition::new(self.start, label, self.end)
    }

    /// Create the same transition running from `end` to `start`.
    pub(crate) fn reversed(&self) -> Transition<L>
    where
        L: Clone,
    {
        Transition::new(self.end, self.label.clone(), self.start)
    }
}

impl<L> Transition<L> {
    /// Get the state the transition leaves.
    pub fn start(&self) -> State {
        self.start
    }

    /// Get the label, `None` for an epsilon move.
    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }

    /// Get the state the transition enters.
    pub fn end(&self) -> State {
        self.end
    }

    /// Check if the transition is an epsilon move.
    pub fn is_epsilon(&self) -> bool {
        self.label.is_none()
    }
}

impl<L: PartialEq> PartialEq for Transition<L> {
    fn eq(&self, other: &Transition<L>) -> bool {
        self.hash == other.hash && self.start == other.start && self.end == other.end && self.label == other.label
    }
}

impl<L: Eq> Eq for Transition<L> {}

impl<L> Hash for Transition<L> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        hasher.write_u64(self.hash);
    }
}

impl<L: fmt::Display> fmt::Display for Transition<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "({} , {} , {})", self.start, label, self.end),
            None => write!(f, "({} , ε , {})", self.start, self.end),
        }
    }
}
