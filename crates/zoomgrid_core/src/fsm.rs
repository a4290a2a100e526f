//! Flat state machine
//!
//! A transition table keyed by `(state, event)`. Events with no matching
//! transition leave the machine where it is, which is how callers express
//! "request ignored". A bounded history of taken transitions is kept for
//! debugging.

use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

/// Default number of transitions remembered in the history
pub const DEFAULT_HISTORY_LIMIT: usize = 32;

/// A transition in the state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition<S, E> {
    pub from_state: S,
    pub event: E,
    pub to_state: S,
}

impl<S, E> Transition<S, E> {
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: from,
            event,
            to_state: to,
        }
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: Vec<Transition<S, E>>,
    history_limit: usize,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(self, from: S, event: E, to: S) -> Self {
        self.transition(Transition::new(from, event, to))
    }

    /// Number of transitions kept in history (0 disables it)
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        let mut machine = StateMachine::new(self.initial_state, self.transitions);
        machine.history_limit = self.history_limit;
        machine
    }
}

/// A state machine instance
#[derive(Clone, Debug)]
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: FxHashMap<(S, E), S>,
    history: VecDeque<Transition<S, E>>,
    history_limit: usize,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Hash + Debug,
{
    /// Create a new state machine with an initial state and transitions.
    ///
    /// When two transitions share a `(from, event)` pair the later one wins.
    pub fn new(initial_state: S, transitions: Vec<Transition<S, E>>) -> Self {
        let transitions = transitions
            .into_iter()
            .map(|t| ((t.from_state, t.event), t.to_state))
            .collect();
        Self {
            current_state: initial_state,
            transitions,
            history: VecDeque::new(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E) -> bool {
        self.transitions.contains_key(&(self.current_state, event))
    }

    /// Send an event, returning the new state if a transition was taken
    pub fn send(&mut self, event: E) -> Option<S> {
        let from = self.current_state;
        let to = *self.transitions.get(&(from, event))?;

        self.current_state = to;
        tracing::trace!(?from, ?event, ?to, "state transition");

        if self.history_limit > 0 {
            if self.history.len() == self.history_limit {
                self.history.pop_front();
            }
            self.history.push_back(Transition::new(from, event, to));
        }

        Some(to)
    }

    /// Transitions taken so far, oldest first
    pub fn history(&self) -> impl Iterator<Item = &Transition<S, E>> {
        self.history.iter()
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
