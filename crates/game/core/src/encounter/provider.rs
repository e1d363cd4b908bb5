//! Action sources for the encounter loop.
//!
//! Humans and AI supply actions through the same trait; deciding *which*
//! action an AI picks is out of this crate's hands.

use std::collections::VecDeque;

use crate::action::Action;

use super::{Encounter, Side};

/// Supplies the next action for a side.
pub trait ActionProvider {
    /// Provide an action for `side` based on the current encounter.
    fn provide_action(&mut self, side: Side, encounter: &Encounter) -> Action;
}

/// A provider that always waits. Useful for testing or as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct WaitActionProvider;

impl ActionProvider for WaitActionProvider {
    fn provide_action(&mut self, _side: Side, _encounter: &Encounter) -> Action {
        Action::wait()
    }
}

/// Replays a fixed queue of actions, then repeats a fallback.
#[derive(Clone, Debug)]
pub struct ScriptedProvider {
    queue: VecDeque<Action>,
    fallback: Action,
}

impl ScriptedProvider {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
            fallback: Action::wait(),
        }
    }

    /// Provider that submits `action` forever.
    pub fn repeating(action: Action) -> Self {
        Self {
            queue: VecDeque::new(),
            fallback: action,
        }
    }

    #[must_use]
    pub fn then_repeat(mut self, action: Action) -> Self {
        self.fallback = action;
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ActionProvider for ScriptedProvider {
    fn provide_action(&mut self, _side: Side, _encounter: &Encounter) -> Action {
        self.queue
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
