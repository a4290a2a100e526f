//! Completion notifications
//!
//! Listeners are called after the grid has settled its own state for the
//! finished group, so they always observe a consistent layout.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned when subscribing to completion events
    pub struct ListenerId;
}

/// Which way a finished group moved the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomTransition {
    /// Grid to zoomed
    ZoomIn,
    /// Zoomed to grid
    ZoomOut,
}

/// Emitted once per completed animation group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationFinished {
    pub transition: ZoomTransition,
    /// Focused entry after the group settled
    pub focused: Option<usize>,
}

/// Completion handler function type
pub type FinishedHandler = Box<dyn FnMut(&AnimationFinished)>;

/// Fans a completion out to every subscribed listener
#[derive(Default)]
pub struct EventDispatcher {
    handlers: SlotMap<ListenerId, FinishedHandler>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler
    pub fn subscribe<F>(&mut self, handler: F) -> ListenerId
    where
        F: FnMut(&AnimationFinished) + 'static,
    {
        self.handlers.insert(Box::new(handler))
    }

    /// Remove a handler, returning whether it was registered
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.handlers.remove(id).is_some()
    }

    /// Dispatch an event to all registered handlers in subscription order
    pub fn dispatch(&mut self, event: &AnimationFinished) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
