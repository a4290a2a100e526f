//! Zoom phases
//!
//! ```text
//!  Grid --ZoomRequested--> ZoomingIn --AnimationFinished--> Zoomed
//!   ^                          |                              |
//!   |                      FocusLost                  ShowAllRequested
//!   |                          v                              v
//!   +--AnimationFinished-- ZoomingOut <-----------------------+
//!   ^                                                         |
//!   +-------------------------FocusLost-----------------------+
//! ```
//!
//! Requests that have no transition from the current phase are ignored.

use zoomgrid_core::StateMachine;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomPhase {
    /// Every element visible in its cell
    Grid,
    /// Zoom-in group running, focus set
    ZoomingIn,
    /// One element fills the layout, the rest are hidden
    Zoomed,
    /// Zoom-out group running, focus cleared
    ZoomingOut,
}

impl ZoomPhase {
    /// True while a group is in flight
    pub fn is_animating(&self) -> bool {
        matches!(self, ZoomPhase::ZoomingIn | ZoomPhase::ZoomingOut)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomEvent {
    ZoomRequested,
    ShowAllRequested,
    AnimationFinished,
    /// The focused entry was removed from the grid
    FocusLost,
}

pub(crate) fn zoom_machine() -> StateMachine<ZoomPhase, ZoomEvent> {
    use ZoomEvent::*;
    use ZoomPhase::*;

    StateMachine::builder(Grid)
        .on(Grid, ZoomRequested, ZoomingIn)
        .on(ZoomingIn, AnimationFinished, Zoomed)
        .on(Zoomed, ShowAllRequested, ZoomingOut)
        .on(ZoomingOut, AnimationFinished, Grid)
        .on(Zoomed, FocusLost, Grid)
        .on(ZoomingIn, FocusLost, ZoomingOut)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut fsm = zoom_machine();
        assert_eq!(fsm.send(ZoomEvent::ZoomRequested), Some(ZoomPhase::ZoomingIn));
        assert_eq!(fsm.send(ZoomEvent::AnimationFinished), Some(ZoomPhase::Zoomed));
        assert_eq!(fsm.send(ZoomEvent::ShowAllRequested), Some(ZoomPhase::ZoomingOut));
        assert_eq!(fsm.send(ZoomEvent::AnimationFinished), Some(ZoomPhase::Grid));
    }

    #[test]
    fn test_requests_while_animating_are_ignored() {
        let mut fsm = zoom_machine();
        fsm.send(ZoomEvent::ZoomRequested);
        assert!(!fsm.can_send(ZoomEvent::ZoomRequested));
        assert!(!fsm.can_send(ZoomEvent::ShowAllRequested));
        assert_eq!(fsm.send(ZoomEvent::ShowAllRequested), None);
        assert!(fsm.current_state().is_animating());
    }

    #[test]
    fn test_focus_lost() {
        let mut fsm = zoom_machine();
        assert_eq!(fsm.send(ZoomEvent::FocusLost), None);

        fsm.send(ZoomEvent::ZoomRequested);
        assert_eq!(fsm.send(ZoomEvent::FocusLost), Some(ZoomPhase::ZoomingOut));
        assert_eq!(fsm.send(ZoomEvent::AnimationFinished), Some(ZoomPhase::Grid));
    }
}
