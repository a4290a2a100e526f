//! Parallel animation groups
//!
//! A group starts all of its tweens together and advances them with the same
//! clock. Each member reports its own completion, and the group reports its
//! completion exactly once, on the tick where the last member finishes.

use crate::tween::RectTween;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use zoomgrid_core::Rect;

new_key_type! {
    pub struct TweenId;
}

/// Everything that happened to a group during one tick
#[derive(Clone, Debug, Default)]
pub struct GroupTick {
    /// Current value of every member still running (or finishing this tick)
    pub frames: SmallVec<[(TweenId, Rect); 16]>,
    /// Members that completed during this tick
    pub completed: SmallVec<[TweenId; 16]>,
    /// Set on the single tick where the whole group completes
    pub finished: bool,
}

/// A set of tweens that run side by side and join into one completion
#[derive(Debug, Default)]
pub struct ParallelGroup {
    tweens: SlotMap<TweenId, RectTween>,
    started: bool,
    finished: bool,
}

impl ParallelGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween. Tweens added after `start` begin immediately.
    pub fn add(&mut self, mut tween: RectTween) -> TweenId {
        if self.started {
            tween.start();
        }
        self.tweens.insert(tween)
    }

    /// Drop a member without reporting its completion
    pub fn remove(&mut self, id: TweenId) -> Option<RectTween> {
        self.tweens.remove(id)
    }

    pub fn get(&self, id: TweenId) -> Option<&RectTween> {
        self.tweens.get(id)
    }

    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    pub fn start(&mut self) {
        self.started = true;
        self.finished = false;
        for (_, tween) in self.tweens.iter_mut() {
            tween.start();
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance every member by `dt_ms`.
    ///
    /// A started group with no members finishes on its first tick.
    pub fn tick(&mut self, dt_ms: f32) -> GroupTick {
        let mut out = GroupTick::default();
        if !self.started || self.finished {
            return out;
        }

        for (id, tween) in self.tweens.iter_mut() {
            if tween.is_finished() {
                continue;
            }
            if tween.tick(dt_ms) {
                out.completed.push(id);
            }
            out.frames.push((id, tween.value()));
        }

        if self.tweens.values().all(RectTween::is_finished) {
            self.finished = true;
            out.finished = true;
        }
        out
    }
}
