//! Animation scheduler
//!
//! Owns all running groups and advances them each frame. Finished groups are
//! dropped from the scheduler after the tick that reports their completion.

use crate::group::{GroupTick, ParallelGroup, TweenId};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::{Duration, Instant};

new_key_type! {
    pub struct GroupId;
}

/// The animation scheduler that ticks all active groups
#[derive(Debug)]
pub struct AnimationScheduler {
    groups: SlotMap<GroupId, ParallelGroup>,
    last_frame: Instant,
    target_fps: u32,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            groups: SlotMap::with_key(),
            last_frame: Instant::now(),
            target_fps: 60,
        }
    }

    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Time between frames at the target frame rate
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps as f64)
    }

    /// Start a group and take ownership of it
    pub fn start_group(&mut self, mut group: ParallelGroup) -> GroupId {
        if self.groups.is_empty() {
            // Idle time before the first group must not count as elapsed
            self.last_frame = Instant::now();
        }
        group.start();
        let tweens = group.len();
        let id = self.groups.insert(group);
        tracing::trace!(?id, tweens, "animation group started");
        id
    }

    pub fn get_group(&self, id: GroupId) -> Option<&ParallelGroup> {
        self.groups.get(id)
    }

    /// Remove one tween from a running group
    pub fn cancel_tween(&mut self, group: GroupId, tween: TweenId) -> bool {
        self.groups
            .get_mut(group)
            .and_then(|g| g.remove(tween))
            .is_some()
    }

    /// Tick all groups using the wall clock
    pub fn tick(&mut self) -> SmallVec<[(GroupId, GroupTick); 2]> {
        let now = Instant::now();
        let dt_ms = (now - self.last_frame).as_secs_f32() * 1000.0;
        self.last_frame = now;
        self.advance(dt_ms)
    }

    /// Tick all groups by an explicit delta (in milliseconds)
    pub fn tick_by(&mut self, dt_ms: f32) -> SmallVec<[(GroupId, GroupTick); 2]> {
        self.last_frame = Instant::now();
        self.advance(dt_ms)
    }

    fn advance(&mut self, dt_ms: f32) -> SmallVec<[(GroupId, GroupTick); 2]> {
        let mut out = SmallVec::new();
        for (id, group) in self.groups.iter_mut() {
            let tick = group.tick(dt_ms);
            if tick.finished {
                tracing::trace!(?id, "animation group finished");
            }
            out.push((id, tick));
        }
        self.groups.retain(|_, group| !group.is_finished());
        out
    }

    /// Check if any animations are still active
    pub fn has_active_animations(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Get the number of groups in the scheduler
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
