//! zoomgrid Animation System
//!
//! Eased rectangle tweens and their orchestration.
//!
//! # Features
//!
//! - **Easing**: polynomial, cubic-bezier, back and elastic overshoot curves
//! - **Tweens**: position-only or full-geometry rectangle animations
//! - **Parallel Groups**: many tweens joined under one completion
//! - **Scheduler**: frame-driven ticking by wall clock or explicit delta

pub mod easing;
pub mod group;
pub mod scheduler;
pub mod tween;

pub use easing::Easing;
pub use group::{GroupTick, ParallelGroup, TweenId};
pub use scheduler::{AnimationScheduler, GroupId};
pub use tween::{RectTween, TweenKind};
