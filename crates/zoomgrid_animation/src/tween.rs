//! Rect tweens
//!
//! A tween moves a rectangle from a start value to an end value over a fixed
//! duration, shaped by an easing curve. Position tweens keep the start size
//! and only move the origin.

use crate::easing::Easing;
use zoomgrid_core::{Point, Rect};

/// What part of the rectangle a tween animates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenKind {
    /// Origin only, size stays fixed
    Position,
    /// Origin and size
    Geometry,
}

/// A single eased rectangle animation
#[derive(Clone, Debug)]
pub struct RectTween {
    kind: TweenKind,
    from: Rect,
    to: Rect,
    duration_ms: u32,
    easing: Easing,
    current_time: f32,
    playing: bool,
    finished: bool,
}

impl RectTween {
    /// Animate the full geometry from `from` to `to`
    pub fn geometry(from: Rect, to: Rect, duration_ms: u32, easing: Easing) -> Self {
        Self::with_kind(TweenKind::Geometry, from, to, duration_ms, easing)
    }

    /// Animate only the origin from `from` to `to`
    pub fn position(from: Rect, to: Point, duration_ms: u32, easing: Easing) -> Self {
        Self::with_kind(TweenKind::Position, from, from.with_origin(to), duration_ms, easing)
    }

    fn with_kind(kind: TweenKind, from: Rect, to: Rect, duration_ms: u32, easing: Easing) -> Self {
        Self {
            kind,
            from,
            to,
            duration_ms,
            easing,
            current_time: 0.0,
            playing: false,
            finished: false,
        }
    }

    pub fn kind(&self) -> TweenKind {
        self.kind
    }

    pub fn from(&self) -> Rect {
        self.from
    }

    pub fn to(&self) -> Rect {
        self.to
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
        self.finished = false;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True once the tween has run its full duration
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.finished {
            return 1.0;
        }
        if self.duration_ms == 0 {
            return 0.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated rectangle. Exactly `to` once finished.
    pub fn value(&self) -> Rect {
        if self.finished {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        match self.kind {
            TweenKind::Position => self
                .from
                .with_origin(self.from.origin.lerp(self.to.origin, eased)),
            TweenKind::Geometry => self.from.lerp(&self.to, eased),
        }
    }

    /// Advance the tween by delta time (in milliseconds).
    ///
    /// Returns `true` on the tick that completes the tween.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }

        self.current_time += dt_ms.max(0.0);

        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
            self.finished = true;
            return true;
        }
        false
    }
}
