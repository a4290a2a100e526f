//! zoomgrid Core
//!
//! Foundational primitives shared by the zoomgrid crates:
//!
//! - **Geometry**: `Point`, `Size`, `Rect` and `Insets` in layout pixels
//! - **State Machines**: flat transition tables with bounded history
//!
//! # Example
//!
//! ```rust
//! use zoomgrid_core::{Insets, Rect};
//!
//! let outer = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let content = outer.inset_by(Insets::new(10.0, 20.0, 10.0, 20.0));
//! assert_eq!(content, Rect::new(10.0, 20.0, 380.0, 260.0));
//! ```

pub mod fsm;
pub mod geometry;

pub use fsm::{StateMachine, StateMachineBuilder, Transition};
pub use geometry::{Insets, Point, Rect, Size};
