//! zoomgrid Layout
//!
//! A grid layout that can zoom any cell to fill the whole layout and animate
//! back again.
//!
//! # Features
//!
//! - **Spanning cells**: elements may cover several rows and columns
//! - **Zoom-in**: the focused element grows to fill the layout while the
//!   rest slide out past the nearest edge and hide
//! - **Show all**: every element animates back into its cell
//! - **Single completion**: each transition runs as one parallel group and
//!   notifies listeners once, after the grid has settled
//!
//! # Example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use zoomgrid_core::{Rect, Size};
//! use zoomgrid_layout::{AnimatedGridLayout, VisualElement};
//!
//! struct Tile {
//!     rect: Rect,
//!     visible: bool,
//! }
//!
//! impl VisualElement for Tile {
//!     fn minimum_size(&self) -> Size { Size::new(10.0, 10.0) }
//!     fn preferred_size(&self) -> Size { Size::new(50.0, 50.0) }
//!     fn geometry(&self) -> Rect { self.rect }
//!     fn set_geometry(&mut self, rect: Rect) { self.rect = rect; }
//!     fn show(&mut self) { self.visible = true; }
//!     fn hide(&mut self) { self.visible = false; }
//!     fn is_visible(&self) -> bool { self.visible }
//! }
//!
//! let a = Rc::new(RefCell::new(Tile { rect: Rect::ZERO, visible: true }));
//! let b = Rc::new(RefCell::new(Tile { rect: Rect::ZERO, visible: true }));
//!
//! let mut grid = AnimatedGridLayout::new();
//! grid.add_widget(a.clone(), 0, 0).unwrap();
//! grid.add_widget(b.clone(), 0, 1).unwrap();
//! grid.set_geometry(Rect::new(0.0, 0.0, 206.0, 100.0));
//!
//! assert!(grid.zoom_to(&a));
//! while grid.tick_by(16.0).is_none() {}
//! assert_eq!(a.borrow().rect, Rect::new(0.0, 0.0, 206.0, 100.0));
//! assert!(!b.borrow().visible);
//! ```

pub mod cell;
pub mod config;
pub mod container;
pub mod element;
pub mod error;
pub mod events;
pub mod grid;
pub mod phase;
pub mod placement;

pub use cell::{CellEntry, CellSpan};
pub use config::GridConfig;
pub use container::{LayoutContainer, Measurement};
pub use element::{ElementRef, VisibleArea, VisualElement, WeakElement};
pub use error::{GridError, Result};
pub use events::{AnimationFinished, ListenerId, ZoomTransition};
pub use grid::AnimatedGridLayout;
pub use phase::{ZoomEvent, ZoomPhase};
pub use placement::{
    aggregate_size, compute_cell_geometry, compute_cell_size, exit_direction, exit_position,
    ExitDirection,
};

// Re-export the animation vocabulary hosts need to configure a grid
pub use zoomgrid_animation::Easing;
