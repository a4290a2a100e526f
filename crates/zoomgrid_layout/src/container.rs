//! Generic layout container seam

use crate::cell::CellSpan;
use crate::element::ElementRef;
use crate::grid::AnimatedGridLayout;
use zoomgrid_core::{Rect, Size};

/// Size metrics reported by a container
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    pub minimum: Size,
    pub preferred: Size,
}

/// Base trait for containers that arrange visual elements
pub trait LayoutContainer {
    /// Add an item with default placement, returning its index
    fn add_item(&mut self, element: ElementRef) -> usize;

    /// Remove the item at `index`
    fn remove_item(&mut self, index: usize) -> Option<ElementRef>;

    fn item_count(&self) -> usize;

    fn measure(&self) -> Measurement;

    /// Place items inside `rect`
    fn arrange(&mut self, rect: Rect);
}

impl LayoutContainer for AnimatedGridLayout {
    /// Items added this way land in the top-left cell
    fn add_item(&mut self, element: ElementRef) -> usize {
        self.insert_entry(element, CellSpan::at(0, 0))
    }

    fn remove_item(&mut self, index: usize) -> Option<ElementRef> {
        self.remove_at(index)
    }

    fn item_count(&self) -> usize {
        self.entry_count()
    }

    fn measure(&self) -> Measurement {
        Measurement {
            minimum: self.minimum_size(),
            preferred: self.preferred_size(),
        }
    }

    fn arrange(&mut self, rect: Rect) {
        self.set_geometry(rect);
    }
}
