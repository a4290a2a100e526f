//! Cell placement records

use crate::element::{weak_addr, ElementRef, WeakElement};
use crate::error::{GridError, Result};
use serde::{Deserialize, Serialize};

/// Where an element sits in the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellSpan {
    pub row: usize,
    pub col: usize,
    pub row_span: usize,
    pub col_span: usize,
}

impl CellSpan {
    /// A single cell
    pub const fn at(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    pub const fn new(row: usize, col: usize, row_span: usize, col_span: usize) -> Self {
        Self {
            row,
            col,
            row_span,
            col_span,
        }
    }

    /// Builder: change the spans, keeping the origin cell
    pub const fn spanning(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span;
        self.col_span = col_span;
        self
    }

    /// Exclusive end row
    pub const fn row_end(&self) -> usize {
        self.row + self.row_span
    }

    /// Exclusive end column
    pub const fn col_end(&self) -> usize {
        self.col + self.col_span
    }

    pub fn validate(&self) -> Result<()> {
        if self.row_span == 0 || self.col_span == 0 {
            return Err(GridError::InvalidSpan {
                row_span: self.row_span,
                col_span: self.col_span,
            });
        }
        Ok(())
    }
}

/// One registered element and its placement
#[derive(Clone)]
pub struct CellEntry {
    element: WeakElement,
    span: CellSpan,
}

impl CellEntry {
    pub(crate) fn new(element: WeakElement, span: CellSpan) -> Self {
        Self { element, span }
    }

    /// The element, if the host still holds it
    pub fn element(&self) -> Option<ElementRef> {
        self.element.upgrade()
    }

    pub fn span(&self) -> CellSpan {
        self.span
    }

    /// True once the host has dropped the element
    pub fn is_stale(&self) -> bool {
        self.element.strong_count() == 0
    }

    pub(crate) fn weak(&self) -> &WeakElement {
        &self.element
    }

    pub(crate) fn addr(&self) -> *const () {
        weak_addr(&self.element)
    }
}

impl std::fmt::Debug for CellEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellEntry")
            .field("span", &self.span)
            .field("stale", &self.is_stale())
            .finish()
    }
}
