//! Visual element capability
//!
//! The grid never owns the elements it arranges. Hosts keep `ElementRef`
//! handles; the grid stores `WeakElement` back-references and skips any
//! element that has been dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use zoomgrid_core::{Rect, Size};

/// Anything the grid can place, move and show or hide
pub trait VisualElement {
    /// Smallest size the element accepts
    fn minimum_size(&self) -> Size;

    /// Size the element would like to have
    fn preferred_size(&self) -> Size;

    /// Current geometry in layout coordinates
    fn geometry(&self) -> Rect;

    fn set_geometry(&mut self, rect: Rect);

    fn show(&mut self);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;
}

/// Owning handle held by the host
pub type ElementRef = Rc<RefCell<dyn VisualElement>>;

/// Non-owning handle held by the grid
pub type WeakElement = Weak<RefCell<dyn VisualElement>>;

/// Address of the element behind a handle, used for identity checks
pub(crate) fn element_addr<E: ?Sized>(element: &Rc<RefCell<E>>) -> *const () {
    Rc::as_ptr(element) as *const ()
}

pub(crate) fn weak_addr(element: &WeakElement) -> *const () {
    element.as_ptr() as *const ()
}

/// Alternate source for the visible viewport used when computing where
/// elements exit to during a zoom-in
#[derive(Clone)]
pub enum VisibleArea {
    /// Follow another element's geometry
    Element(WeakElement),
    /// A fixed region
    Region(Rect),
}

impl VisibleArea {
    /// Track an element without taking ownership of it
    pub fn element(element: &ElementRef) -> Self {
        VisibleArea::Element(Rc::downgrade(element))
    }

    /// Current rectangle, or `None` if the tracked element is gone
    pub fn rect(&self) -> Option<Rect> {
        match self {
            VisibleArea::Element(weak) => weak.upgrade().map(|e| e.borrow().geometry()),
            VisibleArea::Region(rect) => Some(*rect),
        }
    }
}

impl std::fmt::Debug for VisibleArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VisibleArea::Element(weak) => f
                .debug_tuple("Element")
                .field(&weak.upgrade().map(|e| e.borrow().geometry()))
                .finish(),
            VisibleArea::Region(rect) => f.debug_tuple("Region").field(rect).finish(),
        }
    }
}
