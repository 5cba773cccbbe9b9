//! Host environment capabilities consumed by the engine
//!
//! The engine never owns a document. It reads geometry and scroll positions and writes
//! offsets through these traits, so any host (a browser binding, a GUI toolkit, the
//! in-memory [`headless`] document) can be scrolled.

pub mod headless;

use std::rc::Rc;

pub use jumpscroll_core::Axis;

/// Shared handle to an element
pub type ElementRef = Rc<dyn Element>;

/// Bounding geometry relative to the viewport
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Leading edge along `axis` (top for Y, left for X)
    #[inline]
    pub fn edge(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Y => self.top,
            Axis::X => self.left,
        }
    }
}

/// Top-level document: resolves selectors and exposes the viewport
pub trait Document {
    fn viewport(&self) -> Rc<dyn Viewport>;

    /// First element matching `selector`
    fn query_selector(&self, selector: &str) -> Option<ElementRef>;
}

/// The top-level scrolling viewport
///
/// Position getters return `None` when the host does not expose that property.
pub trait Viewport {
    /// `scrollX` / `scrollY`
    fn scroll_position(&self, axis: Axis) -> Option<f64>;

    /// `pageXOffset` / `pageYOffset`
    fn page_offset(&self, axis: Axis) -> Option<f64>;

    /// `scrollLeft` / `scrollTop`
    fn scroll_start(&self, axis: Axis) -> Option<f64>;

    fn scroll_to(&self, x: f64, y: f64);
}

/// A positioned element, possibly scrollable
pub trait Element {
    fn bounding_rect(&self) -> Rect;

    /// `scrollLeft` / `scrollTop`
    fn scroll_start(&self, axis: Axis) -> Option<f64>;

    fn set_scroll_start(&self, axis: Axis, value: f64);

    fn set_tab_index(&self, index: i32);

    fn focus(&self);
}
