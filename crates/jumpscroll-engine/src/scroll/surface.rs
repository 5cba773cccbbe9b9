//! Scroll surface adapter over the viewport or a scrollable element

use std::fmt;
use std::rc::Rc;

use jumpscroll_core::{Error, Result};

use super::timing::is_falsy;
use crate::host::{Axis, Document, ElementRef, Viewport};

/// Which surface a jump scrolls
#[derive(Clone, Default)]
pub enum Container {
    /// The top-level viewport
    #[default]
    Viewport,
    Element(ElementRef),
    /// First element matching a selector
    Selector(String),
}

impl From<ElementRef> for Container {
    fn from(element: ElementRef) -> Self {
        Container::Element(element)
    }
}

impl From<&str> for Container {
    fn from(selector: &str) -> Self {
        Container::Selector(selector.to_string())
    }
}

impl From<String> for Container {
    fn from(selector: String) -> Self {
        Container::Selector(selector)
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Viewport => f.write_str("Viewport"),
            Container::Element(_) => f.write_str("Element(..)"),
            Container::Selector(s) => f.debug_tuple("Selector").field(s).finish(),
        }
    }
}

/// A resolved scroll container
#[derive(Clone)]
pub enum Surface {
    Viewport(Rc<dyn Viewport>),
    Element(ElementRef),
}

impl Surface {
    /// Resolve a container against `document`
    ///
    /// A selector matching nothing is an error rather than a silently empty surface.
    pub fn resolve(document: &dyn Document, container: &Container) -> Result<Self> {
        match container {
            Container::Viewport => Ok(Surface::Viewport(document.viewport())),
            Container::Element(element) => Ok(Surface::Element(Rc::clone(element))),
            Container::Selector(selector) => document
                .query_selector(selector)
                .map(Surface::Element)
                .ok_or_else(|| Error::ContainerNotFound(selector.clone())),
        }
    }

    /// Current scroll position along `axis`
    ///
    /// Candidates are read in preference order and the first truthy one wins. A zero
    /// from one property does not mean the surface is unscrolled when a later
    /// property reports the real position.
    pub fn current_offset(&self, axis: Axis) -> f64 {
        let candidates = match self {
            Surface::Viewport(viewport) => [
                viewport.scroll_position(axis),
                viewport.page_offset(axis),
                viewport.scroll_start(axis),
            ],
            Surface::Element(element) => [None, None, element.scroll_start(axis)],
        };
        first_truthy(candidates)
    }

    /// Commit a scroll position along `axis`
    ///
    /// The viewport is positioned with `scroll_to`, pinning the other axis to 0.
    pub fn set_offset(&self, axis: Axis, value: f64) {
        match self {
            Surface::Viewport(viewport) => match axis {
                Axis::Y => viewport.scroll_to(0.0, value),
                Axis::X => viewport.scroll_to(value, 0.0),
            },
            Surface::Element(element) => element.set_scroll_start(axis, value),
        }
    }

    /// Leading edge of the surface relative to the viewport; 0 for the viewport itself
    pub fn origin(&self, axis: Axis) -> f64 {
        match self {
            Surface::Viewport(_) => 0.0,
            Surface::Element(element) => element.bounding_rect().edge(axis),
        }
    }

    pub fn is_viewport(&self) -> bool {
        matches!(self, Surface::Viewport(_))
    }
}

impl fmt::Debug for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surface::Viewport(_) => f.write_str("Viewport"),
            Surface::Element(_) => f.write_str("Element"),
        }
    }
}

fn first_truthy(candidates: [Option<f64>; 3]) -> f64 {
    let mut last = None;
    for value in candidates.into_iter().flatten() {
        if !is_falsy(value) {
            return value;
        }
        last = Some(value);
    }
    last.unwrap_or(0.0)
}
