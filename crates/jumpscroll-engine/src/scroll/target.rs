//! Target resolution: turns a target and options into a start/stop/distance triple

use std::fmt;
use std::rc::Rc;

use jumpscroll_core::{Error, Result};
use tracing::debug;

use super::options::JumpOptions;
use super::surface::Surface;
use crate::host::{Axis, Document, Element, ElementRef};

/// What a jump scrolls to
#[derive(Clone)]
pub enum Target {
    /// Relative delta, or an absolute offset when the jump is exact
    Offset(f64),
    Element(ElementRef),
    /// First element matching a selector
    Selector(String),
}

impl From<f64> for Target {
    fn from(offset: f64) -> Self {
        Target::Offset(offset)
    }
}

impl From<i32> for Target {
    fn from(offset: i32) -> Self {
        Target::Offset(offset as f64)
    }
}

impl From<ElementRef> for Target {
    fn from(element: ElementRef) -> Self {
        Target::Element(element)
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Target::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Target::Selector(selector)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Offset(offset) => f.debug_tuple("Offset").field(offset).finish(),
            Target::Element(_) => f.write_str("Element(..)"),
            Target::Selector(s) => f.debug_tuple("Selector").field(s).finish(),
        }
    }
}

/// Resolved geometry of a run
#[derive(Clone)]
pub struct Resolution {
    pub start: f64,
    pub stop: f64,
    /// `stop - start + offset`
    pub distance: f64,
    /// Milliseconds
    pub duration: f64,
    /// Element being scrolled to; `None` for numeric targets
    pub element: Option<ElementRef>,
    /// Focus transfer on completion; always off for numeric targets
    pub a11y: bool,
}

impl fmt::Debug for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolution")
            .field("start", &self.start)
            .field("stop", &self.stop)
            .field("distance", &self.distance)
            .field("duration", &self.duration)
            .field("element", &self.element.is_some())
            .field("a11y", &self.a11y)
            .finish()
    }
}

/// Resolve `target` against `surface`
///
/// The start offset is read once from the surface; `distance` is fixed from here on.
pub fn resolve(
    document: &dyn Document,
    surface: &Surface,
    target: &Target,
    options: &JumpOptions,
) -> Result<Resolution> {
    let axis = options.axis;
    let start = surface.current_offset(axis);

    let (stop, element, a11y) = match target {
        Target::Offset(value) => {
            let stop = if options.exact { *value } else { start + value };
            (stop, None, false)
        }
        Target::Element(element) => {
            let stop = element_stop(element.as_ref(), surface, axis, start);
            (stop, Some(Rc::clone(element)), options.a11y)
        }
        Target::Selector(selector) => {
            let element = document
                .query_selector(selector)
                .ok_or_else(|| Error::TargetNotFound(selector.clone()))?;
            let stop = element_stop(element.as_ref(), surface, axis, start);
            (stop, Some(element), options.a11y)
        }
    };

    let distance = stop - start + options.offset;
    let duration = options.duration.resolve(distance);

    debug!(?axis, start, stop, distance, duration, "Resolved jump target");

    Ok(Resolution {
        start,
        stop,
        distance,
        duration,
        element,
        a11y,
    })
}

/// Element position relative to the container, in the container's scroll coordinates
fn element_stop(element: &dyn Element, surface: &Surface, axis: Axis, start: f64) -> f64 {
    element.bounding_rect().edge(axis) - surface.origin(axis) + start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::headless::HeadlessDocument;
    use crate::host::Rect;
    use crate::scroll::surface::Container;

    fn viewport_at(doc: &HeadlessDocument, y: f64) -> Surface {
        doc.set_viewport_scroll(0.0, y);
        Surface::resolve(doc, &Container::Viewport).unwrap()
    }

    #[test]
    fn test_relative_numeric_target() {
        let doc = HeadlessDocument::new();
        let surface = viewport_at(&doc, 0.0);
        let r = resolve(&doc, &surface, &Target::from(500), &JumpOptions::new()).unwrap();
        assert_eq!((r.start, r.stop, r.distance), (0.0, 500.0, 500.0));
        assert_eq!(r.duration, 1000.0);
        assert!(r.element.is_none());
    }

    #[test]
    fn test_exact_numeric_target_scrolls_backwards() {
        let doc = HeadlessDocument::new();
        let surface = viewport_at(&doc, 300.0);
        let options = JumpOptions::new().exact(true);
        let r = resolve(&doc, &surface, &Target::from(200.0), &options).unwrap();
        assert_eq!((r.start, r.stop, r.distance), (300.0, 200.0, -100.0));
    }

    #[test]
    fn test_numeric_target_disables_a11y() {
        let doc = HeadlessDocument::new();
        let surface = viewport_at(&doc, 0.0);
        let options = JumpOptions::new().a11y(true);
        let r = resolve(&doc, &surface, &Target::from(40.0), &options).unwrap();
        assert!(!r.a11y);
    }

    #[test]
    fn test_element_target_in_viewport() {
        let doc = HeadlessDocument::new();
        doc.add_element("section", Rect::new(850.0, 0.0, 800.0, 200.0), None)
            .unwrap();
        let surface = viewport_at(&doc, 50.0);
        // bounding top is 800 once the viewport sits at 50
        let options = JumpOptions::new().a11y(true);
        let r = resolve(&doc, &surface, &Target::from("#section"), &options).unwrap();
        assert_eq!(r.start, 50.0);
        assert_eq!(r.stop, 850.0);
        assert_eq!(r.distance, 800.0);
        assert!(r.element.is_some());
        assert!(r.a11y);
    }

    #[test]
    fn test_element_target_in_container_with_offset() {
        let doc = HeadlessDocument::new();
        doc.add_element("pane", Rect::new(100.0, 0.0, 400.0, 300.0), None)
            .unwrap();
        let item = doc
            .add_element("item", Rect::new(700.0, 0.0, 400.0, 40.0), Some("pane"))
            .unwrap();
        doc.set_element_scroll("pane", Axis::Y, 120.0).unwrap();

        let surface = Surface::resolve(&doc, &Container::from("#pane")).unwrap();
        let options = JumpOptions::new().offset(-20.0);
        let r = resolve(&doc, &surface, &Target::from(item), &options).unwrap();

        // item bounding top 580, pane top 100, pane scrolled 120
        assert_eq!(r.start, 120.0);
        assert_eq!(r.stop, 600.0);
        assert_eq!(r.distance, 460.0);
    }

    #[test]
    fn test_horizontal_axis() {
        let doc = HeadlessDocument::new();
        doc.add_element("column", Rect::new(0.0, 1200.0, 300.0, 600.0), None)
            .unwrap();
        let surface = Surface::resolve(&doc, &Container::Viewport).unwrap();
        let options = JumpOptions::new().axis(Axis::X);
        let r = resolve(&doc, &surface, &Target::from("#column"), &options).unwrap();
        assert_eq!((r.start, r.stop, r.distance), (0.0, 1200.0, 1200.0));
    }

    #[test]
    fn test_distance_scaled_duration() {
        let doc = HeadlessDocument::new();
        let surface = viewport_at(&doc, 0.0);
        let options = JumpOptions::new()
            .offset(10.0)
            .duration_fn(|distance| distance.abs() * 2.0);
        let r = resolve(&doc, &surface, &Target::from(-100.0), &options).unwrap();
        assert_eq!(r.distance, -90.0);
        assert_eq!(r.duration, 180.0);
    }

    #[test]
    fn test_unknown_selector_fails() {
        let doc = HeadlessDocument::new();
        let surface = viewport_at(&doc, 0.0);
        let err = resolve(&doc, &surface, &Target::from("#ghost"), &JumpOptions::new())
            .unwrap_err();
        assert!(matches!(err, Error::TargetNotFound(s) if s == "#ghost"));
    }
}
