//! In-memory document for driving jumps without a real host
//!
//! Elements are laid out in document coordinates and may live inside a scrollable
//! parent element. Bounding rects are derived the way a browser reports them: the layout
//! position minus the viewport scroll and the scroll of every ancestor. Every scroll
//! write is recorded so a run's committed offsets can be inspected afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use jumpscroll_core::{Error, Result};

use super::{Axis, Document, Element, ElementRef, Rect, Viewport};

/// A recorded scroll write
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    /// `scroll_to(x, y)` on the viewport
    Viewport { x: f64, y: f64 },
    /// Direct assignment of an element's scroll property
    Element { id: String, axis: Axis, value: f64 },
}

impl Commit {
    /// Value written along `axis`, if this commit touched it
    pub fn value(&self, axis: Axis) -> Option<f64> {
        match self {
            Commit::Viewport { x, y } => Some(match axis {
                Axis::X => *x,
                Axis::Y => *y,
            }),
            Commit::Element {
                axis: written,
                value,
                ..
            } => (*written == axis).then_some(*value),
        }
    }
}

#[derive(Debug)]
struct Node {
    id: String,
    layout: Rect,
    parent: Option<usize>,
    scroll_x: f64,
    scroll_y: f64,
    tab_index: Option<i32>,
}

#[derive(Debug, Default)]
struct Tree {
    scroll_x: f64,
    scroll_y: f64,
    /// Viewport only exposes page offsets (no scrollX/scrollY)
    legacy_viewport: bool,
    nodes: Vec<Node>,
    focused: Option<usize>,
    commits: Vec<Commit>,
}

impl Tree {
    fn find(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    fn bounding_rect(&self, index: usize) -> Rect {
        let node = &self.nodes[index];
        let mut rect = node.layout;
        rect.top -= self.scroll_y;
        rect.left -= self.scroll_x;

        let mut ancestor = node.parent;
        while let Some(i) = ancestor {
            let parent = &self.nodes[i];
            rect.top -= parent.scroll_y;
            rect.left -= parent.scroll_x;
            ancestor = parent.parent;
        }
        rect
    }
}

/// Shared in-memory document; clones refer to the same tree
#[derive(Debug, Clone, Default)]
pub struct HeadlessDocument {
    tree: Rc<RefCell<Tree>>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document whose viewport reports its position only through page offsets
    pub fn with_legacy_viewport() -> Self {
        let doc = Self::default();
        doc.tree.borrow_mut().legacy_viewport = true;
        doc
    }

    /// Set the viewport scroll position without recording a commit
    pub fn set_viewport_scroll(&self, x: f64, y: f64) {
        let mut tree = self.tree.borrow_mut();
        tree.scroll_x = x;
        tree.scroll_y = y;
    }

    pub fn viewport_scroll(&self) -> (f64, f64) {
        let tree = self.tree.borrow();
        (tree.scroll_x, tree.scroll_y)
    }

    /// Add an element laid out at `layout` in document coordinates, optionally inside a scrollable parent
    pub fn add_element(&self, id: &str, layout: Rect, parent: Option<&str>) -> Result<ElementRef> {
        let mut tree = self.tree.borrow_mut();
        if tree.find(id).is_some() {
            return Err(Error::Other(format!("duplicate element id: {}", id)));
        }
        let parent = match parent {
            Some(parent_id) => Some(
                tree.find(parent_id)
                    .ok_or_else(|| Error::ContainerNotFound(parent_id.to_string()))?,
            ),
            None => None,
        };

        tree.nodes.push(Node {
            id: id.to_string(),
            layout,
            parent,
            scroll_x: 0.0,
            scroll_y: 0.0,
            tab_index: None,
        });
        let index = tree.nodes.len() - 1;

        Ok(Rc::new(HeadlessElement {
            tree: Rc::clone(&self.tree),
            index,
        }))
    }

    /// Element by id, without the `#` prefix
    pub fn element(&self, id: &str) -> Option<ElementRef> {
        let index = self.tree.borrow().find(id)?;
        Some(Rc::new(HeadlessElement {
            tree: Rc::clone(&self.tree),
            index,
        }))
    }

    /// Set an element's scroll position without recording a commit
    pub fn set_element_scroll(&self, id: &str, axis: Axis, value: f64) -> Result<()> {
        let mut tree = self.tree.borrow_mut();
        let index = tree
            .find(id)
            .ok_or_else(|| Error::TargetNotFound(id.to_string()))?;
        let node = &mut tree.nodes[index];
        match axis {
            Axis::X => node.scroll_x = value,
            Axis::Y => node.scroll_y = value,
        }
        Ok(())
    }

    pub fn element_scroll(&self, id: &str, axis: Axis) -> Option<f64> {
        let tree = self.tree.borrow();
        let node = &tree.nodes[tree.find(id)?];
        Some(match axis {
            Axis::X => node.scroll_x,
            Axis::Y => node.scroll_y,
        })
    }

    pub fn tab_index(&self, id: &str) -> Option<i32> {
        let tree = self.tree.borrow();
        tree.nodes[tree.find(id)?].tab_index
    }

    /// Id of the focused element
    pub fn focused(&self) -> Option<String> {
        let tree = self.tree.borrow();
        tree.focused.map(|i| tree.nodes[i].id.clone())
    }

    pub fn commits(&self) -> Vec<Commit> {
        self.tree.borrow().commits.clone()
    }

    /// Committed values along `axis`, in write order
    pub fn committed_offsets(&self, axis: Axis) -> Vec<f64> {
        self.tree
            .borrow()
            .commits
            .iter()
            .filter_map(|c| c.value(axis))
            .collect()
    }
}

impl Document for HeadlessDocument {
    fn viewport(&self) -> Rc<dyn Viewport> {
        Rc::new(HeadlessViewport {
            tree: Rc::clone(&self.tree),
        })
    }

    fn query_selector(&self, selector: &str) -> Option<ElementRef> {
        self.element(selector.strip_prefix('#')?)
    }
}

struct HeadlessViewport {
    tree: Rc<RefCell<Tree>>,
}

impl Viewport for HeadlessViewport {
    fn scroll_position(&self, axis: Axis) -> Option<f64> {
        let tree = self.tree.borrow();
        if tree.legacy_viewport {
            return None;
        }
        Some(match axis {
            Axis::X => tree.scroll_x,
            Axis::Y => tree.scroll_y,
        })
    }

    fn page_offset(&self, axis: Axis) -> Option<f64> {
        let tree = self.tree.borrow();
        Some(match axis {
            Axis::X => tree.scroll_x,
            Axis::Y => tree.scroll_y,
        })
    }

    fn scroll_start(&self, _axis: Axis) -> Option<f64> {
        None
    }

    fn scroll_to(&self, x: f64, y: f64) {
        let mut tree = self.tree.borrow_mut();
        tree.scroll_x = x;
        tree.scroll_y = y;
        tree.commits.push(Commit::Viewport { x, y });
    }
}

struct HeadlessElement {
    tree: Rc<RefCell<Tree>>,
    index: usize,
}

impl Element for HeadlessElement {
    fn bounding_rect(&self) -> Rect {
        self.tree.borrow().bounding_rect(self.index)
    }

    fn scroll_start(&self, axis: Axis) -> Option<f64> {
        let tree = self.tree.borrow();
        let node = &tree.nodes[self.index];
        Some(match axis {
            Axis::X => node.scroll_x,
            Axis::Y => node.scroll_y,
        })
    }

    fn set_scroll_start(&self, axis: Axis, value: f64) {
        let mut tree = self.tree.borrow_mut();
        let node = &mut tree.nodes[self.index];
        match axis {
            Axis::X => node.scroll_x = value,
            Axis::Y => node.scroll_y = value,
        }
        let id = node.id.clone();
        tree.commits.push(Commit::Element { id, axis, value });
    }

    fn set_tab_index(&self, index: i32) {
        self.tree.borrow_mut().nodes[self.index].tab_index = Some(index);
    }

    fn focus(&self) {
        self.tree.borrow_mut().focused = Some(self.index);
    }
}
