//! Scene files describing a headless document

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use jumpscroll_core::Axis;
use jumpscroll_engine::{HeadlessDocument, Rect};

const DEMO_SCENE: &str = include_str!("../scenes/demo.toml");

#[derive(Debug, Default, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub viewport: ViewportSpec,
    /// Elements in document order; parents must come before their children
    #[serde(default, rename = "element")]
    pub elements: Vec<ElementSpec>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ViewportSpec {
    #[serde(default)]
    pub scroll_x: f64,
    #[serde(default)]
    pub scroll_y: f64,
    /// Only expose page offsets, like very old browsers
    #[serde(default)]
    pub legacy: bool,
}

#[derive(Debug, Deserialize)]
pub struct ElementSpec {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    pub rect: RectSpec,
    #[serde(default)]
    pub scroll_x: f64,
    #[serde(default)]
    pub scroll_y: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RectSpec {
    pub top: f64,
    pub left: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl From<RectSpec> for Rect {
    fn from(spec: RectSpec) -> Self {
        Rect::new(spec.top, spec.left, spec.width, spec.height)
    }
}

impl Scene {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid scene file {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Built-in article layout used when no scene file is given
    pub fn demo() -> Result<Self> {
        Self::parse(DEMO_SCENE).context("Invalid built-in scene")
    }

    /// Build the headless document described by this scene
    pub fn build(&self) -> Result<HeadlessDocument> {
        let doc = if self.viewport.legacy {
            HeadlessDocument::with_legacy_viewport()
        } else {
            HeadlessDocument::new()
        };
        doc.set_viewport_scroll(self.viewport.scroll_x, self.viewport.scroll_y);

        for element in &self.elements {
            doc.add_element(&element.id, element.rect.into(), element.parent.as_deref())
                .with_context(|| format!("Cannot add element '{}'", element.id))?;
            doc.set_element_scroll(&element.id, Axis::X, element.scroll_x)?;
            doc.set_element_scroll(&element.id, Axis::Y, element.scroll_y)?;
        }

        Ok(doc)
    }
}
