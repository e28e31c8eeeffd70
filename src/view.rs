//! Resolved view model handed to the markup layer.
//!
//! Field names and nesting are a contract: templates address
//! `wrapper.classes`, `main.shouldLoad`, `placeholder.style`, and so on,
//! and the serialized JSON uses exactly those camelCase keys. Renaming any
//! field breaks rendering-layer compatibility.
//!
//! A [`ResolvedView`] is created fresh per resolution, never mutated, and
//! holds no identity beyond the single render.

use crate::layout::{Layout, Loading};
use crate::source::SrcSetEntry;
use serde::Serialize;
use serde_json::{Map, Value};

/// Everything a template needs to render one responsive image.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedView {
    pub layout: Layout,
    pub wrapper: WrapperView,
    pub placeholder: PlaceholderView,
    pub main: MainView,
    pub alt: String,
    pub width: f64,
    pub height: f64,
    /// Responsive `sizes` hint; `None` when the layout has no default.
    pub sizes: Option<String>,
}

/// Outer container establishing the positioning context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrapperView {
    pub classes: String,
    pub style: String,
}

/// Low-quality placeholder layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceholderView {
    /// Opaque payload fields from the source. When LQIP is disabled this
    /// carries an explicit `"src": null`, signalling "request nothing".
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    pub style: String,
}

impl PlaceholderView {
    /// The placeholder image URL, if the payload carries one.
    pub fn src(&self) -> Option<&str> {
        self.payload.get("src").and_then(Value::as_str)
    }
}

/// The main image layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainView {
    /// Encoded variants in source order.
    pub sources: Vec<SrcSetEntry>,
    pub src: String,
    pub loading: Loading,
    /// `true` exactly when loading is eager: the renderer should start the
    /// fetch immediately instead of waiting for a visibility trigger.
    pub should_load: bool,
    pub style: String,
}
