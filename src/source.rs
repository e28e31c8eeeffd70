//! Image source capability.
//!
//! The resolver never fetches, decodes, or encodes anything. Whatever
//! pipeline owns the pixels (a local build step, an asset service, a CMS)
//! exposes its metadata through [`ImageSource`], and the resolver consumes
//! those accessors synchronously. Srcset descriptors and the placeholder
//! payload are carried through opaque: the resolver never inspects their
//! internals.
//!
//! [`StaticSource`] is the materialized form: a plain struct deserialized
//! from a manifest (the same shape the accessors return), for pipelines
//! that hand over JSON instead of an object.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One encoded variant of an image: a URL plus its srcset descriptor
/// (e.g. `800w` or `2x`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrcSetEntry {
    pub descriptor: String,
    pub url: String,
}

/// Synchronous accessors for raw image metadata.
///
/// `width`/`height` return `None` when the source has no dimension data;
/// the resolver fails with a missing-dimension error if the caller does not
/// fill the gap.
pub trait ImageSource {
    /// Native pixel width, if known.
    fn width(&self) -> Option<f64>;

    /// Native pixel height, if known.
    fn height(&self) -> Option<f64>;

    /// Alternative text for the main image.
    fn alt(&self) -> String;

    /// A source-provided `sizes` attribute, overriding the layout default.
    fn sizes_attr(&self) -> Option<String>;

    /// URL of the fallback/default encoded variant.
    fn default_src(&self) -> String;

    /// Encoded variants in descriptor order.
    fn src_sets(&self) -> Vec<SrcSetEntry>;

    /// Low-quality placeholder payload (e.g. `{"src": "data:..."}`).
    /// Opaque: forwarded into the resolved placeholder without inspection.
    fn lqip(&self) -> Map<String, Value>;
}

/// Fully materialized source metadata, e.g. parsed from a build manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaticSource {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub alt: String,
    /// Source-provided `sizes` attribute, if any.
    pub sizes: Option<String>,
    pub default_src: String,
    pub src_sets: Vec<SrcSetEntry>,
    pub placeholder: Map<String, Value>,
}

impl ImageSource for StaticSource {
    fn width(&self) -> Option<f64> {
        self.width
    }

    fn height(&self) -> Option<f64> {
        self.height
    }

    fn alt(&self) -> String {
        self.alt.clone()
    }

    fn sizes_attr(&self) -> Option<String> {
        self.sizes.clone()
    }

    fn default_src(&self) -> String {
        self.default_src.clone()
    }

    fn src_sets(&self) -> Vec<SrcSetEntry> {
        self.src_sets.clone()
    }

    fn lqip(&self) -> Map<String, Value> {
        self.placeholder.clone()
    }
}
