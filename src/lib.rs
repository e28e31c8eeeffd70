//! # Lazy Image
//!
//! Responsive, lazy-loading image attributes. Given raw image metadata
//! (dimensions, alt text, encoded variants, a low-quality placeholder) and
//! a handful of layout arguments, the resolver computes everything a
//! template needs to render the image: wrapper classes and style,
//! placeholder style, main-image style, `sizes` hint, and loading state.
//!
//! # Architecture: Resolve, Then Render
//!
//! The pipeline is a single pure computation with thin shells around it:
//!
//! ```text
//! 1. Source    ImageSource trait  →  metadata      (pixels live elsewhere)
//! 2. Resolve   metadata + args    →  ResolvedView  (all decision logic)
//! 3. Render    ResolvedView       →  HTML fragment (no decisions left)
//! ```
//!
//! This separation exists for three reasons:
//!
//! - **Testability**: the resolver is a deterministic function from inputs
//!   to a view model; tests never touch templates or files.
//! - **Renderer independence**: the view model is a serialization contract,
//!   so the bundled maud renderer is replaceable by any template layer.
//! - **No hidden state**: site defaults are explicit parameters; each call
//!   is independent and safe to run from any thread.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`source`] | `ImageSource` trait (the seam to whatever owns the pixels) plus a manifest-backed impl |
//! | [`layout`] | Layout and loading enums, aspect-ratio math, default `sizes` strings |
//! | [`style`] | Insertion-ordered CSS maps and inline-style serialization |
//! | [`compose`] | Wrapper/placeholder/main style composition with documented precedence |
//! | [`resolve`] | The orchestrator: arguments, defaults, dimension resolution, view assembly |
//! | [`view`] | The `ResolvedView` output contract consumed by renderers |
//! | [`render`] | Reference HTML renderer built on Maud |
//! | [`config`] | `config.toml` loading for site-wide defaults |
//!
//! # Design Decisions
//!
//! ## Three Layouts
//!
//! Display sizing follows one of three strategies (`fullWidth`, `fixed`,
//! `constrained`) which differ only in the default `sizes` hint and a few
//! wrapper/placeholder declarations. Unrecognized layout names degrade to
//! the plain defaults instead of failing: a template passing through an
//! unknown string still gets a working image, just without a `sizes` hint.
//!
//! ## Ordered Style Maps
//!
//! Inline styles are built by merging layers (defaults → layout branch →
//! background color → caller overrides), and the serialized string must be
//! byte-identical across calls. [`style::StyleMap`] makes the merge
//! explicit and keeps insertion order, so output never depends on hash
//! seeds or alphabetical accidents.
//!
//! ## Maud Over Template Engines
//!
//! The bundled renderer uses [Maud](https://maud.lambda.xyz/): compile-time
//! checked HTML, type-safe interpolation, XSS-safe escaping by default, and
//! no template files to ship. Anyone preferring another engine can consume
//! [`view::ResolvedView`] directly; its field names and nesting are a
//! stable contract.
//!
//! ## Explicit Defaults
//!
//! Site-wide settings (default background color, LQIP flag) are resolved by
//! the caller, usually from `config.toml` via [`config::SiteConfig`], and
//! passed in as plain values. The core never reads ambient configuration,
//! which keeps resolution reproducible wherever it runs.

pub mod compose;
pub mod config;
pub mod layout;
pub mod render;
pub mod resolve;
pub mod source;
pub mod style;
pub mod view;

pub use layout::{Layout, Loading};
pub use resolve::{Defaults, ImageArgs, ResolveError, resolve};
pub use source::{ImageSource, SrcSetEntry, StaticSource};
pub use style::StyleMap;
pub use view::ResolvedView;
