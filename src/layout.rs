//! Layout strategies and pure dimension math.
//!
//! A [`Layout`] decides how an image's displayed size relates to the
//! viewport; [`Loading`] decides whether the browser fetches it eagerly or
//! on visibility. The functions here are pure and testable without any
//! source data or styles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sizing strategy for a rendered image.
///
/// - `FullWidth`: always spans the viewport.
/// - `Fixed`: always exactly the resolved pixel width.
/// - `Constrained`: capped at the resolved width on wide viewports,
///   otherwise fills the viewport.
///
/// Unrecognized layout names deserialize to [`Layout::Unknown`], which
/// degrades gracefully: no `sizes` hint and no layout-specific styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    #[default]
    FullWidth,
    Fixed,
    Constrained,
    #[serde(other)]
    Unknown,
}

/// Browser loading mode for the main image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Loading {
    #[default]
    Lazy,
    Eager,
}

impl Loading {
    pub fn is_lazy(self) -> bool {
        self == Loading::Lazy
    }
}

impl fmt::Display for Loading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Loading::Lazy => "lazy",
            Loading::Eager => "eager",
        })
    }
}

/// Scale `source_height` by the factor that takes `source_width` to `width`.
///
/// This is the only place aspect ratio is preserved: when the caller
/// overrides just the width, the height follows the source's ratio exactly.
///
/// ```
/// # use lazy_image::layout::scaled_height;
/// assert_eq!(scaled_height(1200.0, 800.0, 300.0), 200.0);
/// ```
pub fn scaled_height(source_width: f64, source_height: f64, width: f64) -> f64 {
    width / source_width * source_height
}

/// Default `sizes` attribute for a layout at a resolved width.
///
/// Returns `None` for [`Layout::Unknown`]: no hint is emitted.
pub fn default_sizes(layout: Layout, width: f64) -> Option<String> {
    match layout {
        // Image is capped at `width` on screens at least that wide,
        // otherwise it is the width of the screen
        Layout::Constrained => Some(format!("(min-width:{width}px) {width}px, 100vw")),

        // Image is always the same width, whatever the size of the screen
        Layout::Fixed => Some(format!("{width}px")),

        // Image is always the width of the screen
        Layout::FullWidth => Some("100vw".to_string()),

        Layout::Unknown => None,
    }
}
