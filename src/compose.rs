//! Style composition for the wrapper, placeholder, and main image layers.
//!
//! Each layer gets its own [`StyleMap`], built by merging layers in a fixed
//! precedence order: layer base defaults → caller overrides → forced keys /
//! layout branch / background color → loading state. The merge is ordered
//! and explicit; see [`StyleMap::merge`] for the duplicate-key rules.
//!
//! All functions here are pure; serialization to inline style strings
//! happens in the resolver.

use crate::layout::{Layout, Loading};
use crate::style::StyleMap;

/// Marker class carried by every wrapper element.
pub const WRAPPER_CLASS: &str = "lazy-image-wrapper";

/// Additional marker for constrained-layout wrappers.
pub const WRAPPER_CLASS_CONSTRAINED: &str = "lazy-image-wrapper-constrained";

fn px(n: f64) -> String {
    format!("{n}px")
}

/// Base style shared by the placeholder and main image layers: an
/// absolutely positioned cover layer filling its wrapper.
fn layer_base() -> StyleMap {
    StyleMap::new()
        .with("bottom", "0")
        .with("height", "100%")
        .with("left", "0")
        .with("margin", "0")
        .with("max-width", "none")
        .with("padding", "0")
        .with("position", "absolute")
        .with("right", "0")
        .with("top", "0")
        .with("width", "100%")
        .with("object-fit", "cover")
        .with("object-position", "center center")
}

/// Wrapper class list: base marker, constrained marker when applicable,
/// then the caller's class, space-joined.
pub fn wrapper_classes(layout: Layout, custom_class: Option<&str>) -> String {
    let mut classes = vec![WRAPPER_CLASS];
    if layout == Layout::Constrained {
        classes.push(WRAPPER_CLASS_CONSTRAINED);
    }
    if let Some(custom) = custom_class {
        classes.push(custom);
    }
    classes.join(" ")
}

/// Wrapper style: positioning context for the image layers.
pub fn wrapper_style(
    layout: Layout,
    width: f64,
    height: f64,
    background_color: Option<&str>,
) -> StyleMap {
    let mut style = StyleMap::new()
        .with("position", "relative")
        .with("overflow", "hidden");

    match layout {
        Layout::Fixed => {
            style.set("width", px(width));
            style.set("height", px(height));
        }
        Layout::Constrained => {
            style.set("display", "inline-block");
        }
        Layout::FullWidth | Layout::Unknown => {}
    }

    if let Some(background) = background_color {
        style.set("background-color", background);
    }

    style
}

/// Placeholder style: the caller's overrides apply, but the placeholder
/// always fills its container: `height`/`left`/`position`/`top`/`width`
/// are forced back to absolute-fill afterwards.
pub fn placeholder_style(
    layout: Layout,
    width: f64,
    height: f64,
    background_color: Option<&str>,
    img_style: &StyleMap,
) -> StyleMap {
    let mut style = layer_base();
    style.merge(img_style);

    style.set("height", "100%");
    style.set("left", "0");
    style.set("position", "absolute");
    style.set("top", "0");
    style.set("width", "100%");

    if let Some(background) = background_color {
        style.set("background-color", background);

        match layout {
            Layout::Fixed => {
                style.set("width", px(width));
                style.set("height", px(height));
                style.set("position", "relative");
            }
            Layout::Constrained | Layout::FullWidth => {
                style.set("position", "absolute");
                style.set("top", "0");
                style.set("left", "0");
                style.set("bottom", "0");
                style.set("right", "0");
            }
            Layout::Unknown => {}
        }
    }

    style.set("opacity", "1");
    style.set("transition", "opacity 500ms linear");

    style
}

/// Main image style: caller overrides win over the layer base, then the
/// loading state forces `opacity` (`0` while a lazy image waits for its
/// visibility trigger, `1` otherwise).
pub fn main_style(
    loading: Loading,
    background_color: Option<&str>,
    img_style: &StyleMap,
) -> StyleMap {
    let mut style = StyleMap::new()
        .with("transition", "opacity 250ms linear")
        .with("transform", "translateZ(0px)")
        .with("will-change", "opacity");
    style.merge(&layer_base());
    style.merge(img_style);

    if let Some(background) = background_color {
        style.set("background-color", background);
    }

    style.set("opacity", if loading.is_lazy() { "0" } else { "1" });

    style
}
