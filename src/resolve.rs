//! Attribute resolution: from source metadata and caller arguments to a
//! render-ready [`ResolvedView`].
//!
//! This is the orchestrator. One call resolves dimensions and the `sizes`
//! hint, composes the three style maps, serializes them, and assembles the
//! view model. The whole computation is synchronous and stateless: no I/O,
//! no shared state, safe to call from any thread.
//!
//! Site-wide defaults (background color, LQIP flag) are plain values in
//! [`Defaults`], resolved by the caller (typically from
//! [`config::SiteConfig`](crate::config::SiteConfig)) and threaded in
//! explicitly. Nothing here reads ambient configuration.

use crate::compose;
use crate::layout::{self, Layout, Loading};
use crate::source::ImageSource;
use crate::style::StyleMap;
use crate::view::{MainView, PlaceholderView, ResolvedView, WrapperView};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// Neither the source metadata nor the caller provided enough dimension
    /// data to anchor the aspect-ratio math.
    #[error("missing image dimension: the source provides no width/height and none were supplied")]
    MissingDimension,
}

/// Caller-supplied layout arguments. Everything is optional; unrecognized
/// keys in the serialized form are ignored, not errors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageArgs {
    pub layout: Layout,
    pub loading: Loading,
    /// Display width override in pixels.
    pub width: Option<f64>,
    /// Display height override in pixels. When absent and `width` is set,
    /// derived from the source's aspect ratio.
    pub height: Option<f64>,
    /// Explicit `sizes` attribute, winning over the source's and the
    /// layout default.
    pub sizes: Option<String>,
    /// CSS color for the wrapper/placeholder background. Falls back to the
    /// site default, then `"transparent"`. An empty string disables it.
    pub background_color: Option<String>,
    /// Whether to request a low-quality placeholder. Falls back to the
    /// site default.
    pub lqip: Option<bool>,
    /// Style overrides for the main image (and, where not forced, the
    /// placeholder). Merged over the layer defaults; caller wins.
    pub img_style: StyleMap,
    /// Extra class for the wrapper element.
    pub wrapper_class: Option<String>,
}

/// Site-wide defaults, already resolved by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub background_color: Option<String>,
    pub lqip: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            background_color: None,
            lqip: true,
        }
    }
}

/// Treat non-finite and non-positive dimensions as absent, so garbage
/// metadata surfaces as [`ResolveError::MissingDimension`] instead of NaN
/// styles.
fn positive(n: f64) -> Option<f64> {
    (n.is_finite() && n > 0.0).then_some(n)
}

/// Resolve display width and height from overrides and source dimensions.
///
/// - `width = override width, else source width`
/// - `height = override height; else scaled from the source ratio when the
///   width was overridden; else source height`
fn resolve_dimensions<S: ImageSource + ?Sized>(
    source: &S,
    args: &ImageArgs,
) -> Result<(f64, f64), ResolveError> {
    let source_width = source.width().and_then(positive);
    let source_height = source.height().and_then(positive);
    let override_width = args.width.and_then(positive);
    let override_height = args.height.and_then(positive);

    let width = override_width
        .or(source_width)
        .ok_or(ResolveError::MissingDimension)?;

    let height = match (override_height, override_width) {
        (Some(h), _) => h,
        (None, Some(w)) => {
            let (sw, sh) = source_width
                .zip(source_height)
                .ok_or(ResolveError::MissingDimension)?;
            layout::scaled_height(sw, sh, w)
        }
        (None, None) => source_height.ok_or(ResolveError::MissingDimension)?,
    };

    Ok((width, height))
}

/// Resolve a source plus caller arguments into a render-ready view.
///
/// Fails with [`ResolveError::MissingDimension`] before building any
/// output; everything else is total.
pub fn resolve<S: ImageSource + ?Sized>(
    source: &S,
    args: &ImageArgs,
    defaults: &Defaults,
) -> Result<ResolvedView, ResolveError> {
    let (width, height) = resolve_dimensions(source, args)?;

    let sizes = args
        .sizes
        .clone()
        .or_else(|| source.sizes_attr())
        .or_else(|| layout::default_sizes(args.layout, width));

    let lqip = args.lqip.unwrap_or(defaults.lqip);
    let background = args
        .background_color
        .as_deref()
        .or(defaults.background_color.as_deref())
        .unwrap_or("transparent");
    // an empty string explicitly disables the background branch
    let background = (!background.is_empty()).then_some(background);

    let wrapper = WrapperView {
        classes: compose::wrapper_classes(args.layout, args.wrapper_class.as_deref()),
        style: compose::wrapper_style(args.layout, width, height, background).declarations(),
    };

    let mut payload = source.lqip();
    // computed fields win over same-named payload fields
    payload.remove("style");
    if !lqip {
        payload.insert("src".to_string(), Value::Null);
    }
    let placeholder = PlaceholderView {
        payload,
        style: compose::placeholder_style(args.layout, width, height, background, &args.img_style)
            .declarations(),
    };

    let main = MainView {
        sources: source.src_sets(),
        src: source.default_src(),
        loading: args.loading,
        should_load: args.loading == Loading::Eager,
        style: compose::main_style(args.loading, background, &args.img_style).declarations(),
    };

    Ok(ResolvedView {
        layout: args.layout,
        wrapper,
        placeholder,
        main,
        alt: source.alt(),
        width,
        height,
        sizes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{SrcSetEntry, StaticSource};
    use serde_json::Map;

    fn museum_source() -> StaticSource {
        let mut placeholder = Map::new();
        placeholder.insert("src".to_string(), Value::from("data:image/gif;base64,R0"));
        StaticSource {
            width: Some(1200.0),
            height: Some(800.0),
            alt: "x".to_string(),
            sizes: None,
            default_src: "a.jpg".to_string(),
            src_sets: vec![
                SrcSetEntry {
                    descriptor: "400w".to_string(),
                    url: "a-400.jpg".to_string(),
                },
                SrcSetEntry {
                    descriptor: "800w".to_string(),
                    url: "a-800.jpg".to_string(),
                },
            ],
            placeholder,
        }
    }

    fn fixed_300_args() -> ImageArgs {
        ImageArgs {
            layout: Layout::Fixed,
            width: Some(300.0),
            ..ImageArgs::default()
        }
    }

    // =========================================================================
    // Dimension resolution
    // =========================================================================

    #[test]
    fn width_override_scales_height_by_source_ratio() {
        let view = resolve(&museum_source(), &fixed_300_args(), &Defaults::default()).unwrap();
        assert_eq!(view.width, 300.0);
        assert_eq!(view.height, 200.0);
    }

    #[test]
    fn no_overrides_uses_native_dimensions() {
        let view = resolve(&museum_source(), &ImageArgs::default(), &Defaults::default()).unwrap();
        assert_eq!(view.width, 1200.0);
        assert_eq!(view.height, 800.0);
    }

    #[test]
    fn height_override_is_taken_verbatim() {
        let args = ImageArgs {
            width: Some(300.0),
            height: Some(150.0),
            ..ImageArgs::default()
        };
        let view = resolve(&museum_source(), &args, &Defaults::default()).unwrap();
        assert_eq!(view.height, 150.0);
    }

    #[test]
    fn dimensionless_source_without_overrides_is_fatal() {
        let source = StaticSource::default();
        let err = resolve(&source, &ImageArgs::default(), &Defaults::default()).unwrap_err();
        assert_eq!(err, ResolveError::MissingDimension);
    }

    #[test]
    fn width_only_override_needs_source_ratio() {
        let source = StaticSource::default();
        let args = ImageArgs {
            width: Some(300.0),
            ..ImageArgs::default()
        };
        assert_eq!(
            resolve(&source, &args, &Defaults::default()).unwrap_err(),
            ResolveError::MissingDimension
        );
    }

    #[test]
    fn full_override_pair_works_without_source_dimensions() {
        let source = StaticSource::default();
        let args = ImageArgs {
            width: Some(300.0),
            height: Some(200.0),
            ..ImageArgs::default()
        };
        let view = resolve(&source, &args, &Defaults::default()).unwrap();
        assert_eq!((view.width, view.height), (300.0, 200.0));
    }

    #[test]
    fn garbage_dimensions_count_as_missing() {
        let source = StaticSource {
            width: Some(0.0),
            height: Some(f64::NAN),
            ..StaticSource::default()
        };
        assert_eq!(
            resolve(&source, &ImageArgs::default(), &Defaults::default()).unwrap_err(),
            ResolveError::MissingDimension
        );
    }

    // =========================================================================
    // Sizes precedence
    // =========================================================================

    #[test]
    fn explicit_sizes_argument_wins() {
        let mut source = museum_source();
        source.sizes = Some("(max-width: 600px) 100vw, 600px".to_string());
        let args = ImageArgs {
            sizes: Some("42vw".to_string()),
            ..fixed_300_args()
        };
        let view = resolve(&source, &args, &Defaults::default()).unwrap();
        assert_eq!(view.sizes.as_deref(), Some("42vw"));
    }

    #[test]
    fn source_sizes_attr_beats_layout_default() {
        let mut source = museum_source();
        source.sizes = Some("(max-width: 600px) 100vw, 600px".to_string());
        let view = resolve(&source, &fixed_300_args(), &Defaults::default()).unwrap();
        assert_eq!(view.sizes.as_deref(), Some("(max-width: 600px) 100vw, 600px"));
    }

    #[test]
    fn layout_default_sizes_uses_resolved_width() {
        let args = ImageArgs {
            layout: Layout::Constrained,
            width: Some(800.0),
            ..ImageArgs::default()
        };
        let view = resolve(&museum_source(), &args, &Defaults::default()).unwrap();
        assert_eq!(view.sizes.as_deref(), Some("(min-width:800px) 800px, 100vw"));
    }

    #[test]
    fn unknown_layout_resolves_without_sizes() {
        let args = ImageArgs {
            layout: Layout::Unknown,
            ..ImageArgs::default()
        };
        let view = resolve(&museum_source(), &args, &Defaults::default()).unwrap();
        assert_eq!(view.sizes, None);
        assert_eq!(view.wrapper.style, "position:relative;overflow:hidden;background-color:transparent");
    }

    // =========================================================================
    // Loading state
    // =========================================================================

    #[test]
    fn lazy_loading_hides_main_image() {
        let view = resolve(&museum_source(), &ImageArgs::default(), &Defaults::default()).unwrap();
        assert!(view.main.style.contains("opacity:0"));
        assert!(!view.main.should_load);
    }

    #[test]
    fn eager_loading_shows_main_image_and_sets_should_load() {
        let args = ImageArgs {
            loading: Loading::Eager,
            ..ImageArgs::default()
        };
        let view = resolve(&museum_source(), &args, &Defaults::default()).unwrap();
        assert!(view.main.style.ends_with("opacity:1"));
        assert!(view.main.should_load);
    }

    // =========================================================================
    // Background color
    // =========================================================================

    #[test]
    fn background_defaults_to_transparent_everywhere() {
        let view = resolve(&museum_source(), &ImageArgs::default(), &Defaults::default()).unwrap();
        assert!(view.wrapper.style.contains("background-color:transparent"));
        assert!(view.placeholder.style.contains("background-color:transparent"));
        assert!(view.main.style.contains("background-color:transparent"));
    }

    #[test]
    fn explicit_background_propagates_to_wrapper_and_placeholder() {
        let args = ImageArgs {
            background_color: Some("red".to_string()),
            ..ImageArgs::default()
        };
        let view = resolve(&museum_source(), &args, &Defaults::default()).unwrap();
        assert!(view.wrapper.style.contains("background-color:red"));
        assert!(view.placeholder.style.contains("background-color:red"));
    }

    #[test]
    fn site_default_background_fills_in() {
        let defaults = Defaults {
            background_color: Some("beige".to_string()),
            lqip: true,
        };
        let view = resolve(&museum_source(), &ImageArgs::default(), &defaults).unwrap();
        assert!(view.wrapper.style.contains("background-color:beige"));
    }

    #[test]
    fn empty_background_disables_the_branch() {
        let args = ImageArgs {
            background_color: Some(String::new()),
            ..ImageArgs::default()
        };
        let view = resolve(&museum_source(), &args, &Defaults::default()).unwrap();
        assert!(!view.wrapper.style.contains("background-color"));
        assert!(!view.placeholder.style.contains("background-color"));
    }

    // =========================================================================
    // Placeholder payload
    // =========================================================================

    #[test]
    fn lqip_disabled_nulls_the_placeholder_src() {
        let args = ImageArgs {
            lqip: Some(false),
            ..ImageArgs::default()
        };
        let view = resolve(&museum_source(), &args, &Defaults::default()).unwrap();
        assert_eq!(view.placeholder.src(), None);
        assert_eq!(view.placeholder.payload.get("src"), Some(&Value::Null));

        // style is computed identically either way
        let with_lqip =
            resolve(&museum_source(), &ImageArgs::default(), &Defaults::default()).unwrap();
        assert_eq!(view.placeholder.style, with_lqip.placeholder.style);
    }

    #[test]
    fn site_default_lqip_flag_applies() {
        let defaults = Defaults {
            background_color: None,
            lqip: false,
        };
        let view = resolve(&museum_source(), &ImageArgs::default(), &defaults).unwrap();
        assert_eq!(view.placeholder.payload.get("src"), Some(&Value::Null));
    }

    #[test]
    fn computed_style_wins_over_payload_style_field() {
        let mut source = museum_source();
        source
            .placeholder
            .insert("style".to_string(), Value::from("color:hotpink"));
        let view = resolve(&source, &ImageArgs::default(), &Defaults::default()).unwrap();
        assert!(view.placeholder.style.starts_with("bottom:0"));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["placeholder"]["style"], view.placeholder.style);
    }

    #[test]
    fn opaque_payload_fields_pass_through() {
        let mut source = museum_source();
        source
            .placeholder
            .insert("dominantColor".to_string(), Value::from("#a0b0c0"));
        let view = resolve(&source, &ImageArgs::default(), &Defaults::default()).unwrap();
        assert_eq!(
            view.placeholder.payload.get("dominantColor"),
            Some(&Value::from("#a0b0c0"))
        );
    }

    // =========================================================================
    // End to end
    // =========================================================================

    #[test]
    fn fixed_layout_scenario() {
        let view = resolve(&museum_source(), &fixed_300_args(), &Defaults::default()).unwrap();
        assert_eq!(view.layout, Layout::Fixed);
        assert_eq!(view.width, 300.0);
        assert_eq!(view.height, 200.0);
        assert_eq!(view.sizes.as_deref(), Some("300px"));
        assert!(view.wrapper.style.contains("width:300px;height:200px"));
        assert!(view.main.style.contains("opacity:0"));
        assert_eq!(view.alt, "x");
        assert_eq!(view.main.src, "a.jpg");
        assert_eq!(view.main.sources.len(), 2);
    }

    #[test]
    fn resolution_is_deterministic() {
        let args = ImageArgs {
            layout: Layout::Constrained,
            width: Some(640.0),
            background_color: Some("red".to_string()),
            img_style: StyleMap::new().with("border-radius", "4px"),
            ..ImageArgs::default()
        };
        let a = resolve(&museum_source(), &args, &Defaults::default()).unwrap();
        let b = resolve(&museum_source(), &args, &Defaults::default()).unwrap();
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    // =========================================================================
    // Argument parsing
    // =========================================================================

    #[test]
    fn args_ignore_unrecognized_options() {
        let args: ImageArgs = serde_json::from_str(
            r#"{"layout": "constrained", "width": 640, "fancyMode": true}"#,
        )
        .unwrap();
        assert_eq!(args.layout, Layout::Constrained);
        assert_eq!(args.width, Some(640.0));
    }

    // deserialized from text so object entries stream in document order
    #[test]
    fn args_img_style_keeps_document_order() {
        let args: ImageArgs =
            serde_json::from_str(r#"{"imgStyle": {"object-fit": "contain", "margin": 0}}"#)
                .unwrap();
        assert_eq!(args.img_style.declarations(), "object-fit:contain;margin:0");
    }
}
