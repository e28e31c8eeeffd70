//! HTML rendering of a resolved view.
//!
//! A reference renderer for [`ResolvedView`] using
//! [maud](https://maud.lambda.xyz/): type-safe, compile-time checked, and
//! auto-escaped. It consumes the view model as-is: every attribute value
//! was already computed by the resolver, nothing is derived here beyond
//! joining the srcset list into its attribute form.
//!
//! The fragment layout: wrapper `div` (positioning context), placeholder
//! `img` layer when the payload carries a `src`, the main `img`, and a
//! `noscript` eager fallback when the main image loads lazily.

use crate::view::ResolvedView;
use maud::{Markup, html};

/// Join encoded variants into a `srcset` attribute value:
/// `"url descriptor, url descriptor"`.
fn srcset_attr(view: &ResolvedView) -> Option<String> {
    if view.main.sources.is_empty() {
        return None;
    }
    Some(
        view.main
            .sources
            .iter()
            .map(|entry| format!("{} {}", entry.url, entry.descriptor))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

/// Render the full image fragment.
pub fn render_image(view: &ResolvedView) -> Markup {
    let srcset = srcset_attr(view);

    html! {
        div class=(view.wrapper.classes) style=(view.wrapper.style) {
            @if let Some(placeholder_src) = view.placeholder.src() {
                img class="lazy-image-placeholder"
                    src=(placeholder_src)
                    style=(view.placeholder.style)
                    alt=""
                    aria-hidden="true";
            }
            img class="lazy-image-main"
                src=(view.main.src)
                srcset=[srcset.as_deref()]
                sizes=[view.sizes.as_deref()]
                width=(view.width)
                height=(view.height)
                alt=(view.alt)
                loading=(view.main.loading)
                decoding="async"
                style=(view.main.style);
            @if view.main.loading.is_lazy() {
                noscript {
                    img src=(view.main.src)
                        srcset=[srcset.as_deref()]
                        sizes=[view.sizes.as_deref()]
                        width=(view.width)
                        height=(view.height)
                        alt=(view.alt)
                        loading="eager";
                }
            }
        }
    }
}
