//! SVG graph post-processing
//!
//! LibreNMS renders graphs with fixed `width`/`height` attributes on the root
//! element. Removing them lets the SVG scale with its container.

use regex::Regex;
use std::sync::OnceLock;

static SIZE_ATTRIBUTES: OnceLock<(Regex, Regex)> = OnceLock::new();

#[allow(clippy::expect_used, reason = "patterns are static and known to compile")]
fn size_attributes() -> &'static (Regex, Regex) {
    SIZE_ATTRIBUTES.get_or_init(|| {
        (
            Regex::new(r#" width="(.*?)""#).expect("width pattern"),
            Regex::new(r#" height="(.*?)""#).expect("height pattern"),
        )
    })
}

/// Strip the first ` width="…"` and the first ` height="…"` attribute from an SVG body.
///
/// Everything else, including later `width=`/`height=` attributes on nested
/// elements, is left byte-identical.
pub fn strip_graph_sizing(svg: &str) -> String {
    let (width, height) = size_attributes();
    let without_width = width.replace(svg, "");
    height.replace(&without_width, "").into_owned()
}
