//! # Log Layout Contract
//!
//! A layout is the strategy a log sink consults before and after writing
//! rendered output: what content type the output carries, whether a header
//! or footer surrounds it, and whether attached error detail is discarded
//! or rendered by the layout itself.

/// Capability contract for log output layouts.
///
/// The three shape hooks carry defaults suitable for unstructured plain-text
/// output. [`ignores_throwable`](Layout::ignores_throwable) has no default;
/// an implementation that omits it does not compile:
///
/// ```compile_fail
/// use gector_logging::Layout;
///
/// struct Partial;
///
/// impl Layout for Partial {}
/// ```
pub trait Layout {
    /// MIME type of the rendered output.
    fn content_type(&self) -> &str {
        "text/plain"
    }

    /// Text emitted once before any rendered output, if the format needs one.
    fn header(&self) -> Option<String> {
        None
    }

    /// Text emitted once after the last rendered output, if the format needs one.
    fn footer(&self) -> Option<String> {
        None
    }

    /// Whether this layout discards attached error detail, leaving it for the
    /// sink to handle separately.
    fn ignores_throwable(&self) -> bool;
}

/// Plain-text layout with no surrounding structure.
///
/// Keeps every default; error detail is left to the sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextLayout;

impl Layout for TextLayout {
    fn ignores_throwable(&self) -> bool {
        true
    }
}

/// Layout producing a self-contained HTML document.
///
/// The header and footer form the document shell around the rendered body.
/// Error detail belongs inside the document, so it is not left to the sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlLayout;

impl Layout for HtmlLayout {
    fn content_type(&self) -> &str {
        "text/html"
    }

    fn header(&self) -> Option<String> {
        Some("<html><body><pre>".to_string())
    }

    fn footer(&self) -> Option<String> {
        Some("</pre></body></html>".to_string())
    }

    fn ignores_throwable(&self) -> bool {
        false
    }
}
