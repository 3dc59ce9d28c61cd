#![cfg(test)]
use gector_logging::{ConsoleFormatter, HtmlLayout, Layout, TextLayout};

/// A layout that only answers the mandatory question inherits the plain-text
/// defaults for every shape hook.
#[test]
fn unspecialized_layout_reports_plain_text() {
    struct Minimal;

    impl Layout for Minimal {
        fn ignores_throwable(&self) -> bool {
            false
        }
    }

    let layout = Minimal;

    assert_eq!(layout.content_type(), "text/plain");
    assert!(layout.header().is_none());
    assert!(layout.footer().is_none());
}

#[test]
fn shipped_layouts_answer_the_mandatory_flag() {
    assert!(TextLayout.ignores_throwable());
    assert!(!HtmlLayout.ignores_throwable());
    assert!(!ConsoleFormatter.ignores_throwable());
}

#[test]
fn html_layout_shell_is_balanced() {
    let layout = HtmlLayout;

    let header = layout.header().expect("html output needs a header");
    let footer = layout.footer().expect("html output needs a footer");

    assert_eq!(layout.content_type(), "text/html");
    assert!(header.starts_with("<html>"));
    assert!(footer.ends_with("</html>"));
}

/// Sinks hold layouts behind trait objects; the defaulted hooks must resolve
/// through dynamic dispatch as well.
#[test]
fn hooks_resolve_through_dyn_layout() {
    let layouts: Vec<Box<dyn Layout>> = vec![
        Box::new(TextLayout),
        Box::new(HtmlLayout),
        Box::new(ConsoleFormatter),
    ];

    for layout in &layouts {
        assert!(!layout.content_type().is_empty());
        // Header and footer always come as a pair or not at all.
        assert_eq!(layout.header().is_some(), layout.footer().is_some());
    }
}
