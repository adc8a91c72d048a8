//! Same-page anchor links.

/// What the host should do with a click on an anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorClick<'a> {
    /// Always `true` for same-page links; jump navigation is replaced by a
    /// smooth scroll (or nothing).
    pub prevent_default: bool,
    /// Element id to scroll to, if the link names one.
    pub target_id: Option<&'a str>,
}

/// Interpret an anchor's `href` attribute.
///
/// Only `#fragment` links are handled; anything else is left alone. An empty
/// fragment still suppresses navigation but has no target.
pub fn on_anchor_click(href: &str) -> Option<AnchorClick<'_>> {
    let fragment = href.strip_prefix('#')?;
    Some(AnchorClick {
        prevent_default: true,
        target_id: (!fragment.is_empty()).then_some(fragment),
    })
}

/// Resolve the click against the document. `lookup` returns the element for
/// an id, if any. A missing target is a silent no-op.
pub fn resolve_target<'a, T>(
    click: &AnchorClick<'a>,
    lookup: impl FnOnce(&'a str) -> Option<T>,
) -> Option<T> {
    click.target_id.and_then(lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_are_intercepted() {
        let click = on_anchor_click("#projects").unwrap();
        assert!(click.prevent_default);
        assert_eq!(click.target_id, Some("projects"));
    }

    #[test]
    fn external_links_are_ignored() {
        assert_eq!(on_anchor_click("https://example.com/#top"), None);
        assert_eq!(on_anchor_click("/about"), None);
    }

    #[test]
    fn bare_hash_prevents_without_target() {
        let click = on_anchor_click("#").unwrap();
        assert!(click.prevent_default);
        assert_eq!(click.target_id, None);
    }

    #[test]
    fn missing_target_is_silent() {
        let click = on_anchor_click("#missing").unwrap();
        let found: Option<()> = resolve_target(&click, |_| None);
        assert!(click.prevent_default);
        assert_eq!(found, None);
    }

    #[test]
    fn existing_target_is_resolved() {
        let click = on_anchor_click("#contact").unwrap();
        let found = resolve_target(&click, |id| (id == "contact").then_some(42));
        assert_eq!(found, Some(42));
    }
}
