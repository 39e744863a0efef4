//! Loading feedback for internal button links

/// Whether following `href` should show a loading label on the link.
///
/// In-page anchors and links to other hosts are left alone.
pub fn shows_loading(href: &str, page_host: &str) -> bool {
    if href.is_empty() || href.starts_with('#') {
        return false;
    }
    if href.starts_with("http") && !href.contains(page_host) {
        return false;
    }
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkLoading {
    #[default]
    Idle,
    Loading,
}

impl LinkLoading {
    pub fn is_loading(self) -> bool {
        self == LinkLoading::Loading
    }

    pub fn label(self) -> Option<&'static str> {
        match self {
            LinkLoading::Idle => None,
            LinkLoading::Loading => Some("Loading..."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internal_links_show_loading() {
        assert!(shows_loading("/services", "gethelped.com"));
        assert!(shows_loading("https://gethelped.com/about", "gethelped.com"));
    }

    #[test]
    fn test_page_links_show_loading() {
        assert!(shows_loading("/", "gethelped.com"));
        assert!(shows_loading("/privacy", "gethelped.com"));
    }

    #[test]
    fn test_anchors_and_external_links_skip_loading() {
        assert!(!shows_loading("#contact", "gethelped.com"));
        assert!(!shows_loading("", "gethelped.com"));
        assert!(!shows_loading("https://example.org", "gethelped.com"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(LinkLoading::Idle.label(), None);
        assert_eq!(LinkLoading::Loading.label(), Some("Loading..."));
        assert!(LinkLoading::Loading.is_loading());
    }
}
