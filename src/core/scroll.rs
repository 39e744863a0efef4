//! Scroll-driven presentation rules
//!
//! Pure functions of the window scroll offset. Thresholds are strict: the
//! change happens once the page has scrolled *past* them.

use super::settings::InteractionSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    Resting,
    Elevated,
}

impl NavbarStyle {
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            NavbarStyle::Elevated
        } else {
            NavbarStyle::Resting
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NavbarStyle::Resting => "rgba(255, 255, 255, 0.95)",
            NavbarStyle::Elevated => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            NavbarStyle::Resting => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
            NavbarStyle::Elevated => {
                "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)"
            }
        }
    }

    /// Inline style for the navbar element
    pub fn inline_style(&self) -> String {
        format!(
            "background: {}; box-shadow: {};",
            self.background(),
            self.box_shadow()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackToTopVisibility {
    Hidden,
    Visible,
}

impl BackToTopVisibility {
    pub fn for_scroll(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold {
            BackToTopVisibility::Visible
        } else {
            BackToTopVisibility::Hidden
        }
    }

    pub fn inline_style(&self) -> &'static str {
        match self {
            BackToTopVisibility::Visible => "opacity: 1; visibility: visible;",
            BackToTopVisibility::Hidden => "opacity: 0; visibility: hidden;",
        }
    }
}

/// Everything that depends on the current scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollPresentation {
    pub navbar: NavbarStyle,
    pub back_to_top: BackToTopVisibility,
}

impl ScrollPresentation {
    pub fn at(scroll_y: f64, settings: &InteractionSettings) -> Self {
        Self {
            navbar: NavbarStyle::for_scroll(scroll_y, settings.navbar_scroll_threshold),
            back_to_top: BackToTopVisibility::for_scroll(scroll_y, settings.back_to_top_threshold),
        }
    }
}

/// Selector for an in-page anchor link, or `None` when the link has no target.
///
/// `#` and empty hrefs are left to the browser.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        h if h.starts_with('#') => Some(h),
        _ => None,
    }
}

/// Scroll position that puts an anchor target just below the fixed navbar
pub fn anchor_scroll_top(target_offset_top: f64, navbar_offset: f64) -> f64 {
    target_offset_top - navbar_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navbar_threshold_is_strict() {
        assert_eq!(NavbarStyle::for_scroll(0.0, 100.0), NavbarStyle::Resting);
        assert_eq!(NavbarStyle::for_scroll(100.0, 100.0), NavbarStyle::Resting);
        assert_eq!(NavbarStyle::for_scroll(100.5, 100.0), NavbarStyle::Elevated);
    }

    #[test]
    fn test_navbar_styles() {
        assert!(
            NavbarStyle::Elevated
                .inline_style()
                .contains("rgba(255, 255, 255, 0.98)")
        );
        assert!(
            NavbarStyle::Resting
                .inline_style()
                .contains("0 1px 2px 0 rgb(0 0 0 / 0.05)")
        );
    }

    #[test]
    fn test_back_to_top_threshold() {
        assert_eq!(
            BackToTopVisibility::for_scroll(300.0, 300.0),
            BackToTopVisibility::Hidden
        );
        assert_eq!(
            BackToTopVisibility::for_scroll(301.0, 300.0),
            BackToTopVisibility::Visible
        );
        assert_eq!(
            BackToTopVisibility::Visible.inline_style(),
            "opacity: 1; visibility: visible;"
        );
    }

    #[test]
    fn test_presentation_between_thresholds() {
        let settings = InteractionSettings::default();
        let p = ScrollPresentation::at(200.0, &settings);

        assert_eq!(p.navbar, NavbarStyle::Elevated);
        assert_eq!(p.back_to_top, BackToTopVisibility::Hidden);
    }

    #[test]
    fn test_anchor_selector() {
        assert_eq!(anchor_selector("#contact"), Some("#contact"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector(""), None);
        assert_eq!(anchor_selector("/about"), None);
    }

    #[test]
    fn test_anchor_scroll_top() {
        assert_eq!(anchor_scroll_top(1200.0, 80.0), 1120.0);
        assert_eq!(anchor_scroll_top(40.0, 80.0), -40.0);
    }
}
