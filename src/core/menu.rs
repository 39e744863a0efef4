//! Mobile navigation menu state

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger button pressed
    Toggle,
    /// A navigation link inside the menu was followed
    LinkClicked,
    /// A click landed outside both the hamburger and the menu panel
    OutsideClick,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (_, MenuEvent::LinkClicked | MenuEvent::OutsideClick) => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Class applied to both the hamburger and the panel while open
    pub fn active_class(self) -> &'static str {
        if self.is_open() { "active" } else { "" }
    }
}

/// Event for a document click, given the current menu state and whether the
/// click landed on the hamburger or the panel.
///
/// `state` is `None` once the navbar is gone; such clicks are ignored.
pub fn outside_click_event(state: Option<MenuState>, inside_controls: bool) -> Option<MenuEvent> {
    match state {
        Some(MenuState::Open) if !inside_controls => Some(MenuEvent::OutsideClick),
        _ => None,
    }
}
