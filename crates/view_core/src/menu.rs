//! Collapsible navigation menu as an explicit two-state machine.

/// Visibility of the navigation panel. The accessibility "expanded" flag is
/// derived from this, never stored separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Closed,
    Open,
}

/// Everything that can move the menu. Only `Toggle` can open it; the rest
/// close an open menu and are no-ops otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle,
    OutsideClick,
    Escape,
    /// Window width crossed the wide-layout breakpoint while the menu was
    /// open. Auto-close only; shrinking the window never auto-opens.
    ResizeWide,
}

/// Side effect a transition asks the embedding UI to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEffect {
    /// Move keyboard focus to the first interactive item in the panel.
    FocusFirstItem,
}

pub fn transition(state: MenuState, event: MenuEvent) -> (MenuState, Option<MenuEffect>) {
    match (state, event) {
        (MenuState::Closed, MenuEvent::Toggle) => (MenuState::Open, Some(MenuEffect::FocusFirstItem)),
        (MenuState::Open, MenuEvent::Toggle)
        | (MenuState::Open, MenuEvent::OutsideClick)
        | (MenuState::Open, MenuEvent::Escape)
        | (MenuState::Open, MenuEvent::ResizeWide) => (MenuState::Closed, None),
        (MenuState::Closed, _) => (MenuState::Closed, None),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuModel {
    state: MenuState,
}

impl MenuModel {
    pub fn new() -> Self {
        Self {
            state: MenuState::Closed,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Value the embedding UI should report as the toggle's expanded flag.
    pub fn expanded(&self) -> bool {
        self.is_open()
    }

    pub fn apply(&mut self, event: MenuEvent) -> Option<MenuEffect> {
        let (next, effect) = transition(self.state, event);
        if next != self.state {
            tracing::debug!(?event, ?next, "menu transition");
        }
        self.state = next;
        effect
    }
}

impl Default for MenuModel {
    fn default() -> Self {
        Self::new()
    }
}
