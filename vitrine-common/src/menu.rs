use crate::config::Labels;

/// Something that can change the mobile menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the menu toggle control
    Toggle,
    /// Click whose target is outside both the nav and the toggle
    OutsideClick,
    /// Escape pressed anywhere in the document
    Escape,
}

/// What the binding has to do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuTransition {
    /// State flipped; presentation must be rewritten
    pub changed: bool,
    /// Keyboard focus goes back to the toggle control
    pub restore_focus: bool,
}

/// Presentation attributes derived from the open flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPresentation<'a> {
    /// `active` class on both the toggle and the nav container
    pub active: bool,
    pub aria_expanded: bool,
    pub aria_label: &'a str,
}

/// Mobile menu open/closed state.
///
/// The class, aria-expanded and aria-label are all derived from `open`, so
/// they can't drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn handle(&mut self, event: MenuEvent) -> MenuTransition {
        match event {
            MenuEvent::Toggle => {
                self.open = !self.open;
                MenuTransition {
                    changed: true,
                    restore_focus: false,
                }
            }
            MenuEvent::OutsideClick => {
                let changed = self.open;
                self.open = false;
                MenuTransition {
                    changed,
                    restore_focus: false,
                }
            }
            MenuEvent::Escape => {
                if !self.open {
                    return MenuTransition::default();
                }
                self.open = false;
                MenuTransition {
                    changed: true,
                    restore_focus: true,
                }
            }
        }
    }

    pub fn presentation<'a>(&self, labels: &'a Labels) -> MenuPresentation<'a> {
        MenuPresentation {
            active: self.open,
            aria_expanded: self.open,
            aria_label: if self.open {
                &labels.menu_close
            } else {
                &labels.menu_open
            },
        }
    }
}
