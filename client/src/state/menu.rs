//! Page-level menu selection.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use records::EntityKind;

/// Which entity's panel the console is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub active: EntityKind,
}

impl MenuState {
    pub fn select(&mut self, kind: EntityKind) {
        self.active = kind;
    }

    #[must_use]
    pub fn is_active(&self, kind: EntityKind) -> bool {
        self.active == kind
    }
}
