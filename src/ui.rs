//! Cart panel visibility.
//!
//! DESIGN
//! ======
//! Presentation state stays out of [`crate::cart`]: the panel flag is
//! session-scoped and never persisted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Whether the cart summary panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}
