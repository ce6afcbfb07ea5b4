//! World map selection state
//!
//! At most one hotspot is highlighted. Selecting another replaces it;
//! selecting nothing clears the detail panel.

use types::hotspot::Hotspot;

#[derive(Debug, Clone, Default)]
pub struct HotspotSelection {
    selected: Option<Hotspot>,
}

impl HotspotSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Highlight `hotspot`, or clear with `None`. Returns the previous selection.
    pub fn select(&mut self, hotspot: Option<Hotspot>) -> Option<Hotspot> {
        std::mem::replace(&mut self.selected, hotspot)
    }

    pub fn clear(&mut self) -> Option<Hotspot> {
        self.selected.take()
    }

    pub fn selected(&self) -> Option<&Hotspot> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, hotspot: &Hotspot) -> bool {
        self.selected.as_ref().is_some_and(|h| h.id == hotspot.id)
    }
}
