use crate::{
    catalog::{self, PanelEntry, PanelId},
    PanelError,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelSelection {
    #[default]
    Empty,
    Selected(PanelId),
}

/// Single-slot overlay state. Selecting while open replaces the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelSelector {
    selection: PanelSelection,
}

impl PanelSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> PanelSelection {
        self.selection
    }

    pub fn select(&mut self, id: PanelId) -> &'static PanelEntry {
        self.selection = PanelSelection::Selected(id);
        catalog::entry(id)
    }

    /// Leaves the current selection untouched when `key` is unknown.
    pub fn select_key(&mut self, key: &str) -> Result<&'static PanelEntry, PanelError> {
        let id = key.parse::<PanelId>()?;
        Ok(self.select(id))
    }

    pub fn clear(&mut self) {
        self.selection = PanelSelection::Empty;
    }

    pub fn is_open(&self) -> bool {
        self.selection != PanelSelection::Empty
    }

    pub fn current_content(&self) -> Option<&'static PanelEntry> {
        match self.selection {
            PanelSelection::Empty => None,
            PanelSelection::Selected(id) => Some(catalog::entry(id)),
        }
    }
}
