use crate::gui::{
    app::View,
    table::sort::SortField,
};

// A simple ui action queue system so we don't need to pass mutable references to ui functions
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // List State
    ToggleSort(SortField),
    SetSearch(String),
    SetPageSize(usize),
    PreviousPage,
    NextPage,

    // Row actions, by index into the loaded collection
    ShowRecord(usize),
    EditMember(usize),
    RequestDelete(usize),

    // Shell
    Navigate(View),
    ExportCsv,
    OpenSettings,
    Reload,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
