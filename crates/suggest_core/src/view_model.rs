use crate::DropdownEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseView {
    #[default]
    Idle,
    Waiting,
    Loading,
    Showing,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub phase: PhaseView,
    pub dropdown: Option<DropdownView>,
    pub dirty: bool,
}

impl AppViewModel {
    /// The dropdown as it should be drawn, or `None` when nothing is shown.
    pub fn visible_dropdown(&self) -> Option<&DropdownView> {
        self.dropdown.as_ref().filter(|dropdown| dropdown.visible)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownView {
    pub visible: bool,
    pub entries: Vec<DropdownEntry>,
    pub selected: Option<usize>,
}
