use crate::Suggestion;

/// Placeholder shown when the endpoint returns no candidates.
pub const NO_RESULTS_TEXT: &str = "Nenhum resultado encontrado";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEntry {
    /// The single "no results" row.
    NoResults,
    /// A navigable row for one suggestion.
    Link(Suggestion),
}

impl DropdownEntry {
    pub fn url(&self) -> Option<&str> {
        match self {
            DropdownEntry::NoResults => None,
            DropdownEntry::Link(suggestion) => Some(&suggestion.url),
        }
    }
}

/// The suggestion panel attached to the search box.
///
/// Created on the first render and then reused: later renders replace its
/// entries and hiding only flips visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    entries: Vec<DropdownEntry>,
    visible: bool,
}

impl Dropdown {
    pub fn entries(&self) -> &[DropdownEntry] {
        &self.entries
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of entries that can be navigated to.
    pub fn link_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, DropdownEntry::Link(_)))
            .count()
    }
}

/// Ensures the dropdown exists, replaces its contents with `suggestions` and
/// makes it visible. An empty input yields exactly one `NoResults` entry.
pub(crate) fn show_suggestions(slot: &mut Option<Dropdown>, suggestions: Vec<Suggestion>) {
    let dropdown = slot.get_or_insert_with(|| Dropdown {
        entries: Vec::new(),
        visible: false,
    });

    dropdown.entries.clear();
    if suggestions.is_empty() {
        dropdown.entries.push(DropdownEntry::NoResults);
    } else {
        dropdown
            .entries
            .extend(suggestions.into_iter().map(DropdownEntry::Link));
    }
    dropdown.visible = true;
}

/// Hides the dropdown if it exists. Returns true when visibility changed.
pub(crate) fn hide(slot: &mut Option<Dropdown>) -> bool {
    match slot {
        Some(dropdown) if dropdown.visible => {
            dropdown.visible = false;
            true
        }
        _ => false,
    }
}
