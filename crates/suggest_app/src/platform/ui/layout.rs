use ratatui::layout::{Margin, Position, Rect};
use suggest_core::AppViewModel;

use super::constants::{INPUT_HEIGHT, MAX_DROPDOWN_ROWS};

/// Where the search control was drawn; used for hit-testing pointer presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchLayout {
    pub input: Rect,
    pub dropdown: Option<Rect>,
    pub status: Option<Rect>,
    /// Index of the first entry drawn, so the highlighted entry stays on screen.
    pub scroll: usize,
}

impl SearchLayout {
    pub fn compute(area: Rect, view: &AppViewModel) -> Self {
        let input = Rect {
            height: INPUT_HEIGHT.min(area.height),
            ..area
        };

        let status = (area.height > input.height).then(|| Rect {
            y: area.bottom() - 1,
            height: 1,
            ..area
        });

        let reserved = input.height + u16::from(status.is_some()) + 2;
        let available_rows = area.height.saturating_sub(reserved);
        let dropdown = view.visible_dropdown().and_then(|dropdown| {
            let wanted = u16::try_from(dropdown.entries.len()).unwrap_or(u16::MAX);
            let rows = wanted.min(MAX_DROPDOWN_ROWS).min(available_rows);
            (rows > 0).then(|| Rect {
                y: input.bottom(),
                height: rows + 2,
                ..area
            })
        });

        let rows = dropdown.map_or(0, |rect| usize::from(rect.height - 2));
        let scroll = match view.visible_dropdown().and_then(|dropdown| dropdown.selected) {
            Some(selected) if rows > 0 && selected >= rows => selected + 1 - rows,
            _ => 0,
        };

        Self {
            input,
            dropdown,
            status,
            scroll,
        }
    }

    /// True when the press lands on the search box or its dropdown.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let position = Position::new(column, row);
        self.input.contains(position)
            || self
                .dropdown
                .is_some_and(|dropdown| dropdown.contains(position))
    }

    /// Index of the dropdown entry drawn at the given cell, if any.
    pub fn entry_at(&self, column: u16, row: u16) -> Option<usize> {
        let inner = self.dropdown?.inner(Margin::new(1, 1));
        inner
            .contains(Position::new(column, row))
            .then(|| self.scroll + usize::from(row - inner.y))
    }

    /// Number of entries that fit in the dropdown.
    pub fn visible_rows(&self) -> usize {
        self.dropdown
            .map(|dropdown| usize::from(dropdown.height.saturating_sub(2)))
            .unwrap_or(0)
    }
}
