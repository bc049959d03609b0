use ratatui::layout::Position;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;
use suggest_core::{AppViewModel, DropdownEntry, PhaseView, NO_RESULTS_TEXT};

use super::constants::{DROPDOWN_TITLE, INPUT_TITLE, STATUS_HINTS};
use super::layout::SearchLayout;

pub fn draw(frame: &mut Frame, view: &AppViewModel, layout: &SearchLayout) {
    let input = Paragraph::new(view.input.as_str()).block(Block::bordered().title(INPUT_TITLE));
    frame.render_widget(input, layout.input);

    if layout.input.width > 2 && layout.input.height > 2 {
        let typed = u16::try_from(view.input.chars().count()).unwrap_or(u16::MAX);
        let max_x = layout.input.right().saturating_sub(2);
        frame.set_cursor_position(Position::new(
            (layout.input.x + 1).saturating_add(typed).min(max_x),
            layout.input.y + 1,
        ));
    }

    if let (Some(area), Some(dropdown)) = (layout.dropdown, view.visible_dropdown()) {
        let lines: Vec<Line> = dropdown
            .entries
            .iter()
            .enumerate()
            .skip(layout.scroll)
            .take(layout.visible_rows())
            .map(|(index, entry)| entry_line(entry, dropdown.selected == Some(index)))
            .collect();
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title(DROPDOWN_TITLE)),
            area,
        );
    }

    if let Some(area) = layout.status {
        let status = Line::from(vec![
            Span::styled(phase_label(view.phase), Style::default().fg(Color::Yellow)),
            Span::raw(" | "),
            Span::styled(STATUS_HINTS, Style::default().add_modifier(Modifier::DIM)),
        ]);
        frame.render_widget(Paragraph::new(status), area);
    }
}

/// One dropdown row: `type / name  info`, or the "no results" placeholder.
fn entry_line(entry: &DropdownEntry, selected: bool) -> Line<'static> {
    let line = match entry {
        DropdownEntry::NoResults => Line::from(Span::styled(
            NO_RESULTS_TEXT,
            Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
        )),
        DropdownEntry::Link(suggestion) => {
            let mut spans = vec![
                Span::styled(
                    suggestion.kind.clone(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" / "),
                Span::raw(suggestion.name.clone()),
            ];
            if let Some(info) = &suggestion.info {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    info.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
            Line::from(spans)
        }
    };
    if selected {
        line.style(Style::default().add_modifier(Modifier::REVERSED))
    } else {
        line
    }
}

fn phase_label(phase: PhaseView) -> &'static str {
    match phase {
        PhaseView::Idle => "Pronto",
        PhaseView::Waiting => "Digitando…",
        PhaseView::Loading => "Buscando…",
        PhaseView::Showing => "Sugestões",
    }
}
