use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use suggest_core::{AppViewModel, Msg, SelectionMove};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    Quit,
    Ignore,
}

/// Maps a key press to a core message, given what is currently on screen.
pub fn translate_key(view: &AppViewModel, key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => KeyAction::Quit,
        KeyCode::Char('u') if ctrl => edited(view, String::new()),
        KeyCode::Char(ch) if !ctrl => {
            let mut text = view.input.clone();
            text.push(ch);
            edited(view, text)
        }
        KeyCode::Backspace => {
            let mut text = view.input.clone();
            text.pop();
            edited(view, text)
        }
        KeyCode::Esc if view.visible_dropdown().is_some() => {
            KeyAction::Dispatch(Msg::DismissRequested)
        }
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Up => KeyAction::Dispatch(Msg::SelectionMoved(SelectionMove::Up)),
        KeyCode::Down | KeyCode::Tab => {
            KeyAction::Dispatch(Msg::SelectionMoved(SelectionMove::Down))
        }
        KeyCode::Enter => KeyAction::Dispatch(Msg::SelectionActivated),
        _ => KeyAction::Ignore,
    }
}

fn edited(view: &AppViewModel, text: String) -> KeyAction {
    if text == view.input {
        KeyAction::Ignore
    } else {
        KeyAction::Dispatch(Msg::InputChanged(text))
    }
}
