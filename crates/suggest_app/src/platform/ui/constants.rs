use std::time::Duration;

pub const INPUT_TITLE: &str = " Buscar clubes, jogadores, técnicos, árbitros, estádios ";
pub const DROPDOWN_TITLE: &str = " Sugestões ";
pub const STATUS_HINTS: &str = "↑/↓ escolher · Enter abrir · Esc fechar/sair";

/// Bordered single-line input.
pub const INPUT_HEIGHT: u16 = 3;
/// Upper bound on dropdown rows, borders excluded.
pub const MAX_DROPDOWN_ROWS: u16 = 10;

/// How long the event loop waits for terminal input before checking the engine.
pub const POLL_INTERVAL: Duration = Duration::from_millis(25);
