//! Keyboard input handling for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up => app.select_prev(),
        KeyCode::Down => app.select_next(),
        KeyCode::Right | KeyCode::Char('+' | '=') => app.adjust(1.0),
        KeyCode::Left | KeyCode::Char('-') => app.adjust(-1.0),
        KeyCode::Char('m') => app.next_month(),
        KeyCode::Char('M') => app.prev_month(),
        KeyCode::Char('y') => app.cycle_year(),
        KeyCode::Char('d') => app.toggle_hydro_mode(),
        KeyCode::Char('1') => app.switch_preset("baseline"),
        KeyCode::Char('2') => app.switch_preset("summer_export"),
        KeyCode::Char('3') => app.switch_preset("winter_stress"),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}
