//! Key binding dispatch for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::CatalogResult;

use super::app::ViewerApp;

/// Handle a key event, mutating app state.
pub fn handle_key(app: &mut ViewerApp, key: KeyEvent) -> CatalogResult<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return Ok(());
    }

    // Overlay swallows the key that dismisses it
    if app.show_help {
        app.show_help = false;
        app.needs_redraw = true;
        return Ok(());
    }

    if app.menu_active {
        match key.code {
            KeyCode::Left => app.menu_state.left(),
            KeyCode::Right => app.menu_state.right(),
            KeyCode::Up => app.menu_state.up(),
            KeyCode::Down => app.menu_state.down(),
            KeyCode::Enter => app.menu_state.select(),
            KeyCode::Esc | KeyCode::F(10) => {
                app.close_menu();
                return Ok(());
            }
            _ => {}
        }
        app.needs_redraw = true;
        return app.drain_menu_events();
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::F(10) | KeyCode::Char('m') => app.open_menu(),
        KeyCode::Char('?') => {
            app.show_help = true;
            app.needs_redraw = true;
        }
        KeyCode::Left | KeyCode::Char('h') => app.select_prev()?,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.select_next()?,
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_index(index)?;
        }
        KeyCode::Char('j') | KeyCode::Down => app.scroll_down(),
        KeyCode::Char('k') | KeyCode::Up => app.scroll_up(),
        KeyCode::PageDown | KeyCode::Char(' ') => app.page_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_top(),
        _ => {}
    }
    Ok(())
}
