//! Messages that drive the TUI update loop.
//!
//! The runner reads crossterm events on a blocking task and forwards
//! them as `TuiMessage`s. Nothing else produces messages: the catalog
//! is static, so only the user can change what is on screen.

use crossterm::event::KeyEvent;

/// Messages that drive the TUI update loop.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// Keyboard input.
    Input(KeyEvent),
    /// Select a context type by catalog key.
    Select(String),
    /// Terminal was resized; redraw.
    Resize,
    /// Quit the TUI.
    Quit,
}
