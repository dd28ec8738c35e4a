//! TUI runner — main loop that wires everything together.
//!
//! Creates terminal, runs the TEA loop, restores the terminal on every
//! exit path. `ratatui::try_init` installs a panic hook that restores the
//! terminal too, so a panic inside a draw does not leave raw mode behind.
//! A frame is drawn only when the model asks for one, i.e. after a
//! selection change, scroll, menu movement or resize.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{debug, info, warn};

use super::app::ViewerApp;
use super::event::TuiMessage;
use super::layout;

/// How long one blocking poll waits for terminal input.
const INPUT_POLL: Duration = Duration::from_millis(250);

/// Translate a raw crossterm event into a message, if it matters.
pub fn translate(event: Event) -> Option<TuiMessage> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(TuiMessage::Input(key)),
        Event::Resize(..) => Some(TuiMessage::Resize),
        _ => None,
    }
}

/// Run the TUI main loop. Blocks until quit.
pub async fn run_tui(mut app: ViewerApp) -> anyhow::Result<()> {
    // Setup terminal; a partial setup (raw mode on, no alternate screen)
    // is undone before bailing out.
    let mut terminal = match ratatui::try_init() {
        Ok(terminal) => terminal,
        Err(e) => {
            ratatui::restore();
            return Err(e.into());
        }
    };

    info!(key = app.page.key, "viewer started");
    let result = event_loop(&mut terminal, &mut app).await;

    // Restore terminal unconditionally
    finish(result, ratatui::try_restore())
}

/// Combine the loop outcome with the terminal restore outcome. The loop
/// error wins: a failed restore after a failed loop is only logged.
pub fn finish(result: anyhow::Result<()>, restored: io::Result<()>) -> anyhow::Result<()> {
    match (result, restored) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(e)) => Err(anyhow::Error::new(e).context("failed to restore terminal")),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore_err)) => {
            warn!(error = %restore_err, "failed to restore terminal");
            Err(e)
        }
    }
}

async fn event_loop(terminal: &mut DefaultTerminal, app: &mut ViewerApp) -> anyhow::Result<()> {
    loop {
        if app.needs_redraw {
            terminal.draw(|f| layout::draw(f, app))?;
            app.needs_redraw = false;
        }

        // Poll crossterm events off the async thread
        let polled = tokio::task::spawn_blocking(|| -> io::Result<Option<Event>> {
            if event::poll(INPUT_POLL)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
        .await??;

        if let Some(msg) = polled.and_then(translate) {
            debug!(?msg, "input");
            app.update(msg)?;
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
