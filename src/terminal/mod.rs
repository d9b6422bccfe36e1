//! Terminal ownership and frame drawing.
//!
//! [`Tui`] owns the ratatui terminal, redraws only when the frame is
//! stale and gives the terminal back when dropped. A panic hook does the
//! same on the panic path.
//!
//! ```no_run
//! use painel::terminal::{install_panic_hook, Tui};
//!
//! fn main() -> color_eyre::Result<()> {
//!     install_panic_hook();
//!     let mut tui = Tui::enter()?;
//!     // ... draw documents ...
//!     tui.restore();
//!     Ok(())
//! }
//! ```

use std::io::{self, Stdout, Write};
use std::panic;
use std::time::Instant;

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use crate::notifications::Toast;
use crate::ui;
use crate::view::ViewDocument;

/// Raw mode, alternate screen, bracketed paste (a paste arrives as one
/// event), hidden cursor.
fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste, Hide)
}

/// Undo [`enter_tui_mode`]. Errors are ignored; this also runs mid-panic.
fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore the terminal before the panic message prints, then chain to
/// the previous hook (color-eyre's report).
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        leave_tui_mode(&mut io::stdout());
        tracing::error!("panic: {}", info);
        previous(info);
    }));
}

pub struct Tui<B: Backend> {
    terminal: Terminal<B>,
    /// Whether the real terminal was switched and must be restored.
    owns_tty: bool,
    stale: bool,
    /// `shown_at` of the toast in the last frame
    drawn_toast: Option<Instant>,
}

impl Tui<CrosstermBackend<Stdout>> {
    /// Take over stdout.
    pub fn enter() -> color_eyre::Result<Self> {
        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(err.into());
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                leave_tui_mode(&mut io::stdout());
                return Err(err.into());
            }
        };
        // From here on Drop restores
        let mut tui = Self {
            terminal,
            owns_tty: true,
            stale: true,
            drawn_toast: None,
        };
        tui.terminal.clear()?;
        Ok(tui)
    }
}

impl<B: Backend> Tui<B> {
    /// Draw on `backend` without touching the real terminal.
    pub fn with_backend(backend: B) -> Result<Self, B::Error> {
        Ok(Self {
            terminal: Terminal::new(backend)?,
            owns_tty: false,
            stale: true,
            drawn_toast: None,
        })
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Force the next [`draw_if_stale`](Self::draw_if_stale) to draw.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Draw when the frame is stale: after an invalidation, or when the
    /// toast appeared, was replaced or expired. Returns whether it drew.
    ///
    /// `document` is only called when drawing.
    pub fn draw_if_stale(
        &mut self,
        document: impl FnOnce() -> ViewDocument,
        toast: Option<&Toast>,
    ) -> Result<bool, B::Error> {
        let stamp = toast.map(|t| t.shown_at);
        if !self.stale && stamp == self.drawn_toast {
            return Ok(false);
        }
        let document = document();
        self.terminal
            .draw(|frame| ui::render(frame, &document, toast))?;
        self.stale = false;
        self.drawn_toast = stamp;
        Ok(true)
    }

    /// Give the terminal back now. Later calls and the drop do nothing.
    pub fn restore(&mut self) {
        if std::mem::take(&mut self.owns_tty) {
            leave_tui_mode(&mut io::stdout());
        }
    }
}

impl<B: Backend> Drop for Tui<B> {
    fn drop(&mut self) {
        self.restore();
    }
}
