//! RAII guard for raw terminal mode

use crossterm::{
    cursor::Show,
    event::DisableMouseCapture,
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io::{self, stdout};

/// Restores the terminal when dropped: leaves raw mode and the alternate
/// screen, stops mouse capture and shows the cursor again. Runs on panic
/// unwinding too.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, Show)
}
