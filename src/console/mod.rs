//! Terminal input and screen control
//!
//! Line input runs through raw-mode key events so an interrupt (Ctrl+C or
//! Ctrl+D) during the blocking read is seen as a value instead of killing
//! the process mid-frame.

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};

/// Result of one blocking line read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    /// A full line, without the trailing newline
    Line(String),
    /// The player interrupted the game during input
    Interrupted,
}

/// Clear the visible screen and move the cursor home
pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

/// Prompt for and read one line of input
///
/// Raw mode is only active while the line is being typed and is always
/// restored before returning, including on interrupt.
pub fn read_guess(prompt: &str) -> io::Result<ReadOutcome> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}: ")?;
    stdout.flush()?;

    enable_raw_mode()?;
    let outcome = read_line_events(&mut stdout);
    disable_raw_mode()?;
    writeln!(stdout)?;

    outcome
}

/// Collect key presses into a line until Enter or an interrupt
fn read_line_events(stdout: &mut io::Stdout) -> io::Result<ReadOutcome> {
    let mut buffer = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char(c)
                if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(c, 'c' | 'd') =>
            {
                return Ok(ReadOutcome::Interrupted);
            }
            KeyCode::Enter => return Ok(ReadOutcome::Line(buffer)),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(c);
                // Raw mode does not echo
                write!(stdout, "{c}")?;
                stdout.flush()?;
            }
            KeyCode::Backspace => {
                if buffer.pop().is_some() {
                    write!(stdout, "\u{8} \u{8}")?;
                    stdout.flush()?;
                }
            }
            _ => {}
        }
    }
}
