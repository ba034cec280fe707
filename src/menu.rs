//! Console mode-selection menu.
//!
//! Runs as its own task: prints the numbered profile list, blocks on one
//! line of input and publishes a valid choice to the control loop through
//! [`ProfileSelector`].  It never touches the bus or the heater.

use core::fmt;
use std::io::{self, BufRead, Write};

use log::warn;

use crate::app::selection::ProfileSelector;
use crate::control::Profile;

/// Large enough for the header, four profile lines and the prompt.
const MENU_CAPACITY: usize = 192;

/// Pause before the console is polled again after it ran dry.
pub const MENU_REPROMPT_MS: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuError {
    /// Input was not an integer.
    NotANumber,
    /// Integer outside the listed menu numbers.
    OutOfRange(i64),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "not a number"),
            Self::OutOfRange(n) => write!(f, "{n} is not a menu entry"),
        }
    }
}

/// Write the menu and prompt to `out`.
pub fn render_menu(out: &mut impl fmt::Write) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "Available drying modes:")?;
    for profile in Profile::SELECTABLE {
        if let Some(n) = profile.menu_number() {
            writeln!(out, "  {}. {} ({:.1}\u{00b0}C)", n, profile, profile.target_c())?;
        }
    }
    write!(out, "Select mode (1-{}): ", Profile::SELECTABLE.len())
}

/// Parse one line of operator input.
pub fn parse_selection(line: &str) -> Result<Profile, MenuError> {
    let n: i64 = line.trim().parse().map_err(|_| MenuError::NotANumber)?;
    Profile::from_menu_number(n).ok_or(MenuError::OutOfRange(n))
}

/// Console state that survives between reads.
///
/// A line typed slowly on a non-blocking console arrives in pieces; the
/// partial text is kept here until its newline shows up.
#[derive(Debug, Default)]
pub struct MenuSession {
    line: String,
    prompted: bool,
}

impl MenuSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the menu until `input` reaches end-of-file or has nothing
    /// more to read.  Call again later to resume the same entry.
    ///
    /// Invalid input is logged and leaves the previous selection in place.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
        selector: &ProfileSelector,
    ) -> io::Result<()> {
        let mut menu: heapless::String<MENU_CAPACITY> = heapless::String::new();
        render_menu(&mut menu).map_err(|_| io::Error::other("menu text exceeds buffer"))?;

        loop {
            if !self.prompted {
                output.write_all(menu.as_bytes())?;
                output.flush()?;
                self.prompted = true;
            }

            // `read_line` keeps already-consumed bytes in `self.line` on error.
            match input.read_line(&mut self.line) {
                Ok(0) => return Ok(()),
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(()),
                Err(e) => return Err(e),
            }
            if !self.line.ends_with('\n') {
                // Unterminated text at end-of-file; wait for the rest.
                return Ok(());
            }

            match parse_selection(&self.line) {
                Ok(profile) => selector.publish(profile),
                Err(e) => warn!("Invalid selection: {}", e),
            }
            self.line.clear();
            self.prompted = false;
        }
    }
}

/// Serve the menu once over a fresh session.
pub fn run_menu<R: BufRead, W: Write>(
    input: R,
    output: W,
    selector: &ProfileSelector,
) -> io::Result<()> {
    MenuSession::new().run(input, output, selector)
}
