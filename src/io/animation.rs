//! Animated terminal view of a running search

use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use crate::algorithm::events::{SearchEvent, SearchObserver};
use crate::io::error::{Result, terminal_error};
use crate::io::render::Appearance;
use crate::spatial::grid::Grid;

/// Foreground and background colours for an appearance
const fn palette(look: Appearance) -> (Color, Color) {
    match look {
        Appearance::Terrain(_) => (Color::White, Color::Black),
        Appearance::Wall => (Color::Blue, Color::Blue),
        Appearance::Visited => (Color::Red, Color::Black),
        Appearance::Frontier => (Color::Cyan, Color::Black),
        Appearance::Path | Appearance::Start => (Color::Green, Color::Black),
        Appearance::Goal => (Color::Yellow, Color::Black),
    }
}

/// Redraws the whole grid after every search event
///
/// Pacing is a fixed sleep per frame; a zero interval draws as fast as
/// the terminal accepts output.
pub struct TerminalAnimator<W: Write = Stdout> {
    out: W,
    interval: Duration,
    active: bool,
}

impl TerminalAnimator<Stdout> {
    /// Animator drawing to standard output, pausing `interval_us` microseconds per frame
    pub fn stdout(interval_us: u64) -> Self {
        Self::new(io::stdout(), Duration::from_micros(interval_us))
    }
}

impl<W: Write> TerminalAnimator<W> {
    /// Animator drawing to any writer
    pub const fn new(out: W, interval: Duration) -> Self {
        Self {
            out,
            interval,
            active: false,
        }
    }

    /// Pause between frames
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Switch to the alternate screen and hide the cursor
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal rejects the commands
    pub fn start(&mut self) -> Result<()> {
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
        .map_err(terminal_error)?;
        self.active = true;
        Ok(())
    }

    /// Draw the grid interior once, then sleep for the interval
    ///
    /// # Errors
    ///
    /// Returns an error if writing to the terminal fails
    pub fn draw(&mut self, grid: &Grid) -> Result<()> {
        self.queue_frame(grid).map_err(terminal_error)?;
        self.out.flush().map_err(terminal_error)?;
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        Ok(())
    }

    /// Restore the terminal, optionally after waiting for a key press
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or screen switching fails
    pub fn finish(&mut self, wait_for_key: bool) -> Result<()> {
        if wait_for_key {
            terminal::enable_raw_mode().map_err(terminal_error)?;
            let waited = wait_for_key_press();
            terminal::disable_raw_mode().map_err(terminal_error)?;
            waited.map_err(terminal_error)?;
        }
        self.leave().map_err(terminal_error)
    }

    /// Consume the animator and return its writer
    pub fn into_inner(mut self) -> W
    where
        W: Default,
    {
        self.active = false;
        std::mem::take(&mut self.out)
    }

    fn leave(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            execute!(self.out, ResetColor, cursor::Show, terminal::LeaveAlternateScreen)?;
        }
        Ok(())
    }

    fn queue_frame(&mut self, grid: &Grid) -> io::Result<()> {
        let rows = grid.height().saturating_sub(1);
        let cols = grid.width().saturating_sub(1);
        for y in 1..rows {
            let line = u16::try_from(y - 1).unwrap_or(u16::MAX);
            queue!(self.out, cursor::MoveTo(0, line))?;
            for x in 1..cols {
                let Some(cell) = grid.cell_at(x, y) else {
                    continue;
                };
                let look = Appearance::of(cell);
                let (fg, bg) = palette(look);
                let emphasised = !matches!(look, Appearance::Terrain(_) | Appearance::Wall);

                queue!(self.out, SetForegroundColor(fg), SetBackgroundColor(bg))?;
                if emphasised {
                    queue!(self.out, SetAttribute(Attribute::Bold))?;
                }
                queue!(self.out, Print(look.glyph(cell.glyph)))?;
                if emphasised {
                    queue!(self.out, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
        }
        let below = u16::try_from(rows).unwrap_or(u16::MAX);
        queue!(self.out, ResetColor, cursor::MoveTo(0, below))
    }
}

fn wait_for_key_press() -> io::Result<()> {
    loop {
        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

impl<W: Write> SearchObserver for TerminalAnimator<W> {
    fn on_event(&mut self, grid: &Grid, _event: SearchEvent) -> Result<()> {
        self.draw(grid)
    }
}

impl<W: Write> Drop for TerminalAnimator<W> {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}
