/// Presentation layer: double-buffered, diff-based terminal renderer.
///
/// `present` takes a composed scene frame, compares it cell by cell with
/// the previously presented frame, and emits terminal commands only for
/// cells that changed. Commands are batched with `queue!` and flushed
/// once per frame, which eliminates flicker from full redraws.

use std::io::{self, BufWriter, Write};

use crossterm::{
    cursor::{self, MoveTo},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};

use crate::domain::tilebuf::{Cell, Rgba, TileBuffer};

/// Sentinel cell used to invalidate the back buffer.
/// Different from any real cell, so every position will be diff'd.
const INVALID: Cell = Cell::new('\0', Rgba::new(255, 0, 255, 255), Rgba::new(255, 0, 255, 255));

/// The terminal has no alpha channel; the component is dropped here.
fn to_color(c: Rgba) -> Color {
    Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

fn invalid_buffer() -> TileBuffer {
    let mut buf = TileBuffer::new();
    for y in 0..buf.height() {
        for x in 0..buf.width() {
            buf.set(x, y, INVALID);
        }
    }
    buf
}

pub struct Renderer {
    writer: BufWriter<io::Stdout>,
    back: TileBuffer,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            writer: BufWriter::with_capacity(16384, io::stdout()),
            // Back starts invalid: the first present repaints every cell.
            back: invalid_buffer(),
        }
    }

    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.writer,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            Clear(ClearType::All)
        )
    }

    pub fn cleanup(&mut self) -> io::Result<()> {
        execute!(
            self.writer,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()
    }

    /// Diff `frame` against the last presented frame and flush the
    /// changed cells. One grid cell maps to one terminal column.
    pub fn present(&mut self, frame: &TileBuffer) -> io::Result<()> {
        let mut last_fg: Option<Rgba> = None;
        let mut last_bg: Option<Rgba> = None;
        let mut need_move = true;

        for y in 0..frame.height() {
            for x in 0..frame.width() {
                let cell = frame.get(x, y);
                if cell == self.back.get(x, y) {
                    need_move = true;
                    continue;
                }

                if need_move {
                    queue!(self.writer, MoveTo(x as u16, y as u16))?;
                    need_move = false;
                }
                if last_fg != Some(cell.fg) {
                    queue!(self.writer, SetForegroundColor(to_color(cell.fg)))?;
                    last_fg = Some(cell.fg);
                }
                if last_bg != Some(cell.bg) {
                    queue!(self.writer, SetBackgroundColor(to_color(cell.bg)))?;
                    last_bg = Some(cell.bg);
                }
                queue!(self.writer, Print(cell.ch))?;
            }
            need_move = true;
        }

        self.writer.flush()?;
        self.back.clone_from(frame);
        Ok(())
    }
}
