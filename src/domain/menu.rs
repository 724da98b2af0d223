/// Menu cells and the selection controller.
///
/// A `Selector` is one highlightable menu option: a rectangular region of
/// the screen backed by its own tile buffer. Selection state is shown by
/// repainting the whole backing buffer to one of two color themes; glyphs
/// are never altered. The `MenuController` keeps an ordered list of
/// selectors with a single current index and cycles it on directional
/// input, wrapping in both directions.

use super::tilebuf::{Rgba, TileBuffer};

/// Foreground/background pair applied by `set_selected`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColorTheme {
    pub fg: Rgba,
    pub bg: Rgba,
}

pub const SELECTED_THEME: ColorTheme = ColorTheme {
    fg: Rgba::GREEN,
    bg: Rgba::DARK_GREEN,
};

pub const UNSELECTED_THEME: ColorTheme = ColorTheme {
    fg: Rgba::WHITE,
    bg: Rgba::BLACK,
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MenuDir {
    Next,
    Previous,
}

#[derive(Clone, Debug)]
pub struct Selector {
    /// Screen offset of the backing buffer's top-left cell.
    pub x: usize,
    pub y: usize,
    pub selected: bool,
    pub selected_theme: ColorTheme,
    pub unselected_theme: ColorTheme,
    buf: TileBuffer,
}

impl Selector {
    /// Build an unselected cell from a pre-drawn backing buffer.
    pub fn new(x: usize, y: usize, buf: TileBuffer) -> Self {
        let mut cell = Selector {
            x,
            y,
            selected: false,
            selected_theme: SELECTED_THEME,
            unselected_theme: UNSELECTED_THEME,
            buf,
        };
        cell.set_selected(false);
        cell
    }

    /// Repaint the entire backing buffer to the matching theme.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        let theme = if selected {
            self.selected_theme
        } else {
            self.unselected_theme
        };
        self.buf.fill_fg(theme.fg);
        self.buf.fill_bg(theme.bg);
    }

    pub fn buffer(&self) -> &TileBuffer {
        &self.buf
    }
}

#[derive(Clone, Debug, Default)]
pub struct MenuController {
    cells: Vec<Selector>,
    index: usize,
}

impl MenuController {
    pub fn new() -> Self {
        MenuController {
            cells: Vec::new(),
            index: 0,
        }
    }

    /// Append a cell. The first cell added becomes the selection.
    pub fn add_cell(&mut self, cell: Selector) {
        self.cells.push(cell);
        if self.cells.len() == 1 {
            self.cells[0].set_selected(true);
        }
    }

    /// Move the selection one step, wrapping at both ends.
    /// Calling this on an empty controller is a caller bug.
    pub fn process_input(&mut self, dir: MenuDir) {
        assert!(
            !self.cells.is_empty(),
            "MenuController::process_input on a menu with no cells"
        );
        let n = self.cells.len();
        self.cells[self.index].set_selected(false);
        self.index = match dir {
            MenuDir::Next => (self.index + 1) % n,
            MenuDir::Previous => (self.index + n - 1) % n,
        };
        self.cells[self.index].set_selected(true);
    }

    pub fn selected_index(&self) -> usize {
        self.index
    }

    pub fn cells(&self) -> &[Selector] {
        &self.cells
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
