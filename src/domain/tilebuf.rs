/// Tile buffer: a fixed-size grid of character+color cells, one frame's
/// worth of terminal-style display.
///
/// All drawing in the game goes through this type: wall frames, text
/// labels, menu repaints, and the final scene composite. Writes outside
/// the grid clip; reads outside the grid return the blank cell.

/// Console dimensions in tiles, fixed for the application lifetime.
pub const GRID_W: usize = 16;
pub const GRID_H: usize = 16;

/// 4-component color. Alpha is carried through but never blended;
/// compositing is strictly painter's-algorithm overwrite.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const GREEN: Rgba = Rgba::new(64, 255, 64, 255);
    pub const DARK_GREEN: Rgba = Rgba::new(0, 64, 0, 255);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgba,
    pub bg: Rgba,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        ch: ' ',
        fg: Rgba::WHITE,
        bg: Rgba::BLACK,
    };

    pub const fn new(ch: char, fg: Rgba, bg: Rgba) -> Self {
        Cell { ch, fg, bg }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::BLANK
    }
}

/// Border glyph set for `draw_wall`: one glyph per border position.
/// Interior cells are always blank space (walls are hollow).
#[derive(Clone, Copy, Debug)]
pub struct WallGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub top: char,
    pub bottom: char,
    pub left: char,
    pub right: char,
}

/// Double-line frame with tee edges, as on the title screen.
pub const THICK_WALL: WallGlyphs = WallGlyphs {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    top: '╦',
    bottom: '╩',
    left: '╠',
    right: '╣',
};

/// Single-line frame, used for menu option boxes.
pub const THIN_WALL: WallGlyphs = WallGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    top: '─',
    bottom: '─',
    left: '│',
    right: '│',
};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WallStyle {
    Thick,
    Thin,
}

impl WallStyle {
    fn glyphs(self) -> &'static WallGlyphs {
        match self {
            WallStyle::Thick => &THICK_WALL,
            WallStyle::Thin => &THIN_WALL,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TileBuffer {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl TileBuffer {
    /// The full-console buffer, GRID_W × GRID_H.
    pub fn new() -> Self {
        Self::with_size(GRID_W, GRID_H)
    }

    /// A sub-grid buffer (menu cells are smaller than the console).
    pub fn with_size(width: usize, height: usize) -> Self {
        TileBuffer {
            width,
            height,
            cells: vec![Cell::BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if self.in_bounds(x, y) {
            self.cells[y * self.width + x] = cell;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Cell {
        if self.in_bounds(x, y) {
            self.cells[y * self.width + x]
        } else {
            Cell::BLANK
        }
    }

    pub fn set_char(&mut self, x: usize, y: usize, ch: char) {
        if self.in_bounds(x, y) {
            self.cells[y * self.width + x].ch = ch;
        }
    }

    pub fn char_at(&self, x: usize, y: usize) -> char {
        self.get(x, y).ch
    }

    #[allow(dead_code)]
    pub fn set_fg(&mut self, x: usize, y: usize, fg: Rgba) {
        if self.in_bounds(x, y) {
            self.cells[y * self.width + x].fg = fg;
        }
    }

    #[allow(dead_code)]
    pub fn fg_at(&self, x: usize, y: usize) -> Rgba {
        self.get(x, y).fg
    }

    #[allow(dead_code)]
    pub fn set_bg(&mut self, x: usize, y: usize, bg: Rgba) {
        if self.in_bounds(x, y) {
            self.cells[y * self.width + x].bg = bg;
        }
    }

    #[allow(dead_code)]
    pub fn bg_at(&self, x: usize, y: usize) -> Rgba {
        self.get(x, y).bg
    }

    /// Repaint every cell's foreground color. Glyphs untouched.
    pub fn fill_fg(&mut self, fg: Rgba) {
        for cell in &mut self.cells {
            cell.fg = fg;
        }
    }

    /// Repaint every cell's background color. Glyphs untouched.
    pub fn fill_bg(&mut self, bg: Rgba) {
        for cell in &mut self.cells {
            cell.bg = bg;
        }
    }

    /// Draw a hollow rectangular wall frame.
    ///
    /// Each cell of the rectangle is classified against the rectangle's
    /// extremes: both axes extreme → corner, one axis extreme → edge,
    /// neither → interior. Corners and edges take the style's glyph for
    /// that position; interior cells become blank space. Only characters
    /// are written; colors are left as they were.
    ///
    /// Degenerate rectangles (width or height < 2) are ignored.
    pub fn draw_wall(&mut self, x: usize, y: usize, w: usize, h: usize, style: WallStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let g = style.glyphs();
        let (x_max, y_max) = (x + w - 1, y + h - 1);

        for cy in y..=y_max {
            for cx in x..=x_max {
                let ch = match (cx == x, cx == x_max, cy == y, cy == y_max) {
                    (true, _, true, _) => g.top_left,
                    (_, true, true, _) => g.top_right,
                    (true, _, _, true) => g.bottom_left,
                    (_, true, _, true) => g.bottom_right,
                    (_, _, true, _) => g.top,
                    (_, _, _, true) => g.bottom,
                    (true, _, _, _) => g.left,
                    (_, true, _, _) => g.right,
                    _ => ' ',
                };
                self.set_char(cx, cy, ch);
            }
        }
    }

    /// Print a string horizontally starting at (x, y), one char per cell.
    /// No wrapping; characters past the right edge clip.
    pub fn print(&mut self, x: usize, y: usize, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x + i;
            if cx >= self.width {
                break;
            }
            self.set_char(cx, y, ch);
        }
    }

    /// Print a string vertically starting at (x, y), one char per cell.
    /// No wrapping; characters past the bottom edge clip.
    #[allow(dead_code)]
    pub fn print_v(&mut self, x: usize, y: usize, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            let cy = y + i;
            if cy >= self.height {
                break;
            }
            self.set_char(x, cy, ch);
        }
    }

    /// Copy every cell of `src` onto this buffer at the given offset.
    /// Painter's algorithm: the source fully replaces what was there.
    /// Cells falling outside this buffer clip.
    pub fn blit(&mut self, src: &TileBuffer, dst_x: usize, dst_y: usize) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                self.set(dst_x + sx, dst_y + sy, src.get(sx, sy));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn border_chars(style: WallStyle) -> Vec<char> {
        let g = style.glyphs();
        vec![
            g.top_left,
            g.top_right,
            g.bottom_left,
            g.bottom_right,
            g.top,
            g.bottom,
            g.left,
            g.right,
        ]
    }

    /// Corners, edges, and blank interior for a general rectangle.
    #[test]
    fn wall_classifies_every_cell() {
        for style in [WallStyle::Thick, WallStyle::Thin] {
            let g = style.glyphs();
            let mut buf = TileBuffer::new();
            buf.draw_wall(2, 3, 6, 5, style);
            let (x_max, y_max) = (2 + 6 - 1, 3 + 5 - 1);

            assert_eq!(buf.char_at(2, 3), g.top_left);
            assert_eq!(buf.char_at(x_max, 3), g.top_right);
            assert_eq!(buf.char_at(2, y_max), g.bottom_left);
            assert_eq!(buf.char_at(x_max, y_max), g.bottom_right);

            for cx in 3..x_max {
                assert_eq!(buf.char_at(cx, 3), g.top);
                assert_eq!(buf.char_at(cx, y_max), g.bottom);
            }
            for cy in 4..y_max {
                assert_eq!(buf.char_at(2, cy), g.left);
                assert_eq!(buf.char_at(x_max, cy), g.right);
            }
            for cy in 4..y_max {
                for cx in 3..x_max {
                    assert_eq!(buf.char_at(cx, cy), ' ');
                }
            }
        }
    }

    /// A 2×2 rectangle is all corners — exactly four corner glyphs.
    #[test]
    fn wall_minimal_rect_is_four_corners() {
        let g = WallStyle::Thick.glyphs();
        let mut buf = TileBuffer::new();
        buf.draw_wall(0, 0, 2, 2, WallStyle::Thick);
        assert_eq!(buf.char_at(0, 0), g.top_left);
        assert_eq!(buf.char_at(1, 0), g.top_right);
        assert_eq!(buf.char_at(0, 1), g.bottom_left);
        assert_eq!(buf.char_at(1, 1), g.bottom_right);
    }

    #[test]
    fn wall_corner_count_is_exactly_four() {
        let mut buf = TileBuffer::new();
        buf.draw_wall(0, 0, GRID_W, GRID_H, WallStyle::Thick);
        let g = WallStyle::Thick.glyphs();
        let corners = [g.top_left, g.top_right, g.bottom_left, g.bottom_right];
        let mut count = 0;
        for y in 0..GRID_H {
            for x in 0..GRID_W {
                if corners.contains(&buf.char_at(x, y)) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 4);
    }

    #[test]
    fn wall_degenerate_rect_is_noop() {
        let mut buf = TileBuffer::new();
        buf.draw_wall(0, 0, 1, 5, WallStyle::Thin);
        buf.draw_wall(0, 0, 5, 0, WallStyle::Thin);
        for y in 0..GRID_H {
            for x in 0..GRID_W {
                assert_eq!(buf.char_at(x, y), ' ');
            }
        }
    }

    #[test]
    fn wall_leaves_colors_untouched() {
        let mut buf = TileBuffer::new();
        buf.fill_fg(Rgba::GREEN);
        buf.draw_wall(0, 0, 4, 4, WallStyle::Thick);
        assert_eq!(buf.fg_at(0, 0), Rgba::GREEN);
        let borders = border_chars(WallStyle::Thick);
        assert!(borders.contains(&buf.char_at(0, 0)));
    }

    #[test]
    fn print_horizontal_and_vertical() {
        let mut buf = TileBuffer::new();
        buf.print(4, 2, "FORTRESS");
        assert_eq!(buf.char_at(4, 2), 'F');
        assert_eq!(buf.char_at(11, 2), 'S');

        buf.print_v(0, 0, "AB");
        assert_eq!(buf.char_at(0, 0), 'A');
        assert_eq!(buf.char_at(0, 1), 'B');
    }

    #[test]
    fn print_clips_at_edges() {
        let mut buf = TileBuffer::new();
        buf.print(14, 0, "ABCD"); // only A, B fit
        assert_eq!(buf.char_at(14, 0), 'A');
        assert_eq!(buf.char_at(15, 0), 'B');

        buf.print_v(0, 15, "XY"); // only X fits
        assert_eq!(buf.char_at(0, 15), 'X');
    }

    #[test]
    fn blit_overwrites_cell_by_cell() {
        let mut dst = TileBuffer::new();
        dst.print(0, 0, "....");

        let mut src = TileBuffer::with_size(2, 1);
        src.set(0, 0, Cell::new('#', Rgba::GREEN, Rgba::DARK_GREEN));
        src.set(1, 0, Cell::new('#', Rgba::GREEN, Rgba::DARK_GREEN));

        dst.blit(&src, 1, 0);
        assert_eq!(dst.char_at(0, 0), '.');
        assert_eq!(dst.char_at(1, 0), '#');
        assert_eq!(dst.char_at(2, 0), '#');
        assert_eq!(dst.char_at(3, 0), '.');
        assert_eq!(dst.fg_at(1, 0), Rgba::GREEN);
    }

    #[test]
    fn blit_clips_outside_destination() {
        let mut dst = TileBuffer::new();
        let mut src = TileBuffer::with_size(3, 1);
        src.print(0, 0, "ABC");
        dst.blit(&src, GRID_W - 1, 0); // only 'A' lands
        assert_eq!(dst.char_at(GRID_W - 1, 0), 'A');
    }
}
