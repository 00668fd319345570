use crate::Coord;
use crate::ScreenSize;
use crate::cell::Cell;
use crate::grid::CellGrid;

/// Hex values of braille dots
///
/// ```notrust
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// A pannable view of the world, rendered to braille characters.
///
/// Each terminal character cell holds a 2x4 block of world cells, so a single
/// screen of text shows eight times as many cells as there are characters.
pub struct Camera {
    /// The cell buffer, one flag per visible world cell
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the framebuffer, in world cells
    w: usize,

    /// Height of the framebuffer, in world cells
    h: usize,

    /// World `x` coordinate of the top left corner
    x: Coord,

    /// World `y` coordinate of the top left corner
    y: Coord,
}

impl Camera {
    /// Create a camera filling `cols x rows` terminal character cells.
    pub fn new(cols: ScreenSize, rows: ScreenSize) -> Self {
        let (w, h) = (cols as usize * 2, rows as usize * 4);

        let cb = vec![false; w * h];

        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // Let `w` and `h` refer to width and height of the cell buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer
        // (that is, not accounting for the trailing newlines expected at the end of each line).

        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        // Each braille character is 3 bytes, and newlines one byte. Since we need `bh` newlines,
        // this gives us a framebuffer of length `3 * (bw * bh) + bh`.

        let fb = String::with_capacity(3 * (bw * bh) + bh);

        let mut cam = Self {
            cb,
            fb,
            cp,
            w,
            h,
            x: 0,
            y: 0,
        };
        cam.flush_codepoints();

        cam
    }

    /// Width of the view, in world cells.
    pub fn width(&self) -> usize {
        self.w
    }

    /// Height of the view, in world cells.
    pub fn height(&self) -> usize {
        self.h
    }

    pub fn offset_x(&mut self, offset: Coord) {
        self.x += offset;
    }

    pub fn offset_y(&mut self, offset: Coord) {
        self.y += offset;
    }

    /// Move the view back to the origin.
    pub fn reset_view(&mut self) {
        self.x = 0;
        self.y = 0;
    }

    /// Resize the view to `cols x rows` terminal character cells, keeping the
    /// current pan.
    pub fn resize(&mut self, cols: ScreenSize, rows: ScreenSize) {
        let (x, y) = (self.x, self.y);

        *self = Self::new(cols, rows);

        self.x = x;
        self.y = y;
    }

    /// The world cell in the middle of the view.
    pub fn center(&self) -> Cell {
        Cell::new(
            self.x + (self.w / 2) as Coord,
            self.y + (self.h / 2) as Coord,
        )
    }

    /// The world cell under the terminal character at `(col, row)`.
    ///
    /// A character covers a 2x4 block of cells; this picks the block's top
    /// left, which is plenty precise for painting with the mouse.
    pub fn cell_at(&self, col: ScreenSize, row: ScreenSize) -> Cell {
        Cell::new(col as Coord * 2 + self.x, row as Coord * 4 + self.y)
    }

    /// Turn on the dot for every alive cell that falls inside the view.
    pub fn draw_cells(&mut self, grid: &CellGrid) {
        for &cell in grid.cells() {
            let x = cell.x - self.x;
            let y = cell.y - self.y;

            if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
                self.draw_pixel(x as usize, y as usize);
            }
        }
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Fundamentally, we have a framebuffer of every pixel on our screen, and we ask ourselves "Is
    /// this pixel on or off?".
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            let (x, y) = self.xy_to(n);
            let hex = Self::get_hex_value(x, y);

            if px {
                self.cp[(y / 4) * bw + (x / 2)] += hex;
            }
        }

        self.flush_codepoints();

        &self.fb
    }

    /// Rewrite the framebuffer string from the current codepoints.
    fn flush_codepoints(&mut self) {
        let bw = self.w.div_ceil(2);

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            self.fb.push(::std::char::from_u32(c).unwrap());
        }
        self.fb.push('\n');
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
