use crate::definitions::display;

/// The graphics of the Chip 8 are black and white and the screen has a total of `2048` pixels
/// `(64 x 32)`. Every row is stored as the bits of a single `u64`, the left most
/// pixel being the most significant bit.
///
/// All coordinates wrap around the edges, so writing never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    rows: [u64; display::HEIGHT],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self {
            rows: [0; display::HEIGHT],
        }
    }
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The amount of pixel columns.
    pub fn width(&self) -> usize {
        display::WIDTH
    }

    /// The amount of pixel rows.
    pub fn height(&self) -> usize {
        display::HEIGHT
    }

    #[inline]
    fn mask(x: usize) -> u64 {
        1 << (display::WIDTH - 1 - x % display::WIDTH)
    }

    /// Will reset every pixel.
    pub fn clear(&mut self) {
        self.rows = [0; display::HEIGHT];
    }

    /// Will flip the pixel at the wrapped coordinates and return the state
    /// the pixel had before the flip.
    pub fn toggle_pixel(&mut self, x: usize, y: usize) -> bool {
        let row = &mut self.rows[y % display::HEIGHT];
        let mask = Self::mask(x);
        let was_set = (*row & mask) == mask;
        *row ^= mask;
        was_set
    }

    /// Will return if the pixel at the wrapped coordinates is set.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        let mask = Self::mask(x);
        (self.rows[y % display::HEIGHT] & mask) == mask
    }

    /// Will return the raw rows.
    pub fn rows(&self) -> &[u64] {
        &self.rows[..]
    }

    /// Will return an iterator over the pixels of the given row, left to right.
    pub fn row(&self, y: usize) -> impl Iterator<Item = bool> + '_ {
        (0..display::WIDTH).map(move |x| self.is_set(x, y))
    }

    /// Will return if any pixel is set.
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&row| row == 0)
    }
}
