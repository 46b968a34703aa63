/// Visited cells over an N x N partition of the scratch surface, one bit per cell.
///
/// Cells are indexed row major. Bits are never cleared except by [`ScratchGrid::clear`],
/// so coverage only grows while a joke is on screen.
#[derive(Debug, Clone)]
pub struct ScratchGrid {
    size: usize,
    bit_map: Vec<u8>,
    visited: usize,
}

impl ScratchGrid {
    pub fn new(size: usize) -> Self {
        let cells = size * size;

        Self {
            size,
            bit_map: vec![0u8; cells.div_ceil(8)],
            visited: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cells(&self) -> usize {
        self.size * self.size
    }

    pub fn visited(&self) -> usize {
        self.visited
    }

    /// Cell under a point on a `width` x `height` surface. Points outside the
    /// surface, or a degenerate surface, map to nothing.
    pub fn cell_at(&self, x: f64, y: f64, width: f64, height: f64) -> Option<(usize, usize)> {
        if !(width > 0.0 && height > 0.0) {
            return None;
        }

        if !(0.0..=width).contains(&x) || !(0.0..=height).contains(&y) {
            return None;
        }

        // the far edge belongs to the last cell
        let column = ((x / width * self.size as f64) as usize).min(self.size - 1);
        let row = ((y / height * self.size as f64) as usize).min(self.size - 1);

        Some((column, row))
    }

    /// Marks a cell, returning whether it was new.
    pub fn mark(&mut self, column: usize, row: usize) -> bool {
        if column >= self.size || row >= self.size {
            return false;
        }

        let index = row * self.size + column;
        let (byte_index, bit_index) = (index / 8, index % 8);
        let mask = 1u8 << bit_index;

        if self.bit_map[byte_index] & mask != 0 {
            return false;
        }

        self.bit_map[byte_index] |= mask;
        self.visited += 1;

        true
    }

    pub fn is_marked(&self, column: usize, row: usize) -> bool {
        if column >= self.size || row >= self.size {
            return false;
        }

        let index = row * self.size + column;

        (self.bit_map[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Percent of cells visited, in `[0, 100]`.
    pub fn coverage(&self) -> f64 {
        if self.cells() == 0 {
            return 0.0;
        }

        100.0 * self.visited as f64 / self.cells() as f64
    }

    pub fn clear(&mut self) {
        self.bit_map.fill(0);
        self.visited = 0;
    }
}
