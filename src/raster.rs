//! Binary scatter raster and digital line drawing.
//!
//! One [`BitRaster`] is populated per dimension pair: every data point
//! contributes a straight line from the left edge at its first projected
//! value to the right edge at its second. The raster only records lit or
//! unlit, so overdraw is idempotent.

/// Owned fixed-size binary raster in row-major layout.
#[derive(Clone, Debug)]
pub struct BitRaster {
    /// Raster width in cells
    pub w: usize,
    /// Raster height in cells
    pub h: usize,
    /// Backing storage, one byte per cell, 0 or 1
    pub data: Vec<u8>,
}

impl BitRaster {
    /// Construct a cleared raster of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![0; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    #[inline]
    /// Whether the cell at (x, y) is lit.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.data[self.idx(x, y)] != 0
    }

    #[inline]
    /// Light the cell at (x, y). Already-lit cells are unchanged.
    pub fn set(&mut self, x: usize, y: usize) {
        let i = self.idx(x, y);
        self.data[i] = 1;
    }

    /// Reset every cell to unlit, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Number of lit cells.
    pub fn lit(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Marks every cell the ideal segment (x0,y0)-(x1,y1) passes through.
    ///
    /// Integer Bresenham with symmetric error accumulation; no cell is
    /// skipped regardless of slope sign or steepness. Endpoints must lie
    /// inside the raster. Terminates in O(max(|dx|, |dy|)) steps.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set(x as usize, y as usize);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > dy {
                err += dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }
}

/// Scales a projected coordinate by `magnification`, truncates toward zero
/// and clamps into the raster. A value landing exactly on the edge size maps
/// to `edge - 1`.
#[inline]
pub fn scaled_row(value: f64, magnification: f64, edge: usize) -> i32 {
    let row = (magnification * value) as i64;
    row.clamp(0, edge as i64 - 1) as i32
}
