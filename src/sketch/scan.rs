//! Serpentine scan order of the sprite grid.
//!
//! Rows are walked bottom to top. A row whose index is even runs right to
//! left, an odd row runs left to right. Descriptor cell `k` belongs to the
//! `k`-th position of this walk, not to raster position `k`.

/// Iterator over `(column, row)` grid positions in descriptor order.
#[derive(Debug, Clone)]
pub struct ScanOrder {
    width: usize,
    height: usize,
    /// Row currently being walked; `None` once finished.
    row: Option<usize>,
    /// Step within the current row (0..width).
    step: usize,
}

/// Walk a `width` x `height` grid in serpentine order.
pub fn scan_order(width: usize, height: usize) -> ScanOrder {
    ScanOrder {
        width,
        height,
        row: if width == 0 { None } else { height.checked_sub(1) },
        step: 0,
    }
}

impl Iterator for ScanOrder {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let row = self.row?;
        let column = if row % 2 == 0 {
            self.width - 1 - self.step
        } else {
            self.step
        };

        self.step += 1;
        if self.step == self.width {
            self.step = 0;
            self.row = row.checked_sub(1);
        }
        Some((column, row))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.row {
            Some(row) => row * self.width + (self.width - self.step),
            None => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ScanOrder {}

/// Position in descriptor order of grid cell `(column, row)`.
pub fn scan_index(width: usize, height: usize, column: usize, row: usize) -> Option<usize> {
    if column >= width || row >= height {
        return None;
    }
    let rows_before = height - 1 - row;
    let step = if row % 2 == 0 {
        width - 1 - column
    } else {
        column
    };
    Some(rows_before * width + step)
}
