#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Direction {
    DiagonalUp,
    DiagonalDown,
}

/// Visits a rectangular matrix in diagonal zig-zag order, starting at the
/// top-left corner and alternating sweep direction at each edge.
pub struct ZigZag<'a, T> {
    matrix: &'a [Vec<T>],
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    direction: Direction,
    remaining: usize,
}

impl<'a, T> ZigZag<'a, T> {
    /// Panics unless every row has the same length.
    pub fn new(matrix: &'a [Vec<T>]) -> Self {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        assert!(
            matrix.iter().all(|row| row.len() == cols),
            "matrix rows must all have the same length"
        );

        Self {
            matrix,
            rows,
            cols,
            row: 0,
            col: 0,
            direction: Direction::DiagonalDown,
            remaining: rows * cols,
        }
    }

    fn advance(&mut self) {
        match self.direction {
            Direction::DiagonalDown => {
                if self.row + 1 < self.rows && self.col > 0 {
                    self.row += 1;
                    self.col -= 1;
                } else {
                    self.direction = Direction::DiagonalUp;
                    if self.row + 1 < self.rows {
                        self.row += 1;
                    } else {
                        self.col += 1;
                    }
                }
            }
            Direction::DiagonalUp => {
                if self.row > 0 && self.col + 1 < self.cols {
                    self.row -= 1;
                    self.col += 1;
                } else {
                    self.direction = Direction::DiagonalDown;
                    if self.col + 1 < self.cols {
                        self.col += 1;
                    } else {
                        self.row += 1;
                    }
                }
            }
        }
    }
}

impl<'a, T> Iterator for ZigZag<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let value = &self.matrix[self.row][self.col];
        self.remaining -= 1;
        if self.remaining > 0 {
            self.advance();
        }
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ZigZag<'_, T> {}

pub fn zig_zag_traverse<T: Clone>(matrix: &[Vec<T>]) -> Vec<T> {
    ZigZag::new(matrix).cloned().collect()
}
