//! Bounding boxes of significant deposit

// crate modules
use crate::field::is_significant;

// external crates
use itertools::Itertools;
use ndarray::ArrayView2;

/// Inclusive row and column index bounds on a grid
///
/// Rows follow the latitude axis and columns the longitude axis.
///
/// ```rust
/// # use ashtools_field::BoundingBox;
/// # use ndarray::array;
/// let frame = array![
///     [0.0, 0.0, 0.0],
///     [0.0, 2.5, 0.0],
///     [0.0, 0.0, 0.4],
/// ];
///
/// let bounds = BoundingBox::from_frame(frame.view(), 0.0).unwrap();
/// assert_eq!((bounds.row_min, bounds.row_max), (1, 2));
/// assert_eq!((bounds.col_min, bounds.col_max), (1, 2));
///
/// // nothing above threshold means there is nothing to bound
/// assert_eq!(BoundingBox::from_frame(frame.view(), 5.0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// First row index
    pub row_min: usize,
    /// Last row index
    pub row_max: usize,
    /// First column index
    pub col_min: usize,
    /// Last column index
    pub col_max: usize,
}

impl BoundingBox {
    /// Smallest box around every cell strictly above `threshold`
    ///
    /// Returns `None` if no cell in the frame is significant.
    pub fn from_frame(frame: ArrayView2<f64>, threshold: f64) -> Option<Self> {
        let (rows, columns): (Vec<usize>, Vec<usize>) = frame
            .indexed_iter()
            .filter(|(_, value)| is_significant(**value, threshold))
            .map(|(index, _)| index)
            .unzip();

        let (row_min, row_max) = rows.into_iter().minmax().into_option()?;
        let (col_min, col_max) = columns.into_iter().minmax().into_option()?;

        Some(Self {
            row_min,
            row_max,
            col_min,
            col_max,
        })
    }

    /// Number of rows inside the box
    pub fn n_rows(&self) -> usize {
        self.row_max - self.row_min + 1
    }

    /// Number of columns inside the box
    pub fn n_columns(&self) -> usize {
        self.col_max - self.col_min + 1
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "rows {}..={}, columns {}..={}",
            self.row_min, self.row_max, self.col_min, self.col_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn single_cell() {
        let frame = array![[0.0, 0.0], [0.0, 5.0]];
        let bounds = BoundingBox::from_frame(frame.view(), 0.0).unwrap();
        assert_eq!(
            bounds,
            BoundingBox {
                row_min: 1,
                row_max: 1,
                col_min: 1,
                col_max: 1
            }
        );
        assert_eq!(bounds.n_rows(), 1);
        assert_eq!(bounds.n_columns(), 1);
    }

    #[test]
    fn threshold_is_exclusive() {
        let frame = array![[1.0, 2.0], [2.0, 1.0]];
        let bounds = BoundingBox::from_frame(frame.view(), 1.0).unwrap();
        assert_eq!((bounds.row_min, bounds.row_max), (0, 1));
        assert_eq!((bounds.col_min, bounds.col_max), (0, 1));

        assert_eq!(BoundingBox::from_frame(frame.view(), 2.0), None);
    }

    #[test]
    fn missing_cells_are_ignored() {
        let frame = array![[f64::NAN, 0.0, 0.0], [0.0, 0.0, 3.0]];
        let bounds = BoundingBox::from_frame(frame.view(), 0.0).unwrap();
        assert_eq!((bounds.row_min, bounds.row_max), (1, 1));
        assert_eq!((bounds.col_min, bounds.col_max), (2, 2));
    }

    #[test]
    fn empty_frame() {
        let frame = ndarray::Array2::<f64>::zeros((0, 4));
        assert_eq!(BoundingBox::from_frame(frame.view(), 0.0), None);
    }
}
