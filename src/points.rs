use crate::error::{Result, TouchstoneError};
use ndarray::iter::IndexedIter;
use ndarray::prelude::*;
use num::complex::Complex64;
use std::ops::{Index, IndexMut};

/// Complex parameters indexed `[output port, input port, frequency point]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexMatrix(Array3<Complex64>);

impl ComplexMatrix {
    /// Create a square matrix of `nports` ports and `npts` points filled with zeros
    pub fn zeros(nports: usize, npts: usize) -> Self {
        ComplexMatrix(Array3::zeros((nports, nports, npts)))
    }

    pub fn new(data: Array3<Complex64>) -> Self {
        ComplexMatrix(data)
    }

    pub fn from_shape_fn<F>(shape: (usize, usize, usize), f: F) -> Self
    where
        F: FnMut((usize, usize, usize)) -> Complex64,
    {
        ComplexMatrix(Array3::from_shape_fn(shape, f))
    }

    /// Create a matrix from nested `[out][in][point]` vectors. Every row must
    /// have the same number of cells and every cell the same number of points.
    pub fn from_nested(data: Vec<Vec<Vec<Complex64>>>) -> Result<Self> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.len());
        let npts = data
            .first()
            .and_then(|row| row.first())
            .map_or(0, |cell| cell.len());

        let mut flat = Vec::with_capacity(rows * cols * npts);
        for (i, row) in data.into_iter().enumerate() {
            if row.len() != cols {
                return Err(TouchstoneError::RaggedMatrix {
                    message: format!("row {} has {} columns, expected {}", i, row.len(), cols),
                });
            }
            for (j, cell) in row.into_iter().enumerate() {
                if cell.len() != npts {
                    return Err(TouchstoneError::RaggedMatrix {
                        message: format!(
                            "cell ({}, {}) has {} points, expected {}",
                            i,
                            j,
                            cell.len(),
                            npts
                        ),
                    });
                }
                flat.extend(cell);
            }
        }

        Array3::from_shape_vec((rows, cols, npts), flat)
            .map(ComplexMatrix)
            .map_err(|e| TouchstoneError::RaggedMatrix {
                message: e.to_string(),
            })
    }

    /// Shape as (rows, cols, points)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.0.dim()
    }

    pub fn nrows(&self) -> usize {
        self.0.len_of(Axis(0))
    }

    pub fn ncols(&self) -> usize {
        self.0.len_of(Axis(1))
    }

    pub fn npts(&self) -> usize {
        self.0.len_of(Axis(2))
    }

    pub fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    pub fn get(&self, out: usize, inp: usize, pt: usize) -> Option<&Complex64> {
        self.0.get((out, inp, pt))
    }

    /// Values of one element over all frequency points
    pub fn cell(&self, out: usize, inp: usize) -> ArrayView1<'_, Complex64> {
        self.0.slice(s![out, inp, ..])
    }

    /// Matrix at one frequency point
    pub fn point(&self, pt: usize) -> ArrayView2<'_, Complex64> {
        self.0.slice(s![.., .., pt])
    }

    pub fn indexed_iter(&self) -> IndexedIter<'_, Complex64, Ix3> {
        self.0.indexed_iter()
    }

    pub fn inner(&self) -> &Array3<Complex64> {
        &self.0
    }

    pub fn into_inner(self) -> Array3<Complex64> {
        self.0
    }
}

impl From<Array3<Complex64>> for ComplexMatrix {
    fn from(data: Array3<Complex64>) -> Self {
        ComplexMatrix(data)
    }
}

impl Index<[usize; 3]> for ComplexMatrix {
    type Output = Complex64;

    fn index(&self, idx: [usize; 3]) -> &Complex64 {
        &self.0[idx]
    }
}

impl IndexMut<[usize; 3]> for ComplexMatrix {
    fn index_mut(&mut self, idx: [usize; 3]) -> &mut Complex64 {
        &mut self.0[idx]
    }
}
