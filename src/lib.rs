//! Reader and writer for Touchstone (`.sNp`) network parameter files.
//!
//! ```
//! use touchstone::prelude::*;
//!
//! let text = "! measured\n# MHz S MA R 50\n100 0.99 -4\n";
//! let doc = TouchstoneDocument::read(text, 1).unwrap();
//! assert_eq!(doc.comments(), &[" measured"]);
//!
//! let written = doc.write().unwrap();
//! assert!(written.starts_with("! measured\n# MHZ S MA R 50\n100 "));
//! assert_eq!(TouchstoneDocument::read(&written, 1).unwrap().npts(), 1);
//! ```
pub mod error;
pub mod file;
pub mod format;
pub mod frequency;
pub mod impedance;
pub mod parameter;
pub mod points;
pub mod prelude;
pub mod scale;
pub mod touchstone;
pub mod util;

#[doc(hidden)]
pub use ndarray;

pub use error::{Result, TouchstoneError};
pub use touchstone::TouchstoneDocument;

/// Create a **[`ComplexMatrix`](points::ComplexMatrix)** indexed `[out][in][point]`.
///
/// ```
/// use num::complex::c64;
/// use touchstone::matrix;
///
/// let m = matrix![[[c64(1.0, 0.0), c64(2.0, 0.0)]]];
///
/// assert_eq!(m.dim(), (1, 1, 2));
/// ```
///
/// This macro uses `vec![]`, and has the same ownership semantics;
/// elements are moved into the resulting matrix.
#[macro_export]
macro_rules! matrix {
    ($([$([$($x:expr),* $(,)*]),+ $(,)*]),+ $(,)*) => {{
        $crate::points::ComplexMatrix::new($crate::ndarray::Array3::from(vec![$([$([$($x,)*],)*],)*]))
    }};
}
