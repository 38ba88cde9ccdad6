//! touchstone prelude.
//!
//! This module contains the most used types, traits and functions
//! that you can import easily as a group.
//!
//! ```
//! use touchstone::prelude::*;
//!
//! ```

#[doc(no_inline)]
pub use crate::error::TouchstoneError;

#[doc(no_inline)]
pub use crate::file::{read_touchstone, read_touchstone_with_ports, write_touchstone};

#[doc(no_inline)]
pub use crate::format::NumericFormat;

#[doc(no_inline)]
pub use crate::frequency::{Frequency, FrequencyBuilder};

#[doc(no_inline)]
pub use crate::impedance::Impedance;

#[doc(no_inline)]
pub use crate::parameter::RFParameter;

#[doc(no_inline)]
pub use crate::points::ComplexMatrix;

#[doc(no_inline)]
pub use crate::scale::FrequencyUnit;

#[doc(no_inline)]
pub use crate::touchstone::{OptionLine, TouchstoneBuilder, TouchstoneDocument, WriteOptions};
