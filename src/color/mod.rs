//! Cyclic multi-stop color interpolation.

pub(crate) mod gradient;
pub(crate) mod parse;
